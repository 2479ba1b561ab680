use super::*;
use crate::models::frame::Frame;
use std::collections::HashMap;

fn frame_of(values: &[f64]) -> Frame {
    let mut frame = Frame::new(vec!["v".to_string()]);
    for &v in values {
        frame.push_row(vec![v]).unwrap();
    }
    frame
}

fn multiset(frame: &Frame) -> HashMap<u64, usize> {
    let mut counts = HashMap::new();
    for row in frame.rows() {
        *counts.entry(row[0].to_bits()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_output_length_always_matches_target() {
    for n in [1usize, 5, 100, 750, 1200] {
        let input = frame_of(&(0..n).map(|i| i as f64).collect::<Vec<_>>());
        let output = normalize(&input, 750, 42);
        assert_eq!(output.len(), 750, "input length {}", n);
    }
}

#[test]
fn test_equal_length_passes_through_unchanged() {
    let input = frame_of(&[3.0, 1.0, 2.0]);
    let output = normalize(&input, 3, 42);
    assert_eq!(output, input);
}

#[test]
fn test_downsample_is_subset_without_replacement() {
    let input = frame_of(&(0..100).map(|i| i as f64).collect::<Vec<_>>());
    let output = normalize(&input, 30, 42);

    let counts = multiset(&output);
    assert_eq!(counts.len(), 30, "no duplicates when drawing without replacement");
    for value in counts.keys() {
        let v = f64::from_bits(*value);
        assert!((0.0..100.0).contains(&v));
    }
}

#[test]
fn test_upsample_draws_with_replacement() {
    let input = frame_of(&[1.0, 2.0, 3.0]);
    let output = normalize(&input, 50, 42);

    assert_eq!(output.len(), 50);
    let counts = multiset(&output);
    // Only the original values appear, and with 50 draws over 3 values
    // duplicates are certain.
    assert!(counts.len() <= 3);
    assert!(counts.values().any(|&c| c > 1));
}

#[test]
fn test_identical_seed_is_bit_identical() {
    let input = frame_of(&(0..1000).map(|i| i as f64 * 0.1).collect::<Vec<_>>());

    let a = normalize(&input, 750, 42);
    let b = normalize(&input, 750, 42);
    assert_eq!(a, b);

    let c = normalize(&input, 750, 43);
    assert_ne!(a, c, "different seed should pick a different draw");
}

#[test]
#[should_panic(expected = "empty sample")]
fn test_empty_input_panics() {
    let input = Frame::new(vec!["v".to_string()]);
    normalize(&input, 750, 42);
}
