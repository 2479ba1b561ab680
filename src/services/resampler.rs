//! Row-count normalization for monthly samples.
//!
//! Downstream consumers want a fixed tensor shape per month; duplicates from
//! up-sampling are acceptable and expected, statistical independence is not
//! the goal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::frame::Frame;

/// Normalize `frame` to exactly `target` rows.
///
/// - More rows than `target`: draw `target` rows without replacement.
/// - Fewer rows: draw `target` rows with replacement.
/// - Exactly `target`: pass through unchanged.
///
/// Output is fully determined by the input row order and `seed`.
///
/// # Panics
/// Panics when `frame` has no rows; upstream skip logic must never hand an
/// empty month to the resampler.
pub fn normalize(frame: &Frame, target: usize, seed: u64) -> Frame {
    let n = frame.len();
    assert!(n > 0, "cannot normalize an empty sample");

    if n == target {
        return frame.clone();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let columns = frame.columns().to_vec();

    let rows: Vec<Vec<f64>> = if n > target {
        // Partial Fisher-Yates over the index space, first `target` slots.
        let mut indices: Vec<usize> = (0..n).collect();
        for i in 0..target {
            let j = rng.gen_range(i..n);
            indices.swap(i, j);
        }
        indices[..target]
            .iter()
            .map(|&i| frame.row(i).to_vec())
            .collect()
    } else {
        (0..target)
            .map(|_| frame.row(rng.gen_range(0..n)).to_vec())
            .collect()
    };

    Frame::from_parts(columns, rows)
}

#[cfg(test)]
#[path = "resampler_tests.rs"]
mod resampler_tests;
