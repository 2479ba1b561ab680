use super::*;

#[test]
fn test_assemble_buckets_and_rounded_means() {
    // Monthly values 0.1..=1.2 sum to 7.8, mean 0.65.
    let predictions: Vec<f64> = (1..=12).map(|i| i as f64 / 10.0).collect();
    let years = assemble(&predictions, 1, 2026);

    assert_eq!(years.len(), 1);
    let year = &years[0];
    assert_eq!(year.year, 2026);
    assert_eq!(year.monthly.len(), 12);
    assert_eq!(year.monthly[0].0, "Jan");
    assert_eq!(year.monthly[11].0, "Dec");
    assert_eq!(year.mean, 0.65);
}

#[test]
fn test_assemble_truncates_overlong_sequences() {
    let predictions: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let years = assemble(&predictions, 2, 2026);

    assert_eq!(years.len(), 2);
    assert_eq!(years[0].year, 2026);
    assert_eq!(years[1].year, 2027);
    // Entries 24..30 must have been dropped.
    assert_eq!(years[1].monthly[11].1, 23.0);
}

#[test]
fn test_assemble_drops_incomplete_trailing_year() {
    let predictions: Vec<f64> = (0..18).map(|i| i as f64).collect();
    let years = assemble(&predictions, 2, 2026);
    assert_eq!(years.len(), 1);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(0.64999, 3), 0.65);
    assert_eq!(round_to(1.23456, 3), 1.235);
    assert_eq!(round_to(0.123456789, 5), 0.12346);
}
