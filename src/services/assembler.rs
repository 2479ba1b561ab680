//! Reshaping a flat prediction sequence into calendar buckets.

use crate::models::time::month_label;

/// One forecast year: twelve labelled monthly values and their mean.
#[derive(Debug, Clone, PartialEq)]
pub struct YearForecast {
    pub year: i32,
    /// (month label, predicted value), January first.
    pub monthly: Vec<(String, f64)>,
    /// Mean of the twelve monthly values, rounded to 3 decimal places.
    pub mean: f64,
}

/// Split a Year-major/Month-minor prediction sequence into yearly buckets.
///
/// The sequence is defensively truncated to `horizon_years * 12` entries
/// before chunking, so an upstream off-by-one cannot shift later years.
/// Displayed calendar years start at `first_year` regardless of the
/// synthetic years used during feature synthesis; that association is a
/// presentation concern.
pub fn assemble(predictions: &[f64], horizon_years: u32, first_year: i32) -> Vec<YearForecast> {
    let wanted = horizon_years as usize * 12;
    let trimmed = &predictions[..predictions.len().min(wanted)];

    trimmed
        .chunks_exact(12)
        .enumerate()
        .map(|(offset, chunk)| {
            let monthly = chunk
                .iter()
                .enumerate()
                .map(|(i, &value)| (month_label(i as u32 + 1).to_string(), value))
                .collect();
            YearForecast {
                year: first_year + offset as i32,
                monthly,
                mean: round_to(chunk.iter().sum::<f64>() / 12.0, 3),
            }
        })
        .collect()
}

/// Round to `digits` decimal places.
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod assembler_tests;
