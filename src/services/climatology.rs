//! Monthly-mean climatology and future feature synthesis.
//!
//! No ground truth exists for future periods, so forecast features are the
//! long-run monthly averages of the historical dataset: the seasonal pattern
//! stands in for unobservable future conditions.

use crate::models::frame::{Frame, MONTH_COLUMN, YEAR_COLUMN};
use crate::services::forecaster::ForecastError;

/// The prediction target column, excluded from feature climatology.
pub const TARGET_COLUMN: &str = "sm_surface";

/// Per-calendar-month mean of every feature column.
///
/// `columns` preserves the historical dataset's column order minus the
/// target; downstream models consume features positionally, so that order is
/// a contract. `by_month[m - 1]` holds the means for calendar month `m`.
#[derive(Debug, Clone)]
pub struct Climatology {
    pub columns: Vec<String>,
    pub by_month: Vec<Vec<f64>>,
}

/// Group historical rows by calendar month and average every feature column.
///
/// The Month column is rounded before grouping, guarding against float month
/// values from upstream tooling. All 12 calendar months must be covered;
/// a seasonal profile with holes cannot drive a full-year synthesis.
pub fn monthly_climatology(history: &Frame) -> Result<Climatology, ForecastError> {
    let month_idx = history.column_index(MONTH_COLUMN).ok_or_else(|| {
        ForecastError::MalformedHistoricalDataset(format!("missing '{}' column", MONTH_COLUMN))
    })?;
    if !history.has_column(TARGET_COLUMN) {
        return Err(ForecastError::MalformedHistoricalDataset(format!(
            "missing '{}' column",
            TARGET_COLUMN
        )));
    }
    if history.is_empty() {
        return Err(ForecastError::MalformedHistoricalDataset(
            "historical dataset has no rows".to_string(),
        ));
    }

    let columns = history.columns_without(&[TARGET_COLUMN]);
    let feature_indices: Vec<usize> = columns
        .iter()
        .map(|c| history.column_index(c).expect("subset of history columns"))
        .collect();

    let mut sums = vec![vec![0.0f64; columns.len()]; 12];
    let mut counts = [0usize; 12];

    for row in history.rows() {
        let month = row[month_idx].round();
        if !(1.0..=12.0).contains(&month) {
            return Err(ForecastError::MalformedHistoricalDataset(format!(
                "month value {} out of range",
                row[month_idx]
            )));
        }
        let slot = month as usize - 1;
        counts[slot] += 1;
        for (i, &idx) in feature_indices.iter().enumerate() {
            sums[slot][i] += row[idx];
        }
    }

    if let Some(missing) = counts.iter().position(|&c| c == 0) {
        return Err(ForecastError::MalformedHistoricalDataset(format!(
            "no historical rows for calendar month {}",
            missing + 1
        )));
    }

    let by_month = sums
        .into_iter()
        .zip(counts.iter())
        .map(|(sum, &count)| sum.into_iter().map(|s| s / count as f64).collect())
        .collect();

    Ok(Climatology { columns, by_month })
}

/// Synthesize feature rows for `horizon_years` future years.
///
/// Rows come out Year-major, Month-minor (`start_year` Jan..Dec, then the
/// next year, ...) — the ordering the forecast assembler relies on. The Year
/// column is overwritten with the synthetic year and Month is forced to the
/// integer calendar month.
pub fn project(
    history: &Frame,
    horizon_years: u32,
    start_year: i32,
) -> Result<Frame, ForecastError> {
    let climatology = monthly_climatology(history)?;

    let year_idx = climatology.columns.iter().position(|c| c == YEAR_COLUMN);
    let month_idx = climatology.columns.iter().position(|c| c == MONTH_COLUMN);

    let mut synthetic = Frame::new(climatology.columns.clone());
    for offset in 0..horizon_years {
        let year = start_year + offset as i32;
        for month in 1..=12u32 {
            let mut row = climatology.by_month[month as usize - 1].clone();
            if let Some(idx) = year_idx {
                row[idx] = year as f64;
            }
            if let Some(idx) = month_idx {
                row[idx] = month as f64;
            }
            synthetic
                .push_row(row)
                .expect("row built from climatology columns");
        }
    }

    Ok(synthetic)
}

#[cfg(test)]
#[path = "climatology_tests.rs"]
mod climatology_tests;
