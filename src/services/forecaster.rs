//! End-to-end forecast orchestration.
//!
//! Fetches a region's historical dataset, synthesizes future feature rows
//! from its monthly climatology, runs every available model over them and
//! assembles the headline response.

use std::collections::BTreeMap;

use chrono::Datelike;
use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::db::repository::{DatasetRepository, RepositoryError};
use crate::db::services::fetch_history;
use crate::services::assembler::{assemble, round_to, YearForecast};
use crate::services::climatology::project;
use crate::services::ensemble::{evaluate, ModelScore, ModelStore, MODEL_NAMES};

/// Fatal forecast failures. Everything recoverable is degraded upstream.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("no historical dataset stored for region '{0}'")]
    HistoryMissing(String),

    #[error("historical dataset is malformed: {0}")]
    MalformedHistoricalDataset(String),

    #[error("no trained models available for the requested region")]
    NoModelsAvailable,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Forecast request: a catalog region and a horizon in whole years.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub region: String,
    pub years: u32,
}

/// Metrics of one model, rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelMetrics {
    pub r2: f64,
    pub rmse: f64,
    pub mae: f64,
}

/// The complete forecast response.
///
/// `r2`/`rmse`/`mae` are the best value of each metric across the ensemble
/// (they may come from different models); `prediction` is the median of the
/// headline model's series. All metrics are zero-reference diagnostics, see
/// [`ModelScore`](crate::services::ensemble::ModelScore).
#[derive(Debug, Clone, Serialize)]
pub struct ForecastData {
    pub region: String,
    pub years: u32,
    pub r2: f64,
    pub rmse: f64,
    pub mae: f64,
    /// Median of the headline model's predictions, rounded to 5 dp.
    pub prediction: f64,
    pub models: BTreeMap<String, ModelMetrics>,
    pub forecast_years: Vec<i32>,
    /// (year, mean of the twelve monthly values rounded to 3 dp).
    pub yearly_data: Vec<(i32, f64)>,
    /// (year, twelve (month label, value) pairs January first).
    pub monthly_data: Vec<(i32, Vec<(String, f64)>)>,
}

/// Run a forecast anchored at the current calendar year.
pub async fn run_forecast(
    repo: &dyn DatasetRepository,
    store: &dyn ModelStore,
    request: &ForecastRequest,
) -> Result<ForecastData, ForecastError> {
    run_forecast_at(repo, store, request, chrono::Utc::now().year()).await
}

/// Forecast with an explicit anchor year. Forecast years start the year
/// after the anchor.
pub async fn run_forecast_at(
    repo: &dyn DatasetRepository,
    store: &dyn ModelStore,
    request: &ForecastRequest,
    now_year: i32,
) -> Result<ForecastData, ForecastError> {
    let history = fetch_history(repo, &request.region).await.map_err(|e| {
        if e.is_not_found() {
            ForecastError::HistoryMissing(request.region.clone())
        } else {
            ForecastError::Repository(e)
        }
    })?;

    let first_year = now_year + 1;
    let features = project(&history, request.years, first_year)?;

    let models = store.load_models(&request.region);
    let scores = evaluate(&models, &features)?;
    info!(
        "forecast for '{}': {} year(s), {} model(s) scored",
        request.region,
        request.years,
        scores.len()
    );

    let headline = headline_model(&scores).ok_or(ForecastError::NoModelsAvailable)?;
    let series = assemble(&scores[headline].predictions, request.years, first_year);

    Ok(build_response(request, first_year, headline, &scores, series))
}

/// First present model in preference order.
fn headline_model(scores: &BTreeMap<String, ModelScore>) -> Option<&str> {
    MODEL_NAMES
        .iter()
        .copied()
        .find(|name| scores.contains_key(*name))
        .or_else(|| scores.keys().next().map(String::as_str))
}

fn build_response(
    request: &ForecastRequest,
    first_year: i32,
    headline: &str,
    scores: &BTreeMap<String, ModelScore>,
    series: Vec<YearForecast>,
) -> ForecastData {
    let models: BTreeMap<String, ModelMetrics> = scores
        .iter()
        .map(|(name, score)| {
            (
                name.clone(),
                ModelMetrics {
                    r2: round_to(score.r2, 3),
                    rmse: round_to(score.rmse, 3),
                    mae: round_to(score.mae, 3),
                },
            )
        })
        .collect();

    // Best of each metric, independently; they may come from different models.
    let r2 = models.values().map(|m| m.r2).fold(f64::MIN, f64::max);
    let rmse = models.values().map(|m| m.rmse).fold(f64::MAX, f64::min);
    let mae = models.values().map(|m| m.mae).fold(f64::MAX, f64::min);

    let prediction = round_to(median(&scores[headline].predictions), 5);

    ForecastData {
        region: request.region.clone(),
        years: request.years,
        r2,
        rmse,
        mae,
        prediction,
        models,
        forecast_years: (0..request.years as i32).map(|o| first_year + o).collect(),
        yearly_data: series.iter().map(|y| (y.year, y.mean)).collect(),
        monthly_data: series
            .into_iter()
            .map(|y| (y.year, y.monthly))
            .collect(),
    }
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
#[path = "forecaster_tests.rs"]
mod forecaster_tests;
