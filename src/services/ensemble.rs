//! Ensemble scoring of pre-trained regression models.
//!
//! Models are opaque predict functions loaded from a model store; any subset
//! of the known ensemble may be present and evaluation degrades to whatever
//! is available. The reported metrics are computed against a fixed all-zero
//! reference series — there is no ground truth for future periods — and are
//! therefore a relative-spread diagnostic across models, not an accuracy
//! measure. Callers must present them as such.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::warn;
use thiserror::Error;

use crate::models::frame::Frame;
use crate::services::forecaster::ForecastError;

/// Model names the ensemble knows about, in headline-preference order.
pub const MODEL_NAMES: [&str; 4] = ["XGBoost", "RandomForest", "LightGBM", "GBR"];

/// Errors from a single model's predict call. Fatal for that model only.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("feature columns do not match model schema: expected {expected:?}, got {got:?}")]
    MisalignedColumns {
        expected: Vec<String>,
        got: Vec<String>,
    },

    #[error("prediction failed: {0}")]
    Failed(String),
}

/// An opaque pre-fitted regression model.
pub trait Predictor: Send + Sync {
    /// Predict one value per row of `features`.
    fn predict(&self, features: &Frame) -> Result<Vec<f64>, PredictError>;
}

/// Per-region store of named model artifacts.
///
/// Returns whatever subset of [`MODEL_NAMES`] exists for the region; a
/// missing artifact is not an error here.
pub trait ModelStore: Send + Sync {
    fn load_models(&self, region: &str) -> Vec<(String, Arc<dyn Predictor>)>;
}

/// One model's forecast and its zero-reference diagnostics.
#[derive(Debug, Clone)]
pub struct ModelScore {
    pub predictions: Vec<f64>,
    /// Coefficient of determination against the all-zero reference. With a
    /// constant reference this collapses to 1.0 for an all-zero forecast and
    /// 0.0 otherwise; kept for parity with the historical reports.
    pub r2: f64,
    pub rmse: f64,
    pub mae: f64,
}

/// Run every available model over the synthesized feature rows.
///
/// A model that rejects the feature schema is dropped from the result map;
/// the evaluation fails only when no model produced a forecast at all.
pub fn evaluate(
    models: &[(String, Arc<dyn Predictor>)],
    features: &Frame,
) -> Result<BTreeMap<String, ModelScore>, ForecastError> {
    if models.is_empty() {
        return Err(ForecastError::NoModelsAvailable);
    }

    let mut scores = BTreeMap::new();
    for (name, model) in models {
        match model.predict(features) {
            Ok(predictions) => {
                let (r2, rmse, mae) = zero_reference_metrics(&predictions);
                scores.insert(
                    name.clone(),
                    ModelScore {
                        predictions,
                        r2,
                        rmse,
                        mae,
                    },
                );
            }
            Err(e) => {
                warn!("model '{}' dropped from ensemble: {}", name, e);
            }
        }
    }

    if scores.is_empty() {
        return Err(ForecastError::NoModelsAvailable);
    }
    Ok(scores)
}

/// (r2, rmse, mae) of `predictions` against an all-zero reference series.
fn zero_reference_metrics(predictions: &[f64]) -> (f64, f64, f64) {
    if predictions.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let n = predictions.len() as f64;
    let ss_res: f64 = predictions.iter().map(|p| p * p).sum();
    let rmse = (ss_res / n).sqrt();
    let mae = predictions.iter().map(|p| p.abs()).sum::<f64>() / n;
    // Constant reference: total sum of squares is zero, so follow the
    // convention of scoring 1.0 for a perfect match and 0.0 otherwise.
    let r2 = if ss_res == 0.0 { 1.0 } else { 0.0 };
    (r2, rmse, mae)
}

/// Linear model over a fixed feature schema.
///
/// The concrete predictor used by the in-memory store: a weighted sum plus
/// bias over named columns, validating the column contract the way the real
/// artifacts do (order-sensitive).
pub struct LinearPredictor {
    pub columns: Vec<String>,
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearPredictor {
    pub fn new(columns: Vec<String>, weights: Vec<f64>, bias: f64) -> Self {
        assert_eq!(columns.len(), weights.len());
        Self {
            columns,
            weights,
            bias,
        }
    }
}

impl Predictor for LinearPredictor {
    fn predict(&self, features: &Frame) -> Result<Vec<f64>, PredictError> {
        if features.columns() != self.columns.as_slice() {
            return Err(PredictError::MisalignedColumns {
                expected: self.columns.clone(),
                got: features.columns().to_vec(),
            });
        }
        Ok(features
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.weights)
                    .map(|(v, w)| v * w)
                    .sum::<f64>()
                    + self.bias
            })
            .collect())
    }
}

/// In-memory model store for tests and local development.
#[derive(Default)]
pub struct InMemoryModelStore {
    by_region: BTreeMap<String, Vec<(String, Arc<dyn Predictor>)>>,
}

impl InMemoryModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named model for a region.
    pub fn register(
        &mut self,
        region: impl Into<String>,
        name: impl Into<String>,
        model: Arc<dyn Predictor>,
    ) {
        self.by_region
            .entry(region.into())
            .or_default()
            .push((name.into(), model));
    }
}

impl ModelStore for InMemoryModelStore {
    fn load_models(&self, region: &str) -> Vec<(String, Arc<dyn Predictor>)> {
        self.by_region
            .get(region)
            .map(|models| {
                models
                    .iter()
                    .map(|(name, model)| (name.clone(), Arc::clone(model)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "ensemble_tests.rs"]
mod ensemble_tests;
