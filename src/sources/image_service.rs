//! Trait boundary to the external image-query service.

use thiserror::Error;

use super::SourceSpec;
use crate::models::region::Region;
use crate::models::time::DateWindow;

/// Errors surfaced by the imagery backend.
///
/// All of these are recovered by the sampling layer as empty-month skips;
/// none abort an extraction run.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network or service failure reaching the backend.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The backend did not answer within the imposed deadline.
    #[error("source query timed out after {0} ms")]
    Timeout(u64),

    /// The backend answered with something unusable.
    #[error("backend error: {0}")]
    Backend(String),
}

/// A composite query: one source, one region, one date window.
#[derive(Debug, Clone)]
pub struct CompositeRequest {
    pub spec: SourceSpec,
    pub region: Region,
    pub window: DateWindow,
}

/// Handle to an aggregated composite held by the backend.
///
/// `bands` lists the bands the composite actually exposes; an all-masked
/// window never produces a handle (the query returns `None` instead).
/// `token` is opaque to callers and meaningful only to the issuing backend.
#[derive(Debug, Clone)]
pub struct Composite {
    pub bands: Vec<String>,
    pub token: u64,
}

/// Point-draw parameters for sampling a composite.
#[derive(Debug, Clone, Copy)]
pub struct SamplingPlan {
    /// Sampling scale in meters (750 matches the SMAP pixel size).
    pub scale_m: f64,
    /// Upper bound on the number of points drawn.
    pub num_points: usize,
    /// Seed for the backend's point placement; identical seeds over a stable
    /// composite must yield identical draws.
    pub seed: u64,
}

/// One sampled point; values align positionally with `Composite::bands`.
#[derive(Debug, Clone)]
pub struct PointSample {
    pub values: Vec<f64>,
}

/// Capability interface of the remote imagery service.
///
/// `query_composite` returning `Ok(None)` is the expected, frequent
/// "no usable imagery in this window" outcome and is not an error.
pub trait ImageService: Send + Sync {
    fn query_composite(&self, request: &CompositeRequest)
        -> Result<Option<Composite>, SourceError>;

    fn sample_points(
        &self,
        composite: &Composite,
        plan: &SamplingPlan,
    ) -> Result<Vec<PointSample>, SourceError>;
}
