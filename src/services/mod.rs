//! Service layer: the extraction pipeline and forecast orchestration.
//!
//! Pipeline stages (sampler, resampler, aligner) are pure transformations
//! over [`Frame`](crate::models::frame::Frame)s; the extractor and the
//! forecaster orchestrate them against the repository and the imagery and
//! model seams.

pub mod aligner;
pub mod assembler;
pub mod climatology;
pub mod ensemble;
pub mod extractor;
pub mod forecaster;
pub mod job_tracker;
pub mod resampler;
pub mod sampler;

pub use aligner::{align, MonthSamples};
pub use assembler::{assemble, YearForecast};
pub use climatology::{monthly_climatology, project, Climatology, TARGET_COLUMN};
pub use ensemble::{
    evaluate, InMemoryModelStore, LinearPredictor, ModelScore, ModelStore, PredictError,
    Predictor, MODEL_NAMES,
};
pub use extractor::{run_extraction_job, ExtractionError, Extractor, Pacer};
pub use forecaster::{
    run_forecast, run_forecast_at, ForecastData, ForecastError, ForecastRequest, ModelMetrics,
};
pub use job_tracker::{Job, JobStatus, JobTracker, LogEntry, LogLevel};
pub use resampler::normalize;
pub use sampler::TemporalSampler;
