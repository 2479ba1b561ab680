//! Public API surface for the backend.
//!
//! This file consolidates the types the HTTP layer and library consumers
//! work with. All types derive Serialize/Deserialize where they cross the
//! JSON boundary.

pub use crate::db::models::{DatasetKey, DatasetKind, DatasetMeta};
pub use crate::models::region::{BoundingBox, Region, RegionCatalog};
pub use crate::services::forecaster::{ForecastData, ForecastRequest, ModelMetrics};
pub use crate::services::job_tracker::{Job, JobStatus, LogEntry, LogLevel};
pub use crate::sources::SourceId;
