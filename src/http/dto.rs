//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Domain types that already derive Serialize/Deserialize are re-exported
//! from [`crate::api`].

use serde::{Deserialize, Serialize};

pub use crate::api::{DatasetMeta, ForecastData, ModelMetrics, Region, SourceId};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend status
    pub database: String,
}

/// Region catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionListResponse {
    pub regions: Vec<Region>,
    pub total: usize,
}

/// Stored dataset listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetListResponse {
    pub datasets: Vec<DatasetMeta>,
    pub total: usize,
}

/// Query parameters for the dataset listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatasetQuery {
    /// Restrict the listing to one region
    #[serde(default)]
    pub region: Option<String>,
}

/// Request body for starting an extraction job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// Region name, resolved against the catalog
    pub region: String,
    /// Extraction year
    pub year: i32,
    /// Sources to extract; all three when omitted
    #[serde(default)]
    pub sources: Option<Vec<SourceId>>,
}

/// Response for extraction job creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Job ID for tracking the async processing
    pub job_id: String,
    /// Message about the operation
    pub message: String,
}

/// Request body for a forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequestBody {
    /// Region name, resolved against the catalog
    pub region: String,
    /// Forecast horizon in whole years
    pub years: u32,
}

/// Job status response for async processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    /// Job ID
    pub job_id: String,
    /// Job status
    pub status: String,
    /// Log entries
    pub logs: Vec<crate::services::job_tracker::LogEntry>,
    /// Calendar months sampled so far (0-12)
    pub months_done: u32,
    /// Datasets stored by a completed run
    pub stored: Vec<DatasetMeta>,
}
