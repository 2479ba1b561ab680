//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, Sse},
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

use super::dto::{
    DatasetListResponse, DatasetQuery, ExtractRequest, ExtractResponse, ForecastRequestBody,
    HealthResponse, JobStatusResponse, RegionListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services::extractor::run_extraction_job;
use crate::services::forecaster::{run_forecast, ForecastData, ForecastRequest};
use crate::sources::{SourceId, all_source_ids};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Catalog and Datasets
// =============================================================================

/// GET /v1/regions
///
/// List the regions extraction and forecast requests may name.
pub async fn list_regions(State(state): State<AppState>) -> HandlerResult<RegionListResponse> {
    let regions = state.catalog.regions().to_vec();
    let total = regions.len();
    Ok(Json(RegionListResponse { regions, total }))
}

/// GET /v1/datasets?region=...
///
/// List metadata of stored datasets.
pub async fn list_datasets(
    State(state): State<AppState>,
    Query(query): Query<DatasetQuery>,
) -> HandlerResult<DatasetListResponse> {
    let datasets =
        db_services::list_datasets(state.repository.as_ref(), query.region.as_deref()).await?;
    let total = datasets.len();
    Ok(Json(DatasetListResponse { datasets, total }))
}

// =============================================================================
// Extraction
// =============================================================================

/// POST /v1/extract
///
/// Start an extraction run as a background job. Returns a job ID for
/// tracking progress.
pub async fn start_extraction(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<(axum::http::StatusCode, Json<ExtractResponse>), AppError> {
    let region = state
        .catalog
        .resolve(&request.region)
        .ok_or_else(|| AppError::NotFound(format!("Unknown region '{}'", request.region)))?
        .clone();

    let sources: Vec<SourceId> = match request.sources {
        Some(sources) if sources.is_empty() => {
            return Err(AppError::BadRequest(
                "sources must name at least one source when present".to_string(),
            ));
        }
        Some(sources) => sources,
        None => all_source_ids().to_vec(),
    };

    let job_id = state.job_tracker.create_job();
    let response_job_id = job_id.clone();

    let tracker = state.job_tracker.clone();
    let service = state.image_service.clone();
    let repo = state.repository.clone();
    let config = state.config.clone();
    let year = request.year;

    tokio::spawn(async move {
        let _ = run_extraction_job(
            job_id, tracker, service, repo, config, region, year, sources,
        )
        .await;
    });

    Ok((
        axum::http::StatusCode::ACCEPTED,
        Json(ExtractResponse {
            job_id: response_job_id.clone(),
            message: format!(
                "Extraction started. Track progress at /v1/jobs/{}/logs",
                response_job_id
            ),
        }),
    ))
}

// =============================================================================
// Forecast
// =============================================================================

/// POST /v1/forecast
///
/// Forecast soil moisture for a region over a horizon of whole years.
pub async fn forecast(
    State(state): State<AppState>,
    Json(body): Json<ForecastRequestBody>,
) -> HandlerResult<ForecastData> {
    if body.years == 0 {
        return Err(AppError::BadRequest(
            "years must be at least 1".to_string(),
        ));
    }
    let region = state
        .catalog
        .resolve(&body.region)
        .ok_or_else(|| AppError::NotFound(format!("Unknown region '{}'", body.region)))?;

    let request = ForecastRequest {
        region: region.name.clone(),
        years: body.years,
    };
    let data = run_forecast(
        state.repository.as_ref(),
        state.model_store.as_ref(),
        &request,
    )
    .await?;

    Ok(Json(data))
}

// =============================================================================
// Async Job Management
// =============================================================================

/// GET /v1/jobs/{job_id}
///
/// Get the current status and logs of a background job.
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> HandlerResult<JobStatusResponse> {
    let job = state
        .job_tracker
        .get_job(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

    Ok(Json(JobStatusResponse {
        job_id: job.job_id,
        status: format!("{:?}", job.status).to_lowercase(),
        logs: job.logs,
        months_done: job.months_done,
        stored: job.stored,
    }))
}

/// GET /v1/jobs/{job_id}/logs
///
/// Stream job logs via Server-Sent Events (SSE).
pub async fn stream_job_logs(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    // Verify job exists
    if state.job_tracker.get_job(&job_id).is_none() {
        return Err(AppError::NotFound(format!("Job {} not found", job_id)));
    }

    let tracker = state.job_tracker.clone();
    let stream = async_stream::stream! {
        let mut last_log_count = 0;
        loop {
            let logs = tracker.get_logs(&job_id);

            // Send new logs since last check
            for log in logs.iter().skip(last_log_count) {
                let event_data = serde_json::to_string(log).unwrap_or_default();
                yield Ok(Event::default().data(event_data));
            }
            last_log_count = logs.len();

            // Check if job is complete
            if let Some(job) = tracker.get_job(&job_id) {
                if job.status != crate::services::job_tracker::JobStatus::Running {
                    // Serde serialization keeps status values lowercase
                    // ("completed", "failed"), unlike Debug formatting.
                    let final_event = serde_json::json!({
                        "status": job.status,
                        "stored": job.stored,
                    });
                    yield Ok(Event::default()
                        .event("complete")
                        .data(serde_json::to_string(&final_event).unwrap_or_default()));
                    break;
                }
            } else {
                break;
            }

            // Wait before checking again
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    };

    Ok(Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(1))
            .text("keep-alive"),
    ))
}
