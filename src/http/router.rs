//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Catalog and stored data
        .route("/regions", get(handlers::list_regions))
        .route("/datasets", get(handlers::list_datasets))
        // Extraction and forecast
        .route("/extract", post(handlers::start_extraction))
        .route("/forecast", post(handlers::forecast))
        // Job management
        .route("/jobs/{job_id}", get(handlers::get_job_status))
        .route("/jobs/{job_id}/logs", get(handlers::stream_job_logs));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::ExtractionConfig;
    use crate::db::repositories::LocalRepository;
    use crate::models::region::RegionCatalog;
    use crate::services::ensemble::InMemoryModelStore;
    use crate::sources::SyntheticImageService;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(
            Arc::new(LocalRepository::new()),
            Arc::new(SyntheticImageService::new(1)),
            Arc::new(InMemoryModelStore::new()),
            RegionCatalog::builtin(),
            ExtractionConfig::default(),
        );
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
