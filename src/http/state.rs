//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ExtractionConfig;
use crate::db::repository::DatasetRepository;
use crate::models::region::RegionCatalog;
use crate::services::ensemble::ModelStore;
use crate::services::job_tracker::JobTracker;
use crate::sources::ImageService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for dataset persistence
    pub repository: Arc<dyn DatasetRepository>,
    /// Imagery backend queried by extraction jobs
    pub image_service: Arc<dyn ImageService>,
    /// Per-region model artifacts for the forecaster
    pub model_store: Arc<dyn ModelStore>,
    /// Tracker for background extraction jobs
    pub job_tracker: JobTracker,
    /// Region catalog requests are resolved against
    pub catalog: Arc<RegionCatalog>,
    /// Extraction tunables
    pub config: ExtractionConfig,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn DatasetRepository>,
        image_service: Arc<dyn ImageService>,
        model_store: Arc<dyn ModelStore>,
        catalog: RegionCatalog,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            repository,
            image_service,
            model_store,
            job_tracker: JobTracker::new(),
            catalog: Arc::new(catalog),
            config,
        }
    }
}
