//! Dataset storage via the Repository pattern.
//!
//! The module is layered: high-level service functions in [`services`]
//! orchestrate checksum computation and key construction, the
//! [`repository::DatasetRepository`] trait abstracts the storage backend,
//! and [`repositories::local`] provides the in-memory implementation used
//! for local development and tests.
//!
//! **For new code, use the service layer:**
//! ```ignore
//! use soilcast::db::{services, LocalRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let datasets = services::list_datasets(&repo, Some("Rajasthan")).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod checksum;
pub mod models;
pub mod repositories;
pub mod repository;
pub mod services;


// ==================== Service Layer (Recommended for new code) ====================

pub use services::{
    fetch_history, health_check, list_datasets, store_history, store_yearly_datasets,
};

// ==================== Repository Pattern Exports ====================

pub use checksum::frame_checksum;
pub use models::{DatasetKey, DatasetKind, DatasetMeta};
pub use repositories::LocalRepository;
pub use repository::{DatasetRepository, ErrorContext, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn DatasetRepository>> = OnceLock::new();

#[cfg(feature = "local-repo")]
fn create_selected_repository() -> RepositoryResult<Arc<dyn DatasetRepository>> {
    Ok(Arc::new(LocalRepository::new()))
}

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository()?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn DatasetRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
