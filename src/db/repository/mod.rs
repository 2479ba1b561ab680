//! Repository trait for dataset persistence.
//!
//! Extraction runs hand their yearly datasets to a repository; the forecast
//! path reads the per-region history back out. Store semantics are
//! whole-dataset overwrite per run, never incremental append.

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use super::models::{DatasetKey, DatasetMeta};
use crate::models::frame::Frame;

/// Repository for extracted tabular datasets.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Store a dataset under its key, replacing any previous contents.
    ///
    /// # Returns
    /// * `Ok(DatasetMeta)` - Metadata including the content checksum
    /// * `Err(RepositoryError)` - If the dataset is empty or storage fails
    async fn store_dataset(&self, key: &DatasetKey, frame: Frame) -> RepositoryResult<DatasetMeta>;

    /// Fetch a dataset by key.
    async fn fetch_dataset(&self, key: &DatasetKey) -> RepositoryResult<Frame>;

    /// Metadata of all stored datasets, optionally filtered by region.
    async fn list_datasets(&self, region: Option<&str>) -> RepositoryResult<Vec<DatasetMeta>>;

    /// True when a dataset exists for the key.
    async fn has_dataset(&self, key: &DatasetKey) -> RepositoryResult<bool>;

    /// Delete a dataset.
    ///
    /// # Returns
    /// * `Ok(true)` if a dataset was removed, `Ok(false)` if none existed.
    async fn delete_dataset(&self, key: &DatasetKey) -> RepositoryResult<bool>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
