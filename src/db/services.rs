//! High-level dataset persistence functions.
//!
//! These helpers work with any [`DatasetRepository`] implementation and are
//! the layer extraction and forecast code should call.

use std::collections::BTreeMap;

use super::models::{DatasetKey, DatasetMeta};
use super::repository::{DatasetRepository, RepositoryResult};
use crate::models::frame::Frame;
use crate::sources::SourceId;

/// Store one extraction year's per-source datasets.
///
/// Sources whose yearly frame ended up empty are skipped (no file is written
/// for a year with no qualifying months).
pub async fn store_yearly_datasets(
    repo: &dyn DatasetRepository,
    region: &str,
    year: i32,
    yearly: BTreeMap<SourceId, Frame>,
) -> RepositoryResult<Vec<DatasetMeta>> {
    let mut stored = Vec::new();
    for (source, frame) in yearly {
        if frame.is_empty() {
            continue;
        }
        let key = DatasetKey::source_year(region, source, year);
        stored.push(repo.store_dataset(&key, frame).await?);
    }
    Ok(stored)
}

/// Store the combined per-region history consumed by the forecaster.
pub async fn store_history(
    repo: &dyn DatasetRepository,
    region: &str,
    frame: Frame,
) -> RepositoryResult<DatasetMeta> {
    repo.store_dataset(&DatasetKey::history(region), frame).await
}

/// Fetch the combined per-region history.
pub async fn fetch_history(
    repo: &dyn DatasetRepository,
    region: &str,
) -> RepositoryResult<Frame> {
    repo.fetch_dataset(&DatasetKey::history(region)).await
}

/// Metadata of stored datasets, optionally restricted to one region.
pub async fn list_datasets(
    repo: &dyn DatasetRepository,
    region: Option<&str>,
) -> RepositoryResult<Vec<DatasetMeta>> {
    repo.list_datasets(region).await
}

/// Verify the repository backend is reachable.
pub async fn health_check(repo: &dyn DatasetRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
