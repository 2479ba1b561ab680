//! In-memory dataset repository.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::checksum::frame_checksum;
use crate::db::models::{DatasetKey, DatasetMeta};
use crate::db::repository::{
    DatasetRepository, ErrorContext, RepositoryError, RepositoryResult,
};
use crate::models::frame::Frame;

/// In-memory [`DatasetRepository`] for unit tests and local development.
#[derive(Default)]
pub struct LocalRepository {
    datasets: RwLock<HashMap<DatasetKey, (DatasetMeta, Frame)>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatasetRepository for LocalRepository {
    async fn store_dataset(&self, key: &DatasetKey, frame: Frame) -> RepositoryResult<DatasetMeta> {
        if frame.is_empty() {
            return Err(RepositoryError::validation_with_context(
                "refusing to store an empty dataset",
                ErrorContext::new("store_dataset")
                    .with_entity("dataset")
                    .with_entity_id(key),
            ));
        }

        let meta = DatasetMeta {
            key: key.clone(),
            rows: frame.len(),
            columns: frame.columns().to_vec(),
            checksum: frame_checksum(&frame),
            stored_at: chrono::Utc::now(),
        };

        self.datasets
            .write()
            .insert(key.clone(), (meta.clone(), frame));
        Ok(meta)
    }

    async fn fetch_dataset(&self, key: &DatasetKey) -> RepositoryResult<Frame> {
        self.datasets
            .read()
            .get(key)
            .map(|(_, frame)| frame.clone())
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("dataset '{}' not found", key),
                    ErrorContext::new("fetch_dataset")
                        .with_entity("dataset")
                        .with_entity_id(key),
                )
            })
    }

    async fn list_datasets(&self, region: Option<&str>) -> RepositoryResult<Vec<DatasetMeta>> {
        let datasets = self.datasets.read();
        let mut metas: Vec<DatasetMeta> = datasets
            .values()
            .filter(|(meta, _)| region.map_or(true, |r| meta.key.region == r))
            .map(|(meta, _)| meta.clone())
            .collect();
        metas.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(metas)
    }

    async fn has_dataset(&self, key: &DatasetKey) -> RepositoryResult<bool> {
        Ok(self.datasets.read().contains_key(key))
    }

    async fn delete_dataset(&self, key: &DatasetKey) -> RepositoryResult<bool> {
        Ok(self.datasets.write().remove(key).is_some())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
