//! Dataset identity and metadata for the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sources::SourceId;

/// What a stored dataset contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DatasetKind {
    /// One source, one extraction year. Columns: source bands + Year + Month.
    SourceYear { source: SourceId, year: i32 },
    /// The combined per-region history the forecaster consumes
    /// (SMAP-legacy path, columns `[sm_surface, Year, Month]` plus any
    /// joined bands).
    History,
}

/// Key of a stored dataset: one tabular file per key, overwritten per run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DatasetKey {
    pub region: String,
    pub kind: DatasetKind,
}

impl DatasetKey {
    pub fn source_year(region: impl Into<String>, source: SourceId, year: i32) -> Self {
        Self {
            region: region.into(),
            kind: DatasetKind::SourceYear { source, year },
        }
    }

    pub fn history(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            kind: DatasetKind::History,
        }
    }

    /// File stem the dataset would be persisted under, matching the naming
    /// of the historical extraction runs.
    pub fn file_stem(&self) -> String {
        match &self.kind {
            DatasetKind::SourceYear { source, year } => {
                format!("{}_{}_{}", self.region, source.key(), year)
            }
            DatasetKind::History => format!("Data - {} Done", self.region),
        }
    }
}

impl std::fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_stem())
    }
}

/// Metadata recorded when a dataset is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    pub key: DatasetKey,
    pub rows: usize,
    pub columns: Vec<String>,
    /// SHA-256 over the canonical serialization of the frame.
    pub checksum: String,
    pub stored_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stems_match_legacy_naming() {
        let key = DatasetKey::source_year("Maharashtra", SourceId::Landsat8, 2021);
        assert_eq!(key.file_stem(), "Maharashtra_landsat_2021");

        let history = DatasetKey::history("Rajasthan");
        assert_eq!(history.file_stem(), "Data - Rajasthan Done");
    }
}
