//! Remote-sensing source catalog and the image-query collaborator seam.
//!
//! The actual imagery backend (an Earth-observation query service) is an
//! external collaborator; this module defines the trait it is consumed
//! through, the per-source query specifications, and a deterministic
//! synthetic backend for tests and local development.

pub mod image_service;
pub mod synthetic;

pub use image_service::{
    Composite, CompositeRequest, ImageService, PointSample, SamplingPlan, SourceError,
};
pub use synthetic::SyntheticImageService;

use serde::{Deserialize, Serialize};

/// Identifier of an observation source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    Smap,
    Landsat8,
    Sentinel2,
}

impl SourceId {
    /// Short key used in dataset names ("Maharashtra_landsat_2021").
    pub fn key(&self) -> &'static str {
        match self {
            SourceId::Smap => "soil_moisture",
            SourceId::Landsat8 => "landsat",
            SourceId::Sentinel2 => "sentinel2",
        }
    }

    /// Parse a source from its dataset key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "soil_moisture" | "smap" => Some(SourceId::Smap),
            "landsat" | "landsat8" => Some(SourceId::Landsat8),
            "sentinel2" => Some(SourceId::Sentinel2),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Aggregation used when collapsing a window of passes into one composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMethod {
    Median,
    Mean,
}

/// Granularity at which the upstream collection is queried.
///
/// Optical sources are queried one month at a time; the SMAP collection is
/// filtered per year and then narrowed to a month window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Monthly,
    Yearly,
}

/// Query specification for one observation source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSpec {
    pub id: SourceId,
    /// Upstream collection identifier.
    pub collection: &'static str,
    /// Band selectors sent upstream.
    pub raw_bands: &'static [&'static str],
    /// Output band names (renamed to avoid cross-source collisions).
    pub bands: &'static [&'static str],
    /// Linear rescale `value * mul + add` applied by the backend.
    pub rescale: Option<(f64, f64)>,
    /// Reject scenes above this cloudy-pixel percentage.
    pub max_cloud_pct: Option<f64>,
    pub composite: CompositeMethod,
    pub granularity: Granularity,
}

/// NASA SMAP L4 surface soil moisture.
pub fn smap_spec() -> SourceSpec {
    SourceSpec {
        id: SourceId::Smap,
        collection: "NASA/SMAP/SPL4SMGP/007",
        raw_bands: &["sm_surface"],
        bands: &["sm_surface"],
        rescale: None,
        max_cloud_pct: None,
        composite: CompositeMethod::Mean,
        granularity: Granularity::Yearly,
    }
}

/// Landsat 8 surface reflectance, scaled to physical reflectance.
pub fn landsat8_spec() -> SourceSpec {
    SourceSpec {
        id: SourceId::Landsat8,
        collection: "LANDSAT/LC08/C02/T1_L2",
        raw_bands: &["SR_B4", "SR_B5", "SR_B6", "SR_B7"],
        bands: &["L8_B4", "L8_B5", "L8_B6", "L8_B7"],
        rescale: Some((0.0000275, -0.2)),
        max_cloud_pct: None,
        composite: CompositeMethod::Median,
        granularity: Granularity::Monthly,
    }
}

/// Sentinel-2 harmonized surface reflectance, cloud-filtered and normalized.
pub fn sentinel2_spec() -> SourceSpec {
    SourceSpec {
        id: SourceId::Sentinel2,
        collection: "COPERNICUS/S2_SR_HARMONIZED",
        raw_bands: &["B4", "B5", "B6", "B7", "B8"],
        bands: &["S2_B4", "S2_B5", "S2_B6", "S2_B7", "S2_B8"],
        rescale: Some((1.0 / 10000.0, 0.0)),
        max_cloud_pct: Some(20.0),
        composite: CompositeMethod::Median,
        granularity: Granularity::Monthly,
    }
}

/// Spec for a given source id.
pub fn spec_for(id: SourceId) -> SourceSpec {
    match id {
        SourceId::Smap => smap_spec(),
        SourceId::Landsat8 => landsat8_spec(),
        SourceId::Sentinel2 => sentinel2_spec(),
    }
}

/// Ids of the full extraction set, SMAP first.
pub fn all_source_ids() -> [SourceId; 3] {
    [SourceId::Smap, SourceId::Landsat8, SourceId::Sentinel2]
}
