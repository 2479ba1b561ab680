//! Named geographic regions and the region catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// WGS84 bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }
}

/// A named extraction region. Immutable once loaded into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub bbox: BoundingBox,
}

impl Region {
    pub fn new(name: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            name: name.into(),
            bbox,
        }
    }
}

/// Errors when loading a region catalog from TOML.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse region catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("region '{0}' has an empty name or inverted bounding box")]
    InvalidRegion(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    regions: Vec<Region>,
}

/// Static mapping of region names to bounding geometry.
///
/// Ships with the drought-prone Indian states the historical datasets were
/// extracted for; additional regions can be merged in from a TOML file.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Catalog with the built-in regions.
    pub fn builtin() -> Self {
        Self {
            regions: vec![
                Region::new("Rajasthan", BoundingBox::new(69.5, 23.3, 76.5, 30.2)),
                Region::new("Maharashtra", BoundingBox::new(72.5, 15.5, 80.5, 22.0)),
                Region::new("Bihar", BoundingBox::new(83.0, 24.5, 88.0, 27.5)),
            ],
        }
    }

    /// Parse a catalog from TOML and merge it over the built-ins.
    ///
    /// A TOML region with the same normalized name as a built-in replaces it.
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        let mut catalog = Self::builtin();
        for region in file.regions {
            if region.name.trim().is_empty()
                || region.bbox.min_lon >= region.bbox.max_lon
                || region.bbox.min_lat >= region.bbox.max_lat
            {
                return Err(CatalogError::InvalidRegion(region.name));
            }
            catalog
                .regions
                .retain(|r| normalize(&r.name) != normalize(&region.name));
            catalog.regions.push(region);
        }
        Ok(catalog)
    }

    /// All regions in catalog order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Look a region up by name, ignoring case and spaces.
    ///
    /// The original request path sends names like `"rajasthan"` or
    /// `"Madhya Pradesh"`; both resolve against the stored title-case names.
    pub fn resolve(&self, name: &str) -> Option<&Region> {
        let wanted = normalize(name);
        self.regions.iter().find(|r| normalize(&r.name) == wanted)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

#[cfg(test)]
#[path = "region_tests.rs"]
mod region_tests;
