//! Deterministic in-memory imagery backend.
//!
//! Plays the role the in-memory repository plays for persistence: a fully
//! local stand-in for the remote collaborator, usable for unit tests,
//! integration tests and local development. Generated values are a pure
//! function of (source, year, month, seed), so repeated runs reproduce the
//! same sample composition.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::image_service::{
    Composite, CompositeRequest, ImageService, PointSample, SamplingPlan, SourceError,
};
use super::SourceId;

type WindowKey = (SourceId, i32, u32);

struct IssuedComposite {
    key: WindowKey,
    bands: Vec<String>,
}

/// Synthetic [`ImageService`] with injectable gaps and failures.
pub struct SyntheticImageService {
    base_seed: u64,
    points_per_window: usize,
    missing: RwLock<HashSet<WindowKey>>,
    failing: RwLock<HashSet<WindowKey>>,
    point_overrides: RwLock<HashMap<WindowKey, usize>>,
    composites: RwLock<HashMap<u64, IssuedComposite>>,
    next_token: RwLock<u64>,
}

impl SyntheticImageService {
    pub fn new(base_seed: u64) -> Self {
        Self {
            base_seed,
            points_per_window: 900,
            missing: RwLock::new(HashSet::new()),
            failing: RwLock::new(HashSet::new()),
            point_overrides: RwLock::new(HashMap::new()),
            composites: RwLock::new(HashMap::new()),
            next_token: RwLock::new(1),
        }
    }

    /// Default number of points every window yields.
    pub fn with_points_per_window(mut self, points: usize) -> Self {
        self.points_per_window = points;
        self
    }

    /// Make a (source, year, month) window report no usable imagery.
    pub fn mark_missing(&self, source: SourceId, year: i32, month: u32) {
        self.missing.write().insert((source, year, month));
    }

    /// Make a (source, year, month) window fail with a transient error.
    pub fn mark_failing(&self, source: SourceId, year: i32, month: u32) {
        self.failing.write().insert((source, year, month));
    }

    /// Override the point count for one window.
    pub fn set_points(&self, source: SourceId, year: i32, month: u32, points: usize) {
        self.point_overrides
            .write()
            .insert((source, year, month), points);
    }

    fn window_seed(&self, key: &WindowKey, plan_seed: u64) -> u64 {
        // Cheap stable mix; only reproducibility matters here.
        let mut seed = self.base_seed ^ plan_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        seed = seed.wrapping_add((key.1 as u64).wrapping_mul(0x0100_0000_01B3));
        seed = seed.wrapping_add((key.2 as u64).wrapping_mul(0xDEAD_BEEF));
        seed ^ match key.0 {
            SourceId::Smap => 0x01,
            SourceId::Landsat8 => 0x02,
            SourceId::Sentinel2 => 0x03,
        }
    }

    fn band_range(band: &str) -> (f64, f64) {
        if band == "sm_surface" {
            // Volumetric soil moisture, m3/m3.
            (0.05, 0.45)
        } else {
            // Rescaled surface reflectance.
            (0.0, 0.6)
        }
    }
}

impl ImageService for SyntheticImageService {
    fn query_composite(
        &self,
        request: &CompositeRequest,
    ) -> Result<Option<Composite>, SourceError> {
        use chrono::Datelike;

        let key = (
            request.spec.id,
            request.window.start.year(),
            request.window.start.month(),
        );

        if self.failing.read().contains(&key) {
            return Err(SourceError::Unavailable(format!(
                "synthetic outage for {} {}-{:02}",
                key.0, key.1, key.2
            )));
        }
        if self.missing.read().contains(&key) {
            return Ok(None);
        }

        let bands: Vec<String> = request.spec.bands.iter().map(|b| b.to_string()).collect();
        let token = {
            let mut next = self.next_token.write();
            let token = *next;
            *next += 1;
            token
        };
        self.composites.write().insert(
            token,
            IssuedComposite {
                key,
                bands: bands.clone(),
            },
        );

        Ok(Some(Composite { bands, token }))
    }

    fn sample_points(
        &self,
        composite: &Composite,
        plan: &SamplingPlan,
    ) -> Result<Vec<PointSample>, SourceError> {
        let composites = self.composites.read();
        let issued = composites
            .get(&composite.token)
            .ok_or_else(|| SourceError::Backend("unknown composite token".to_string()))?;

        let available = self
            .point_overrides
            .read()
            .get(&issued.key)
            .copied()
            .unwrap_or(self.points_per_window);
        let count = available.min(plan.num_points);

        let mut rng = StdRng::seed_from_u64(self.window_seed(&issued.key, plan.seed));
        let ranges: Vec<(f64, f64)> = issued.bands.iter().map(|b| Self::band_range(b)).collect();

        let samples = (0..count)
            .map(|_| PointSample {
                values: ranges
                    .iter()
                    .map(|(lo, hi)| rng.gen_range(*lo..*hi))
                    .collect(),
            })
            .collect();

        Ok(samples)
    }
}

#[cfg(test)]
#[path = "synthetic_tests.rs"]
mod synthetic_tests;
