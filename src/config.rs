//! Extraction configuration and environment variable handling.

use std::env;

/// Exact row count every monthly dataset is normalized to.
pub const TARGET_ROWS: usize = 750;

/// Tunables for an extraction run, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Rows per (region, source, month) after normalization.
    pub target_rows: usize,
    /// Upper bound on points drawn from a composite.
    pub sample_points: usize,
    /// Sampling scale in meters (matches the SMAP pixel size).
    pub scale_m: f64,
    /// Seed for point placement and resampling.
    pub seed: u64,
    /// Remote query budget, composites per minute, for the pacer.
    pub pace_per_minute: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            target_rows: TARGET_ROWS,
            sample_points: 5000,
            scale_m: 750.0,
            seed: 42,
            pace_per_minute: 12,
        }
    }
}

impl ExtractionConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `SOILCAST_TARGET_ROWS` (optional, default: 750)
    /// - `SOILCAST_SAMPLE_POINTS` (optional, default: 5000)
    /// - `SOILCAST_SCALE_M` (optional, default: 750)
    /// - `SOILCAST_SEED` (optional, default: 42)
    /// - `SOILCAST_PACE_PER_MINUTE` (optional, default: 12)
    ///
    /// # Errors
    /// Returns an error message when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();
        Ok(Self {
            target_rows: parse_var("SOILCAST_TARGET_ROWS", defaults.target_rows)?,
            sample_points: parse_var("SOILCAST_SAMPLE_POINTS", defaults.sample_points)?,
            scale_m: parse_var("SOILCAST_SCALE_M", defaults.scale_m)?,
            seed: parse_var("SOILCAST_SEED", defaults.seed)?,
            pace_per_minute: parse_var("SOILCAST_PACE_PER_MINUTE", defaults.pace_per_minute)?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("{} must be a valid value, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractionConfig::default();
        assert_eq!(config.target_rows, TARGET_ROWS);
        assert_eq!(config.sample_points, 5000);
        assert_eq!(config.seed, 42);
    }
}
