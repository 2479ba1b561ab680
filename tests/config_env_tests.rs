//! Environment-variable handling for the extraction configuration.

mod support;

use soilcast::config::{ExtractionConfig, TARGET_ROWS};
use support::with_scoped_env;

#[test]
fn test_defaults_without_env() {
    let config = with_scoped_env(
        &[
            ("SOILCAST_TARGET_ROWS", None),
            ("SOILCAST_SAMPLE_POINTS", None),
            ("SOILCAST_SCALE_M", None),
            ("SOILCAST_SEED", None),
            ("SOILCAST_PACE_PER_MINUTE", None),
        ],
        || ExtractionConfig::from_env().unwrap(),
    );

    assert_eq!(config.target_rows, TARGET_ROWS);
    assert_eq!(config.sample_points, 5000);
    assert_eq!(config.scale_m, 750.0);
    assert_eq!(config.seed, 42);
    assert_eq!(config.pace_per_minute, 12);
}

#[test]
fn test_env_overrides() {
    let config = with_scoped_env(
        &[
            ("SOILCAST_TARGET_ROWS", Some("100")),
            ("SOILCAST_SEED", Some("7")),
            ("SOILCAST_PACE_PER_MINUTE", Some("60")),
        ],
        || ExtractionConfig::from_env().unwrap(),
    );

    assert_eq!(config.target_rows, 100);
    assert_eq!(config.seed, 7);
    assert_eq!(config.pace_per_minute, 60);
    // Unset variables keep their defaults.
    assert_eq!(config.sample_points, 5000);
}

#[test]
fn test_unparseable_value_is_an_error() {
    let result = with_scoped_env(
        &[("SOILCAST_TARGET_ROWS", Some("many"))],
        ExtractionConfig::from_env,
    );

    let err = result.unwrap_err();
    assert!(err.contains("SOILCAST_TARGET_ROWS"), "got: {}", err);
}
