use super::*;
use crate::models::region::{BoundingBox, Region};
use crate::sources::{landsat8_spec, smap_spec, SourceId, SyntheticImageService};

fn rajasthan() -> Region {
    Region::new("Rajasthan", BoundingBox::new(69.5, 23.3, 76.5, 30.2))
}

#[test]
fn test_sample_month_yields_band_columns() {
    let service = SyntheticImageService::new(11).with_points_per_window(50);
    let config = ExtractionConfig::default();
    let sampler = TemporalSampler::new(&service, &config);

    let frame = sampler
        .sample_month(&rajasthan(), &landsat8_spec(), 2021, 4)
        .unwrap();

    assert_eq!(
        frame.columns(),
        &["L8_B4", "L8_B5", "L8_B6", "L8_B7"]
    );
    assert_eq!(frame.len(), 50);
}

#[test]
fn test_empty_window_is_skip_not_error() {
    let service = SyntheticImageService::new(11);
    service.mark_missing(SourceId::Smap, 2021, 7);
    let config = ExtractionConfig::default();
    let sampler = TemporalSampler::new(&service, &config);

    assert!(sampler
        .sample_month(&rajasthan(), &smap_spec(), 2021, 7)
        .is_none());
    assert!(sampler
        .sample_month(&rajasthan(), &smap_spec(), 2021, 8)
        .is_some());
}

#[test]
fn test_backend_failure_is_skip_not_error() {
    let service = SyntheticImageService::new(11);
    service.mark_failing(SourceId::Smap, 2021, 3);
    let config = ExtractionConfig::default();
    let sampler = TemporalSampler::new(&service, &config);

    assert!(sampler
        .sample_month(&rajasthan(), &smap_spec(), 2021, 3)
        .is_none());
}

#[test]
fn test_sample_month_is_deterministic() {
    let config = ExtractionConfig::default();

    let service_a = SyntheticImageService::new(11).with_points_per_window(20);
    let sampler_a = TemporalSampler::new(&service_a, &config);
    let frame_a = sampler_a
        .sample_month(&rajasthan(), &smap_spec(), 2020, 1)
        .unwrap();

    let service_b = SyntheticImageService::new(11).with_points_per_window(20);
    let sampler_b = TemporalSampler::new(&service_b, &config);
    let frame_b = sampler_b
        .sample_month(&rajasthan(), &smap_spec(), 2020, 1)
        .unwrap();

    assert_eq!(frame_a, frame_b);
}

#[test]
fn test_invalid_month_is_skipped() {
    let service = SyntheticImageService::new(11);
    let config = ExtractionConfig::default();
    let sampler = TemporalSampler::new(&service, &config);

    assert!(sampler
        .sample_month(&rajasthan(), &landsat8_spec(), 2021, 13)
        .is_none());
}
