use super::*;
use crate::models::frame::{Frame, MONTH_COLUMN, YEAR_COLUMN};
use crate::sources::SourceId;

fn band_frame(band: &str, rows: usize, value: f64) -> Frame {
    let mut frame = Frame::new(vec![band.to_string()]);
    for _ in 0..rows {
        frame.push_row(vec![value]).unwrap();
    }
    frame
}

fn required() -> Vec<SourceId> {
    vec![SourceId::Smap, SourceId::Landsat8]
}

#[test]
fn test_month_missing_in_one_source_dropped_from_all() {
    let mut months = MonthSamples::new();

    let mut january = BTreeMap::new();
    january.insert(SourceId::Smap, band_frame("sm_surface", 3, 0.2));
    january.insert(SourceId::Landsat8, band_frame("L8_B4", 3, 0.5));
    months.insert(1, january);

    // February only has SMAP.
    let mut february = BTreeMap::new();
    february.insert(SourceId::Smap, band_frame("sm_surface", 3, 0.3));
    months.insert(2, february);

    let yearly = align(2021, months, &required()).unwrap();

    let smap = &yearly[&SourceId::Smap];
    let landsat = &yearly[&SourceId::Landsat8];
    assert_eq!(smap.len(), 3, "February must not leak into the SMAP dataset");
    assert_eq!(smap.len(), landsat.len(), "row parity across sources");
    assert_eq!(smap.column_values(MONTH_COLUMN).unwrap(), vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_months_concatenate_in_ascending_order() {
    let mut months = MonthSamples::new();
    for month in [7u32, 2, 11] {
        let mut by_source = BTreeMap::new();
        by_source.insert(SourceId::Smap, band_frame("sm_surface", 1, month as f64));
        by_source.insert(SourceId::Landsat8, band_frame("L8_B4", 1, 0.1));
        months.insert(month, by_source);
    }

    let yearly = align(2020, months, &required()).unwrap();
    let month_values = yearly[&SourceId::Smap].column_values(MONTH_COLUMN).unwrap();
    assert_eq!(month_values, vec![2.0, 7.0, 11.0]);
}

#[test]
fn test_year_and_month_stamped_on_every_row() {
    let mut months = MonthSamples::new();
    let mut june = BTreeMap::new();
    june.insert(SourceId::Smap, band_frame("sm_surface", 4, 0.25));
    june.insert(SourceId::Landsat8, band_frame("L8_B4", 4, 0.4));
    months.insert(6, june);

    let yearly = align(2019, months, &required()).unwrap();
    for frame in yearly.values() {
        assert_eq!(frame.column_values(YEAR_COLUMN).unwrap(), vec![2019.0; 4]);
        assert_eq!(frame.column_values(MONTH_COLUMN).unwrap(), vec![6.0; 4]);
    }
}

#[test]
fn test_no_qualifying_month_yields_empty_result() {
    let mut months = MonthSamples::new();
    let mut march = BTreeMap::new();
    march.insert(SourceId::Smap, band_frame("sm_surface", 2, 0.2));
    months.insert(3, march);

    let yearly = align(2021, months, &required()).unwrap();
    assert!(yearly.is_empty());
}

#[test]
fn test_single_required_source_passes_through() {
    let mut months = MonthSamples::new();
    for month in 1..=3u32 {
        let mut by_source = BTreeMap::new();
        by_source.insert(SourceId::Smap, band_frame("sm_surface", 2, 0.1 * month as f64));
        months.insert(month, by_source);
    }

    let yearly = align(2022, months, &[SourceId::Smap]).unwrap();
    assert_eq!(yearly[&SourceId::Smap].len(), 6);
    assert_eq!(
        yearly[&SourceId::Smap].columns(),
        &["sm_surface", YEAR_COLUMN, MONTH_COLUMN]
    );
}
