use super::*;
use crate::models::frame::{Frame, MONTH_COLUMN, YEAR_COLUMN};

/// History with one row per month of one year; feature value = month / 10.
fn one_year_history() -> Frame {
    let mut frame = Frame::new(vec![
        "sm_surface".to_string(),
        "L8_B4".to_string(),
        YEAR_COLUMN.to_string(),
        MONTH_COLUMN.to_string(),
    ]);
    for month in 1..=12u32 {
        frame
            .push_row(vec![0.3, month as f64 / 10.0, 2021.0, month as f64])
            .unwrap();
    }
    frame
}

#[test]
fn test_one_year_climatology_equals_raw_values() {
    let history = one_year_history();
    let climatology = monthly_climatology(&history).unwrap();

    assert_eq!(
        climatology.columns,
        vec!["L8_B4", YEAR_COLUMN, MONTH_COLUMN]
    );
    for month in 1..=12usize {
        let row = &climatology.by_month[month - 1];
        assert!((row[0] - month as f64 / 10.0).abs() < 1e-12);
    }
}

#[test]
fn test_climatology_averages_across_years() {
    let mut history = one_year_history();
    let mut second = Frame::new(history.columns().to_vec());
    for month in 1..=12u32 {
        second
            .push_row(vec![0.3, month as f64 / 5.0, 2022.0, month as f64])
            .unwrap();
    }
    history.append(second).unwrap();

    let climatology = monthly_climatology(&history).unwrap();
    // Mean of m/10 and m/5 is 1.5 * m/10.
    assert!((climatology.by_month[3][0] - 0.4 * 1.5).abs() < 1e-12);
}

#[test]
fn test_float_month_values_are_rounded_before_grouping() {
    let mut frame = Frame::new(vec![
        "sm_surface".to_string(),
        "f".to_string(),
        MONTH_COLUMN.to_string(),
    ]);
    for month in 1..=12u32 {
        frame
            .push_row(vec![0.1, month as f64, month as f64 + 0.0001])
            .unwrap();
    }

    let climatology = monthly_climatology(&frame).unwrap();
    assert!((climatology.by_month[0][0] - 1.0).abs() < 1e-12);
}

#[test]
fn test_missing_month_is_malformed() {
    let mut frame = Frame::new(vec![
        "sm_surface".to_string(),
        MONTH_COLUMN.to_string(),
    ]);
    for month in 1..=11u32 {
        frame.push_row(vec![0.2, month as f64]).unwrap();
    }

    let err = monthly_climatology(&frame).unwrap_err();
    assert!(matches!(err, ForecastError::MalformedHistoricalDataset(_)));
}

#[test]
fn test_missing_target_or_month_column_is_malformed() {
    let no_target = Frame::new(vec![MONTH_COLUMN.to_string()]);
    assert!(matches!(
        monthly_climatology(&no_target).unwrap_err(),
        ForecastError::MalformedHistoricalDataset(_)
    ));

    let no_month = Frame::new(vec!["sm_surface".to_string()]);
    assert!(matches!(
        monthly_climatology(&no_month).unwrap_err(),
        ForecastError::MalformedHistoricalDataset(_)
    ));
}

#[test]
fn test_project_is_year_major_month_minor() {
    let history = one_year_history();
    let synthetic = project(&history, 2, 2026).unwrap();

    assert_eq!(synthetic.len(), 24);
    assert_eq!(
        synthetic.columns(),
        &["L8_B4", YEAR_COLUMN, MONTH_COLUMN]
    );

    let years = synthetic.column_values(YEAR_COLUMN).unwrap();
    let months = synthetic.column_values(MONTH_COLUMN).unwrap();
    assert_eq!(&years[..12], &[2026.0; 12]);
    assert_eq!(&years[12..], &[2027.0; 12]);
    for (i, &m) in months.iter().enumerate() {
        assert_eq!(m, (i % 12 + 1) as f64);
        assert_eq!(m.fract(), 0.0, "month must be integral");
    }
}

#[test]
fn test_project_preserves_feature_values() {
    let history = one_year_history();
    let synthetic = project(&history, 1, 2026).unwrap();

    let features = synthetic.column_values("L8_B4").unwrap();
    for (i, &v) in features.iter().enumerate() {
        assert!((v - (i + 1) as f64 / 10.0).abs() < 1e-12);
    }
}
