use super::*;

fn frame_with(columns: &[&str], rows: &[&[f64]]) -> Frame {
    let mut frame = Frame::new(columns.iter().map(|c| c.to_string()).collect());
    for row in rows {
        frame.push_row(row.to_vec()).unwrap();
    }
    frame
}

#[test]
fn test_push_row_shape_mismatch() {
    let mut frame = Frame::new(vec!["a".into(), "b".into()]);
    let err = frame.push_row(vec![1.0]).unwrap_err();
    assert!(matches!(err, FrameError::ShapeMismatch { expected: 2, got: 1 }));
}

#[test]
fn test_column_values_in_row_order() {
    let frame = frame_with(&["a", "b"], &[&[1.0, 10.0], &[2.0, 20.0], &[3.0, 30.0]]);
    assert_eq!(frame.column_values("b").unwrap(), vec![10.0, 20.0, 30.0]);
    assert!(frame.column_values("missing").is_err());
}

#[test]
fn test_stamp_column_adds_then_overwrites() {
    let mut frame = frame_with(&["a"], &[&[1.0], &[2.0]]);
    frame.stamp_column("Year", 2021.0);
    assert_eq!(frame.columns(), &["a".to_string(), "Year".to_string()]);
    assert_eq!(frame.column_values("Year").unwrap(), vec![2021.0, 2021.0]);

    frame.stamp_column("Year", 2022.0);
    assert_eq!(frame.columns().len(), 2);
    assert_eq!(frame.column_values("Year").unwrap(), vec![2022.0, 2022.0]);
}

#[test]
fn test_select_reorders_columns() {
    let frame = frame_with(&["a", "b", "c"], &[&[1.0, 2.0, 3.0]]);
    let selected = frame
        .select(&["c".to_string(), "a".to_string()])
        .unwrap();
    assert_eq!(selected.columns(), &["c".to_string(), "a".to_string()]);
    assert_eq!(selected.row(0), &[3.0, 1.0]);
}

#[test]
fn test_columns_without() {
    let frame = frame_with(&["sm_surface", "Year", "Month"], &[]);
    assert_eq!(
        frame.columns_without(&["sm_surface"]),
        vec!["Year".to_string(), "Month".to_string()]
    );
}

#[test]
fn test_append_requires_matching_columns() {
    let mut a = frame_with(&["x"], &[&[1.0]]);
    let b = frame_with(&["x"], &[&[2.0]]);
    a.append(b).unwrap();
    assert_eq!(a.len(), 2);

    let c = frame_with(&["y"], &[&[3.0]]);
    assert!(a.append(c).is_err());
}
