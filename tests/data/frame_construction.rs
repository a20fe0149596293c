use lambdata::LambdataError;
use lambdata::data::{Column, ColumnType, DataFrame, Series, Value};

#[test]
fn from_rows_builds_typed_schema() {
    let rows = vec![
        vec![("name", Value::from("a")), ("score", Value::from(1.5))],
        vec![("name", Value::from("b")), ("score", Value::from(2.5))],
        vec![("score", Value::from(3.5)), ("name", Value::from("c"))],
    ];
    let df = DataFrame::from_rows(&rows).unwrap();
    assert_eq!(df.shape(), (3, 2));
    let names = ["name".to_string(), "score".to_string()];
    assert_eq!(df.column_names(), &names);

    let schema = df.schema();
    assert_eq!(schema.column_type("name"), Some(ColumnType::Categorical));
    assert_eq!(schema.column_type("score"), Some(ColumnType::Numeric));
    assert!(!schema.contains("other"));
    assert_eq!(df.row(2), Some(vec![Value::from("c"), Value::from(3.5)]));
}

#[test]
fn empty_rows_give_empty_frame() {
    let df = DataFrame::from_rows(&[]).unwrap();
    assert_eq!(df.shape(), (0, 0));
}

#[test]
fn with_column_appends_or_replaces() {
    let df = DataFrame::new(vec![("x", Column::numeric(vec![1.0, 2.0]))]).unwrap();
    let added = df.with_column("y", Column::from(vec!["p", "q"])).unwrap();
    assert_eq!(added.shape(), (2, 2));
    assert_eq!(df.shape(), (2, 1));

    let replaced = added.with_column("x", Column::numeric(vec![9.0, 8.0])).unwrap();
    assert_eq!(replaced.shape(), (2, 2));
    let x = replaced.column("x").unwrap();
    assert_eq!(x, &Column::numeric(vec![9.0, 8.0]));

    assert!(matches!(
        df.with_column("z", Column::numeric(vec![1.0])),
        Err(LambdataError::LengthMismatch { expected: 2, got: 1, .. })
    ));
}

#[test]
fn series_keeps_frame_labels() {
    let df = DataFrame::new(vec![("y", Column::numeric(vec![5.0, 6.0, 7.0]))]).unwrap();
    let sub = df.take(&[2, 1]);
    let s = Series::from_frame(&sub, "y").unwrap();
    assert_eq!(s.index(), &[2, 1]);
    assert_eq!(s.get(0), Some(Value::Numeric(7.0)));
    assert_eq!(s.take(&[1]).index(), &[1]);
    assert!(matches!(
        Series::from_frame(&df, "missing"),
        Err(LambdataError::InvalidColumn { .. })
    ));
}
