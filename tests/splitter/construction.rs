use lambdata::{DatasetSplitter, LambdataError};

use crate::test_helpers::generate_wine_frame;

#[test]
fn unknown_feature_is_rejected_at_construction() {
    let df = generate_wine_frame(20, 1);
    let err = DatasetSplitter::new(df, &["ash", "alcohol"], "target").unwrap_err();
    match err {
        LambdataError::InvalidColumn { column } => assert_eq!(column, "alcohol"),
        other => panic!("expected InvalidColumn, got {:?}", other),
    }
}

#[test]
fn unknown_target_is_rejected_at_construction() {
    let df = generate_wine_frame(20, 1);
    assert!(matches!(
        DatasetSplitter::new(df, &["ash", "hue"], "quality"),
        Err(LambdataError::InvalidColumn { ref column }) if column == "quality"
    ));
}

#[test]
fn projections_follow_requested_columns() {
    let df = generate_wine_frame(20, 1);
    let splitter = DatasetSplitter::new(df.clone(), &["hue", "cultivar"], "target").unwrap();

    let names = splitter.features().column_names();
    assert_eq!(names, &["hue".to_string(), "cultivar".to_string()]);
    assert_eq!(splitter.features().n_rows(), 20);
    assert_eq!(splitter.target().name(), "target");
    assert_eq!(splitter.target().len(), 20);
    assert_eq!(splitter.data(), &df);
}

#[test]
fn splitter_date_divider_leaves_dataset_untouched() {
    use lambdata::data::Column;

    let bottled = Column::from(vec!["2001-05-01", "2003-06-02", "2010-07-03"]);
    let df = generate_wine_frame(3, 2)
        .with_column("bottled", bottled)
        .unwrap();
    let splitter = DatasetSplitter::new(df, &["ash"], "target").unwrap();
    let divided = splitter.date_divider("bottled").unwrap();

    assert_eq!(divided.n_cols(), splitter.data().n_cols() + 3);
    assert_eq!(
        divided.column("Year").unwrap(),
        &Column::numeric(vec![2001.0, 2003.0, 2010.0])
    );
    assert!(splitter.data().column("Year").is_err());
}
