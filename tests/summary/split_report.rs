use lambdata::summary::write_split_summary;
use lambdata::{DatasetSplitter, SplitOptions};

use crate::test_helpers::generate_wine_frame;

fn split_wine() -> lambdata::ThreeWaySplit {
    let df = generate_wine_frame(100, 21);
    let splitter = DatasetSplitter::new(df, &["ash", "hue", "cultivar"], "target").unwrap();
    splitter
        .split_three_way(SplitOptions::default().random_seed(5))
        .unwrap()
}

#[test]
fn report_sections_come_in_fixed_order() {
    let split = split_wine();
    let mut buf = Vec::new();
    write_split_summary(&mut buf, &split.x_train, &split.x_val, &split.x_test).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let train = text.find("TRAINING DATA").unwrap();
    let val = text.find("VALIDATION DATA").unwrap();
    let test = text.find("TEST DATA").unwrap();
    assert!(train < val && val < test);

    assert!(text.contains("X_train Shape: (70, 3)"));
    assert!(text.contains("X_val Shape: (10, 3)"));
    assert!(text.contains("X_test Shape: (20, 3)"));
    assert_eq!(text.matches("cultivar").count(), 3);
}

#[test]
fn report_does_not_mutate_inputs() {
    let split = split_wine();
    let before = split.clone();
    let mut buf = Vec::new();
    write_split_summary(&mut buf, &split.x_train, &split.x_val, &split.x_test).unwrap();
    assert_eq!(split, before);
}

#[test]
fn printing_mixed_columns_succeeds() {
    let split = split_wine();
    let df = generate_wine_frame(10, 3);
    let splitter = DatasetSplitter::new(df, &["ash"], "target").unwrap();
    splitter
        .print_split_summary(&split.x_train, &split.x_val, &split.x_test)
        .unwrap();
}
