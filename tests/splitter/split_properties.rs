use std::collections::HashSet;

use lambdata::data::Column;
use lambdata::{DataFrame, DatasetSplitter, Series, SplitOptions};

use crate::test_helpers::generate_id_frame;

fn ids(frame: &DataFrame) -> Vec<usize> {
    match frame.column("id").unwrap() {
        Column::Numeric(v) => v.iter().map(|&x| x as usize).collect(),
        Column::Categorical(_) => panic!("id column should be numeric"),
    }
}

fn assert_aligned(x: &DataFrame, y: &Series) {
    assert_eq!(x.n_rows(), y.len());
    assert_eq!(x.index(), y.index());
    for (i, id) in ids(x).into_iter().enumerate() {
        assert_eq!(y.get(i).and_then(|v| v.as_f64()), Some(id as f64 * 2.0));
    }
}

fn id_splitter(size: usize) -> DatasetSplitter {
    DatasetSplitter::new(generate_id_frame(size), &["id"], "label").unwrap()
}

#[test]
fn split_covers_every_row_exactly_once() {
    for &(size, seed) in &[(100usize, 0u64), (37, 5), (513, 99)] {
        let splitter = id_splitter(size);
        let split = splitter
            .split_three_way(SplitOptions::default().random_seed(seed))
            .unwrap();

        let (n_train, n_val, n_test) = split.sizes();
        assert_eq!(n_train + n_val + n_test, size);

        let train: HashSet<usize> = ids(&split.x_train).into_iter().collect();
        let val: HashSet<usize> = ids(&split.x_val).into_iter().collect();
        let test: HashSet<usize> = ids(&split.x_test).into_iter().collect();
        assert!(train.is_disjoint(&val));
        assert!(train.is_disjoint(&test));
        assert!(val.is_disjoint(&test));

        let union: HashSet<usize> = train.union(&val).chain(&test).copied().collect();
        assert_eq!(union, (0..size).collect::<HashSet<_>>());
    }
}

#[test]
fn features_and_target_stay_row_aligned() {
    let splitter = id_splitter(250);
    let split = splitter
        .split_three_way(SplitOptions::default().random_seed(17))
        .unwrap();
    assert_aligned(&split.x_train, &split.y_train);
    assert_aligned(&split.x_val, &split.y_val);
    assert_aligned(&split.x_test, &split.y_test);
}

#[test]
fn index_labels_match_row_identity() {
    let splitter = id_splitter(60);
    let split = splitter
        .split_three_way(SplitOptions::default().random_seed(3))
        .unwrap();
    for frame in [&split.x_train, &split.x_val, &split.x_test] {
        assert_eq!(frame.index().to_vec(), ids(frame));
    }
}

#[test]
fn same_seed_gives_same_partition() {
    let splitter = id_splitter(200);
    let options = SplitOptions::default().random_seed(42);
    let a = splitter.split_three_way(options).unwrap();
    let b = splitter.split_three_way(options).unwrap();
    assert_eq!(a, b);

    let c = splitter
        .split_three_way(SplitOptions::default().random_seed(43))
        .unwrap();
    assert_ne!(ids(&a.x_test), ids(&c.x_test));
}

#[test]
fn unseeded_splits_differ() {
    let splitter = id_splitter(200);
    let a = splitter.split_three_way(SplitOptions::default()).unwrap();
    let b = splitter.split_three_way(SplitOptions::default()).unwrap();
    assert_eq!(a.sizes(), b.sizes());
    assert_ne!(ids(&a.x_train), ids(&b.x_train));
}

#[test]
fn unshuffled_split_keeps_original_order() {
    let splitter = id_splitter(100);
    let split = splitter
        .split_three_way(SplitOptions::default().shuffle(false))
        .unwrap();
    assert_eq!(ids(&split.x_train), (0..70).collect::<Vec<_>>());
    assert_eq!(ids(&split.x_val), (70..80).collect::<Vec<_>>());
    assert_eq!(ids(&split.x_test), (80..100).collect::<Vec<_>>());
}

#[test]
fn splitting_does_not_touch_the_source() {
    let splitter = id_splitter(50);
    let features = splitter.features().clone();
    let target = splitter.target().clone();
    let _ = splitter
        .split_three_way(SplitOptions::default().random_seed(8))
        .unwrap();
    assert_eq!(splitter.features(), &features);
    assert_eq!(splitter.target(), &target);
}
