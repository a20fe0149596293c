// SPDX-FileCopyrightText: 2026 Marian Vinas <author@example.com>
//
// SPDX-License-Identifier: MIT

//! Two-way random partition of row positions.
//!
//! This is the primitive the three-way splitter is built from. It works on
//! positions only; gathering the actual rows is left to the caller so the
//! same partition can be applied to features and target alike.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::{LambdataError, Result};

/// Tolerance under which `fraction * n_samples` is treated as an integer.
const ROUNDING_EPS: f64 = 1e-9;

/// Row positions assigned to each side of a two-way split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Number of held-out rows for `fraction` of `n_samples`, rounded up.
///
/// Products within `ROUNDING_EPS` of a positive integer snap to it first, so
/// `0.1 / (0.7 + 0.1) * 80` gives 10 rather than 11. A positive fraction of
/// a non-empty set always holds out at least one row.
pub fn held_out_count(n_samples: usize, fraction: f64) -> usize {
    let exact = fraction * n_samples as f64;
    let nearest = exact.round();
    let n_test = if nearest > 0.0 && (exact - nearest).abs() < ROUNDING_EPS {
        nearest
    } else {
        exact.ceil()
    };
    (n_test as usize).min(n_samples)
}

/// Partition `0..n_samples` into a train and a held-out test pool.
///
/// # Arguments
///
/// * `n_samples` - Number of rows to partition
/// * `test_fraction` - Share of rows held out, in `[0, 1]`
/// * `seed` - Fixes the shuffle; `None` draws fresh OS entropy on every call
/// * `shuffle` - When false, train is the leading block and test the trailing block
///
/// # Errors
///
/// `InvalidArgument` for a fraction outside `[0, 1]` or non-finite, and
/// `SampleSize` when there are no rows or the train side would be empty
/// although it was requested.
pub fn train_test_split(
    n_samples: usize,
    test_fraction: f64,
    seed: Option<u64>,
    shuffle: bool,
) -> Result<IndexSplit> {
    if !test_fraction.is_finite() || !(0.0..=1.0).contains(&test_fraction) {
        return Err(LambdataError::InvalidArgument(format!(
            "test fraction must be within [0, 1], got {}",
            test_fraction
        )));
    }
    if n_samples == 0 {
        return Err(LambdataError::SampleSize {
            n_samples,
            fraction: test_fraction,
            side: "train",
        });
    }

    let n_test = held_out_count(n_samples, test_fraction);
    let n_train = n_samples - n_test;
    if n_train == 0 && test_fraction < 1.0 {
        return Err(LambdataError::SampleSize {
            n_samples,
            fraction: test_fraction,
            side: "train",
        });
    }

    let mut positions: Vec<usize> = (0..n_samples).collect();
    let split = if shuffle {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        positions.shuffle(&mut rng);
        let train = positions.split_off(n_test);
        IndexSplit {
            train,
            test: positions,
        }
    } else {
        let test = positions.split_off(n_train);
        IndexSplit {
            train: positions,
            test,
        }
    };

    debug!(
        n_samples,
        n_train,
        n_test,
        ?seed,
        shuffle,
        "two-way split"
    );
    Ok(split)
}
