// SPDX-FileCopyrightText: 2026 Marian Vinas <author@example.com>
//
// SPDX-License-Identifier: MIT

use tracing::{debug, warn};

use crate::data::{DataFrame, Series, date_divider};
use crate::error::{LambdataError, Result};
use crate::split::train_test_split;
use crate::summary;

/// Parameters of a three-way split.
///
/// Defaults to 70% train, 10% validation and 20% test, shuffled with a fresh
/// random seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitOptions {
    pub train_size: f64,
    pub val_size: f64,
    pub test_size: f64,
    pub random_seed: Option<u64>,
    pub shuffle: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            train_size: 0.7,
            val_size: 0.1,
            test_size: 0.2,
            random_seed: None,
            shuffle: true,
        }
    }
}

impl SplitOptions {
    pub fn train_size(mut self, size: f64) -> Self {
        self.train_size = size;
        self
    }

    pub fn val_size(mut self, size: f64) -> Self {
        self.val_size = size;
        self
    }

    pub fn test_size(mut self, size: f64) -> Self {
        self.test_size = size;
        self
    }

    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Held-out fraction for the second split: `val / (train + val)`.
    fn validation_fraction(&self) -> Result<f64> {
        for (name, size) in [
            ("train_size", self.train_size),
            ("val_size", self.val_size),
            ("test_size", self.test_size),
        ] {
            if !size.is_finite() || size < 0.0 {
                return Err(LambdataError::InvalidArgument(format!(
                    "{} must be a non-negative number, got {}",
                    name, size
                )));
            }
        }
        let pool = self.train_size + self.val_size;
        if pool <= 0.0 {
            return Err(LambdataError::InvalidArgument(
                "train_size + val_size must be positive".to_string(),
            ));
        }
        Ok(self.val_size / pool)
    }
}

/// The six outputs of a three-way split.
///
/// Feature frames and target series of the same subset are row-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreeWaySplit {
    pub x_train: DataFrame,
    pub x_val: DataFrame,
    pub x_test: DataFrame,
    pub y_train: Series,
    pub y_val: Series,
    pub y_test: Series,
}

impl ThreeWaySplit {
    /// `(x_train, x_val, x_test, y_train, y_val, y_test)`
    #[allow(clippy::type_complexity)]
    pub fn into_tuple(self) -> (DataFrame, DataFrame, DataFrame, Series, Series, Series) {
        (
            self.x_train,
            self.x_val,
            self.x_test,
            self.y_train,
            self.y_val,
            self.y_test,
        )
    }

    /// Row counts of train, validation and test.
    pub fn sizes(&self) -> (usize, usize, usize) {
        (self.x_train.n_rows(), self.x_val.n_rows(), self.x_test.n_rows())
    }
}

/// Splits a labeled dataset into train, validation and test subsets and
/// reports descriptive statistics for them.
///
/// The dataset and its feature/target projections are fixed at construction;
/// nothing here mutates them.
#[derive(Debug, Clone)]
pub struct DatasetSplitter {
    data: DataFrame,
    features: DataFrame,
    target: Series,
}

impl DatasetSplitter {
    /// Validate the named columns against `data` and store the projections.
    ///
    /// Fails with `InvalidColumn` if a feature or the target is missing.
    pub fn new(data: DataFrame, features: &[&str], target: &str) -> Result<Self> {
        let schema = data.schema();
        if let Some(missing) = features
            .iter()
            .chain(std::iter::once(&target))
            .find(|name| !schema.contains(name))
        {
            return Err(LambdataError::InvalidColumn {
                column: missing.to_string(),
            });
        }

        let features = data.select(features)?;
        let target = Series::from_frame(&data, target)?;
        debug!(
            rows = data.n_rows(),
            features = features.n_cols(),
            target = target.name(),
            "dataset splitter ready"
        );
        Ok(Self {
            data,
            features,
            target,
        })
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn features(&self) -> &DataFrame {
        &self.features
    }

    pub fn target(&self) -> &Series {
        &self.target
    }

    /// Partition the rows into train, validation and test subsets.
    ///
    /// A first split holds out `test_size` of the rows; a second split of
    /// the remaining pool holds out `val_size / (train_size + val_size)` as
    /// validation. Both splits use the same seed. Sizes that do not sum to
    /// one are accepted as they are.
    pub fn split_three_way(&self, options: SplitOptions) -> Result<ThreeWaySplit> {
        let val_fraction = options.validation_fraction()?;
        let total = options.train_size + options.val_size + options.test_size;
        if (total - 1.0).abs() > 1e-9 {
            warn!(
                train = options.train_size,
                val = options.val_size,
                test = options.test_size,
                "split sizes sum to {} rather than 1",
                total
            );
        }

        let first = train_test_split(
            self.features.n_rows(),
            options.test_size,
            options.random_seed,
            options.shuffle,
        )?;
        let second = train_test_split(
            first.train.len(),
            val_fraction,
            options.random_seed,
            options.shuffle,
        )?;

        // Second-split positions index into the first split's train pool.
        let train: Vec<usize> = second.train.iter().map(|&i| first.train[i]).collect();
        let val: Vec<usize> = second.test.iter().map(|&i| first.train[i]).collect();
        let test = first.test;

        let split = ThreeWaySplit {
            x_train: self.features.take(&train),
            x_val: self.features.take(&val),
            x_test: self.features.take(&test),
            y_train: self.target.take(&train),
            y_val: self.target.take(&val),
            y_test: self.target.take(&test),
        };
        debug!(
            train = train.len(),
            val = val.len(),
            test = test.len(),
            "three-way split"
        );
        Ok(split)
    }

    /// Print shape and descriptive statistics of the three feature subsets
    /// to standard output.
    pub fn print_split_summary(
        &self,
        x_train: &DataFrame,
        x_val: &DataFrame,
        x_test: &DataFrame,
    ) -> Result<()> {
        summary::print_split_summary(x_train, x_val, x_test)
    }

    /// Copy of the full dataset with `Year`, `Month` and `Day` columns
    /// derived from `date_col`.
    pub fn date_divider(&self, date_col: &str) -> Result<DataFrame> {
        date_divider(&self.data, date_col)
    }
}
