// SPDX-FileCopyrightText: 2026 Marian Vinas <author@example.com>
//
// SPDX-License-Identifier: MIT

//! # lambdata
//!
//! Small data-science helpers: a train/validation/test splitter for labeled
//! tabular data with descriptive-statistics reporting, plus a few utilities.
//!
//! ## Quick Start
//!
//! ```rust
//! use lambdata::data::{Column, DataFrame};
//! use lambdata::splitter::{DatasetSplitter, SplitOptions};
//!
//! let df = DataFrame::new(vec![
//!     ("ash", Column::numeric((0..100).map(|i| 2.0 + i as f64 * 0.01).collect::<Vec<_>>())),
//!     ("hue", Column::numeric((0..100).map(|i| 1.0 - i as f64 * 0.005).collect::<Vec<_>>())),
//!     ("target", Column::numeric((0..100).map(|i| (i % 3) as f64).collect::<Vec<_>>())),
//! ])?;
//!
//! let splitter = DatasetSplitter::new(df, &["ash", "hue"], "target")?;
//! let split = splitter.split_three_way(SplitOptions::default().random_seed(42))?;
//! assert_eq!(split.sizes(), (70, 10, 20));
//!
//! let (x_train, x_val, x_test, _y_train, _y_val, _y_test) = split.into_tuple();
//! splitter.print_split_summary(&x_train, &x_val, &x_test)?;
//! # Ok::<(), lambdata::LambdataError>(())
//! ```
//!
//! ## Splitting
//!
//! The three-way split is two sequential two-way splits: first the test
//! pool is held out, then the validation pool is held out of what remains
//! using the renormalized fraction `val / (train + val)`. Held-out counts are
//! rounded up. With a seed the partition is reproducible; without one every
//! call draws a new permutation. With `shuffle(false)` the pools are
//! contiguous blocks in the original row order, held-out rows last.
//!
//! ## Architecture
//!
//! 1. **Data model** (`data`): typed columns, frames with row labels, target series
//! 2. **Split primitive** (`split`): seeded two-way partition of row positions
//! 3. **Splitter** (`splitter`): three-way split over features and target
//! 4. **Reporting** (`summary`): `describe`-style statistics and the split summary
//!
//! Diagnostics go through `tracing`; install a subscriber to see them.

pub mod data;
pub mod error;
pub mod split;
pub mod splitter;
pub mod summary;
pub mod utils;

pub use data::{Column, ColumnType, DataFrame, Series, Value};
pub use error::{LambdataError, Result};
pub use splitter::{DatasetSplitter, SplitOptions, ThreeWaySplit};
