// SPDX-FileCopyrightText: 2026 Marian Vinas <author@example.com>
//
// SPDX-License-Identifier: MIT

use std::io;

use crate::data::ColumnType;

/// Errors raised by dataset construction, splitting and reporting.
///
/// All errors surface immediately to the caller; nothing is retried or
/// partially recovered.
#[derive(Debug, thiserror::Error)]
pub enum LambdataError {
    #[error("column '{column}' does not exist in the dataset")]
    InvalidColumn { column: String },

    #[error(
        "with n_samples={n_samples} and held-out fraction {fraction}, the {side} set would be empty"
    )]
    SampleSize {
        n_samples: usize,
        fraction: f64,
        side: &'static str,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("inconsistent number of rows: column '{column}' expected {expected}, got {got}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("column '{column}' expected {expected} values, found {found}")]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("row {row} has no value for column '{column}'")]
    MissingValue { row: usize, column: String },

    #[error("could not parse '{value}' in column '{column}' (row {row}) as a date")]
    DateParse {
        column: String,
        row: usize,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LambdataError>;
