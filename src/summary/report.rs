use std::io::{self, Write};

use super::describe::describe;
use crate::data::DataFrame;
use crate::error::Result;

const SECTIONS: [(&str, &str); 3] = [
    ("######################## TRAINING DATA ########################", "X_train"),
    ("######################## VALIDATION DATA ######################", "X_val"),
    ("######################## TEST DATA ############################", "X_test"),
];

/// Write shape and descriptive statistics for the train, validation and
/// test feature subsets, in that order.
pub fn write_split_summary<W: Write>(
    out: &mut W,
    x_train: &DataFrame,
    x_val: &DataFrame,
    x_test: &DataFrame,
) -> Result<()> {
    for ((banner, label), frame) in SECTIONS.iter().zip([x_train, x_val, x_test]) {
        let (rows, cols) = frame.shape();
        writeln!(out, "{}", banner)?;
        writeln!(out, "{} Shape: ({}, {})", label, rows, cols)?;
        write!(out, "{}", describe(frame))?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// [`write_split_summary`] to standard output.
pub fn print_split_summary(
    x_train: &DataFrame,
    x_val: &DataFrame,
    x_test: &DataFrame,
) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_split_summary(&mut lock, x_train, x_val, x_test)
}
