use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use super::column::Column;
use super::frame::DataFrame;
use super::value::ColumnType;
use crate::error::{LambdataError, Result};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a date cell, trying plain dates first, then date-times.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Return a copy of `frame` with numeric `Year`, `Month` and `Day` columns
/// derived from the categorical date column `date_col`.
///
/// The input frame is left unchanged.
pub fn date_divider(frame: &DataFrame, date_col: &str) -> Result<DataFrame> {
    let raw = match frame.column(date_col)? {
        Column::Categorical(values) => values,
        other => {
            return Err(LambdataError::TypeMismatch {
                column: date_col.to_string(),
                expected: ColumnType::Categorical,
                found: other.column_type(),
            });
        }
    };

    let n = raw.len();
    let mut years = Vec::with_capacity(n);
    let mut months = Vec::with_capacity(n);
    let mut days = Vec::with_capacity(n);
    for (row, cell) in raw.iter().enumerate() {
        let date = parse_date(cell).ok_or_else(|| LambdataError::DateParse {
            column: date_col.to_string(),
            row,
            value: cell.clone(),
        })?;
        years.push(date.year() as f64);
        months.push(date.month() as f64);
        days.push(date.day() as f64);
    }
    debug!(
        column = date_col,
        rows = n,
        "derived Year/Month/Day columns"
    );

    frame
        .with_column("Year", Column::numeric(years))?
        .with_column("Month", Column::numeric(months))?
        .with_column("Day", Column::numeric(days))
}
