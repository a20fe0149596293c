// SPDX-FileCopyrightText: 2026 Marian Vinas <author@example.com>
//
// SPDX-License-Identifier: MIT

use std::collections::HashSet;
use std::fmt;

use super::column::Column;
use super::value::{ColumnType, Value};
use crate::error::{LambdataError, Result};

/// Ordered column names with their type tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<(String, ColumnType)>,
}

impl Schema {
    pub fn fields(&self) -> &[(String, ColumnType)] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ty)| *ty)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column_type(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Column-oriented table with named, typed columns of equal length.
///
/// Every frame carries a row index of original row labels. Row gathers move
/// the labels together with the values, so a row keeps its identity across
/// splits.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    names: Vec<String>,
    columns: Vec<Column>,
    index: Vec<usize>,
}

impl DataFrame {
    /// Build a frame from named columns. The index defaults to `0..n_rows`.
    pub fn new<S: Into<String>>(columns: Vec<(S, Column)>) -> Result<Self> {
        let mut names = Vec::with_capacity(columns.len());
        let mut cols = Vec::with_capacity(columns.len());
        let mut seen = HashSet::with_capacity(columns.len());
        let mut n_rows = None;

        for (name, col) in columns {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(LambdataError::DuplicateColumn(name));
            }
            let expected = *n_rows.get_or_insert(col.len());
            if col.len() != expected {
                return Err(LambdataError::LengthMismatch {
                    column: name,
                    expected,
                    got: col.len(),
                });
            }
            names.push(name);
            cols.push(col);
        }

        let n = n_rows.unwrap_or(0);
        Ok(Self {
            names,
            columns: cols,
            index: (0..n).collect(),
        })
    }

    /// Build a frame row by row from ordered `(name, value)` pairs.
    ///
    /// Column order follows the first row. Every row must provide every
    /// column, and a column's values must all share one type.
    pub fn from_rows(rows: &[Vec<(&str, Value)>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Self::new(Vec::<(String, Column)>::new());
        };

        let mut columns = Vec::with_capacity(first.len());
        for (name, value) in first {
            let ty = value.column_type();
            let mut numeric = Vec::new();
            let mut categorical = Vec::new();
            for (r, row) in rows.iter().enumerate() {
                let cell = row
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, v)| v)
                    .ok_or_else(|| LambdataError::MissingValue {
                        row: r,
                        column: name.to_string(),
                    })?;
                match (ty, cell) {
                    (ColumnType::Numeric, Value::Numeric(v)) => numeric.push(*v),
                    (ColumnType::Categorical, Value::Categorical(s)) => categorical.push(s.clone()),
                    (expected, other) => {
                        return Err(LambdataError::TypeMismatch {
                            column: name.to_string(),
                            expected,
                            found: other.column_type(),
                        });
                    }
                }
            }
            let col = match ty {
                ColumnType::Numeric => Column::numeric(numeric),
                ColumnType::Categorical => Column::Categorical(categorical),
            };
            columns.push((name.to_string(), col));
        }

        Self::new(columns)
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    pub fn schema(&self) -> Schema {
        Schema {
            fields: self
                .names
                .iter()
                .zip(&self.columns)
                .map(|(n, c)| (n.clone(), c.column_type()))
                .collect(),
        }
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Original row labels, aligned with the rows of this frame.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(&self.columns)
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.position(name).map(|i| &self.columns[i])
    }

    /// Values of row `row` in column order.
    pub fn row(&self, row: usize) -> Option<Vec<Value>> {
        self.columns.iter().map(|c| c.get(row)).collect()
    }

    /// Project onto the named columns, in the order given.
    pub fn select(&self, names: &[&str]) -> Result<DataFrame> {
        let mut out_names = Vec::with_capacity(names.len());
        let mut out_cols = Vec::with_capacity(names.len());
        for &name in names {
            let i = self.position(name)?;
            if out_names.iter().any(|n| n == name) {
                return Err(LambdataError::DuplicateColumn(name.to_string()));
            }
            out_names.push(name.to_string());
            out_cols.push(self.columns[i].clone());
        }
        Ok(DataFrame {
            names: out_names,
            columns: out_cols,
            index: self.index.clone(),
        })
    }

    /// Gather rows by position. Row labels travel with the rows.
    pub fn take(&self, rows: &[usize]) -> DataFrame {
        DataFrame {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(rows)).collect(),
            index: rows.iter().map(|&r| self.index[r]).collect(),
        }
    }

    /// Copy of this frame with `column` appended, or replacing an existing
    /// column of the same name.
    pub fn with_column(&self, name: &str, column: Column) -> Result<DataFrame> {
        let mut out = self.clone();
        if out.columns.is_empty() {
            out.index = (0..column.len()).collect();
        } else if column.len() != self.n_rows() {
            return Err(LambdataError::LengthMismatch {
                column: name.to_string(),
                expected: self.n_rows(),
                got: column.len(),
            });
        }
        match out.names.iter().position(|n| n == name) {
            Some(i) => out.columns[i] = column,
            None => {
                out.names.push(name.to_string());
                out.columns.push(column);
            }
        }
        Ok(out)
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| LambdataError::InvalidColumn {
                column: name.to_string(),
            })
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = Vec::with_capacity(self.n_cols() + 1);
        header.push(String::new());
        header.extend(self.names.iter().cloned());

        let rows: Vec<Vec<String>> = (0..self.n_rows())
            .map(|r| {
                let mut cells = Vec::with_capacity(self.n_cols() + 1);
                cells.push(self.index[r].to_string());
                cells.extend(self.columns.iter().map(|c| match c {
                    Column::Numeric(v) => format_number(v[r]),
                    Column::Categorical(v) => v[r].clone(),
                }));
                cells
            })
            .collect();

        write_table(f, &header, &rows)
    }
}

/// Render a float the way the text tables show numbers.
pub(crate) fn format_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.1}", v)
    } else {
        format!("{:.6}", v)
    }
}

/// Write a right-aligned text table. The first column is left-aligned and
/// serves as the row label.
pub(crate) fn write_table<W: fmt::Write>(
    out: &mut W,
    header: &[String],
    rows: &[Vec<String>],
) -> fmt::Result {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let write_line = |out: &mut W, cells: &[String]| -> fmt::Result {
        for (i, (cell, &w)) in cells.iter().zip(&widths).enumerate() {
            if i == 0 {
                write!(out, "{:<w$}", cell, w = w)?;
            } else {
                write!(out, "  {:>w$}", cell, w = w)?;
            }
        }
        writeln!(out)
    };

    write_line(&mut *out, header)?;
    for row in rows {
        write_line(&mut *out, row)?;
    }
    Ok(())
}
