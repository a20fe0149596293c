use super::column::Column;
use super::frame::DataFrame;
use super::value::{ColumnType, Value};
use crate::error::Result;

/// A single named column with its row labels; the target side of a split.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    values: Column,
    index: Vec<usize>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Column) -> Self {
        let index = (0..values.len()).collect();
        Self {
            name: name.into(),
            values,
            index,
        }
    }

    /// Extract `name` from `frame`, keeping the frame's row labels.
    pub fn from_frame(frame: &DataFrame, name: &str) -> Result<Self> {
        let values = frame.column(name)?.clone();
        Ok(Self {
            name: name.to_string(),
            values,
            index: frame.index().to_vec(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dtype(&self) -> ColumnType {
        self.values.column_type()
    }

    pub fn values(&self) -> &Column {
        &self.values
    }

    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn get(&self, row: usize) -> Option<Value> {
        self.values.get(row)
    }

    /// Gather rows by position. Row labels travel with the values.
    pub fn take(&self, rows: &[usize]) -> Series {
        Series {
            name: self.name.clone(),
            values: self.values.take(rows),
            index: rows.iter().map(|&r| self.index[r]).collect(),
        }
    }
}
