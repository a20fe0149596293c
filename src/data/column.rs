use ndarray::{Array1, Axis};

use super::value::{ColumnType, Value};

/// Column storage. Numeric values live in an ndarray so the summary can use
/// its reductions directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Array1<f64>),
    Categorical(Vec<String>),
}

impl Column {
    pub fn numeric(values: impl Into<Vec<f64>>) -> Self {
        Column::Numeric(Array1::from(values.into()))
    }

    pub fn categorical<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Column::Categorical(values.into_iter().map(Into::into).collect())
    }

    /// Number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Numeric(_) => ColumnType::Numeric,
            Column::Categorical(_) => ColumnType::Categorical,
        }
    }

    /// Cell at `row`, or `None` when out of bounds.
    pub fn get(&self, row: usize) -> Option<Value> {
        match self {
            Column::Numeric(values) => values.get(row).map(|v| Value::Numeric(*v)),
            Column::Categorical(values) => values.get(row).map(|s| Value::Categorical(s.clone())),
        }
    }

    /// Gather rows by position, in the order given.
    ///
    /// Panics if any position is out of bounds; callers pass indices
    /// produced from this column's own length.
    pub fn take(&self, rows: &[usize]) -> Column {
        match self {
            Column::Numeric(values) => Column::Numeric(values.select(Axis(0), rows)),
            Column::Categorical(values) => {
                Column::Categorical(rows.iter().map(|&r| values[r].clone()).collect())
            }
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::numeric(values)
    }
}

impl From<Array1<f64>> for Column {
    fn from(values: Array1<f64>) -> Self {
        Column::Numeric(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Categorical(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::categorical(values)
    }
}
