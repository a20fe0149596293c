use std::collections::HashMap;
use std::fmt;

use ndarray::Array1;

use crate::data::frame::{format_number, write_table};
use crate::data::{Column, ColumnType, DataFrame};

const CATEGORICAL_STATS: [&str; 3] = ["unique", "top", "freq"];
const NUMERIC_STATS: [&str; 7] = ["mean", "std", "min", "25%", "50%", "75%", "max"];

/// Descriptive statistics of one column.
///
/// Numeric columns fill the moment and quantile fields; categorical columns
/// fill `unique`, `top` and `freq`. Fields that do not apply are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: ColumnType,
    pub count: usize,
    pub unique: Option<usize>,
    pub top: Option<String>,
    pub freq: Option<usize>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnSummary {
    fn empty(name: &str, dtype: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            dtype,
            count: 0,
            unique: None,
            top: None,
            freq: None,
            mean: None,
            std: None,
            min: None,
            q25: None,
            q50: None,
            q75: None,
            max: None,
        }
    }

    fn numeric(name: &str, values: &Array1<f64>) -> Self {
        let mut out = Self::empty(name, ColumnType::Numeric);
        // Missing values (NaN) do not count.
        let present: Array1<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        let n = present.len();
        out.count = n;
        if n == 0 {
            return out;
        }

        let mut sorted = present.to_vec();
        sorted.sort_by(f64::total_cmp);

        out.mean = present.mean();
        out.std = Some(if n > 1 { present.std(1.0) } else { f64::NAN });
        out.min = sorted.first().copied();
        out.q25 = Some(quantile_sorted(&sorted, 0.25));
        out.q50 = Some(quantile_sorted(&sorted, 0.5));
        out.q75 = Some(quantile_sorted(&sorted, 0.75));
        out.max = sorted.last().copied();
        out
    }

    fn categorical(name: &str, values: &[String]) -> Self {
        let mut out = Self::empty(name, ColumnType::Categorical);
        out.count = values.len();
        let counts = count_frequencies(values);
        out.unique = Some(counts.len());
        // Ties go to the value seen first.
        let mut best: Option<(&str, usize)> = None;
        for v in values {
            let c = counts[v.as_str()];
            if best.is_none_or(|(_, bc)| c > bc) {
                best = Some((v.as_str(), c));
            }
        }
        if let Some((top, freq)) = best {
            out.top = Some(top.to_string());
            out.freq = Some(freq);
        }
        out
    }
}

/// Count occurrences of each distinct category.
pub fn count_frequencies(values: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for v in values {
        *counts.entry(v.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Quantile of already sorted data with linear interpolation between the
/// two closest ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Transposed descriptive statistics of a frame: one row per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    rows: Vec<ColumnSummary>,
}

impl Description {
    pub fn rows(&self) -> &[ColumnSummary] {
        &self.rows
    }

    pub fn get(&self, column: &str) -> Option<&ColumnSummary> {
        self.rows.iter().find(|r| r.name == column)
    }

    fn has(&self, dtype: ColumnType) -> bool {
        self.rows.iter().any(|r| r.dtype == dtype)
    }
}

/// Summarise every column of `frame`, numeric and categorical alike.
pub fn describe(frame: &DataFrame) -> Description {
    let rows = frame
        .columns()
        .map(|(name, col)| match col {
            Column::Numeric(values) => ColumnSummary::numeric(name, values),
            Column::Categorical(values) => ColumnSummary::categorical(name, values),
        })
        .collect();
    Description { rows }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show_categorical = self.has(ColumnType::Categorical);
        let show_numeric = self.has(ColumnType::Numeric) || self.rows.is_empty();

        let mut header = vec![String::new(), "count".to_string()];
        if show_categorical {
            header.extend(CATEGORICAL_STATS.map(String::from));
        }
        if show_numeric {
            header.extend(NUMERIC_STATS.map(String::from));
        }

        let opt_count = |v: Option<usize>| v.map_or_else(|| "NaN".to_string(), |c| c.to_string());
        let opt_num = |v: Option<f64>| format_number(v.unwrap_or(f64::NAN));

        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| {
                let mut cells = vec![r.name.clone(), r.count.to_string()];
                if show_categorical {
                    cells.push(opt_count(r.unique));
                    cells.push(r.top.clone().unwrap_or_else(|| "NaN".to_string()));
                    cells.push(opt_count(r.freq));
                }
                if show_numeric {
                    cells.extend(
                        [r.mean, r.std, r.min, r.q25, r.q50, r.q75, r.max].map(opt_num),
                    );
                }
                cells
            })
            .collect();

        write_table(f, &header, &rows)
    }
}
