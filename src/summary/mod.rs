// SPDX-FileCopyrightText: 2026 Marian Vinas <author@example.com>
//
// SPDX-License-Identifier: MIT

// Descriptive statistics and the split summary report

pub mod describe;
pub mod report;

pub use describe::{ColumnSummary, Description, describe};
pub use report::{print_split_summary, write_split_summary};
