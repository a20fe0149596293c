// SPDX-FileCopyrightText: 2026 Marian Vinas <author@example.com>
//
// SPDX-License-Identifier: MIT

// Tabular data model shared by the splitter and the summary report

pub mod column;
pub mod dates;
pub mod frame;
pub mod series;
pub mod value;

pub use column::Column;
pub use dates::date_divider;
pub use frame::{DataFrame, Schema};
pub use series::Series;
pub use value::{ColumnType, Value};
