//! Tabular query results: typed column descriptors over row-major cells.
//!
//! A [`Table`] pairs an ordered list of [`Column`] descriptors with rows of
//! cells aligned positionally to those descriptors. Row shape is validated
//! when rows are appended; the extraction layer assumes well-formed tables.

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};
use crate::value::Cell;

/// Semantic marker for what a table column holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnType {
    /// An ordinary data column.
    #[default]
    Field,
    /// A timestamp column (epoch milliseconds).
    Time,
}

/// A column descriptor: display label plus semantic marker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    /// Display label, used as the name of the extracted column sequence.
    pub label: String,
    /// What the column holds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub column_type: ColumnType,
}

impl Column {
    /// Create an ordinary data column.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            column_type: ColumnType::Field,
        }
    }

    /// Create a timestamp column.
    #[must_use]
    pub fn time(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            column_type: ColumnType::Time,
        }
    }

    /// Returns `true` if this column is marked as a timestamp column.
    #[must_use]
    pub fn is_time(&self) -> bool {
        self.column_type == ColumnType::Time
    }
}

/// A columnar result set produced by one query.
///
/// # Example
///
/// ```rust
/// use fieldseq_core::{Column, Table, Value};
///
/// let mut table = Table::new("B", vec![Column::new("host"), Column::time("ts")]);
/// table.push_row(vec![Some(Value::Text("h1".into())), Some(Value::Number(100.0))])?;
///
/// assert_eq!(table.row_count(), 1);
/// assert!(table.column(1).unwrap().is_time());
/// # Ok::<(), fieldseq_core::ExtractError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// Originating query identifier. An empty id means the origin is
    /// unknown; sequences built from such a table carry no qualified keys.
    pub ref_id: String,
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table with the given column descriptors and no rows.
    #[must_use]
    pub fn new(ref_id: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            ref_id: ref_id.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::RowLengthMismatch`] if the row's cell count
    /// does not equal the column count; the row is not appended.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ExtractError::RowLengthMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Number of column descriptors.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The column descriptors, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The descriptor at a zero-based column index, if in range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// The rows, in original order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}
