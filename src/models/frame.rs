//! Ordered-column tabular container for observation samples.
//!
//! A [`Frame`] is the unit of data exchanged between the sampling pipeline,
//! the dataset repository and the forecast services: a fixed column order and
//! a list of numeric rows. Column order is significant end to end, because
//! the prediction models consume features positionally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column holding the calendar month (1-12) of a row.
pub const MONTH_COLUMN: &str = "Month";

/// Column holding the calendar year of a row.
pub const YEAR_COLUMN: &str = "Year";

/// Errors for frame shape and column operations.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("row has {got} values, frame has {expected} columns")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("cannot concatenate frames with different columns: {0:?} vs {1:?}")]
    ColumnMismatch(Vec<String>, Vec<String>),
}

/// An ordered-column table of f64 values.
///
/// Month and Year are ordinary f64 columns; consumers that need integral
/// months re-round on read (upstream sources may deliver float months).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl Frame {
    /// Create an empty frame with the given column order.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the frame holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Borrow a single row.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    /// Append a row; its length must match the column count.
    pub fn push_row(&mut self, row: Vec<f64>) -> Result<(), FrameError> {
        if row.len() != self.columns.len() {
            return Err(FrameError::ShapeMismatch {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Index of a named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// True when the frame has the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All values of a named column, in row order.
    pub fn column_values(&self, name: &str) -> Result<Vec<f64>, FrameError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))?;
        Ok(self.rows.iter().map(|r| r[idx]).collect())
    }

    /// Add a constant-valued column, or overwrite it if already present.
    pub fn stamp_column(&mut self, name: &str, value: f64) {
        match self.column_index(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(value);
                }
            }
        }
    }

    /// Project onto a subset of columns, in the order given.
    pub fn select(&self, names: &[String]) -> Result<Frame, FrameError> {
        let indices: Vec<usize> = names
            .iter()
            .map(|n| {
                self.column_index(n)
                    .ok_or_else(|| FrameError::ColumnNotFound(n.clone()))
            })
            .collect::<Result<_, _>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i]).collect())
            .collect();

        Ok(Frame {
            columns: names.to_vec(),
            rows,
        })
    }

    /// Column order with the named columns removed.
    pub fn columns_without(&self, excluded: &[&str]) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| !excluded.contains(&c.as_str()))
            .cloned()
            .collect()
    }

    /// Append all rows of `other`; column orders must match exactly.
    pub fn append(&mut self, other: Frame) -> Result<(), FrameError> {
        if self.columns != other.columns {
            return Err(FrameError::ColumnMismatch(
                self.columns.clone(),
                other.columns,
            ));
        }
        self.rows.extend(other.rows);
        Ok(())
    }

    /// Build a frame from pre-validated parts. Used by the resampler, which
    /// reshuffles rows of an existing frame.
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self { columns, rows }
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod frame_tests;
