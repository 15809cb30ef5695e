//! Error types for sequence extraction.
//!
//! This module provides structured error types for construction and
//! materialization of extracted sequences, with display formatting via
//! `thiserror`.

#[cfg(feature = "alloc")]
use alloc::string::String;

use thiserror::Error;

/// Result type alias for extraction operations that may fail.
pub type Result<T> = core::result::Result<T, ExtractError>;

/// Errors that can occur while constructing or materializing a sequence.
///
/// Construction and materialization each either fully succeed or fail with
/// one of these; no partially valid sequence or partial result is ever
/// produced.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A table column reference points outside the descriptor list.
    #[error("Unknown column: index {index} out of range for {columns} columns")]
    UnknownColumn {
        /// Requested zero-based column index.
        index: usize,
        /// Number of columns the table actually has.
        columns: usize,
    },

    /// Not enough points to derive sample spacing.
    #[error("Insufficient data: need {required} points, got {actual}")]
    InsufficientPoints {
        /// Required number of points.
        required: usize,
        /// Actual number of points in the series.
        actual: usize,
    },

    /// The first sample interval is zero or negative.
    #[error("Invalid sample spacing: {delta_ms} ms between the first two points")]
    InvalidSpacing {
        /// Observed spacing between the first two timestamps.
        delta_ms: f64,
    },

    /// A row's cell count does not match the table's column count.
    #[error("Row length mismatch: expected {expected} cells, got {actual}")]
    RowLengthMismatch {
        /// Expected cell count (the table's column count).
        expected: usize,
        /// Cell count of the rejected row.
        actual: usize,
    },

    /// A lookup key is already registered.
    ///
    /// Only produced under a rejecting collision policy; the default
    /// policies resolve collisions silently.
    #[error("Duplicate lookup key: '{0}'")]
    DuplicateKey(String),
}
