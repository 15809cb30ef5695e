//! # fieldseq-core
//!
//! Core types for the fieldseq sequence-extraction library.
//!
//! This crate provides the strongly-typed data model that the extraction
//! layer reads from:
//!
//! - [`Value`] and [`Cell`] - heterogeneous cell values from query results
//! - [`FieldType`] - the semantic type vocabulary and its inference rule
//! - [`PointSeries`] and [`Point`] - timestamped sample sequences
//! - [`Table`] and [`Column`] - columnar result sets with typed descriptors
//! - [`ExtractError`] - structured errors for extraction operations
//!
//! Loosely-shaped wire data is converted into these types at the boundary
//! (the `serde` feature handles the common JSON shapes directly); everything
//! downstream assumes well-formed input.
//!
//! ## Feature Flags
//!
//! - `std` (default) - Enable standard library support
//! - `alloc` - Enable heap allocation without full std
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use fieldseq_core::{Point, PointSeries, Value};
//!
//! let mut series = PointSeries::new("A", "cpu");
//! series.push(Point::number(10.0, 1_000));
//! series.push(Point::null(2_000));
//!
//! assert_eq!(series.len(), 2);
//! assert_eq!(series.first().and_then(|p| p.value.clone()), Some(Value::Number(10.0)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod prelude;
pub mod series;
pub mod table;
pub mod value;

// Re-export core types at crate root
pub use error::{ExtractError, Result};
pub use series::{Point, PointSeries};
pub use table::{Column, ColumnType, Table};
pub use value::{Cell, FieldType, Value};
