//! # fieldseq-extract
//!
//! Named-sequence extraction for expression engines.
//!
//! This crate normalizes heterogeneous query results — point series and
//! tables — into [`FieldSeq`] values: homogeneous, ordered sequences that
//! answer to multiple lookup keys, so a downstream formula evaluator can
//! reference any of them unambiguously. It provides:
//!
//! - [`FieldSeq`]: the named-sequence entity (name, inferred type, preview,
//!   length, lookup keys, lazy materialization)
//! - [`Derivation`]: which transformation produces a series-backed sequence
//!   (raw values, index, time, frequency axis, power spectrum)
//! - [`frequency_axis`] / [`power_spectrum`] / [`transform`]: the spectral
//!   derivations and the in-place DFT adapter they share
//! - [`FieldRegistry`]: an insertion-ordered key registry with a pluggable
//!   collision policy
//!
//! # Example
//!
//! ```rust
//! use fieldseq_core::{Point, PointSeries};
//! use fieldseq_extract::{Derivation, FieldSeq};
//!
//! let mut cpu = PointSeries::new("A", "cpu");
//! cpu.push(Point::number(10.0, 1_000));
//! cpu.push(Point::number(20.0, 2_000));
//!
//! let index = FieldSeq::from_series(&cpu, Derivation::Index);
//! assert_eq!(index.primary_key(), "cpu@index");
//! assert_eq!(index.all_keys(), ["cpu@index", "A@index", "A/cpu@index", "@index"]);
//!
//! let cells = index.materialize()?;
//! assert_eq!(cells.len(), 2);
//! # Ok::<(), fieldseq_core::ExtractError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod registry;
mod sequence;
mod spectral;

pub mod prelude;

pub use registry::{CollisionPolicy, FieldRegistry};
pub use sequence::{Derivation, FieldSeq, PRIMARY_REF_ID};
pub use spectral::{frequency_axis, power_spectrum, transform};
