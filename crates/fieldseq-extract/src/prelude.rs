//! Prelude for fieldseq-extract.
//!
//! This module re-exports the extraction surface together with the core
//! data-model types it operates on.

pub use crate::registry::{CollisionPolicy, FieldRegistry};
pub use crate::sequence::{Derivation, FieldSeq, PRIMARY_REF_ID};
pub use crate::spectral::{frequency_axis, power_spectrum, transform};

// Re-export the core data model
pub use fieldseq_core::prelude::*;
