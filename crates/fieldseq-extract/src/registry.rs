//! Insertion-ordered lookup-key registry.
//!
//! An expression engine resolves references against lookup keys; this
//! registry indexes every sequence under all of its keys and settles
//! collisions by policy. Key order is deterministic (insertion order), so
//! identical inputs always resolve identically.

use fieldseq_core::{ExtractError, PointSeries, Result, Table};
use indexmap::IndexMap;

use crate::sequence::{Derivation, FieldSeq};

/// What to do when an inserted sequence's key is already registered.
///
/// Key uniqueness is not guaranteed across sequences — two queries can
/// legitimately produce a column and a series with the same short name —
/// so the registry, not the sequences, owns the tie-breaking rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Keep the earliest registration; insertion order wins.
    #[default]
    FirstWins,
    /// Replace with the latest registration.
    LastWins,
    /// Fail the insert with [`ExtractError::DuplicateKey`].
    Reject,
}

/// Key-addressable store of extracted sequences.
///
/// # Example
///
/// ```rust
/// use fieldseq_core::{Point, PointSeries};
/// use fieldseq_extract::{Derivation, FieldRegistry};
///
/// let mut cpu = PointSeries::new("A", "cpu");
/// cpu.push(Point::number(10.0, 1_000));
///
/// let mut registry = FieldRegistry::new();
/// registry.insert_series(&cpu, &[Derivation::Value, Derivation::Index])?;
///
/// assert_eq!(registry.lookup("@index").unwrap().name(), "cpu@index");
/// assert_eq!(registry.lookup("A/cpu").unwrap().name(), "cpu");
/// # Ok::<(), fieldseq_core::ExtractError>(())
/// ```
#[derive(Debug)]
pub struct FieldRegistry<'a> {
    policy: CollisionPolicy,
    sequences: Vec<FieldSeq<'a>>,
    keys: IndexMap<String, usize>,
}

impl<'a> FieldRegistry<'a> {
    /// Create a registry with the default first-wins policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(CollisionPolicy::FirstWins)
    }

    /// Create a registry with an explicit collision policy.
    #[must_use]
    pub fn with_policy(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            sequences: Vec::new(),
            keys: IndexMap::new(),
        }
    }

    /// Register a sequence under all of its lookup keys.
    ///
    /// # Errors
    ///
    /// Under [`CollisionPolicy::Reject`], returns
    /// [`ExtractError::DuplicateKey`] naming the first key that is already
    /// taken; the sequence is then not registered under any key.
    pub fn insert(&mut self, sequence: FieldSeq<'a>) -> Result<()> {
        let keys = sequence.all_keys();
        if self.policy == CollisionPolicy::Reject {
            if let Some(key) = keys.iter().find(|k| self.keys.contains_key(k.as_str())) {
                return Err(ExtractError::DuplicateKey(key.clone()));
            }
        }

        let slot = self.sequences.len();
        self.sequences.push(sequence);
        for key in keys {
            match self.policy {
                CollisionPolicy::FirstWins => {
                    self.keys.entry(key).or_insert(slot);
                }
                CollisionPolicy::LastWins | CollisionPolicy::Reject => {
                    self.keys.insert(key, slot);
                }
            }
        }
        Ok(())
    }

    /// Register the chosen derivations of a series.
    ///
    /// # Errors
    ///
    /// Propagates [`ExtractError::DuplicateKey`] under the rejecting
    /// policy; earlier derivations in the slice stay registered.
    pub fn insert_series(
        &mut self,
        series: &'a PointSeries,
        derivations: &[Derivation],
    ) -> Result<()> {
        for &derivation in derivations {
            self.insert(FieldSeq::from_series(series, derivation))?;
        }
        Ok(())
    }

    /// Register every column of a table plus its row-index sequence.
    ///
    /// # Errors
    ///
    /// Propagates [`ExtractError::DuplicateKey`] under the rejecting
    /// policy. Column indices come from the table itself, so
    /// [`ExtractError::UnknownColumn`] cannot occur here.
    pub fn insert_table(&mut self, table: &'a Table) -> Result<()> {
        for index in 0..table.column_count() {
            self.insert(FieldSeq::from_table_column(table, index)?)?;
        }
        self.insert(FieldSeq::from_table_rows(table))
    }

    /// Resolve a key to its sequence.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&FieldSeq<'a>> {
        self.keys.get(key).map(|&slot| &self.sequences[slot])
    }

    /// Number of registered sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Registered sequences, in insertion order.
    #[must_use]
    pub fn sequences(&self) -> &[FieldSeq<'a>] {
        &self.sequences
    }

    /// Registered keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }
}

impl Default for FieldRegistry<'_> {
    fn default() -> Self {
        Self::new()
    }
}
