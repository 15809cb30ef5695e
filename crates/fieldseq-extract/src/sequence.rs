//! Named sequences: one addressable entity over three source shapes.
//!
//! A [`FieldSeq`] normalizes a point series (with a derivation), a table
//! column, or a table row-index into a single concept with a primary name,
//! a semantic type, a first-sample preview and an ordered set of lookup
//! keys. Construction inspects the source eagerly to fill those descriptive
//! attributes; the full sequence is only produced on demand by
//! [`FieldSeq::materialize`].

use fieldseq_core::{Cell, ExtractError, FieldType, PointSeries, Result, Table, Value};

use crate::spectral;

/// Reference id of the primary query result.
///
/// Series-backed sequences originating from this result additionally answer
/// to the shorthand key `@<kind>`.
pub const PRIMARY_REF_ID: &str = "A";

/// Which transformation produces a series-backed sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Derivation {
    /// The raw sample values, nulls passing through.
    Value,
    /// The positional index `0..count`.
    Index,
    /// The sample timestamps, in original order.
    Time,
    /// A centered frequency axis computed from sample spacing.
    Frequency,
    /// The power spectrum of the sample values.
    Spectrum,
}

impl Derivation {
    /// Every derivation, in the order callers usually register them.
    pub const ALL: [Derivation; 5] = [
        Derivation::Value,
        Derivation::Index,
        Derivation::Time,
        Derivation::Frequency,
        Derivation::Spectrum,
    ];

    /// Kind token used in qualified lookup keys (`<ref>@<token>`).
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Derivation::Value => "value",
            Derivation::Index => "index",
            Derivation::Time => "time",
            Derivation::Frequency => "freq",
            Derivation::Spectrum => "fft",
        }
    }

    /// Suffix appended to the series label; empty for the raw values.
    fn suffix(self) -> &'static str {
        match self {
            Derivation::Value => "",
            Derivation::Index => "@index",
            Derivation::Time => "@time",
            Derivation::Frequency => "@freq",
            Derivation::Spectrum => "@fft",
        }
    }
}

/// Kind-specific payload: what a sequence reads at materialization time.
#[derive(Clone, Copy, Debug)]
enum Source<'a> {
    /// A point series and the derivation applied to it.
    Series {
        series: &'a PointSeries,
        derivation: Derivation,
    },
    /// One column of a table.
    Column { table: &'a Table, index: usize },
    /// The synthetic row-index sequence of a table.
    RowIndex { table: &'a Table },
}

/// A named, materializable, multi-key-addressable ordered sequence.
///
/// The source is borrowed, never copied: the length recorded at
/// construction stays valid for the sequence's lifetime because the borrow
/// keeps the source immutable. Repeated [`materialize`](Self::materialize)
/// calls therefore return equal sequences.
///
/// The semantic type is assigned at most once, during construction — either
/// pre-assigned by the source shape (timestamp columns, derived axes) or
/// inferred from the first non-null sample. A source with no non-null
/// sample yields a sequence with no type and no preview, which is valid and
/// materializes to all-null cells of the correct length.
#[derive(Clone, Debug)]
pub struct FieldSeq<'a> {
    ref_id: Option<String>,
    name: String,
    field_type: Option<FieldType>,
    first: Cell,
    len: usize,
    source: Source<'a>,
}

impl<'a> FieldSeq<'a> {
    /// Derive a sequence from a point series.
    ///
    /// Never fails: derivations whose materialization has preconditions
    /// (frequency spacing) report them from [`materialize`](Self::materialize)
    /// instead.
    #[must_use]
    pub fn from_series(series: &'a PointSeries, derivation: Derivation) -> Self {
        let mut name = series.label.clone();
        name.push_str(derivation.suffix());

        let (field_type, first) = match derivation {
            Derivation::Value => {
                let sample = series.points().iter().find_map(|p| p.value.as_ref());
                (sample.map(FieldType::of), sample.cloned())
            }
            Derivation::Time => (
                Some(FieldType::Epoch),
                series.first().map(|p| Value::Number(p.time_ms as f64)),
            ),
            Derivation::Index | Derivation::Frequency | Derivation::Spectrum => {
                (Some(FieldType::Number), Some(Value::Number(0.0)))
            }
        };

        Self {
            ref_id: non_empty(&series.ref_id),
            name,
            field_type,
            first,
            len: series.len(),
            source: Source::Series { series, derivation },
        }
    }

    /// Extract one table column as a sequence.
    ///
    /// A column marked as a timestamp column gets the epoch type up front
    /// and its preview from the first row verbatim, null or not. Any other
    /// column is forward-scanned for its first non-null cell, which sets
    /// both the inferred type and the preview.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::UnknownColumn`] if `index` is out of range
    /// for the table's column descriptors.
    pub fn from_table_column(table: &'a Table, index: usize) -> Result<Self> {
        let column = table.column(index).ok_or(ExtractError::UnknownColumn {
            index,
            columns: table.column_count(),
        })?;

        let (field_type, first) = if column.is_time() {
            (
                Some(FieldType::Epoch),
                table.rows().first().and_then(|row| row[index].clone()),
            )
        } else {
            let sample = table.rows().iter().find_map(|row| row[index].as_ref());
            (sample.map(FieldType::of), sample.cloned())
        };

        Ok(Self {
            ref_id: non_empty(&table.ref_id),
            name: column.label.clone(),
            field_type,
            first,
            len: table.row_count(),
            source: Source::Column { table, index },
        })
    }

    /// The synthetic row-index sequence of a table.
    ///
    /// Purely positional: no type, no preview.
    #[must_use]
    pub fn from_table_rows(table: &'a Table) -> Self {
        Self {
            ref_id: non_empty(&table.ref_id),
            name: format!("{}@row", table.ref_id),
            field_type: None,
            first: None,
            len: table.row_count(),
            source: Source::RowIndex { table },
        }
    }

    /// The originating query identifier, if the source carried one.
    #[must_use]
    pub fn ref_id(&self) -> Option<&str> {
        self.ref_id.as_deref()
    }

    /// The primary display name, including any derivation suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The semantic type, if one was pre-assigned or inferred.
    #[must_use]
    pub fn field_type(&self) -> Option<FieldType> {
        self.field_type
    }

    /// The preview sample: the first non-null value seen at construction,
    /// or a synthetic zero for computable derivations.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.first.as_ref()
    }

    /// Number of elements the materialized sequence will contain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the materialized sequence will be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The best single key for this sequence.
    #[must_use]
    pub fn primary_key(&self) -> &str {
        &self.name
    }

    /// Every key this sequence answers to, primary key first.
    ///
    /// The list is ordered and not deduplicated; collision policy is the
    /// consuming registry's concern. Without a reference id only the
    /// primary key is produced.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let Some(ref_id) = self.ref_id.as_deref() else {
            return vec![self.name.clone()];
        };

        match self.source {
            Source::Series { derivation, .. } => {
                let mut keys = vec![
                    self.name.clone(),
                    format!("{ref_id}@{}", derivation.token()),
                    format!("{ref_id}/{}", self.name),
                ];
                if ref_id == PRIMARY_REF_ID {
                    keys.push(format!("@{}", derivation.token()));
                }
                keys
            }
            Source::Column { index, .. } => vec![
                self.name.clone(),
                format!("{ref_id}/{}", self.name),
                format!("{ref_id}[{index}]"),
            ],
            Source::RowIndex { .. } => vec![self.name.clone()],
        }
    }

    /// Compute the full ordered sequence.
    ///
    /// Deterministic and side-effect-free: repeated calls over an unchanged
    /// source return equal sequences.
    ///
    /// # Errors
    ///
    /// The frequency derivation reports
    /// [`ExtractError::InsufficientPoints`] for series with fewer than 2
    /// points and [`ExtractError::InvalidSpacing`] for non-positive
    /// spacing. Every other variant cannot fail.
    pub fn materialize(&self) -> Result<Vec<Cell>> {
        match self.source {
            Source::Series { series, derivation } => match derivation {
                Derivation::Value => {
                    Ok(series.points().iter().map(|p| p.value.clone()).collect())
                }
                Derivation::Index => Ok(index_cells(self.len)),
                Derivation::Time => Ok(series
                    .points()
                    .iter()
                    .map(|p| Some(Value::Number(p.time_ms as f64)))
                    .collect()),
                Derivation::Frequency => Ok(number_cells(spectral::frequency_axis(series)?)),
                Derivation::Spectrum => Ok(number_cells(spectral::power_spectrum(series))),
            },
            Source::Column { table, index } => Ok(table
                .rows()
                .iter()
                .map(|row| row[index].clone())
                .collect()),
            Source::RowIndex { table } => Ok(index_cells(table.row_count())),
        }
    }
}

fn index_cells(len: usize) -> Vec<Cell> {
    (0..len).map(|i| Some(Value::Number(i as f64))).collect()
}

fn number_cells(values: Vec<f64>) -> Vec<Cell> {
    values.into_iter().map(|v| Some(Value::Number(v))).collect()
}

fn non_empty(ref_id: &str) -> Option<String> {
    if ref_id.is_empty() {
        None
    } else {
        Some(ref_id.to_string())
    }
}
