//! Point series: timestamped sample sequences from a single query.
//!
//! A [`PointSeries`] is the raw time-series input to sequence extraction.
//! The extraction layer borrows it read-only; nothing here is mutated after
//! the boundary finishes building it.

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::{Cell, Value};

/// One timestamped sample.
///
/// The value may be null (a gap in the series); the timestamp is always
/// present. On the wire a point is the pair `[value, timestamp_millis]`,
/// which the `serde` feature accepts directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(Cell, i64)", into = "(Cell, i64)"))]
pub struct Point {
    /// Sample value, `None` for a gap.
    pub value: Cell,
    /// Sample timestamp in milliseconds since the Unix epoch.
    pub time_ms: i64,
}

impl Point {
    /// Create a point from a cell and a timestamp.
    #[must_use]
    pub fn new(value: Cell, time_ms: i64) -> Self {
        Self { value, time_ms }
    }

    /// Create a numeric point.
    #[must_use]
    pub fn number(n: f64, time_ms: i64) -> Self {
        Self::new(Some(Value::Number(n)), time_ms)
    }

    /// Create a null point (a gap in the series).
    #[must_use]
    pub fn null(time_ms: i64) -> Self {
        Self::new(None, time_ms)
    }
}

impl From<(Cell, i64)> for Point {
    fn from((value, time_ms): (Cell, i64)) -> Self {
        Self { value, time_ms }
    }
}

impl From<Point> for (Cell, i64) {
    fn from(point: Point) -> Self {
        (point.value, point.time_ms)
    }
}

/// An ordered series of timestamped points produced by one query.
///
/// # Example
///
/// ```rust
/// use fieldseq_core::{Point, PointSeries};
///
/// let mut series = PointSeries::new("A", "cpu");
/// series.push(Point::number(10.0, 1_000));
/// series.push(Point::number(20.0, 2_000));
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.points()[1].time_ms, 2_000);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointSeries {
    /// Originating query identifier. An empty id means the origin is
    /// unknown; sequences built from such a series carry no qualified keys.
    pub ref_id: String,
    /// Display label, used as the base name of extracted sequences.
    pub label: String,
    points: Vec<Point>,
}

impl PointSeries {
    /// Create an empty series.
    #[must_use]
    pub fn new(ref_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            label: label.into(),
            points: Vec::new(),
        }
    }

    /// Create a series from existing points.
    #[must_use]
    pub fn from_points(
        ref_id: impl Into<String>,
        label: impl Into<String>,
        points: Vec<Point>,
    ) -> Self {
        Self {
            ref_id: ref_id.into(),
            label: label.into(),
            points,
        }
    }

    /// Returns the number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point to the end of the series.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The points as a slice, in original order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }
}
