//! Half-open time intervals and exact free-interval subtraction.
//!
//! Every interval in this crate is half-open `[start, end)`: two intervals
//! overlap iff `a.start < b.end && b.start < a.end`, so an interval that ends
//! exactly where another starts does NOT overlap it. Back-to-back bookings
//! are therefore always permitted.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::error::InvalidInterval;

/// A half-open interval `[start, end)` between two civil datetimes.
///
/// The `start < end` invariant is enforced at construction; zero-length and
/// inverted intervals are rejected with [`InvalidInterval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Interval {
    /// Create an interval, rejecting `start >= end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, InvalidInterval> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval { start, end })
        }
    }

    /// Construct without the order check. Callers must guarantee
    /// `start < end`.
    pub(crate) fn new_unchecked(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start < end, "interval start must precede its end");
        Self { start, end }
    }

    /// Inclusive start instant.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Exclusive end instant.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length of the interval. Always positive.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Half-open overlap test.
    ///
    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Touching intervals (one ends exactly where the other starts) do not
    /// overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `inner` lies entirely within `self`. Boundary contact counts
    /// as inside.
    pub fn contains(&self, inner: &Interval) -> bool {
        self.start <= inner.start && inner.end <= self.end
    }
}

/// Merge busy intervals into non-overlapping obstructions, clipped to the
/// window.
///
/// Busy intervals entirely outside the window are discarded; overlapping or
/// touching ones are merged into a single obstruction. Returns a sorted,
/// non-overlapping list of (start, end) pairs.
fn merge_obstructions(
    window: &Interval,
    busy: &[Interval],
) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let mut clipped: Vec<(NaiveDateTime, NaiveDateTime)> = busy
        .iter()
        .filter(|b| b.overlaps(window))
        .map(|b| (b.start.max(window.start), b.end.min(window.end)))
        .collect();

    if clipped.is_empty() {
        return Vec::new();
    }

    // Sort by start (then by end for stability).
    clipped.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(NaiveDateTime, NaiveDateTime)> = Vec::new();
    for (start, end) in clipped {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or touching — extend the current obstruction.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Subtract a set of busy intervals from a single free window.
///
/// Busy intervals are clipped to the window and merged first, so overlapping
/// or touching bookings count as one obstruction. The gaps that remain
/// inside the window are returned in ascending start order, non-overlapping.
///
/// The result is exact: a gap begins the instant the previous obstruction
/// ends, never at the next point of some sampling grid.
pub fn subtract_all(window: &Interval, busy: &[Interval]) -> Vec<Interval> {
    let merged = merge_obstructions(window, busy);

    let mut free = Vec::new();
    let mut cursor = window.start;

    for (busy_start, busy_end) in merged {
        if cursor < busy_start {
            free.push(Interval::new_unchecked(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing gap after the last obstruction.
    if cursor < window.end {
        free.push(Interval::new_unchecked(cursor, window.end));
    }

    free
}
