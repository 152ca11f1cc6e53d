//! Bookable resources: identity, weekly calendar, and the booking snapshot
//! one query runs against.

use serde::{Deserialize, Serialize};

use crate::calendar::WeeklyCalendar;
use crate::interval::Interval;

/// Identifier for a bookable resource.
///
/// Ordered, so ties in the earliest-slot search resolve deterministically
/// toward the smallest id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub u32);

/// A bookable resource together with everything one query needs: its weekly
/// working hours and a snapshot of its booked intervals.
///
/// The engine never mutates the snapshot. The caller commits a booking after
/// successful validation and keeps the snapshot consistent while a query
/// runs.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    id: ResourceId,
    calendar: WeeklyCalendar,
    bookings: Vec<Interval>,
}

impl Resource {
    pub fn new(id: ResourceId, calendar: WeeklyCalendar, bookings: Vec<Interval>) -> Self {
        Self {
            id,
            calendar,
            bookings,
        }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn calendar(&self) -> &WeeklyCalendar {
        &self.calendar
    }

    pub fn bookings(&self) -> &[Interval] {
        &self.bookings
    }

    /// Booked intervals overlapping `window`, in snapshot order.
    ///
    /// Partial overlap on either edge counts; a booking that merely touches
    /// the window boundary does not (half-open semantics).
    pub fn bookings_overlapping(&self, window: &Interval) -> Vec<&Interval> {
        self.bookings
            .iter()
            .filter(|b| b.overlaps(window))
            .collect()
    }
}
