//! Earliest-slot search across resources.
//!
//! Scans each resource's calendar day by day from the query instant and
//! carves the free sub-intervals out of each working window by exact
//! subtraction. The per-resource candidates then reduce to the single
//! earliest slot, with a deterministic tie-break on resource id.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::interval::{subtract_all, Interval};
use crate::resource::{Resource, ResourceId};
use crate::validate::validate_appointment;

/// Days the search scans per resource (the query day counts as the first)
/// when the caller does not give a horizon.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 30;

/// Duration callers fall back to when a query does not request one.
pub const DEFAULT_APPOINTMENT_MINUTES: i64 = 30;

/// Longest bookable appointment. Enforcing this bound on incoming requests
/// is the caller's job; the search itself accepts any positive duration.
pub const MAX_APPOINTMENT_MINUTES: i64 = 120;

/// A bookable slot found by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub resource_id: ResourceId,
}

/// Find the earliest bookable slot of `duration` across `resources`, at or
/// after `from`.
///
/// Each resource is scanned independently for at most `horizon_days` days
/// ([`DEFAULT_LOOKAHEAD_DAYS`] when `None`); the query day counts as the
/// first. A slot starts the instant capacity opens up (at `from`, at a
/// window opening, or at the end of an existing booking), never at the next
/// point of some sampling grid. Ties between resources on the start instant
/// go to the smallest [`ResourceId`].
///
/// `duration` must be positive.
///
/// Returns `None` when no resource has a free run of at least `duration`
/// inside its working windows within the horizon.
pub fn find_earliest_slot(
    resources: &[Resource],
    from: NaiveDateTime,
    duration: Duration,
    horizon_days: Option<u32>,
) -> Option<Slot> {
    debug_assert!(duration > Duration::zero(), "duration must be positive");

    let horizon = horizon_days.unwrap_or(DEFAULT_LOOKAHEAD_DAYS);

    // Fan-out: each resource's scan reads only that resource's snapshot.
    // Fan-in: earliest start wins, ties toward the smallest resource id.
    resources
        .iter()
        .filter_map(|resource| earliest_for_resource(resource, from, duration, horizon))
        .min_by_key(|slot| (slot.start, slot.resource_id))
}

/// The earliest candidate one resource can offer, or `None` when its windows
/// are exhausted for the whole horizon (or it has no working days at all).
fn earliest_for_resource(
    resource: &Resource,
    from: NaiveDateTime,
    duration: Duration,
    horizon_days: u32,
) -> Option<Slot> {
    let first_date = from.date();
    let end_date = first_date + Duration::days(i64::from(horizon_days));

    let mut date = first_date;
    while date < end_date {
        let (working_date, window) = resource
            .calendar()
            .next_working_day_on_or_after(date)
            .ok()?;
        if working_date >= end_date {
            return None;
        }

        let day_window = window.instants_on(working_date);

        // On the query day only the part at or after `from` is eligible; a
        // `from` at or past the close exhausts the day.
        let search_window = if working_date == first_date && from > day_window.start() {
            if from >= day_window.end() {
                date = working_date + Duration::days(1);
                continue;
            }
            Interval::new_unchecked(from, day_window.end())
        } else {
            day_window
        };

        let candidate = subtract_all(&search_window, resource.bookings())
            .into_iter()
            .find(|gap| gap.duration() >= duration);

        if let Some(gap) = candidate {
            let slot = Slot {
                start: gap.start(),
                end: gap.start() + duration,
                resource_id: resource.id(),
            };
            debug_assert!(
                validate_appointment(resource, slot.start, slot.end).is_ok(),
                "search produced a slot its own validator rejects"
            );
            return Some(slot);
        }

        date = working_date + Duration::days(1);
    }

    None
}
