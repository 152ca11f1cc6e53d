//! Bookability checks for one proposed appointment.
//!
//! Checks run in a fixed order and the first failure wins, so a proposal
//! that is both inverted and conflicting reports `InvertedOrder`.

use chrono::{Datelike, NaiveDateTime};

use crate::error::ValidationError;
use crate::interval::Interval;
use crate::resource::Resource;

/// Validate a proposed appointment `[start, end)` against one resource's
/// calendar and booking snapshot.
///
/// The checks, in order:
/// 1. `start < end`, else [`ValidationError::InvertedOrder`];
/// 2. start and end fall on the same calendar day, else
///    [`ValidationError::CrossesDayBoundary`];
/// 3. the resource works that weekday and the proposal lies entirely inside
///    the day's working window, else
///    [`ValidationError::OutsideWorkingHours`];
/// 4. no existing booking overlaps the proposal, else
///    [`ValidationError::Conflict`]. Back-to-back with an existing booking
///    is not a conflict.
///
/// `Ok(())` means the proposal is bookable against the given snapshot.
pub fn validate_appointment(
    resource: &Resource,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<(), ValidationError> {
    let proposed = Interval::new(start, end).map_err(|_| ValidationError::InvertedOrder)?;

    if start.date() != end.date() {
        return Err(ValidationError::CrossesDayBoundary);
    }

    let window = resource
        .calendar()
        .window_for(start.date().weekday())
        .ok_or(ValidationError::OutsideWorkingHours)?;

    if !window.instants_on(start.date()).contains(&proposed) {
        return Err(ValidationError::OutsideWorkingHours);
    }

    if resource.bookings().iter().any(|b| b.overlaps(&proposed)) {
        return Err(ValidationError::Conflict);
    }

    Ok(())
}
