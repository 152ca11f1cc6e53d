//! Error types for slot-engine operations.

use chrono::{NaiveDateTime, Weekday};
use thiserror::Error;

/// Why a proposed appointment cannot be booked.
///
/// The validator runs its checks in a fixed order and reports the first
/// failure, so a proposal that is both inverted and conflicting reports
/// [`ValidationError::InvertedOrder`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("appointment start must be strictly before its end")]
    InvertedOrder,

    #[error("appointment must start and end on the same calendar day")]
    CrossesDayBoundary,

    #[error("appointment falls outside the resource's working hours")]
    OutsideWorkingHours,

    #[error("appointment overlaps an existing booking")]
    Conflict,
}

/// Rejected interval construction: `start` was not strictly before `end`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid interval: start {start} is not before end {end}")]
pub struct InvalidInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Working-hours calendar configuration errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("working window must open strictly before it closes")]
    InvalidWindow,

    #[error("calendar already has a working window on {0}")]
    DuplicateWindow(Weekday),

    #[error("calendar has no working days configured")]
    NoWorkingDays,
}
