//! # slot-engine
//!
//! Exact earliest-slot search and conflict validation for per-resource
//! working-hour calendars.
//!
//! Each resource (a doctor, an examination room) carries a weekly recurring
//! calendar of working windows and a snapshot of already-booked intervals.
//! The engine answers two questions: may this proposed interval be booked,
//! and when is the earliest bookable interval of a given duration across all
//! resources. All interval arithmetic is half-open `[start, end)`, so
//! back-to-back bookings never conflict, and free capacity is computed by
//! exact interval subtraction rather than fixed-step sampling.
//!
//! The engine is a pure computation over caller-supplied snapshots: it
//! performs no I/O and never mutates its inputs.
//!
//! ## Modules
//!
//! - [`interval`] — half-open intervals, overlap/containment, exact subtraction
//! - [`calendar`] — weekly working-hours windows
//! - [`resource`] — resource identity + calendar + booking snapshot
//! - [`validate`] — bookability checks for one proposed interval
//! - [`scheduler`] — earliest-slot search across resources within a horizon
//! - [`error`] — error types

pub mod calendar;
pub mod error;
pub mod interval;
pub mod resource;
pub mod scheduler;
pub mod validate;

pub use calendar::{WeeklyCalendar, WorkingWindow};
pub use error::{CalendarError, InvalidInterval, ValidationError};
pub use interval::{subtract_all, Interval};
pub use resource::{Resource, ResourceId};
pub use scheduler::{
    find_earliest_slot, Slot, DEFAULT_APPOINTMENT_MINUTES, DEFAULT_LOOKAHEAD_DAYS,
    MAX_APPOINTMENT_MINUTES,
};
pub use validate::validate_appointment;
