//! Weekly working-hours calendars.
//!
//! A resource accepts bookings only inside its working windows: at most one
//! open interval per weekday, repeating every week. Windows never cross
//! midnight, so every window's concrete form on a date is a same-day
//! interval.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

use crate::error::CalendarError;
use crate::interval::Interval;

/// The single open interval during which a resource accepts bookings on one
/// weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkingWindow {
    weekday: Weekday,
    opens: NaiveTime,
    closes: NaiveTime,
}

impl WorkingWindow {
    /// Create a window, rejecting `opens >= closes`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWindow` if the window would be empty or
    /// inverted. A window that would cross midnight cannot be expressed.
    pub fn new(
        weekday: Weekday,
        opens: NaiveTime,
        closes: NaiveTime,
    ) -> Result<Self, CalendarError> {
        if opens < closes {
            Ok(Self {
                weekday,
                opens,
                closes,
            })
        } else {
            Err(CalendarError::InvalidWindow)
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn opens(&self) -> NaiveTime {
        self.opens
    }

    pub fn closes(&self) -> NaiveTime {
        self.closes
    }

    /// The concrete open interval of this window on a given date.
    ///
    /// The date's weekday is not re-checked here; callers look windows up by
    /// weekday before asking for the concrete interval.
    pub fn instants_on(&self, date: NaiveDate) -> Interval {
        Interval::new_unchecked(date.and_time(self.opens), date.and_time(self.closes))
    }
}

/// A resource's weekly recurring working hours: at most one window per
/// weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeeklyCalendar {
    /// Indexed by `Weekday::num_days_from_monday()`.
    windows: [Option<WorkingWindow>; 7],
}

impl WeeklyCalendar {
    /// An empty calendar with no working days.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a working window.
    ///
    /// # Errors
    /// Returns `CalendarError::DuplicateWindow` if the weekday already has
    /// one; a calendar holds at most one window per weekday.
    pub fn add_window(&mut self, window: WorkingWindow) -> Result<(), CalendarError> {
        let slot = &mut self.windows[window.weekday().num_days_from_monday() as usize];
        if slot.is_some() {
            return Err(CalendarError::DuplicateWindow(window.weekday()));
        }
        *slot = Some(window);
        Ok(())
    }

    /// The window for a weekday, if the resource works that day.
    pub fn window_for(&self, weekday: Weekday) -> Option<&WorkingWindow> {
        self.windows[weekday.num_days_from_monday() as usize].as_ref()
    }

    /// Whether any weekday has a window configured.
    pub fn has_working_days(&self) -> bool {
        self.windows.iter().any(Option::is_some)
    }

    /// The next date on or after `date` that has a working window, together
    /// with that window.
    ///
    /// Scans at most seven days; a calendar with at least one window always
    /// answers within one weekly cycle.
    ///
    /// # Errors
    /// Returns `CalendarError::NoWorkingDays` if no weekday has a window.
    pub fn next_working_day_on_or_after(
        &self,
        date: NaiveDate,
    ) -> Result<(NaiveDate, WorkingWindow), CalendarError> {
        for offset in 0..7 {
            let candidate = date + Duration::days(offset);
            if let Some(window) = self.window_for(candidate.weekday()) {
                return Ok((candidate, *window));
            }
        }
        Err(CalendarError::NoWorkingDays)
    }
}
