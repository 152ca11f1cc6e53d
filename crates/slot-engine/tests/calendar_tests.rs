//! Tests for weekly working-hours calendars.

use chrono::{NaiveDate, NaiveTime, Weekday};
use slot_engine::calendar::{WeeklyCalendar, WorkingWindow};
use slot_engine::error::CalendarError;

fn t(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Mon-Fri 09:00-17:00.
fn weekday_calendar() -> WeeklyCalendar {
    let mut calendar = WeeklyCalendar::new();
    for weekday in [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ] {
        calendar
            .add_window(WorkingWindow::new(weekday, t(9, 0), t(17, 0)).unwrap())
            .unwrap();
    }
    calendar
}

#[test]
fn window_rejects_inverted_and_zero_length_hours() {
    assert_eq!(
        WorkingWindow::new(Weekday::Mon, t(17, 0), t(9, 0)).unwrap_err(),
        CalendarError::InvalidWindow
    );
    assert_eq!(
        WorkingWindow::new(Weekday::Mon, t(9, 0), t(9, 0)).unwrap_err(),
        CalendarError::InvalidWindow
    );
}

#[test]
fn second_window_on_the_same_weekday_is_rejected() {
    let mut calendar = WeeklyCalendar::new();
    calendar
        .add_window(WorkingWindow::new(Weekday::Tue, t(9, 0), t(12, 0)).unwrap())
        .unwrap();

    let err = calendar
        .add_window(WorkingWindow::new(Weekday::Tue, t(13, 0), t(17, 0)).unwrap())
        .unwrap_err();
    assert_eq!(err, CalendarError::DuplicateWindow(Weekday::Tue));

    // Other weekdays are unaffected.
    calendar
        .add_window(WorkingWindow::new(Weekday::Wed, t(13, 0), t(17, 0)).unwrap())
        .unwrap();
}

#[test]
fn window_lookup_hits_configured_days_only() {
    let calendar = weekday_calendar();
    let monday = calendar.window_for(Weekday::Mon).unwrap();
    assert_eq!(monday.opens(), t(9, 0));
    assert_eq!(monday.closes(), t(17, 0));
    assert!(calendar.window_for(Weekday::Sat).is_none());
    assert!(calendar.window_for(Weekday::Sun).is_none());
}

#[test]
fn empty_calendar_has_no_working_days() {
    assert!(!WeeklyCalendar::new().has_working_days());
    assert!(weekday_calendar().has_working_days());
}

#[test]
fn instants_on_combines_the_date_with_the_window_times() {
    let window = WorkingWindow::new(Weekday::Mon, t(9, 0), t(17, 0)).unwrap();
    let open = window.instants_on(date(2024, 1, 1));
    assert_eq!(open.start(), date(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap());
    assert_eq!(open.end(), date(2024, 1, 1).and_hms_opt(17, 0, 0).unwrap());
}

#[test]
fn next_working_day_can_be_the_same_day() {
    // 2024-01-01 is a Monday.
    let (found, window) = weekday_calendar()
        .next_working_day_on_or_after(date(2024, 1, 1))
        .unwrap();
    assert_eq!(found, date(2024, 1, 1));
    assert_eq!(window.weekday(), Weekday::Mon);
}

#[test]
fn next_working_day_skips_the_weekend() {
    // 2024-01-06 is a Saturday; the next working day is Monday the 8th.
    let (found, window) = weekday_calendar()
        .next_working_day_on_or_after(date(2024, 1, 6))
        .unwrap();
    assert_eq!(found, date(2024, 1, 8));
    assert_eq!(window.weekday(), Weekday::Mon);
}

#[test]
fn single_day_calendar_wraps_a_full_week() {
    let mut calendar = WeeklyCalendar::new();
    calendar
        .add_window(WorkingWindow::new(Weekday::Wed, t(9, 0), t(12, 0)).unwrap())
        .unwrap();

    // From Thursday the 4th, the next Wednesday is the 10th.
    let (found, _) = calendar
        .next_working_day_on_or_after(date(2024, 1, 4))
        .unwrap();
    assert_eq!(found, date(2024, 1, 10));
}

#[test]
fn empty_calendar_reports_no_working_days() {
    assert_eq!(
        WeeklyCalendar::new()
            .next_working_day_on_or_after(date(2024, 1, 1))
            .unwrap_err(),
        CalendarError::NoWorkingDays
    );
}
