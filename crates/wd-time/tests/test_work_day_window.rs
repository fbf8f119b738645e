//! Integration tests for `WorkDayWindow`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use wd_core::Error;
use wd_time::{WorkCalendar, WorkDayWindow};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_short_window_length() {
    let short = WorkDayWindow::from_hm(10, 0, 15, 0).unwrap();
    assert_eq!(short.length(), Duration::hours(5));
    let cal = WorkCalendar::with_window_and_time(short, at(2022, 10, 3, 9, 0));
    assert_eq!(cal.window().length(), Duration::hours(5));
}

#[test]
fn test_end_before_start_fails() {
    let err = WorkDayWindow::from_hm(16, 0, 8, 0).unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "unexpected error {err:?}");
    assert!(err.to_string().contains("precedes start"));
}

#[test]
fn test_equal_boundaries_succeed() {
    let w = WorkDayWindow::new(at(2022, 10, 3, 12, 0), at(2022, 10, 3, 12, 0)).unwrap();
    assert_eq!(w.length(), Duration::zero());
    assert_eq!(w.start_offset(), w.end_offset());
}

#[test]
fn test_default_window() {
    let w = WorkDayWindow::default();
    assert_eq!(w.length(), Duration::hours(8));
    assert_eq!(w.start_offset(), Duration::hours(8));
    assert_eq!(w.end_offset(), Duration::hours(16));
    assert_eq!(w.end() - w.start(), w.length());
}

#[test]
fn test_from_times_matches_from_hm() {
    let a = WorkDayWindow::from_times(
        NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
        NaiveTime::from_hms_opt(15, 45, 0).unwrap(),
    )
    .unwrap();
    let b = WorkDayWindow::from_hm(7, 30, 15, 45).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.length(), Duration::minutes(8 * 60 + 15));
}

#[test]
fn test_offsets_ignore_the_nominal_day() {
    let a = WorkDayWindow::new(at(1999, 1, 1, 9, 0), at(1999, 1, 1, 17, 0)).unwrap();
    let b = WorkDayWindow::new(at(2030, 6, 15, 9, 0), at(2030, 6, 15, 17, 0)).unwrap();
    assert_eq!(a.start_offset(), b.start_offset());
    assert_eq!(a.end_offset(), b.end_offset());
}
