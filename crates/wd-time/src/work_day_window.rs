//! `WorkDayWindow` — the daily working period.
//!
//! A window is an ordered pair of date-times of which only the time-of-day is
//! meaningful.  Both boundary offsets are measured from midnight of the
//! *start* value's day, so an `end` that nominally falls on a later day
//! yields an end offset beyond 24 hours.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use wd_core::ensure;
use wd_core::errors::{Error, Result};

/// The daily work period, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkDayWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl WorkDayWindow {
    /// Create a window from two date-times.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if `end` precedes `start`.  Equal
    /// boundaries are accepted and give a zero-length window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        ensure!(
            start <= end,
            "work window end {end} precedes start {start}"
        );
        Ok(Self { start, end })
    }

    /// Create a window from two times of day, anchored on a reference day.
    pub fn from_times(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        let day = reference_midnight().date();
        Self::new(day.and_time(start), day.and_time(end))
    }

    /// Create a window from hour/minute pairs, e.g. `from_hm(10, 0, 15, 0)`.
    ///
    /// # Errors
    /// Returns [`Error::Date`] for an invalid time of day, otherwise as
    /// [`WorkDayWindow::new`].
    pub fn from_hm(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Result<Self> {
        Self::from_times(time_of_day(start_hour, start_min)?, time_of_day(end_hour, end_min)?)
    }

    /// The start boundary as given.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The end boundary as given.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// `end - start`.
    pub fn length(&self) -> Duration {
        self.end - self.start
    }

    /// Start of the window as a duration since midnight.
    pub fn start_offset(&self) -> Duration {
        self.start - self.anchor()
    }

    /// End of the window as a duration since midnight of the start's day.
    pub fn end_offset(&self) -> Duration {
        self.end - self.anchor()
    }

    /// Return `true` if the window has no length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn anchor(&self) -> NaiveDateTime {
        self.start.date().and_time(NaiveTime::default())
    }
}

impl Default for WorkDayWindow {
    /// 08:00–16:00.
    fn default() -> Self {
        let midnight = reference_midnight();
        Self {
            start: midnight + Duration::hours(8),
            end: midnight + Duration::hours(16),
        }
    }
}

impl std::fmt::Display for WorkDayWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}–{}",
            self.start.time().format("%H:%M:%S"),
            self.end.time().format("%H:%M:%S")
        )
    }
}

fn reference_midnight() -> NaiveDateTime {
    NaiveDateTime::default()
}

fn time_of_day(hour: u32, min: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, min, 0)
        .ok_or_else(|| Error::Date(format!("{hour:02}:{min:02} is not a valid time of day")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn default_is_eight_to_four() {
        let w = WorkDayWindow::default();
        assert_eq!(w.length(), Duration::hours(8));
        assert_eq!(w.start_offset(), Duration::hours(8));
        assert_eq!(w.end_offset(), Duration::hours(16));
        assert_eq!(w.to_string(), "08:00:00–16:00:00");
    }

    #[test]
    fn end_offset_anchors_to_start_day() {
        // 22:00 until 06:00 the following morning
        let w = WorkDayWindow::new(at(2022, 1, 1, 22, 0), at(2022, 1, 2, 6, 0)).unwrap();
        assert_eq!(w.length(), Duration::hours(8));
        assert_eq!(w.start_offset(), Duration::hours(22));
        assert_eq!(w.end_offset(), Duration::hours(30));
    }

    #[test]
    fn invalid_time_of_day() {
        assert!(matches!(WorkDayWindow::from_hm(25, 0, 16, 0), Err(Error::Date(_))));
    }

    #[test]
    fn zero_length_is_accepted() {
        let w = WorkDayWindow::from_hm(9, 0, 9, 0).unwrap();
        assert!(w.is_empty());
        assert_eq!(w.length(), Duration::zero());
    }
}
