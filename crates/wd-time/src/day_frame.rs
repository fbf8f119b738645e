//! `DayFrame` — one calendar day together with its work window.
//!
//! A traversal never mutates boundaries in place: each day step yields a
//! fresh frame computed from the window offsets.  The end of the calendar
//! day itself is never consulted, only the window boundaries.

use crate::traversal_direction::TraversalDirection;
use crate::work_day_window::WorkDayWindow;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Boundaries of a single calendar day and of its work window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayFrame {
    start_of_day: NaiveDateTime,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
}

impl DayFrame {
    /// Frame for `day` under `window`.
    pub fn new(day: NaiveDate, window: &WorkDayWindow) -> Self {
        let start_of_day = day.and_time(NaiveTime::default());
        Self {
            start_of_day,
            window_start: start_of_day + window.start_offset(),
            window_end: start_of_day + window.end_offset(),
        }
    }

    /// The frame one calendar day away in `direction`, or `None` at the
    /// edge of the representable date range.
    pub fn step(&self, direction: TraversalDirection, window: &WorkDayWindow) -> Option<Self> {
        let next = self
            .day()
            .checked_add_signed(Duration::days(direction.day_step()))?;
        Some(Self::new(next, window))
    }

    /// The calendar day this frame describes.
    pub fn day(&self) -> NaiveDate {
        self.start_of_day.date()
    }

    /// Start of the work window on this day.
    pub fn window_start(&self) -> NaiveDateTime {
        self.window_start
    }

    /// End of the work window on this day.
    pub fn window_end(&self) -> NaiveDateTime {
        self.window_end
    }

    /// The boundary a traversal enters the window through: the start when
    /// moving forward, the end when moving backward.
    pub fn entry(&self, direction: TraversalDirection) -> NaiveDateTime {
        match direction {
            TraversalDirection::Forward => self.window_start,
            TraversalDirection::Backward => self.window_end,
        }
    }

    /// The boundary a traversal leaves the window through.
    pub fn exit(&self, direction: TraversalDirection) -> NaiveDateTime {
        match direction {
            TraversalDirection::Forward => self.window_end,
            TraversalDirection::Backward => self.window_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn boundaries_follow_window() {
        let f = DayFrame::new(day(2022, 10, 3), &WorkDayWindow::default());
        assert_eq!(f.window_start(), day(2022, 10, 3).and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(f.window_end(), day(2022, 10, 3).and_hms_opt(16, 0, 0).unwrap());
        assert_eq!(f.day(), day(2022, 10, 3));
    }

    #[test]
    fn step_crosses_month_and_year() {
        let w = WorkDayWindow::default();
        let f = DayFrame::new(day(2022, 12, 31), &w);
        assert_eq!(f.step(TraversalDirection::Forward, &w).unwrap().day(), day(2023, 1, 1));
        let f = DayFrame::new(day(2004, 3, 1), &w);
        assert_eq!(f.step(TraversalDirection::Backward, &w).unwrap().day(), day(2004, 2, 29));
    }

    #[test]
    fn step_past_the_last_day_is_none() {
        let w = WorkDayWindow::default();
        let f = DayFrame::new(NaiveDate::MAX, &w);
        assert_eq!(f.step(TraversalDirection::Forward, &w), None);
        assert!(f.step(TraversalDirection::Backward, &w).is_some());
    }

    #[test]
    fn entry_and_exit_depend_on_direction() {
        let f = DayFrame::new(day(2022, 10, 3), &WorkDayWindow::default());
        assert_eq!(f.entry(TraversalDirection::Forward), f.window_start());
        assert_eq!(f.exit(TraversalDirection::Forward), f.window_end());
        assert_eq!(f.entry(TraversalDirection::Backward), f.window_end());
        assert_eq!(f.exit(TraversalDirection::Backward), f.window_start());
    }
}
