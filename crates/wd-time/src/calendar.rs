//! `WorkingDays` trait — which calendar days are worked.
//!
//! Saturdays and Sundays are never working days.  Any other day is a working
//! day unless it is an exact-date holiday or a recurring (month/day) holiday.

use chrono::{Datelike, NaiveDate, Weekday};

/// Weekend and holiday predicates over calendar days.
pub trait WorkingDays: std::fmt::Debug {
    /// Return `true` if `day` is registered as an exact-date holiday.
    fn is_holiday(&self, day: NaiveDate) -> bool;

    /// Return `true` if `day` matches a recurring holiday by month and day.
    fn is_recurring_holiday(&self, day: NaiveDate) -> bool;

    /// Return `true` for Saturdays and Sundays.
    fn is_weekend(&self, day: NaiveDate) -> bool {
        matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return `true` if `day` is neither a weekend nor any kind of holiday.
    fn is_working_day(&self, day: NaiveDate) -> bool {
        if self.is_weekend(day) {
            return false;
        }
        !(self.is_holiday(day) || self.is_recurring_holiday(day))
    }
}
