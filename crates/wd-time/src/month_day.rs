//! `MonthDay` — identifies a holiday that recurs every year.

use chrono::{Datelike, NaiveDate};
use wd_core::errors::{Error, Result};

/// A month (1–12) and day-of-month pair, year ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Create a month/day pair.
    ///
    /// February 29 is accepted; it only matches in leap years.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if the pair names no day in a leap year.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(Error::Date(format!(
                "{month:02}-{day:02} is not a valid month/day"
            )));
        }
        Ok(Self { month, day })
    }

    /// Take the month and day of `date`, dropping the year.
    pub fn of<D: Datelike>(date: D) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Month (1–12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Return `true` if `date` falls on this month and day in any year.
    pub fn matches<D: Datelike>(&self, date: D) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

impl From<NaiveDate> for MonthDay {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}
