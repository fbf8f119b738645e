//! # workday
//!
//! Work-day calendar arithmetic.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `wd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use workday::time::{WorkCalendar, WorkDayWindow};
//!
//! let monday = NaiveDate::from_ymd_opt(2022, 10, 3).unwrap();
//! let mut calendar = WorkCalendar::with_window_and_time(
//!     WorkDayWindow::default(),
//!     monday.and_hms_opt(15, 7, 0).unwrap(),
//! );
//! calendar.add_work_days(0.25, false);
//! assert_eq!(
//!     calendar.current_time(),
//!     NaiveDate::from_ymd_opt(2022, 10, 4).unwrap().and_hms_opt(9, 7, 0).unwrap()
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and global settings.
pub use wd_core as core;

/// Work windows, holiday calendars, and work-day traversal.
pub use wd_time as time;
