//! # wd-time
//!
//! Work-day windows, holiday calendars, and the work-day traversal that adds
//! a signed, fractional number of work days to a point in time.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `WorkingDays` trait: weekend and holiday predicates.
pub mod calendar;

/// `DayFrame` — one calendar day with its work window boundaries.
pub mod day_frame;

/// `MonthDay` — a month/day pair identifying a recurring holiday.
pub mod month_day;

/// Second / minute truncation of computed offsets.
pub mod precision;

/// Forward / backward traversal.
pub mod traversal_direction;

/// `WorkCalendar` and its builder.
pub mod work_calendar;

/// `WorkDayWindow` — the daily working period.
pub mod work_day_window;

mod traversal;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::WorkingDays;
pub use day_frame::DayFrame;
pub use month_day::MonthDay;
pub use precision::PrecisionMode;
pub use traversal_direction::TraversalDirection;
pub use work_calendar::{WorkCalendar, WorkCalendarBuilder};
pub use work_day_window::WorkDayWindow;
