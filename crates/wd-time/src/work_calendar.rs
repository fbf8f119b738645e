//! `WorkCalendar` — a cursor in time that moves by work days.
//!
//! The calendar owns a [`WorkDayWindow`], two holiday collections and a
//! [`PrecisionMode`].  [`WorkCalendar::add_work_days`] converts a signed,
//! fractional number of work days into an interval of working time and
//! walks the cursor across windows, weekends and holidays.
//!
//! A calendar is not synchronised: share one between threads only behind an
//! external lock.

use crate::calendar::WorkingDays;
use crate::month_day::MonthDay;
use crate::precision::PrecisionMode;
use crate::traversal::traverse;
use crate::work_day_window::WorkDayWindow;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use std::collections::HashSet;
use tracing::{debug, info};
use wd_core::errors::{Error, Result};
use wd_core::settings::Settings;
use wd_core::Real;

/// A work-day calendar positioned at a current time.
#[derive(Debug, Clone)]
pub struct WorkCalendar {
    current_time: NaiveDateTime,
    window: WorkDayWindow,
    holidays: HashSet<NaiveDate>,
    recurring_holidays: HashSet<MonthDay>,
    precision: PrecisionMode,
    iteration_limit: Option<usize>,
}

impl WorkCalendar {
    /// 08:00–16:00 window, minute precision, positioned at
    /// [`Settings::now`].
    pub fn new() -> Self {
        Self::with_window(WorkDayWindow::default())
    }

    /// Calendar with a custom window, positioned at [`Settings::now`].
    pub fn with_window(window: WorkDayWindow) -> Self {
        Self::with_window_and_time(window, Settings::instance().now())
    }

    /// Calendar with a custom window and start time.
    pub fn with_window_and_time(window: WorkDayWindow, current_time: NaiveDateTime) -> Self {
        Self {
            current_time,
            window,
            holidays: HashSet::new(),
            recurring_holidays: HashSet::new(),
            precision: PrecisionMode::Minute,
            iteration_limit: None,
        }
    }

    /// Begin building a calendar.
    pub fn builder() -> WorkCalendarBuilder {
        WorkCalendarBuilder::new()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The cursor.
    pub fn current_time(&self) -> NaiveDateTime {
        self.current_time
    }

    /// Move the cursor.
    pub fn set_current_time(&mut self, time: NaiveDateTime) {
        self.current_time = time;
    }

    /// The cursor with seconds (and any fraction) dropped.
    pub fn truncated_time(&self) -> NaiveDateTime {
        let t = self.current_time;
        t - Duration::seconds(i64::from(t.second()))
            - Duration::nanoseconds(i64::from(t.nanosecond()))
    }

    /// The work window.
    pub fn window(&self) -> &WorkDayWindow {
        &self.window
    }

    /// The precision mode, fixed at construction.
    pub fn precision(&self) -> PrecisionMode {
        self.precision
    }

    /// Maximum number of calendar day steps one checked traversal may take.
    pub fn iteration_limit(&self) -> Option<usize> {
        self.iteration_limit
    }

    // ── Holidays ──────────────────────────────────────────────────────────────

    /// Register an exact-date holiday.  Registering a date twice is harmless.
    pub fn add_holiday(&mut self, day: NaiveDate) {
        self.holidays.insert(day);
    }

    /// Remove an exact-date holiday.  Returns `true` if it was registered.
    pub fn remove_holiday(&mut self, day: NaiveDate) -> bool {
        self.holidays.remove(&day)
    }

    /// Registered exact-date holidays, in no particular order.
    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    /// Register a holiday recurring every year on the same month and day.
    ///
    /// Accepts a [`MonthDay`] or any [`NaiveDate`], whose year is ignored.
    pub fn add_recurring_holiday(&mut self, day: impl Into<MonthDay>) {
        self.recurring_holidays.insert(day.into());
    }

    /// Remove a recurring holiday.  Returns `true` if it was registered.
    pub fn remove_recurring_holiday(&mut self, day: impl Into<MonthDay>) -> bool {
        self.recurring_holidays.remove(&day.into())
    }

    /// Registered recurring holidays, in no particular order.
    pub fn recurring_holidays(&self) -> impl Iterator<Item = MonthDay> + '_ {
        self.recurring_holidays.iter().copied()
    }

    // ── Predicates on the cursor ──────────────────────────────────────────────

    /// [`WorkingDays::is_working_day`] for the cursor's day.
    pub fn is_working_day_now(&self) -> bool {
        self.is_working_day(self.current_time.date())
    }

    /// [`WorkingDays::is_holiday`] for the cursor's day.
    pub fn is_holiday_now(&self) -> bool {
        self.is_holiday(self.current_time.date())
    }

    /// [`WorkingDays::is_recurring_holiday`] for the cursor's day.
    pub fn is_recurring_holiday_now(&self) -> bool {
        self.is_recurring_holiday(self.current_time.date())
    }

    // ── Work-day arithmetic ───────────────────────────────────────────────────

    /// Working time corresponding to `offset` work days, truncated toward
    /// zero at the calendar's precision.
    ///
    /// # Panics
    /// Panics if the interval does not fit a [`Duration`].
    pub fn interval_for(&self, offset: Real) -> Duration {
        self.try_interval_for(offset)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Checked form of [`WorkCalendar::interval_for`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the interval does not fit a
    /// [`Duration`].
    pub fn try_interval_for(&self, offset: Real) -> Result<Duration> {
        let seconds = self.window.length().num_seconds() as f64 * offset;
        Duration::try_seconds(self.precision.truncate(seconds)).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "{offset} work days exceed the representable interval"
            ))
        })
    }

    /// The point reached from `from` after `offset` work days.
    ///
    /// Does not move the cursor.  See [`WorkCalendar::add_work_days`] for
    /// the rules, for when this does not return, and for when it panics.
    pub fn work_days_after(&self, from: NaiveDateTime, offset: Real) -> NaiveDateTime {
        traverse(self, &self.window, from, self.interval_for(offset), None)
            .unwrap_or_else(|e| panic!("adding {offset} workdays to {from} failed: {e}"))
    }

    /// Move the cursor by `offset` work days (negative moves backward).
    ///
    /// An offset whose interval truncates to zero leaves the cursor where
    /// it is, even outside working hours.  Otherwise the cursor is first
    /// snapped into the window in the direction of travel, moved past
    /// non-working days, and then carried across whole windows until the
    /// rest of the interval fits into the current one.
    ///
    /// With `verbose` the before/after times are logged at `info` level.
    ///
    /// A zero-length window turns every offset into a no-op.  If no day is
    /// ever a working day this never returns; use
    /// [`WorkCalendar::try_add_work_days`] with an iteration limit to guard
    /// against such configurations.
    ///
    /// # Panics
    /// Panics if `offset` is infinite or the cursor would leave the range
    /// `chrono` can represent.
    pub fn add_work_days(&mut self, offset: Real, verbose: bool) {
        let before = self.current_time;
        self.current_time = self.work_days_after(before, offset);
        self.trace_result(offset, before, verbose);
    }

    /// Checked form of [`WorkCalendar::add_work_days`].
    ///
    /// # Errors
    /// * [`Error::InvalidArgument`] if `offset` is NaN or infinite, or too
    ///   large for the interval to be represented.
    /// * [`Error::Date`] if the cursor would leave the representable date
    ///   range.
    /// * [`Error::IterationLimit`] if the traversal takes more day steps than
    ///   the calendar's iteration limit.
    ///
    /// The cursor is unchanged on error.
    pub fn try_add_work_days(&mut self, offset: Real, verbose: bool) -> Result<()> {
        if !offset.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "work-day offset must be finite, got {offset}"
            )));
        }
        let before = self.current_time;
        let after = traverse(
            &*self,
            &self.window,
            before,
            self.try_interval_for(offset)?,
            self.iteration_limit,
        )?;
        self.current_time = after;
        self.trace_result(offset, before, verbose);
        Ok(())
    }

    fn trace_result(&self, offset: Real, before: NaiveDateTime, verbose: bool) {
        let after = self.current_time;
        if verbose {
            info!("adding {offset} workdays to {before} results in {after}");
        } else {
            debug!(offset, %before, %after, "added workdays");
        }
    }
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkingDays for WorkCalendar {
    fn is_holiday(&self, day: NaiveDate) -> bool {
        self.holidays.contains(&day)
    }

    fn is_recurring_holiday(&self, day: NaiveDate) -> bool {
        self.recurring_holidays.contains(&MonthDay::of(day))
    }
}

/// Builder for [`WorkCalendar`].
#[derive(Debug, Clone)]
pub struct WorkCalendarBuilder {
    window: WorkDayWindow,
    current_time: Option<NaiveDateTime>,
    precision: PrecisionMode,
    holidays: Vec<NaiveDate>,
    recurring_holidays: Vec<MonthDay>,
    iteration_limit: Option<usize>,
}

impl WorkCalendarBuilder {
    /// Begin with the defaults of [`WorkCalendar::new`].
    pub fn new() -> Self {
        Self {
            window: WorkDayWindow::default(),
            current_time: None,
            precision: PrecisionMode::Minute,
            holidays: Vec::new(),
            recurring_holidays: Vec::new(),
            iteration_limit: None,
        }
    }

    /// Set the work window.
    pub fn with_window(mut self, window: WorkDayWindow) -> Self {
        self.window = window;
        self
    }

    /// Set the start time (defaults to [`Settings::now`] at build time).
    pub fn with_current_time(mut self, time: NaiveDateTime) -> Self {
        self.current_time = Some(time);
        self
    }

    /// Set the precision mode.
    pub fn with_precision(mut self, precision: PrecisionMode) -> Self {
        self.precision = precision;
        self
    }

    /// Add an exact-date holiday.
    pub fn with_holiday(mut self, day: NaiveDate) -> Self {
        self.holidays.push(day);
        self
    }

    /// Add a recurring holiday.
    pub fn with_recurring_holiday(mut self, day: impl Into<MonthDay>) -> Self {
        self.recurring_holidays.push(day.into());
        self
    }

    /// Cap the day steps of [`WorkCalendar::try_add_work_days`].
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Build the calendar.
    pub fn build(self) -> WorkCalendar {
        let current_time = self
            .current_time
            .unwrap_or_else(|| Settings::instance().now());
        WorkCalendar {
            current_time,
            window: self.window,
            holidays: self.holidays.into_iter().collect(),
            recurring_holidays: self.recurring_holidays.into_iter().collect(),
            precision: self.precision,
            iteration_limit: self.iteration_limit,
        }
    }
}

impl Default for WorkCalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}
