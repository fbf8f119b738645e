//! The work-day traversal.
//!
//! The cursor is owned by a [`Traversal`] that is moved through the phases:
//! align into the window, skip non-working days, consume whole window spans,
//! skip non-working days again, then apply what is left.
//!
//! Each day step counts against an optional limit.  Without one, a calendar
//! on which no day is a working day makes the traversal loop forever, as
//! does a nonzero interval against a zero-length window.

use crate::calendar::WorkingDays;
use crate::day_frame::DayFrame;
use crate::traversal_direction::TraversalDirection;
use crate::work_day_window::WorkDayWindow;
use chrono::{Duration, NaiveDateTime};
use tracing::{debug, trace};
use wd_core::errors::{Error, Result};

/// Move `from` by `interval` of working time.
pub(crate) fn traverse(
    calendar: &dyn WorkingDays,
    window: &WorkDayWindow,
    from: NaiveDateTime,
    interval: Duration,
    limit: Option<usize>,
) -> Result<NaiveDateTime> {
    if interval == Duration::zero() {
        return Ok(from);
    }
    Traversal::new(calendar, window, from, interval, limit)
        .align_into_window()?
        .skip_non_working_days()?
        .consume_full_days()?
        .skip_non_working_days()?
        .finish()
}

fn out_of_range(what: &str) -> Error {
    Error::Date(format!("{what} leaves the representable date range"))
}

struct Traversal<'a> {
    calendar: &'a dyn WorkingDays,
    window: &'a WorkDayWindow,
    direction: TraversalDirection,
    frame: DayFrame,
    cursor: NaiveDateTime,
    remaining: Duration,
    steps: usize,
    limit: Option<usize>,
}

impl<'a> Traversal<'a> {
    fn new(
        calendar: &'a dyn WorkingDays,
        window: &'a WorkDayWindow,
        from: NaiveDateTime,
        interval: Duration,
        limit: Option<usize>,
    ) -> Self {
        let direction = TraversalDirection::of(interval);
        debug!(%from, seconds = interval.num_seconds(), ?direction, "starting traversal");
        Self {
            calendar,
            window,
            direction,
            frame: DayFrame::new(from.date(), window),
            cursor: from,
            remaining: interval,
            steps: 0,
            limit,
        }
    }

    fn step_day(&mut self) -> Result<()> {
        self.steps += 1;
        if let Some(limit) = self.limit {
            if self.steps > limit {
                return Err(Error::IterationLimit { limit });
            }
        }
        self.frame = self
            .frame
            .step(self.direction, self.window)
            .ok_or_else(|| out_of_range("day step"))?;
        trace!(day = %self.frame.day(), "day step");
        Ok(())
    }

    fn is_working(&self) -> bool {
        self.calendar.is_working_day(self.cursor.date())
    }

    /// Snap a cursor lying outside today's window onto the nearest boundary
    /// in the direction of travel, moving to the next day if today's window
    /// has already been passed.
    fn align_into_window(mut self) -> Result<Self> {
        let (short, past) = match self.direction {
            TraversalDirection::Forward => (
                self.cursor < self.frame.window_start(),
                self.cursor > self.frame.window_end(),
            ),
            TraversalDirection::Backward => (
                self.cursor > self.frame.window_end(),
                self.cursor < self.frame.window_start(),
            ),
        };
        if short {
            self.cursor = self.frame.entry(self.direction);
        } else if past {
            self.step_day()?;
            self.cursor = self.frame.entry(self.direction);
        }
        debug!(cursor = %self.cursor, "aligned into window");
        Ok(self)
    }

    fn skip_non_working_days(mut self) -> Result<Self> {
        while !self.is_working() {
            self.step_day()?;
            self.cursor = self.frame.entry(self.direction);
        }
        Ok(self)
    }

    fn target(&self) -> Result<NaiveDateTime> {
        self.cursor
            .checked_add_signed(self.remaining)
            .ok_or_else(|| out_of_range("remaining interval"))
    }

    fn crosses_exit(&self) -> Result<bool> {
        let target = self.target()?;
        let exit = self.frame.exit(self.direction);
        Ok(match self.direction {
            TraversalDirection::Forward => target > exit,
            TraversalDirection::Backward => target < exit,
        })
    }

    /// Leave whole windows behind while the remaining interval reaches past
    /// today's exit boundary.
    ///
    /// The span up to the exit is only taken off the interval when the day
    /// arrived at is a working day.
    fn consume_full_days(mut self) -> Result<Self> {
        while self.crosses_exit()? {
            let span = self.frame.exit(self.direction) - self.cursor;
            self.step_day()?;
            self.cursor = self.frame.entry(self.direction);
            if self.is_working() {
                self.remaining = self
                    .remaining
                    .checked_sub(&span)
                    .ok_or_else(|| out_of_range("remaining interval"))?;
            }
        }
        debug!(
            cursor = %self.cursor,
            seconds = self.remaining.num_seconds(),
            steps = self.steps,
            "consumed full days"
        );
        Ok(self)
    }

    fn finish(self) -> Result<NaiveDateTime> {
        self.target()
    }
}
