//! Global library settings.
//!
//! [`Settings`] holds the **evaluation time**: the instant a calendar built
//! without an explicit start time is positioned at.  It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! When no evaluation time is set, "now" is the local wall-clock time.
//! Tests that pin the evaluation time should use [`ScopedEvaluationTime`] so
//! the previous value is restored when the guard is dropped.

use chrono::{Local, NaiveDateTime};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide settings used by the workday-rs library.
pub struct Settings {
    evaluation_time: Mutex<Option<NaiveDateTime>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_time: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<NaiveDateTime>> {
        // The slot holds a plain value, so a poisoned lock is still usable.
        self.evaluation_time
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the pinned evaluation time, if any.
    pub fn evaluation_time(&self) -> Option<NaiveDateTime> {
        *self.slot()
    }

    /// Pin the evaluation time.
    pub fn set_evaluation_time(&self, time: NaiveDateTime) {
        *self.slot() = Some(time);
    }

    /// Clear the evaluation time, resetting it to "use the wall clock".
    pub fn reset_evaluation_time(&self) {
        *self.slot() = None;
    }

    /// The pinned evaluation time, or the local wall-clock time.
    pub fn now(&self) -> NaiveDateTime {
        self.evaluation_time()
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

/// Pins the evaluation time for the lifetime of the guard.
///
/// The previous setting is restored on drop.
#[derive(Debug)]
pub struct ScopedEvaluationTime {
    previous: Option<NaiveDateTime>,
}

impl ScopedEvaluationTime {
    /// Pin `time` as the evaluation time until the guard is dropped.
    pub fn new(time: NaiveDateTime) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_time();
        settings.set_evaluation_time(time);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationTime {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(time) => settings.set_evaluation_time(time),
            None => settings.reset_evaluation_time(),
        }
    }
}
