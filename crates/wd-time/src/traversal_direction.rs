//! Direction of a work-day traversal.

use chrono::Duration;

/// Direction the cursor moves in while work days are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalDirection {
    /// Later in time (non-negative offsets).
    #[default]
    Forward,
    /// Earlier in time (negative offsets).
    Backward,
}

impl TraversalDirection {
    /// Backward for a negative interval, forward otherwise.
    pub fn of(interval: Duration) -> Self {
        if interval < Duration::zero() {
            TraversalDirection::Backward
        } else {
            TraversalDirection::Forward
        }
    }

    /// Calendar days moved per day step: `1` or `-1`.
    pub fn day_step(self) -> i64 {
        match self {
            TraversalDirection::Forward => 1,
            TraversalDirection::Backward => -1,
        }
    }
}
