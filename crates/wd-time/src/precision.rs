//! Precision of the interval computed from a work-day offset.

/// Granularity the computed interval is truncated to before traversal.
///
/// Truncation is toward zero for both signs.  Sub-second remainders are
/// always dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrecisionMode {
    /// Whole seconds.
    #[default]
    Second,
    /// Whole minutes.
    Minute,
}

impl PrecisionMode {
    /// Truncate a number of seconds toward zero at this precision.
    pub fn truncate(self, seconds: f64) -> i64 {
        // `as` truncates toward zero and saturates; NaN becomes 0.
        let whole = seconds as i64;
        match self {
            PrecisionMode::Second => whole,
            PrecisionMode::Minute => whole / 60 * 60,
        }
    }
}
