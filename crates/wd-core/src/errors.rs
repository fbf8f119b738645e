//! Error types for workday-rs.
//!
//! All fallible operations return the single `thiserror`-derived [`Error`]
//! enum.  Preconditions are checked with the `ensure!` macro.

use thiserror::Error;

/// The top-level error type used throughout workday-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A value failed validation at construction (raised by `ensure!`).
    #[error("validation error: {0}")]
    Validation(String),

    /// Date or time-of-day components do not form a valid value.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A traversal stepped over more calendar days than allowed.
    #[error("traversal exceeded {limit} calendar day steps")]
    IterationLimit {
        /// The configured number of day steps.
        limit: usize,
    },
}

/// Shorthand `Result` type used throughout workday-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Validation(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn ordered(start: u32, end: u32) -> wd_core::errors::Result<u32> {
///     ensure!(start <= end, "end {end} precedes start {start}");
///     Ok(end - start)
/// }
/// assert_eq!(ordered(8, 16), Ok(8));
/// assert!(matches!(ordered(16, 8), Err(Error::Validation(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation(
                format!($($msg)*)
            ));
        }
    };
}
