//! # wd-core
//!
//! Core types and error definitions for workday-rs.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace – the error type with its `ensure!` macro, and the
//! process-wide `Settings` that decide what "now" means for freshly built
//! calendars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation time).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for work-day offsets.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationTime, Settings};
