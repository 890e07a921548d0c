//! # hr-core
//!
//! Shared building blocks for the holiday-rules workspace: the error
//! hierarchy, the `Result` alias, and the `ensure!` macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Identifier of a holiday rule in its catalog.
pub type RuleId = i64;

/// Calendar year (proleptic Gregorian).
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
