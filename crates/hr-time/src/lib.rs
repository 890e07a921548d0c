//! # hr-time
//!
//! Gregorian `Date`, `Weekday`, and `Month` types plus the Easter Sunday
//! computation used by Easter-relative holiday rules.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::{easter_month_day, easter_sunday};
pub use month::Month;
pub use weekday::Weekday;
