//! # hr-rules
//!
//! Holiday rules and their resolution into concrete dates.
//!
//! A [`HolidayRule`] describes a holiday independently of the year: a fixed
//! day, a fixed day moved to the following Monday, or an offset from Easter
//! Sunday with or without that Monday shift. [`resolve`] pins a rule list to
//! a year, and [`HolidayService`] answers "which holidays fall in year Y"
//! and "is date D a holiday" over any [`RuleCatalog`].
//!
//! ```
//! use hr_rules::{resolve, HolidayRule};
//! use hr_time::{Date, Month};
//!
//! let rules = [
//!     HolidayRule::fixed(1, "New Year's Day", 1, Month::January).unwrap(),
//!     HolidayRule::fixed_bridge(2, "Epiphany", 6, Month::January).unwrap(),
//! ];
//! let holidays = resolve(&rules, 2024).unwrap();
//! assert_eq!(holidays[1].date, Date::from_ymd(2024, 1, 8).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rule catalog trait and implementations.
pub mod catalog;

/// Year resolution and the Monday shift.
pub mod resolver;

/// Rule model and persisted record shape.
pub mod rule;

/// Holiday query service.
pub mod service;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use catalog::{InMemoryCatalog, JsonFileCatalog, RuleCatalog};
pub use resolver::{monday_shift, resolve, HolidayResolver, ResolvedHoliday};
pub use rule::{HolidayRule, RuleKind, RuleRecord};
pub use service::HolidayService;
