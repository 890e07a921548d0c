//! # holiday-rules
//!
//! Computes the public holidays a jurisdiction observes in a given year from
//! a catalog of year-independent rules: fixed dates, fixed dates moved to
//! the following Monday, and offsets from Easter Sunday (optionally moved to
//! Monday as well).
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `hr-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holiday_rules::rules::{HolidayRule, HolidayService, InMemoryCatalog};
//! use holiday_rules::time::{Date, Month};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let catalog = InMemoryCatalog::new(vec![
//!     HolidayRule::fixed(1, "New Year's Day", 1, Month::January).unwrap(),
//!     HolidayRule::easter_relative_bridge(2, "Ascension", 40).unwrap(),
//! ]);
//! let service = HolidayService::new(catalog);
//!
//! let ascension = Date::from_ymd(1999, 5, 17).unwrap();
//! assert!(service.is_holiday(ascension).await.unwrap());
//! # });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and shared aliases.
pub use hr_core as core;

/// Dates, weekdays, months, and Easter.
pub use hr_time as time;

/// Holiday rules, resolution, catalogs, and the query service.
pub use hr_rules as rules;

pub use hr_core::{Error, Result};
pub use hr_rules::{HolidayRule, HolidayService, ResolvedHoliday, RuleCatalog};
pub use hr_time::Date;
