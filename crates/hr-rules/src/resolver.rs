//! Year resolution: turning [`HolidayRule`]s into concrete dates.

use hr_core::errors::{Error, Result};
use hr_core::Year;
use hr_time::{easter_sunday, Date, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::rule::{HolidayRule, RuleKind};

/// A holiday pinned to a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedHoliday {
    /// Display label, copied from the rule.
    pub name: String,
    /// Observed date.
    pub date: Date,
}

/// Move `date` forward to the next Monday, or keep it if it is a Monday.
///
/// Rolls across month and year ends as needed.
pub fn monday_shift(date: Date) -> Result<Date> {
    let shifted = date.next_or_same(Weekday::Monday)?;
    if shifted != date {
        trace!(%date, %shifted, "moved to Monday");
    }
    Ok(shifted)
}

/// Resolves rules for a single year.
///
/// Easter Sunday is computed at most once, on the first Easter-relative rule.
#[derive(Debug, Clone)]
pub struct HolidayResolver {
    year: Year,
    easter: Option<Date>,
}

impl HolidayResolver {
    /// Create a resolver for `year`.
    pub fn new(year: Year) -> Self {
        Self { year, easter: None }
    }

    /// The target year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Easter Sunday of the target year.
    pub fn easter(&mut self) -> Result<Date> {
        match self.easter {
            Some(d) => Ok(d),
            None => {
                let d = easter_sunday(self.year)?;
                self.easter = Some(d);
                Ok(d)
            }
        }
    }

    /// Resolve one rule.
    pub fn resolve_rule(&mut self, rule: &HolidayRule) -> Result<ResolvedHoliday> {
        rule.kind.validate(rule.id)?;
        let base = match rule.kind {
            RuleKind::Fixed { day, month } | RuleKind::FixedBridge { day, month } => {
                Date::from_parts(self.year, month, day).map_err(|e| {
                    Error::Date(format!("{} ({}) in {}: {e}", rule.name, rule.id, self.year))
                })?
            }
            RuleKind::EasterRelative { days_from_easter }
            | RuleKind::EasterRelativeBridge { days_from_easter } => {
                self.easter()?.add_days(days_from_easter)?
            }
        };
        let date = if rule.kind.is_bridge() {
            monday_shift(base)?
        } else {
            base
        };
        Ok(ResolvedHoliday {
            name: rule.name.clone(),
            date,
        })
    }

    /// Resolve every rule, in catalog order.
    ///
    /// Stops at the first rule that cannot be resolved; no partial result is
    /// returned. Rules landing on the same date are all kept.
    pub fn resolve_all(&mut self, rules: &[HolidayRule]) -> Result<Vec<ResolvedHoliday>> {
        let resolved = rules
            .iter()
            .map(|rule| self.resolve_rule(rule))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            year = self.year,
            rules = rules.len(),
            resolved = resolved.len(),
            "resolved holiday rules"
        );
        Ok(resolved)
    }
}

/// Resolve `rules` for `year`. Shorthand for [`HolidayResolver::resolve_all`].
pub fn resolve(rules: &[HolidayRule], year: Year) -> Result<Vec<ResolvedHoliday>> {
    HolidayResolver::new(year).resolve_all(rules)
}
