//! Holiday rules: year-independent descriptions of how to compute a holiday.
//!
//! [`RuleKind`] is the closed set of four rule types, each variant carrying
//! only the fields it needs. [`RuleRecord`] is the flat shape catalogs
//! persist (numeric type code plus optional fields); converting a record
//! into a [`HolidayRule`] validates it.

use hr_core::errors::{Error, Result};
use hr_core::RuleId;
use hr_time::date::days_in_month;
use hr_time::Month;
use serde::{Deserialize, Serialize};

/// How a rule's date is computed for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `(day, month)` of the target year, never shifted.
    Fixed {
        /// Day of the month.
        day: u8,
        /// Month of the year.
        month: Month,
    },
    /// `(day, month)` of the target year, moved to the following Monday.
    FixedBridge {
        /// Day of the month.
        day: u8,
        /// Month of the year.
        month: Month,
    },
    /// Easter Sunday plus an offset in days, never shifted.
    EasterRelative {
        /// Signed offset from Easter Sunday.
        days_from_easter: i32,
    },
    /// Easter Sunday plus an offset in days, moved to the following Monday.
    EasterRelativeBridge {
        /// Signed offset from Easter Sunday.
        days_from_easter: i32,
    },
}

impl RuleKind {
    /// Type code used by persisted catalogs (1–4).
    pub fn type_code(&self) -> u8 {
        match self {
            RuleKind::Fixed { .. } => 1,
            RuleKind::FixedBridge { .. } => 2,
            RuleKind::EasterRelative { .. } => 3,
            RuleKind::EasterRelativeBridge { .. } => 4,
        }
    }

    /// Whether the resolved date is moved to the following Monday.
    pub fn is_bridge(&self) -> bool {
        matches!(
            self,
            RuleKind::FixedBridge { .. } | RuleKind::EasterRelativeBridge { .. }
        )
    }

    /// Whether the date depends on Easter Sunday.
    pub fn is_easter_relative(&self) -> bool {
        matches!(
            self,
            RuleKind::EasterRelative { .. } | RuleKind::EasterRelativeBridge { .. }
        )
    }

    /// Check the fields against the calendar.
    ///
    /// A fixed day must exist in its month in some year, so February 29 is
    /// accepted here and only fails when resolved for a non-leap year.
    pub fn validate(&self, id: RuleId) -> Result<()> {
        if let RuleKind::Fixed { day, month } | RuleKind::FixedBridge { day, month } = *self {
            // 2000 is a leap year, so this is the largest length the month can have.
            let max = days_in_month(2000, month.number());
            if day == 0 || day > max {
                return Err(Error::malformed(
                    id,
                    format!("day {day} does not exist in {month}"),
                ));
            }
        }
        Ok(())
    }
}

/// A named, year-independent holiday rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRule {
    /// Catalog identifier.
    pub id: RuleId,
    /// Display label.
    pub name: String,
    /// Date computation.
    pub kind: RuleKind,
}

impl HolidayRule {
    /// Build a rule, validating its fields.
    pub fn new(id: RuleId, name: impl Into<String>, kind: RuleKind) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::malformed(id, "name is empty"));
        }
        kind.validate(id)?;
        Ok(Self { id, name, kind })
    }

    /// A [`RuleKind::Fixed`] rule.
    pub fn fixed(id: RuleId, name: impl Into<String>, day: u8, month: Month) -> Result<Self> {
        Self::new(id, name, RuleKind::Fixed { day, month })
    }

    /// A [`RuleKind::FixedBridge`] rule.
    pub fn fixed_bridge(id: RuleId, name: impl Into<String>, day: u8, month: Month) -> Result<Self> {
        Self::new(id, name, RuleKind::FixedBridge { day, month })
    }

    /// A [`RuleKind::EasterRelative`] rule.
    pub fn easter_relative(id: RuleId, name: impl Into<String>, days_from_easter: i32) -> Result<Self> {
        Self::new(id, name, RuleKind::EasterRelative { days_from_easter })
    }

    /// A [`RuleKind::EasterRelativeBridge`] rule.
    pub fn easter_relative_bridge(
        id: RuleId,
        name: impl Into<String>,
        days_from_easter: i32,
    ) -> Result<Self> {
        Self::new(id, name, RuleKind::EasterRelativeBridge { days_from_easter })
    }
}

/// A rule as stored by a catalog.
///
/// `type` selects the rule kind (1 = fixed, 2 = fixed with Monday shift,
/// 3 = Easter-relative, 4 = Easter-relative with Monday shift). Fixed kinds
/// use `day` and `month`; Easter kinds use `days_from_easter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Catalog identifier.
    pub id: RuleId,
    /// Display label.
    pub name: String,
    /// Rule type code (1–4).
    #[serde(rename = "type")]
    pub type_code: u8,
    /// Day of the month, fixed kinds only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    /// Month, fixed kinds only. Stored as its number; 0 and 13+ fail to
    /// deserialise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<Month>,
    /// Offset from Easter Sunday, Easter kinds only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_from_easter: Option<i32>,
}

impl TryFrom<RuleRecord> for HolidayRule {
    type Error = Error;

    fn try_from(record: RuleRecord) -> Result<Self> {
        let id = record.id;
        let kind = match record.type_code {
            code @ (1 | 2) => {
                if record.days_from_easter.is_some() {
                    return Err(Error::malformed(id, "fixed rule has days_from_easter"));
                }
                let (Some(day), Some(month)) = (record.day, record.month) else {
                    return Err(Error::malformed(id, "fixed rule needs both day and month"));
                };
                if code == 1 {
                    RuleKind::Fixed { day, month }
                } else {
                    RuleKind::FixedBridge { day, month }
                }
            }
            code @ (3 | 4) => {
                if record.day.is_some() || record.month.is_some() {
                    return Err(Error::malformed(id, "Easter-relative rule has day or month"));
                }
                let Some(days_from_easter) = record.days_from_easter else {
                    return Err(Error::malformed(
                        id,
                        "Easter-relative rule needs days_from_easter",
                    ));
                };
                if code == 3 {
                    RuleKind::EasterRelative { days_from_easter }
                } else {
                    RuleKind::EasterRelativeBridge { days_from_easter }
                }
            }
            other => return Err(Error::malformed(id, format!("unknown rule type {other}"))),
        };
        HolidayRule::new(id, record.name, kind)
    }
}

impl From<&HolidayRule> for RuleRecord {
    fn from(rule: &HolidayRule) -> Self {
        let (day, month, days_from_easter) = match rule.kind {
            RuleKind::Fixed { day, month } | RuleKind::FixedBridge { day, month } => {
                (Some(day), Some(month), None)
            }
            RuleKind::EasterRelative { days_from_easter }
            | RuleKind::EasterRelativeBridge { days_from_easter } => {
                (None, None, Some(days_from_easter))
            }
        };
        RuleRecord {
            id: rule.id,
            name: rule.name.clone(),
            type_code: rule.kind.type_code(),
            day,
            month,
            days_from_easter,
        }
    }
}
