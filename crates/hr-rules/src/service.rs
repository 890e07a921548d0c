//! Holiday queries backed by a [`RuleCatalog`].

use hr_core::errors::Result;
use hr_core::Year;
use hr_time::Date;
use tracing::{debug, warn};

use crate::catalog::RuleCatalog;
use crate::resolver::{resolve, ResolvedHoliday};

/// Answers holiday queries against a rule catalog.
///
/// Holds no state besides the catalog; every query fetches the rules and
/// resolves them afresh, so calls are independent and may run concurrently.
#[derive(Debug, Clone)]
pub struct HolidayService<C> {
    catalog: C,
}

impl<C: RuleCatalog> HolidayService<C> {
    /// Create a service over `catalog`.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// All holidays of `year`, in chronological order.
    ///
    /// Holidays sharing a date keep their catalog order.
    pub async fn holidays_in_year(&self, year: Year) -> Result<Vec<ResolvedHoliday>> {
        let rules = self.catalog.fetch_all().await.map_err(|e| {
            warn!(year, error = %e, "rule catalog fetch failed");
            e
        })?;
        let mut holidays = resolve(&rules, year)?;
        holidays.sort_by_key(|h| h.date);
        Ok(holidays)
    }

    /// Holidays of `date`'s year that fall on `date`.
    pub async fn holidays_on(&self, date: Date) -> Result<Vec<ResolvedHoliday>> {
        let mut holidays = self.holidays_in_year(date.year()).await?;
        holidays.retain(|h| h.date == date);
        debug!(%date, matches = holidays.len(), "holiday lookup");
        Ok(holidays)
    }

    /// Whether `date` is a holiday of its own year.
    pub async fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(!self.holidays_on(date).await?.is_empty())
    }
}
