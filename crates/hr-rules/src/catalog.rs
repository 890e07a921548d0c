//! Rule catalogs: where holiday rules come from.
//!
//! The query service only needs one capability from storage, "fetch all
//! rules", expressed by [`RuleCatalog`]. Implementations validate their
//! rules when loading them so the resolver never sees a malformed record.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use hr_core::ensure;
use hr_core::errors::{Error, Result};

use crate::rule::{HolidayRule, RuleRecord};

/// Source of the full holiday-rule catalog.
#[async_trait]
pub trait RuleCatalog: Send + Sync {
    /// Return every rule in the catalog.
    ///
    /// Fails with [`Error::CatalogUnavailable`] when the backing store
    /// cannot be read.
    async fn fetch_all(&self) -> Result<Vec<HolidayRule>>;
}

#[async_trait]
impl<C: RuleCatalog + ?Sized> RuleCatalog for Arc<C> {
    async fn fetch_all(&self) -> Result<Vec<HolidayRule>> {
        (**self).fetch_all().await
    }
}

/// A fixed, in-memory rule list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    rules: Vec<HolidayRule>,
}

impl InMemoryCatalog {
    /// Wrap an already-validated rule list.
    pub fn new(rules: Vec<HolidayRule>) -> Self {
        Self { rules }
    }

    /// Validate persisted records and wrap them.
    pub fn from_records(records: impl IntoIterator<Item = RuleRecord>) -> Result<Self> {
        Ok(Self::new(validate_records(records)?))
    }

    /// The rules held by this catalog.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }
}

#[async_trait]
impl RuleCatalog for InMemoryCatalog {
    async fn fetch_all(&self) -> Result<Vec<HolidayRule>> {
        Ok(self.rules.clone())
    }
}

/// A catalog stored as a JSON array of [`RuleRecord`]s.
///
/// The file is re-read on every fetch.
///
/// ```json
/// [
///   { "id": 1, "name": "New Year's Day", "type": 1, "day": 1, "month": 1 },
///   { "id": 2, "name": "Ascension", "type": 4, "days_from_easter": 40 }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    /// Catalog backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RuleCatalog for JsonFileCatalog {
    async fn fetch_all(&self) -> Result<Vec<HolidayRule>> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::CatalogUnavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let records: Vec<RuleRecord> = serde_json::from_str(&text).map_err(|e| {
            Error::CatalogUnavailable(format!("invalid JSON in {}: {e}", self.path.display()))
        })?;
        validate_records(records)
    }
}

/// Convert records to rules, rejecting malformed records and duplicate ids.
pub fn validate_records(records: impl IntoIterator<Item = RuleRecord>) -> Result<Vec<HolidayRule>> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(|record| {
            ensure!(seen.insert(record.id), "duplicate rule id {}", record.id);
            HolidayRule::try_from(record)
        })
        .collect()
}
