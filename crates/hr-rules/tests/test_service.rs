//! Integration tests for `HolidayService` over in-memory, failing, and
//! file-backed catalogs.

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use hr_core::errors::{Error, Result};
use hr_rules::{
    resolve, HolidayRule, HolidayService, InMemoryCatalog, JsonFileCatalog, RuleCatalog,
    RuleRecord,
};
use hr_time::{Date, Month};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn record(
    id: i64,
    name: &str,
    type_code: u8,
    day: Option<u8>,
    month: Option<Month>,
    days_from_easter: Option<i32>,
) -> RuleRecord {
    RuleRecord {
        id,
        name: name.into(),
        type_code,
        day,
        month,
        days_from_easter,
    }
}

/// The mixed catalog used throughout: one rule of each kind plus a second
/// Monday-shifted fixed rule.
fn sample_rules() -> Vec<HolidayRule> {
    vec![
        HolidayRule::fixed(1, "New Year's Day", 1, Month::January).unwrap(),
        HolidayRule::fixed_bridge(2, "Epiphany", 6, Month::January).unwrap(),
        HolidayRule::easter_relative_bridge(3, "Ascension", 40).unwrap(),
        HolidayRule::fixed_bridge(4, "January 4th", 4, Month::January).unwrap(),
        HolidayRule::easter_relative(5, "Easter Sunday", 0).unwrap(),
    ]
}

fn sample_service() -> HolidayService<InMemoryCatalog> {
    HolidayService::new(InMemoryCatalog::new(sample_rules()))
}

struct UnavailableCatalog;

#[async_trait]
impl RuleCatalog for UnavailableCatalog {
    async fn fetch_all(&self) -> Result<Vec<HolidayRule>> {
        Err(Error::CatalogUnavailable("database offline".into()))
    }
}

// ─── Year listing ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn fixed_holiday_keeps_its_date() {
    init_tracing();
    let holidays = sample_service().holidays_in_year(2024).await.unwrap();
    // 2024-01-01 is a Monday; a fixed rule would not move it either way.
    assert!(holidays.iter().any(|h| h.date == date(2024, 1, 1)));
}

#[tokio::test]
async fn bridge_holiday_moves_to_monday() {
    let holidays = sample_service().holidays_in_year(2024).await.unwrap();
    assert!(holidays.iter().any(|h| h.date == date(2024, 1, 8)));
    assert!(!holidays.iter().any(|h| h.date == date(2024, 1, 6)));
}

#[tokio::test]
async fn easter_relative_bridge_1999() {
    let holidays = sample_service().holidays_in_year(1999).await.unwrap();
    let ascension = holidays.iter().find(|h| h.name == "Ascension").unwrap();
    assert_eq!(ascension.date, date(1999, 5, 17));
    let easter = holidays.iter().find(|h| h.name == "Easter Sunday").unwrap();
    assert_eq!(easter.date, date(1999, 4, 4));
}

#[tokio::test]
async fn palm_sunday_needs_a_negative_offset() {
    let service = HolidayService::new(InMemoryCatalog::new(vec![
        HolidayRule::easter_relative(1, "Palm Sunday", -7).unwrap(),
    ]));
    assert!(service.is_holiday(date(1999, 3, 28)).await.unwrap());
}

#[tokio::test]
async fn full_year_is_chronological() {
    let holidays = sample_service().holidays_in_year(2024).await.unwrap();
    let dates: Vec<Date> = holidays.iter().map(|h| h.date).collect();
    // Jan 4 2024 is a Thursday and Jan 6 a Saturday: both move to Jan 8.
    // Easter 2024 is March 31; +40 = May 10 (Friday) -> May 13.
    assert_eq!(
        dates,
        [
            date(2024, 1, 1),
            date(2024, 1, 8),
            date(2024, 1, 8),
            date(2024, 3, 31),
            date(2024, 5, 13),
        ]
    );
    assert_eq!(holidays[1].name, "Epiphany");
    assert_eq!(holidays[2].name, "January 4th");
}

#[tokio::test]
async fn repeated_calls_are_identical() {
    let service = sample_service();
    let first = service.holidays_in_year(2031).await.unwrap();
    let second = service.holidays_in_year(2031).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_queries_share_a_catalog() {
    let service = Arc::new(sample_service());
    let (a, b, c) = tokio::join!(
        service.holidays_in_year(2024),
        service.is_holiday(date(2024, 1, 8)),
        service.is_holiday(date(1999, 5, 17)),
    );
    assert_eq!(a.unwrap().len(), 5);
    assert!(b.unwrap());
    assert!(c.unwrap());
}

// ─── Point queries ────────────────────────────────────────────────────────────

#[tokio::test]
async fn new_years_day_is_a_holiday() {
    assert!(sample_service().is_holiday(date(2024, 1, 1)).await.unwrap());
}

#[tokio::test]
async fn ordinary_day_is_not_a_holiday() {
    let service = HolidayService::new(InMemoryCatalog::new(vec![
        HolidayRule::fixed(1, "New Year's Day", 1, Month::January).unwrap(),
        HolidayRule::fixed(2, "Independence Day", 4, Month::July).unwrap(),
    ]));
    assert!(!service.is_holiday(date(2024, 2, 15)).await.unwrap());
    assert!(service.is_holiday(date(2024, 7, 4)).await.unwrap());
}

#[tokio::test]
async fn shifted_away_date_is_not_a_holiday() {
    // Epiphany 2024 falls on Saturday the 6th and is observed on the 8th.
    assert!(!sample_service().is_holiday(date(2024, 1, 6)).await.unwrap());
}

#[tokio::test]
async fn leap_day_and_year_end() {
    let service = HolidayService::new(InMemoryCatalog::new(vec![
        HolidayRule::fixed(1, "Leap Day", 29, Month::February).unwrap(),
        HolidayRule::fixed(2, "New Year's Eve", 31, Month::December).unwrap(),
    ]));
    assert!(service.is_holiday(date(2024, 2, 29)).await.unwrap());
    assert!(service.is_holiday(date(2024, 12, 31)).await.unwrap());
    assert!(!service.is_holiday(date(2024, 3, 1)).await.unwrap());
    // The leap-day rule cannot be placed in 2023.
    assert!(matches!(
        service.is_holiday(date(2023, 12, 31)).await,
        Err(Error::Date(_))
    ));
}

#[tokio::test]
async fn year_end_bridge_lands_in_next_january() {
    let service = HolidayService::new(InMemoryCatalog::new(vec![
        HolidayRule::fixed(1, "New Year's Day", 1, Month::January).unwrap(),
        HolidayRule::fixed_bridge(2, "Year end", 31, Month::December).unwrap(),
    ]));
    // 2025-12-31 is a Wednesday, observed Monday 2026-01-05.
    let holidays = service.holidays_in_year(2025).await.unwrap();
    let year_end = holidays.iter().find(|h| h.name == "Year end").unwrap();
    assert_eq!(year_end.date, date(2026, 1, 5));
    assert_eq!(holidays.last().unwrap().date, date(2026, 1, 5));

    // Point queries only consult the queried date's own year.
    assert!(!service.is_holiday(date(2026, 1, 5)).await.unwrap());
    assert!(!service.is_holiday(date(2025, 12, 31)).await.unwrap());
    assert!(service.is_holiday(date(2026, 1, 1)).await.unwrap());
}

#[tokio::test]
async fn year_end_bridge_past_last_supported_year_is_an_error() {
    let service = HolidayService::new(InMemoryCatalog::new(vec![
        HolidayRule::fixed_bridge(1, "Year end", 31, Month::December).unwrap(),
    ]));
    // 9999-12-31 is a Friday; the following Monday is out of range.
    assert!(matches!(
        service.holidays_in_year(9999).await,
        Err(Error::Date(_))
    ));
}

// ─── Errors ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn catalog_failure_is_propagated() {
    init_tracing();
    let service = HolidayService::new(UnavailableCatalog);
    let err = service.holidays_in_year(2024).await.unwrap_err();
    assert_eq!(err, Error::CatalogUnavailable("database offline".into()));
    assert!(service.is_holiday(date(2024, 1, 1)).await.is_err());
}

#[test]
fn malformed_records_never_reach_the_resolver() {
    let records = vec![
        record(1, "New Year's Day", 1, Some(1), Some(Month::January), None),
        record(3, "Ascension", 4, None, None, None),
    ];
    let err = InMemoryCatalog::from_records(records).unwrap_err();
    assert!(matches!(err, Error::MalformedRule { id: 3, .. }), "{err}");
}

// ─── JSON file catalog ────────────────────────────────────────────────────────

#[tokio::test]
async fn json_file_catalog_resolves() {
    let records = vec![
        record(1, "New Year's Day", 1, Some(1), Some(Month::January), None),
        record(2, "Epiphany", 2, Some(6), Some(Month::January), None),
        record(3, "Ascension", 4, None, None, Some(40)),
    ];
    let mut file = tempfile::NamedTempFile::new().unwrap();
    serde_json::to_writer(&mut file, &records).unwrap();
    file.flush().unwrap();

    let service = HolidayService::new(JsonFileCatalog::new(file.path()));
    let holidays = service.holidays_in_year(1999).await.unwrap();
    let dates: Vec<Date> = holidays.iter().map(|h| h.date).collect();
    // Jan 6 1999 is a Wednesday -> Monday Jan 11.
    assert_eq!(
        dates,
        [date(1999, 1, 1), date(1999, 1, 11), date(1999, 5, 17)]
    );
}

#[tokio::test]
async fn json_file_with_bad_record_is_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id": 5, "name": "Broken", "type": 3, "day": 5, "month": 1}}]"#).unwrap();
    file.flush().unwrap();

    let err = JsonFileCatalog::new(file.path()).fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::MalformedRule { id: 5, .. }), "{err}");
}

#[tokio::test]
async fn json_file_with_month_13_is_unavailable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id": 1, "name": "Nowhere", "type": 1, "day": 1, "month": 13}}]"#).unwrap();
    file.flush().unwrap();

    let err = JsonFileCatalog::new(file.path()).fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::CatalogUnavailable(_)), "{err}");
}

#[tokio::test]
async fn json_file_with_garbage_is_unavailable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    file.flush().unwrap();

    let err = JsonFileCatalog::new(file.path()).fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::CatalogUnavailable(_)), "{err}");
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn is_holiday_matches_year_listing(year in 1600i32..=2400, day_of_year in 0i32..366) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let service = sample_service();
        let day = date(year, 1, 1).add_days(day_of_year).unwrap();
        prop_assume!(day.year() == year);
        let (listed, is_holiday) = runtime.block_on(async {
            let listed = service.holidays_in_year(year).await.unwrap();
            let is_holiday = service.is_holiday(day).await.unwrap();
            (listed, is_holiday)
        });
        prop_assert_eq!(is_holiday, listed.iter().any(|h| h.date == day));
    }

    #[test]
    fn bridged_dates_are_mondays(year in 1583i32..=9998) {
        let rules = sample_rules();
        let resolved = resolve(&rules, year).unwrap();
        for (rule, holiday) in rules.iter().zip(&resolved) {
            if rule.kind.is_bridge() {
                prop_assert_eq!(holiday.date.weekday(), hr_time::Weekday::Monday);
            }
        }
    }
}
