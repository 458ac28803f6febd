//! 환율 캐시 적재/갱신 정책 테스트. 네트워크 대신 스크립트 제공자를 쓴다.
use std::cell::Cell;
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use universal_converter::currency::provider::parse_latest_response;
use universal_converter::currency::{
    CacheState, Clock, CurrencyError, CurrencyTable, FetchFailure, RateCache, RateCacheRecord,
    RateProvider, RateStatus, TRACKED_CURRENCIES,
};

struct FixedClock(NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// 호출 횟수를 세고 미리 정한 응답을 돌려주는 제공자.
struct ScriptedProvider {
    calls: Rc<Cell<usize>>,
    response: Result<BTreeMap<String, f64>, CurrencyError>,
}

impl RateProvider for ScriptedProvider {
    fn fetch_usd_rates(&self, _api_key: &str) -> Result<BTreeMap<String, f64>, CurrencyError> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone()
    }
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

fn all_rates(multiplier: f64) -> BTreeMap<String, f64> {
    TRACKED_CURRENCIES
        .iter()
        .map(|c| (c.code.to_string(), c.default_rate * multiplier))
        .collect()
}

fn cache_with(
    path: &Path,
    response: Result<BTreeMap<String, f64>, CurrencyError>,
) -> (RateCache, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let provider = ScriptedProvider {
        calls: Rc::clone(&calls),
        response,
    };
    let cache = RateCache::new(path, Box::new(provider), Box::new(FixedClock(now())));
    (cache, calls)
}

fn write_record(path: &Path, age_days: i64, eur: f64) {
    let mut rates = BTreeMap::new();
    rates.insert("USD".to_string(), 1.0);
    rates.insert("EUR".to_string(), eur);
    let record = RateCacheRecord {
        rates,
        last_update: (now() - Duration::days(age_days)).date(),
    };
    record.save(path).unwrap();
}

#[test]
fn fresh_cache_is_used_without_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currency_rates.json");
    write_record(&path, 3, 0.91);

    let (mut cache, calls) = cache_with(&path, Ok(all_rates(2.0)));
    let state = cache.load("some-key");

    assert_eq!(state, CacheState::LoadedFresh);
    assert_eq!(calls.get(), 0);
    assert_eq!(cache.get_rate_table().rate("EUR"), Some(0.91));
    // 파일에 없는 통화는 내장 기본값을 유지한다.
    assert_eq!(cache.get_rate_table().rate("JPY"), Some(110.0));
    let saved = (now() - Duration::days(3)).date();
    assert_eq!(cache.status(), &RateStatus::LoadedFromFile(saved));
    assert_eq!(cache.last_update(), Some(saved));
}

#[test]
fn stale_cache_without_key_keeps_bundled_rates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currency_rates.json");
    write_record(&path, 10, 0.5);

    let (mut cache, calls) = cache_with(&path, Ok(all_rates(2.0)));
    let state = cache.load("");

    assert_eq!(state, CacheState::LoadedStale);
    assert_eq!(calls.get(), 0);
    assert_eq!(cache.get_rate_table(), &CurrencyTable::bundled());
    assert_eq!(cache.status(), &RateStatus::NotUpdated);
}

#[test]
fn missing_cache_with_key_fetches_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currency_rates.json");

    let (mut cache, calls) = cache_with(&path, Ok(all_rates(2.0)));
    cache.load("some-key");

    assert_eq!(calls.get(), 1);
    assert_eq!(cache.state(), CacheState::LoadedFresh);
    assert_eq!(cache.get_rate_table().rate("EUR"), Some(1.7));
    assert_eq!(cache.get_rate_table().rate("USD"), Some(1.0));
    assert_eq!(cache.status(), &RateStatus::Updated(now().date()));

    let stored = RateCacheRecord::load(&path).unwrap();
    assert_eq!(stored.last_update, now().date());
    assert_eq!(stored.rates.get("BRL"), Some(&10.5));
}

#[test]
fn non_success_response_leaves_table_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currency_rates.json");
    let body = r#"{"result":"error","error-type":"invalid-key"}"#;

    let (mut cache, calls) = cache_with(&path, parse_latest_response(body));
    let err = cache.refresh("bad-key").unwrap_err();

    assert_eq!(calls.get(), 1);
    assert_eq!(err, CurrencyError::fetch(FetchFailure::Api, "invalid-key"));
    assert_eq!(cache.get_rate_table(), &CurrencyTable::bundled());
    assert_eq!(cache.status(), &RateStatus::UpdateFailed(err));
    assert!(!path.exists());
}

#[test]
fn incomplete_rates_are_rejected_as_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currency_rates.json");
    let mut partial = all_rates(2.0);
    partial.remove("CHF");

    let (mut cache, _) = cache_with(&path, Ok(partial));
    let err = cache.refresh("some-key").unwrap_err();

    assert!(matches!(
        err,
        CurrencyError::Fetch {
            kind: FetchFailure::Malformed,
            ..
        }
    ));
    assert_eq!(cache.get_rate_table(), &CurrencyTable::bundled());
}

#[test]
fn refresh_without_key_does_not_call_provider() {
    let dir = tempfile::tempdir().unwrap();
    let (mut cache, calls) = cache_with(&dir.path().join("r.json"), Ok(all_rates(1.0)));
    assert_eq!(cache.refresh("   "), Err(CurrencyError::NoApiKey));
    assert_eq!(calls.get(), 0);
}

#[test]
fn save_failure_still_applies_new_rates() {
    let dir = tempfile::tempdir().unwrap();
    // 디렉터리 경로에는 파일을 쓸 수 없다.
    let (mut cache, _) = cache_with(dir.path(), Ok(all_rates(3.0)));
    let table = cache.refresh("some-key").unwrap();

    assert_eq!(table.rate("GBP"), Some(2.25));
    assert_eq!(cache.get_rate_table().rate("GBP"), Some(2.25));
    assert!(matches!(
        cache.status(),
        RateStatus::UpdatedNotSaved { date, .. } if *date == now().date()
    ));
}

#[test]
fn corrupt_cache_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currency_rates.json");
    std::fs::write(&path, "{ not json").unwrap();

    let (mut cache, calls) = cache_with(&path, Ok(all_rates(2.0)));
    assert_eq!(cache.load(""), CacheState::LoadedStale);
    assert_eq!(calls.get(), 0);
    assert_eq!(cache.get_rate_table(), &CurrencyTable::bundled());
}
