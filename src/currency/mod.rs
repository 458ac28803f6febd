//! 통화 환율표와 디스크 캐시, 환율 제공자.

pub mod cache;
pub mod provider;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use cache::{CacheState, Clock, RateCache, RateCacheRecord, RateStatus, SystemClock};
pub use provider::{FetchFailure, HttpRateProvider, RateProvider};

/// 모든 환율의 기준 통화.
pub const BASE_CURRENCY: &str = "USD";

/// 추적 대상 통화. 코드와 표시명을 직접 묶는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    /// 네트워크나 캐시가 없을 때 쓰는 내장 환율 (1 USD 당).
    pub default_rate: f64,
}

impl Currency {
    /// `USD (US Dollar)` 형식의 표시 라벨.
    pub fn label(&self) -> String {
        format!("{} ({})", self.code, self.name)
    }
}

pub static TRACKED_CURRENCIES: [Currency; 11] = [
    Currency { code: "USD", name: "US Dollar", default_rate: 1.0 },
    Currency { code: "EUR", name: "Euro", default_rate: 0.85 },
    Currency { code: "RUB", name: "Russian Ruble", default_rate: 75.0 },
    Currency { code: "GBP", name: "British Pound", default_rate: 0.75 },
    Currency { code: "JPY", name: "Japanese Yen", default_rate: 110.0 },
    Currency { code: "CNY", name: "Chinese Yuan", default_rate: 6.5 },
    Currency { code: "AUD", name: "Australian Dollar", default_rate: 1.35 },
    Currency { code: "CAD", name: "Canadian Dollar", default_rate: 1.25 },
    Currency { code: "CHF", name: "Swiss Franc", default_rate: 0.92 },
    Currency { code: "INR", name: "Indian Rupee", default_rate: 75.0 },
    Currency { code: "BRL", name: "Brazilian Real", default_rate: 5.25 },
];

/// 코드(대소문자 무시)로 추적 통화를 찾는다.
pub fn currency_by_code(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    TRACKED_CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

fn usable_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

/// 통화 코드 → 1 USD 당 환율. USD는 항상 정확히 1.0이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyTable {
    rates: BTreeMap<String, f64>,
}

impl CurrencyTable {
    /// 내장 기본 환율표.
    pub fn bundled() -> Self {
        let rates = TRACKED_CURRENCIES
            .iter()
            .map(|c| (c.code.to_string(), c.default_rate))
            .collect();
        Self { rates }
    }

    /// 새로 받아온 환율로 전체 표를 만든다. 추적 통화가 하나라도 빠지면 실패한다.
    pub fn from_fetched(fetched: &BTreeMap<String, f64>) -> Result<Self, String> {
        let mut rates = BTreeMap::new();
        for currency in &TRACKED_CURRENCIES {
            if currency.code == BASE_CURRENCY {
                rates.insert(currency.code.to_string(), 1.0);
                continue;
            }
            match fetched.get(currency.code) {
                Some(&rate) if usable_rate(rate) => {
                    rates.insert(currency.code.to_string(), rate);
                }
                Some(rate) => return Err(format!("invalid rate for {}: {rate}", currency.code)),
                None => return Err(format!("missing rate for {}", currency.code)),
            }
        }
        Ok(Self { rates })
    }

    /// 저장된 환율을 코드 기준으로 병합한다. 추적하지 않는 코드와 잘못된 값은 무시한다.
    /// 반영된 항목 수를 돌려준다.
    pub fn merge_known(&mut self, incoming: &BTreeMap<String, f64>) -> usize {
        let mut merged = 0;
        for (code, &rate) in incoming {
            let Some(currency) = currency_by_code(code) else {
                continue;
            };
            if currency.code == BASE_CURRENCY || !usable_rate(rate) {
                continue;
            }
            self.rates.insert(currency.code.to_string(), rate);
            merged += 1;
        }
        self.rates.insert(BASE_CURRENCY.to_string(), 1.0);
        merged
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(&code.trim().to_ascii_uppercase()).copied()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::bundled()
    }
}

/// 환율 갱신/저장 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyError {
    /// API 키가 비어 있음
    NoApiKey,
    /// 네트워크, 응답 파싱, API 보고 오류
    Fetch { kind: FetchFailure, reason: String },
    /// 캐시 파일 읽기/쓰기 오류
    Persistence(String),
}

impl CurrencyError {
    pub fn fetch(kind: FetchFailure, reason: impl Into<String>) -> Self {
        CurrencyError::Fetch {
            kind,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrencyError::NoApiKey => write!(f, "no API key configured"),
            CurrencyError::Fetch { kind, reason } => write!(f, "{kind}: {reason}"),
            CurrencyError::Persistence(msg) => write!(f, "rate cache file error: {msg}"),
        }
    }
}

impl std::error::Error for CurrencyError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched_all(multiplier: f64) -> BTreeMap<String, f64> {
        TRACKED_CURRENCIES
            .iter()
            .map(|c| (c.code.to_string(), c.default_rate * multiplier))
            .collect()
    }

    #[test]
    fn bundled_table_tracks_eleven_codes_with_usd_one() {
        let table = CurrencyTable::bundled();
        assert_eq!(table.len(), 11);
        assert_eq!(table.rate("USD"), Some(1.0));
        assert_eq!(table.rate("eur"), Some(0.85));
    }

    #[test]
    fn from_fetched_forces_usd_and_requires_every_code() {
        let mut fetched = fetched_all(2.0);
        let table = CurrencyTable::from_fetched(&fetched).unwrap();
        assert_eq!(table.rate("USD"), Some(1.0));
        assert_eq!(table.rate("JPY"), Some(220.0));

        fetched.remove("BRL");
        let err = CurrencyTable::from_fetched(&fetched).unwrap_err();
        assert!(err.contains("BRL"), "{err}");
    }

    #[test]
    fn merge_known_ignores_unknown_codes_and_bad_values() {
        let mut table = CurrencyTable::bundled();
        let mut incoming = BTreeMap::new();
        incoming.insert("EUR".to_string(), 0.9);
        incoming.insert("XAU".to_string(), 0.0005);
        incoming.insert("GBP".to_string(), -1.0);
        incoming.insert("USD".to_string(), 3.0);
        assert_eq!(table.merge_known(&incoming), 1);
        assert_eq!(table.rate("EUR"), Some(0.9));
        assert_eq!(table.rate("GBP"), Some(0.75));
        assert_eq!(table.rate("USD"), Some(1.0));
        assert_eq!(table.rate("XAU"), None);
    }

    #[test]
    fn labels_come_from_the_code_record() {
        assert_eq!(currency_by_code("chf").unwrap().label(), "CHF (Swiss Franc)");
        assert!(currency_by_code("CH").is_none());
    }
}
