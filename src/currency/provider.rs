use std::collections::BTreeMap;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::CurrencyError;

/// exchangerate-api v6 엔드포인트. `{base}{key}/latest/USD` 형태로 호출한다.
pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6/";

/// 환율 요청 기본 제한 시간.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// 환율 조회 실패의 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// 연결 실패, 제한 시간 초과 등
    Network,
    /// 2xx 가 아닌 HTTP 응답
    HttpStatus,
    /// JSON 형식이 아니거나 필요한 필드가 없음
    Malformed,
    /// 제공자가 `result != "success"` 로 응답함 (잘못된 키 등)
    Api,
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FetchFailure::Network => "network error",
            FetchFailure::HttpStatus => "HTTP error",
            FetchFailure::Malformed => "malformed response",
            FetchFailure::Api => "API error",
        };
        f.write_str(s)
    }
}

/// USD 기준 환율을 제공하는 외부 협력자.
pub trait RateProvider {
    /// 통화 코드 → 1 USD 당 환율을 한 번의 동기 요청으로 가져온다.
    fn fetch_usd_rates(&self, api_key: &str) -> Result<BTreeMap<String, f64>, CurrencyError>;
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    #[serde(default)]
    conversion_rates: Option<BTreeMap<String, f64>>,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
}

/// `latest/USD` 응답 본문을 해석한다.
pub fn parse_latest_response(body: &str) -> Result<BTreeMap<String, f64>, CurrencyError> {
    let parsed: LatestRatesResponse = serde_json::from_str(body)
        .map_err(|e| CurrencyError::fetch(FetchFailure::Malformed, e.to_string()))?;
    if parsed.result != "success" {
        let reason = parsed.error_type.unwrap_or_else(|| "Unknown error".to_string());
        return Err(CurrencyError::fetch(FetchFailure::Api, reason));
    }
    parsed.conversion_rates.ok_or_else(|| {
        CurrencyError::fetch(FetchFailure::Malformed, "missing conversion_rates")
    })
}

/// reqwest 블로킹 클라이언트 기반 제공자.
pub struct HttpRateProvider {
    client: Client,
    base_url: String,
}

impl HttpRateProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CurrencyError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("universal_converter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CurrencyError::fetch(FetchFailure::Network, e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self, api_key: &str) -> String {
        format!("{}{}/latest/USD", self.base_url, api_key)
    }
}

impl RateProvider for HttpRateProvider {
    fn fetch_usd_rates(&self, api_key: &str) -> Result<BTreeMap<String, f64>, CurrencyError> {
        // 키가 포함된 URL은 로그와 오류 메시지에 남기지 않는다.
        debug!("requesting USD rates from {}", self.base_url);
        let resp = self
            .client
            .get(self.endpoint(api_key))
            .send()
            .map_err(|e| CurrencyError::fetch(FetchFailure::Network, e.without_url().to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| CurrencyError::fetch(FetchFailure::Network, e.without_url().to_string()))?;
        if !status.is_success() {
            // 제공자는 잘못된 키 등에 대해 4xx 와 함께 error-type 을 보낸다.
            if let Err(err @ CurrencyError::Fetch { kind: FetchFailure::Api, .. }) =
                parse_latest_response(&body)
            {
                return Err(err);
            }
            return Err(CurrencyError::fetch(
                FetchFailure::HttpStatus,
                format!("HTTP {status}"),
            ));
        }
        parse_latest_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_body() {
        let body = r#"{"result":"success","base_code":"USD","conversion_rates":{"USD":1,"EUR":0.92}}"#;
        let rates = parse_latest_response(body).unwrap();
        assert_eq!(rates.get("USD"), Some(&1.0));
        assert_eq!(rates.get("EUR"), Some(&0.92));
    }

    #[test]
    fn api_error_surfaces_error_type() {
        let body = r#"{"result":"error","error-type":"invalid-key"}"#;
        let err = parse_latest_response(body).unwrap_err();
        assert_eq!(err, CurrencyError::fetch(FetchFailure::Api, "invalid-key"));
    }

    #[test]
    fn non_json_and_missing_rates_are_malformed() {
        assert!(matches!(
            parse_latest_response("<html>"),
            Err(CurrencyError::Fetch { kind: FetchFailure::Malformed, .. })
        ));
        assert!(matches!(
            parse_latest_response(r#"{"result":"success"}"#),
            Err(CurrencyError::Fetch { kind: FetchFailure::Malformed, .. })
        ));
    }

    #[test]
    fn endpoint_appends_key_and_path() {
        let provider = HttpRateProvider::new("https://example.test/v6/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(provider.endpoint("abc"), "https://example.test/v6/abc/latest/USD");
    }
}
