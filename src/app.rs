use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};

use crate::category::Category;
use crate::config::{self, Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::currency::{
    currency_by_code, Clock, CurrencyError, CurrencyTable, HttpRateProvider, RateCache,
    RateProvider, SystemClock, TRACKED_CURRENCIES,
};
use crate::history::{HistoryEntry, HistoryError, HistoryLog};
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, MenuChoice};
use crate::units;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 단위 변환 오류
    Conversion(ConversionError),
    /// 환율 갱신 오류
    Currency(CurrencyError),
    /// 기록 저장 오류
    History(HistoryError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Conversion(e) => write!(f, "conversion error: {e}"),
            AppError::Currency(e) => write!(f, "currency error: {e}"),
            AppError::History(e) => write!(f, "history error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<CurrencyError> for AppError {
    fn from(value: CurrencyError) -> Self {
        AppError::Currency(value)
    }
}

impl From<HistoryError> for AppError {
    fn from(value: HistoryError) -> Self {
        AppError::History(value)
    }
}

/// 현재 변환 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ordinary,
    Currency,
}

/// 일반 단위 변환 모드의 선택 상태. 단위는 표준 이름으로 보관한다.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinaryModeState {
    pub category: Category,
    pub from: String,
    pub to: String,
}

impl OrdinaryModeState {
    /// 범주의 첫 번째, 두 번째 단위를 기본 선택으로 한다.
    pub fn for_category(category: Category) -> Self {
        let table = units::units_for(category);
        let first = table.first().map(|u| u.name).unwrap_or_default();
        let second = table.get(1).map(|u| u.name).unwrap_or(first);
        Self {
            category,
            from: first.to_string(),
            to: second.to_string(),
        }
    }
}

/// 통화 모드의 선택 상태 (통화 코드).
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyModeState {
    pub from: String,
    pub to: String,
}

impl Default for CurrencyModeState {
    fn default() -> Self {
        Self {
            from: TRACKED_CURRENCIES[0].code.to_string(),
            to: TRACKED_CURRENCIES[1].code.to_string(),
        }
    }
}

/// 변환 한 번의 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub value: f64,
    /// 소수 8자리 반올림 후 끝의 0을 지운 표시 문자열
    pub formatted: String,
}

/// 표시 계층이 공유하는 변환기 세션.
pub struct Session {
    config: Config,
    tr: Translator,
    mode: Mode,
    ordinary: OrdinaryModeState,
    currency: CurrencyModeState,
    rates: RateCache,
    api_key: String,
    history: HistoryLog,
    /// 마지막으로 성공한 변환의 입력. 교환 후 재변환에 쓴다.
    last_input: Option<String>,
}

impl Session {
    /// API 키 파일을 읽고 환율 캐시를 시작한 뒤, 설정에 따라 기록을 불러온다.
    pub fn new(
        config: Config,
        tr: Translator,
        provider: Box<dyn RateProvider>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self::with_api_key(config, tr, provider, clock, None)
    }

    /// `api_key` 가 주어지면 파일의 키 대신 쓴다 (파일에는 저장하지 않음).
    pub fn with_api_key(
        config: Config,
        tr: Translator,
        provider: Box<dyn RateProvider>,
        clock: Box<dyn Clock>,
        api_key: Option<String>,
    ) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| config::load_api_key(&config.api_key_file));
        let rates = RateCache::startup(config.rates_file.clone(), provider, clock, &api_key);
        let history = if config.persist_history {
            let mut history = HistoryLog::load_json(&config.history_file);
            if !history.is_empty() {
                history.record(tr.t(i18n::keys::HISTORY_LOADED));
            }
            history
        } else {
            HistoryLog::new()
        };
        info!(
            "session started (lang={}, history entries={})",
            tr.language_code(),
            history.len()
        );
        Self {
            ordinary: OrdinaryModeState::for_category(config.default_category),
            currency: CurrencyModeState::default(),
            mode: Mode::Ordinary,
            config,
            tr,
            rates,
            api_key,
            history,
            last_input: None,
        }
    }

    /// 설정의 엔드포인트와 시스템 시계로 세션을 연다.
    pub fn open(
        config: Config,
        tr: Translator,
        api_key: Option<String>,
    ) -> Result<Self, AppError> {
        let provider = HttpRateProvider::new(
            config.rates_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self::with_api_key(
            config,
            tr,
            Box::new(provider),
            Box::new(SystemClock),
            api_key,
        ))
    }

    pub fn translator(&self) -> &Translator {
        &self.tr
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.last_input = None;
        }
        self.mode = mode;
    }

    pub fn ordinary(&self) -> &OrdinaryModeState {
        &self.ordinary
    }

    pub fn currency(&self) -> &CurrencyModeState {
        &self.currency
    }

    /// 범주를 바꾸고 단위 선택을 그 범주의 첫 두 단위로 되돌린다.
    pub fn set_category(&mut self, category: Category) {
        self.ordinary = OrdinaryModeState::for_category(category);
        self.last_input = None;
    }

    /// 현재 모드의 단위(또는 통화 코드)를 고른다. 별칭과 라벨도 받는다.
    pub fn set_units(&mut self, from: &str, to: &str) -> Result<(), ConversionError> {
        match self.mode {
            Mode::Ordinary => {
                let category = self.ordinary.category;
                let lookup = |q: &str| {
                    units::find_unit(category, q)
                        .map(|u| u.name.to_string())
                        .ok_or_else(|| ConversionError::InvalidUnit(format!("{q} ({category})")))
                };
                let (from, to) = (lookup(from)?, lookup(to)?);
                self.ordinary.from = from;
                self.ordinary.to = to;
            }
            Mode::Currency => {
                let lookup = |q: &str| {
                    currency_code_of(q)
                        .ok_or_else(|| ConversionError::InvalidUnit(q.to_string()))
                };
                let (from, to) = (lookup(from)?, lookup(to)?);
                self.currency.from = from;
                self.currency.to = to;
            }
        }
        Ok(())
    }

    /// 현재 모드의 원본/대상 단위를 맞바꾼다.
    pub fn swap_units(&mut self) {
        match self.mode {
            Mode::Ordinary => std::mem::swap(&mut self.ordinary.from, &mut self.ordinary.to),
            Mode::Currency => std::mem::swap(&mut self.currency.from, &mut self.currency.to),
        }
    }

    /// 단위를 맞바꾸고, 직전에 변환한 입력이 있으면 새 방향으로 다시 변환한다.
    pub fn swap_and_convert(&mut self) -> Option<Result<ConversionOutcome, ConversionError>> {
        self.swap_units();
        let input = self.last_input.clone()?;
        Some(self.convert(&input))
    }

    /// 입력 문자열을 현재 모드로 변환하고 기록에 남긴다.
    ///
    /// 원본과 대상 단위가 같으면 값을 그대로 돌려주며 기록하지 않는다.
    pub fn convert(&mut self, input_text: &str) -> Result<ConversionOutcome, ConversionError> {
        let outcome = self.convert_and_record(input_text)?;
        self.last_input = Some(input_text.to_string());
        Ok(outcome)
    }

    fn convert_and_record(&mut self, input_text: &str) -> Result<ConversionOutcome, ConversionError> {
        let value = conversion::parse_value(input_text)?;
        let entry = match self.mode {
            Mode::Ordinary => {
                let state = &self.ordinary;
                if state.from == state.to {
                    return Ok(outcome(value));
                }
                let result = conversion::convert(state.category, &state.from, &state.to, value)?;
                HistoryEntry {
                    value,
                    from: unit_label(state.category, &state.from),
                    result,
                    to: unit_label(state.category, &state.to),
                    tag: self.tr.category_name(state.category),
                }
            }
            Mode::Currency => {
                let state = &self.currency;
                if state.from == state.to {
                    return Ok(outcome(value));
                }
                let result = conversion::convert_currency(
                    self.rates.get_rate_table(),
                    &state.from,
                    &state.to,
                    value,
                )?;
                HistoryEntry {
                    value,
                    from: currency_label(&state.from),
                    result,
                    to: currency_label(&state.to),
                    tag: self.tr.t(i18n::keys::HISTORY_CURRENCY_TAG),
                }
            }
        };
        let result = entry.result;
        self.history.record(entry);
        Ok(outcome(result))
    }

    /// 네트워크에서 환율을 갱신한다. 실패해도 기존 환율표는 유지된다.
    pub fn update_rates(&mut self) -> Result<(), CurrencyError> {
        self.rates.refresh(&self.api_key).map(|_| ())
    }

    /// 키를 파일에 저장하고 이후 갱신에 사용한다.
    pub fn save_api_key(&mut self, key: &str) -> Result<(), ConfigError> {
        config::save_api_key(&self.config.api_key_file, key)?;
        self.api_key = key.trim().to_string();
        info!("API key saved to {}", self.config.api_key_file.display());
        // 새 키로 캐시를 다시 읽는다. 오래됐거나 없으면 바로 갱신을 시도한다.
        let state = self.rates.load(&self.api_key);
        debug!("rate cache after key change: {state:?}");
        Ok(())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn rate_table(&self) -> &CurrencyTable {
        self.rates.get_rate_table()
    }

    pub fn rate_cache(&self) -> &RateCache {
        &self.rates
    }

    /// 현재 언어로 표시한 환율 상태.
    pub fn rate_status_text(&self) -> String {
        self.tr.rate_status(self.rates.status())
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// 현재 언어의 헤더로 기록을 텍스트 파일에 내보낸다.
    pub fn export_history(&self, path: &Path) -> Result<(), HistoryError> {
        let header = self.tr.t(i18n::keys::HISTORY_EXPORT_HEADER);
        self.history.save_text(path, &header)
    }

    /// 설정에 따라 기록을 저장한다.
    pub fn shutdown(&self) -> Result<(), HistoryError> {
        if self.config.persist_history {
            self.history.save_json(&self.config.history_file)?;
            info!("history saved to {}", self.config.history_file.display());
        }
        Ok(())
    }
}

fn outcome(value: f64) -> ConversionOutcome {
    ConversionOutcome {
        value,
        formatted: conversion::format_result(value),
    }
}

fn unit_label(category: Category, name: &str) -> String {
    units::find_unit(category, name)
        .map(|u| u.label())
        .unwrap_or_else(|| name.to_string())
}

fn currency_label(code: &str) -> String {
    currency_by_code(code)
        .map(|c| c.label())
        .unwrap_or_else(|| code.to_string())
}

/// `USD`, `usd`, `USD (US Dollar)` 모두 코드로 받아들인다.
fn currency_code_of(query: &str) -> Option<String> {
    let head = query.trim().split_whitespace().next().unwrap_or_default();
    currency_by_code(head).map(|c| c.code.to_string())
}

fn is_eof(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
}

fn finish(session: &Session) {
    if let Err(e) = session.shutdown() {
        warn!("history not saved: {e}");
    }
    println!("{}", session.translator().t(i18n::keys::APP_EXIT));
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 입력이 닫히면 종료와 같이 처리한다.
pub fn run(session: &mut Session) -> Result<(), AppError> {
    println!("{}", session.rate_status_text());
    loop {
        let step = ui_cli::main_menu(session.translator()).and_then(|choice| {
            match choice {
                MenuChoice::Ordinary => ui_cli::handle_ordinary(session)?,
                MenuChoice::Currency => ui_cli::handle_currency(session)?,
                MenuChoice::Swap => ui_cli::handle_swap(session),
                MenuChoice::UpdateRates => ui_cli::handle_update_rates(session),
                MenuChoice::SaveApiKey => ui_cli::handle_save_api_key(session)?,
                MenuChoice::ShowHistory => ui_cli::handle_show_history(session),
                MenuChoice::ClearHistory => ui_cli::handle_clear_history(session),
                MenuChoice::SaveHistory => ui_cli::handle_save_history(session)?,
                MenuChoice::Exit => return Ok(false),
            }
            Ok(true)
        });
        match step {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) if is_eof(&e) => break,
            Err(e) => return Err(e),
        }
    }
    finish(session);
    Ok(())
}
