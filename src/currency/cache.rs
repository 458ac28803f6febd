use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::provider::{FetchFailure, RateProvider};
use super::{CurrencyError, CurrencyTable};

/// 저장된 환율을 신선하다고 보는 기간(일).
pub const FRESHNESS_DAYS: i64 = 7;

/// 현재 시각을 제공한다. 테스트에서는 고정 시각으로 바꿔 끼운다.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// 로컬 시스템 시계.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// 디스크에 저장되는 환율 스냅샷. `last_update` 는 `YYYY-MM-DD` 로 직렬화된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCacheRecord {
    pub rates: BTreeMap<String, f64>,
    pub last_update: NaiveDate,
}

impl RateCacheRecord {
    pub fn load(path: &Path) -> Result<Self, CurrencyError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CurrencyError::Persistence(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| CurrencyError::Persistence(format!("{}: {e}", path.display())))
    }

    /// 파일 전체를 덮어쓴다.
    pub fn save(&self, path: &Path) -> Result<(), CurrencyError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CurrencyError::Persistence(e.to_string()))?;
        fs::write(path, content)
            .map_err(|e| CurrencyError::Persistence(format!("{}: {e}", path.display())))
    }

    /// 저장 날짜의 자정부터 `now` 까지가 7일 미만이면 신선하다.
    pub fn is_fresh(&self, now: NaiveDateTime) -> bool {
        self.last_update
            .and_hms_opt(0, 0, 0)
            .map_or(false, |saved| now - saved < Duration::days(FRESHNESS_DAYS))
    }
}

/// 캐시 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Unloaded,
    LoadedFresh,
    LoadedStale,
}

/// 표시 계층에 보고하는 환율 상태.
#[derive(Debug, Clone, PartialEq)]
pub enum RateStatus {
    /// 내장 기본값 또는 오래된 값을 그대로 사용 중
    NotUpdated,
    /// 신선한 캐시 파일에서 읽음
    LoadedFromFile(NaiveDate),
    /// 네트워크에서 갱신하고 파일에도 저장함
    Updated(NaiveDate),
    /// 갱신은 됐지만 파일 저장에 실패함
    UpdatedNotSaved { date: NaiveDate, reason: String },
    /// 갱신 실패. 기존 환율표는 그대로이다.
    UpdateFailed(CurrencyError),
}

/// 환율표와 캐시 파일, 갱신 정책을 관리한다.
pub struct RateCache {
    table: CurrencyTable,
    state: CacheState,
    status: RateStatus,
    last_update: Option<NaiveDate>,
    path: PathBuf,
    provider: Box<dyn RateProvider>,
    clock: Box<dyn Clock>,
}

impl RateCache {
    /// 내장 환율표로 시작하는 미적재 캐시를 만든다.
    pub fn new(
        path: impl Into<PathBuf>,
        provider: Box<dyn RateProvider>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            table: CurrencyTable::bundled(),
            state: CacheState::Unloaded,
            status: RateStatus::NotUpdated,
            last_update: None,
            path: path.into(),
            provider,
            clock,
        }
    }

    /// 캐시를 만들고 곧바로 시작 시 적재 정책을 수행한다.
    pub fn startup(
        path: impl Into<PathBuf>,
        provider: Box<dyn RateProvider>,
        clock: Box<dyn Clock>,
        api_key: &str,
    ) -> Self {
        let mut cache = Self::new(path, provider, clock);
        cache.load(api_key);
        cache
    }

    /// 신선한 캐시 파일이 있으면 병합하고, 없으면 키가 있을 때만 네트워크 갱신을 시도한다.
    /// 어떤 경우에도 실패하지 않는다.
    pub fn load(&mut self, api_key: &str) -> CacheState {
        let now = self.clock.now();
        match RateCacheRecord::load(&self.path) {
            Ok(record) if record.is_fresh(now) => {
                let merged = self.table.merge_known(&record.rates);
                info!(
                    "loaded {merged} rates from {} ({})",
                    self.path.display(),
                    record.last_update
                );
                self.last_update = Some(record.last_update);
                self.state = CacheState::LoadedFresh;
                self.status = RateStatus::LoadedFromFile(record.last_update);
                return self.state;
            }
            Ok(record) => info!("rate cache from {} is stale", record.last_update),
            Err(e) => debug!("rate cache unavailable: {e}"),
        }

        self.state = CacheState::LoadedStale;
        if api_key.trim().is_empty() {
            self.status = RateStatus::NotUpdated;
        } else if let Err(e) = self.refresh(api_key) {
            warn!("startup rate refresh failed: {e}");
        }
        self.state
    }

    /// 현재 환율표.
    pub fn get_rate_table(&self) -> &CurrencyTable {
        &self.table
    }

    /// 네트워크에서 환율을 받아 표 전체를 교체하고 파일에 저장한다.
    ///
    /// 실패하면 기존 표는 손대지 않는다. 저장 실패는 갱신 자체를 실패시키지 않으며
    /// 상태에만 반영된다.
    pub fn refresh(&mut self, api_key: &str) -> Result<CurrencyTable, CurrencyError> {
        let key = api_key.trim();
        if key.is_empty() {
            return Err(CurrencyError::NoApiKey);
        }

        info!("refreshing currency rates");
        let table = match self.provider.fetch_usd_rates(key).and_then(|rates| {
            CurrencyTable::from_fetched(&rates)
                .map_err(|reason| CurrencyError::fetch(FetchFailure::Malformed, reason))
        }) {
            Ok(table) => table,
            Err(e) => {
                warn!("rate refresh failed: {e}");
                self.status = RateStatus::UpdateFailed(e.clone());
                return Err(e);
            }
        };

        let today = self.clock.now().date();
        self.table = table;
        self.last_update = Some(today);
        self.state = CacheState::LoadedFresh;

        let record = RateCacheRecord {
            rates: self.table.as_map().clone(),
            last_update: today,
        };
        self.status = match record.save(&self.path) {
            Ok(()) => {
                info!("currency rates updated ({today})");
                RateStatus::Updated(today)
            }
            Err(e) => {
                warn!("currency rates updated but not saved: {e}");
                RateStatus::UpdatedNotSaved {
                    date: today,
                    reason: e.to_string(),
                }
            }
        };
        Ok(self.table.clone())
    }

    pub fn state(&self) -> CacheState {
        self.state
    }

    pub fn status(&self) -> &RateStatus {
        &self.status
    }

    pub fn last_update(&self) -> Option<NaiveDate> {
        self.last_update
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
