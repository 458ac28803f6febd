//! 변환 엔진과 환율 캐시를 라이브러리로 분리하여 CLI와 GUI가 같은 세션을 공유한다.

pub mod app;
pub mod category;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod history;
pub mod i18n;
pub mod ui_cli;
pub mod units;
