use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::category::Category;
use crate::currency::provider::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// 설정 파일 기본 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 빠진 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto" 또는 언어 코드(en/es/de/ru/zh)
    pub language: String,
    /// TOML 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    pub default_category: Category,
    pub api_key_file: PathBuf,
    pub rates_file: PathBuf,
    pub history_file: PathBuf,
    pub rates_base_url: String,
    pub request_timeout_secs: u64,
    /// 시작 시 기록을 읽고 종료 시 저장한다.
    pub persist_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_category: Category::Mass,
            api_key_file: PathBuf::from("converter_api.json"),
            rates_file: PathBuf::from("currency_rates.json"),
            history_file: PathBuf::from("converter_history.json"),
            rates_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            persist_history: true,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// API 키 파일(JSON) 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
            ConfigError::Json(e) => write!(f, "API key file error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        ConfigError::Json(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 써 두고 돌려준다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!("created default config at {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ApiKeyFile {
    #[serde(default)]
    api_key: String,
}

/// API 키 파일을 읽는다. 파일이 없거나 깨져 있으면 빈 문자열.
pub fn load_api_key(path: &Path) -> String {
    let parsed = fs::read_to_string(path)
        .map_err(ConfigError::from)
        .and_then(|s| serde_json::from_str::<ApiKeyFile>(&s).map_err(ConfigError::from));
    match parsed {
        Ok(file) => file.api_key.trim().to_string(),
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            warn!("API key not loaded from {}: {e}", path.display());
            String::new()
        }
    }
}

/// API 키를 `{ "api_key": ... }` 형식으로 저장한다.
pub fn save_api_key(path: &Path, key: &str) -> Result<(), ConfigError> {
    let file = ApiKeyFile {
        api_key: key.trim().to_string(),
    };
    fs::write(path, serde_json::to_string_pretty(&file)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            language = "de"
            default_category = "Temperature"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.language, "de");
        assert_eq!(cfg.default_category, Category::Temperature);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert!(cfg.persist_history);
        assert_eq!(cfg.rates_file, PathBuf::from("currency_rates.json"));
    }

    #[test]
    fn load_or_create_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let first = load_or_create(&path).unwrap();
        assert!(path.exists());
        let second = load_or_create(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn api_key_round_trips_and_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("converter_api.json");
        assert_eq!(load_api_key(&path), "");
        save_api_key(&path, "  secret-key ").unwrap();
        assert_eq!(load_api_key(&path), "secret-key");

        fs::write(&path, "not json").unwrap();
        assert_eq!(load_api_key(&path), "");
    }
}
