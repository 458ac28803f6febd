//! 최근 변환 기록.
//!
//! 저장 순서는 삽입 순서이고, 화면에는 최신 항목부터 보여준다.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use log::{debug, info};

/// 메모리에 보관하는 최대 기록 수.
pub const HISTORY_LIMIT: usize = 20;

/// 내보내기 파일에서 헤더 아래에 긋는 구분선 길이.
const RULE_WIDTH: usize = 50;

/// 기록 파일 입출력 오류.
#[derive(Debug)]
pub enum HistoryError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "history file error: {e}"),
            HistoryError::Json(e) => write!(f, "history format error: {e}"),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<std::io::Error> for HistoryError {
    fn from(value: std::io::Error) -> Self {
        HistoryError::Io(value)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(value: serde_json::Error) -> Self {
        HistoryError::Json(value)
    }
}

/// 변환 한 건의 설명. `1.0 Kilogram (kg) → 1000.000000 Gram (g) (Mass)` 형식으로 렌더링된다.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub value: f64,
    pub from: String,
    pub result: f64,
    pub to: String,
    /// 범주 이름 또는 통화 표시
    pub tag: String,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} → {:.6} {} ({})",
            format_input(self.value),
            self.from,
            self.result,
            self.to,
            self.tag
        )
    }
}

/// 입력값 표기. 정수도 `1.0` 처럼 소수점을 남기고, 지수 표기는 `1e-05`, `1.5e+16` 형식을 쓴다.
fn format_input(value: f64) -> String {
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

impl From<HistoryEntry> for String {
    fn from(value: HistoryEntry) -> Self {
        value.to_string()
    }
}

/// 크기가 제한된 추가 전용 기록.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLog {
    entries: VecDeque<String>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기존 항목들로 만든다. 한도를 넘으면 오래된 것부터 버린다.
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut log = Self::new();
        for entry in entries {
            log.record(entry);
        }
        log
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
        while self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 삽입 순서 그대로.
    pub fn export(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// 최신 항목부터.
    pub fn display(&self) -> Vec<String> {
        self.entries.iter().rev().cloned().collect()
    }

    /// 화면용 번호 붙은 줄들 (최신이 1번).
    pub fn display_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .rev()
            .enumerate()
            .map(|(i, e)| format!("{}. {e}", i + 1))
            .collect()
    }

    /// 내보내기 문서. 헤더, 구분선, 삽입 순서대로 번호 붙은 항목.
    pub fn export_text(&self, header: &str) -> String {
        let mut out = String::new();
        out.push_str(header);
        out.push('\n');
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{}. {entry}\n", i + 1));
        }
        out
    }

    pub fn save_text(&self, path: &Path, header: &str) -> Result<(), HistoryError> {
        fs::write(path, self.export_text(header))?;
        info!("history exported to {}", path.display());
        Ok(())
    }

    /// JSON 문자열 배열을 읽는다. 파일이 없거나 깨져 있으면 빈 기록을 돌려준다.
    pub fn load_json(path: &Path) -> Self {
        match Self::try_load_json(path) {
            Ok(log) => log,
            Err(e) => {
                debug!("history not loaded from {}: {e}", path.display());
                Self::new()
            }
        }
    }

    fn try_load_json(path: &Path) -> Result<Self, HistoryError> {
        let content = fs::read_to_string(path)?;
        let entries: Vec<String> = serde_json::from_str(&content)?;
        Ok(Self::with_entries(entries))
    }

    pub fn save_json(&self, path: &Path) -> Result<(), HistoryError> {
        let content = serde_json::to_string_pretty(&self.export())?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_renders_value_units_result_and_tag() {
        let entry = HistoryEntry {
            value: 1.0,
            from: "Kilogram (kg)".into(),
            result: 1000.0,
            to: "Gram (g)".into(),
            tag: "Mass".into(),
        };
        assert_eq!(
            entry.to_string(),
            "1.0 Kilogram (kg) → 1000.000000 Gram (g) (Mass)"
        );
    }

    #[test]
    fn input_value_uses_two_digit_signed_exponent() {
        assert_eq!(format_input(1e-5), "1e-05");
        assert_eq!(format_input(-2.5e-7), "-2.5e-07");
        assert_eq!(format_input(1e16), "1e+16");
        assert_eq!(format_input(1.5e120), "1.5e+120");
        assert_eq!(format_input(0.0001), "0.0001");
        assert_eq!(format_input(12.0), "12.0");
        assert_eq!(format_input(0.0), "0.0");
    }

    #[test]
    fn display_is_newest_first_and_export_is_insertion_order() {
        let log = HistoryLog::with_entries(["a", "b", "c"]);
        assert_eq!(log.export(), vec!["a", "b", "c"]);
        assert_eq!(log.display(), vec!["c", "b", "a"]);
        assert_eq!(log.display_lines(), vec!["1. c", "2. b", "3. a"]);
    }

    #[test]
    fn export_text_has_header_rule_and_numbered_lines() {
        let log = HistoryLog::with_entries(["first", "second"]);
        let text = log.export_text("Conversion History:");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Conversion History:");
        assert_eq!(lines[1], "=".repeat(50));
        assert_eq!(lines[2], "1. first");
        assert_eq!(lines[3], "2. second");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = HistoryLog::with_entries(["x"]);
        log.clear();
        assert!(log.is_empty());
    }
}
