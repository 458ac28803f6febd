//! 변환 기록 보관/내보내기 테스트.
use std::fs;

use universal_converter::history::{HistoryLog, HISTORY_LIMIT};

#[test]
fn keeps_only_the_most_recent_twenty() {
    let mut log = HistoryLog::new();
    for i in 1..=25 {
        log.record(format!("entry {i}"));
    }
    assert_eq!(log.len(), HISTORY_LIMIT);

    let exported = log.export();
    assert_eq!(exported.first().map(String::as_str), Some("entry 6"));
    assert_eq!(exported.last().map(String::as_str), Some("entry 25"));
    for i in 1..=5 {
        assert!(!exported.contains(&format!("entry {i}")));
    }
    let expected: Vec<String> = (6..=25).map(|i| format!("entry {i}")).collect();
    assert_eq!(exported, expected);
    assert_eq!(log.display().first().map(String::as_str), Some("entry 25"));
}

#[test]
fn text_export_is_numbered_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conversion_history.txt");
    let log = HistoryLog::with_entries(["1.0 Kilogram (kg) → 1000.000000 Gram (g) (Mass)", "b"]);

    log.save_text(&path, "Umrechnungsverlauf:").unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let expected = format!(
        "Umrechnungsverlauf:\n{}\n1. 1.0 Kilogram (kg) → 1000.000000 Gram (g) (Mass)\n2. b\n",
        "=".repeat(50)
    );
    assert_eq!(text, expected);
}

#[test]
fn json_persistence_restores_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("converter_history.json");
    let log = HistoryLog::with_entries(["a", "b", "c"]);
    log.save_json(&path).unwrap();

    let restored = HistoryLog::load_json(&path);
    assert_eq!(restored, log);
}

#[test]
fn unreadable_history_yields_empty_log() {
    let dir = tempfile::tempdir().unwrap();
    assert!(HistoryLog::load_json(&dir.path().join("missing.json")).is_empty());

    let corrupt = dir.path().join("corrupt.json");
    fs::write(&corrupt, "[1, 2").unwrap();
    assert!(HistoryLog::load_json(&corrupt).is_empty());
}

#[test]
fn oversized_history_file_is_trimmed_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("converter_history.json");
    let entries: Vec<String> = (0..30).map(|i| i.to_string()).collect();
    fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();

    let log = HistoryLog::load_json(&path);
    assert_eq!(log.len(), HISTORY_LIMIT);
    assert_eq!(log.export().first().map(String::as_str), Some("10"));
}
