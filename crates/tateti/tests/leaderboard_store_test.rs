//! Tests for leaderboard persistence.

use tateti::{CAPACITY, JsonFileStore, Leaderboard, ScoreEntry, ScoreStore, record_score};
use tempfile::TempDir;

/// Creates a store in a fresh temp dir; the dir must stay in scope.
fn setup_store() -> (TempDir, JsonFileStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonFileStore::new(dir.path().join("scores.json"));
    (dir, store)
}

#[test]
fn test_saving_eleven_keeps_ten_fastest() {
    let (_dir, store) = setup_store();
    let times = [42.0, 8.5, 19.0, 73.25, 11.0, 60.0, 5.0, 33.3, 27.0, 90.0, 15.0];
    for (i, secs) in times.into_iter().enumerate() {
        record_score(&store, ScoreEntry::new(format!("player{i}"), secs)).expect("Record failed");
    }

    let board = store.load().expect("Load failed");
    let saved: Vec<f64> = board.entries().iter().map(|e| *e.elapsed_seconds()).collect();
    assert_eq!(saved.len(), CAPACITY);
    assert_eq!(
        saved,
        vec![5.0, 8.5, 11.0, 15.0, 19.0, 27.0, 33.3, 42.0, 60.0, 73.25]
    );
}

#[test]
fn test_file_is_name_time_records() {
    let (_dir, store) = setup_store();
    record_score(&store, ScoreEntry::new("Ana", 12.75)).expect("Record failed");

    let raw = std::fs::read_to_string(store.path()).expect("Read failed");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("Not JSON");
    assert_eq!(json, serde_json::json!([{ "name": "Ana", "time": 12.75 }]));
}

#[test]
fn test_load_sorts_hand_edited_file() {
    let (_dir, store) = setup_store();
    std::fs::write(
        store.path(),
        r#"[{"name":"slow","time":80},{"name":"fast","time":3.5}]"#,
    )
    .expect("Write failed");

    let board = store.load().expect("Load failed");
    assert_eq!(board.entries()[0].name(), "fast");
    assert_eq!(board.entries()[1].name(), "slow");
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonFileStore::new(dir.path().join("nested/deeper/scores.json"));
    store
        .save(&Leaderboard::from_entries(vec![ScoreEntry::new("Ana", 1.0)]))
        .expect("Save failed");
    assert_eq!(store.load().expect("Load failed").len(), 1);
}
