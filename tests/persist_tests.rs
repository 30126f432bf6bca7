//! Persistence tests - the JSON high-score store.

use std::fs;
use std::path::PathBuf;

use tui_columns::persist::{merge_high_score, HighScoreStore, JsonFileStore, MemoryStore};

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("tui_columns_{}_{}.json", name, std::process::id()));
    path
}

#[test]
fn test_missing_file_reads_as_zero() {
    let path = temp_path("missing");
    let _ = fs::remove_file(&path);

    let store = JsonFileStore::new(&path);
    assert_eq!(store.get_high_score(), 0);
}

#[test]
fn test_write_then_reload() {
    let path = temp_path("reload");
    let _ = fs::remove_file(&path);

    {
        let mut store = JsonFileStore::new(&path);
        store.set_high_score(700).unwrap();
        assert_eq!(store.get_high_score(), 700);
    }

    // A fresh store instance reads the persisted value back.
    let store = JsonFileStore::new(&path);
    assert_eq!(store.get_high_score(), 700);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_corrupt_file_reads_as_zero() {
    let path = temp_path("corrupt");
    fs::write(&path, "not json at all {{{").unwrap();

    let store = JsonFileStore::new(&path);
    assert_eq!(store.get_high_score(), 0);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_merge_only_persists_improvements() {
    let mut store = MemoryStore::new(400);

    assert_eq!(merge_high_score(&mut store, 250).unwrap(), 400);
    assert_eq!(store.get_high_score(), 400);

    assert_eq!(merge_high_score(&mut store, 450).unwrap(), 450);
    assert_eq!(store.get_high_score(), 450);
}
