//! Batch loading from disk: silent skips, ordering, store summary.

use siteboard::data::{self, ColumnPolicy};
use siteboard::store::FileStore;
use std::fs;

#[test]
fn test_auto_load_skips_bad_files_and_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.csv"), "SiteID,City\nA1,Cairo\nA2,Giza").unwrap();
    fs::write(dir.path().join("empty.csv"), "\n  \n").unwrap();
    fs::write(dir.path().join("b.csv"), "SiteID,Region\nB1,North").unwrap();

    let names: Vec<String> = ["a.csv", "empty.csv", "missing.csv", "b.csv"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut store = FileStore::new();
    let loaded = data::load_auto_files(&mut store, dir.path(), &names, ColumnPolicy::KeepAll);

    assert_eq!(loaded, 2);
    let names: Vec<&str> = store.list().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a.csv", "b.csv"]);

    let summary = store.summary();
    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.row_count, 3);
}

#[test]
fn test_first_loaded_file_becomes_current() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.csv"), "SiteID\nA1").unwrap();
    fs::write(dir.path().join("b.csv"), "SiteID\nB1").unwrap();

    let names = vec!["a.csv".to_string(), "b.csv".to_string()];
    let mut store = FileStore::new();
    data::load_auto_files(&mut store, dir.path(), &names, ColumnPolicy::KeepAll);

    assert_eq!(store.current().unwrap().name, "a.csv");
}

#[test]
fn test_load_file_error_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new();

    let result = data::load_file(
        &mut store,
        &dir.path().join("nope.csv"),
        ColumnPolicy::KeepAll,
    );

    assert!(result.is_err());
    assert!(store.list().is_empty());
    assert_eq!(store.summary().to_string(), "No data loaded.");
}

#[test]
fn test_load_with_important_columns_policy() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("wide.csv"),
        "SiteID,InternalNote,City\nA1,secret,Cairo",
    )
    .unwrap();

    let mut store = FileStore::new();
    let dataset = data::load_file(
        &mut store,
        &dir.path().join("wide.csv"),
        ColumnPolicy::ImportantOnly,
    )
    .unwrap();

    assert_eq!(dataset.headers, vec!["SiteID", "City"]);
    assert_eq!(dataset.rows[0].get("InternalNote"), "");
}
