//! On-disk key-value store tests.

use inputviz::storage::{FileStore, KeyValueStore};

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

    assert_eq!(store.get("chart_data"), None);
    store.set("chart_data", r#"{"bar":[]}"#);
    store.set("chart_data", r#"{"pie":[]}"#);
    assert_eq!(store.get("chart_data"), Some(r#"{"pie":[]}"#.to_string()));

    store.remove("chart_data");
    assert_eq!(store.get("chart_data"), None);
}

#[test]
fn test_file_store_keys_are_independent_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();

    store.set("a", "1");
    store.set("b", "2");
    assert!(dir.path().join("a.json").exists());
    assert!(dir.path().join("b.json").exists());

    store.remove("a");
    assert_eq!(store.get("a"), None);
    assert_eq!(store.get("b"), Some("2".to_string()));
}

#[test]
fn test_remove_missing_key_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();
    store.remove("never_written");
}

#[test]
fn test_new_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut store = FileStore::new(nested.clone()).unwrap();
    store.set("k", "v");
    assert!(nested.join("k.json").exists());
}
