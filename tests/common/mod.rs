#![allow(dead_code)]

use std::path::Path;

use smartbudget::storage::JsonDocumentStore;
use tempfile::TempDir;

/// Creates a store rooted in a fresh temporary directory. Keep the guard alive
/// for the duration of the test.
pub fn temp_store() -> (JsonDocumentStore, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let store = JsonDocumentStore::new(temp.path().join("files"));
    (store, temp)
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let data = std::fs::read_to_string(path).expect("read document");
    serde_json::from_str(&data).expect("parse document")
}
