//! Shared test fixtures.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use banyo::catalog::Catalog;
use banyo::prefs::PrefsStore;
use banyo::state::AppStore;

/// Fresh store over a temp preference file. Keep the `TempDir` alive for the
/// duration of the test.
pub fn make_store() -> (AppStore, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let store = store_at(dir.path().join("prefs.json"));
    (store, dir)
}

/// Store backed by a specific preference path, for persistence round trips.
pub fn store_at(path: PathBuf) -> AppStore {
    let prefs = PrefsStore::load(path).expect("load prefs");
    AppStore::new(prefs, Arc::new(Catalog::bundled()))
}

pub fn prefs_path(dir: &TempDir) -> PathBuf {
    dir.path().join("prefs.json")
}
