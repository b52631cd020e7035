//! End-to-end tests: stores persisted to and restored from real files.

mod atomicity;
mod overlays;
mod round_trip;
mod unknown_entries;

use std::path::PathBuf;

use tempfile::TempDir;
use typedini_foundation::Value;
use typedini_store::Store;

/// A scratch directory plus a path inside it; the directory lives as long as
/// the fixture.
pub struct Scratch {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ini");
        Self { _dir: dir, path }
    }

    pub fn sibling(&self, name: &str) -> PathBuf {
        self.path.with_file_name(name)
    }

    pub fn write(&self, text: &str) {
        std::fs::write(&self.path, text).unwrap();
    }

    pub fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap()
    }
}

/// The store used by most scenarios: a server section and a user whitelist.
pub fn server_store(path: &std::path::Path) -> Store {
    let mut cfg = Store::new(path);
    cfg.define("server.port", 8080).unwrap();
    cfg.define("server.host", "127.0.0.1").unwrap();
    cfg.define("users.whitelist", Value::str_set(["root", "admin"]))
        .unwrap();
    cfg
}
