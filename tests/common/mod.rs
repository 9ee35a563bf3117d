// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Directory holding the checked-in fixtures
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// The `ops` module source tree
pub fn ops_module() -> PathBuf {
    fixtures_dir().join("ops")
}

/// The published sidebar index of the `ops` module
pub fn ops_sidebar() -> PathBuf {
    fixtures_dir().join("ops-sidebar-items.js")
}

pub fn ops_sidebar_text() -> String {
    fs::read_to_string(ops_sidebar()).unwrap()
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Copy the `ops` fixtures into a scratch directory.
///
/// Returns (TempDir, module_dir, sidebar_path) - keep the TempDir alive to
/// prevent cleanup.
pub fn scratch_ops() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let module = temp_dir.path().join("ops");
    copy_dir(&ops_module(), &module);

    let sidebar = module.join("sidebar-items.js");
    fs::copy(ops_sidebar(), &sidebar).unwrap();
    (temp_dir, module, sidebar)
}
