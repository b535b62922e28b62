//! Common test utilities for tsinit-projects
//!
//! Provides a fake package manager and temporary directory helpers so the
//! pipeline can run end to end without pnpm or a terminal.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// Temporary parent directory for new projects
pub fn temp_parent() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, path)
}

/// Relative paths of every entry under `root`, sorted, directories suffixed with `/`
pub fn list_tree(root: &Utf8PathBuf) -> Vec<String> {
    fn walk(root: &Utf8PathBuf, dir: &Utf8PathBuf, out: &mut Vec<String>) {
        for entry in dir.read_dir_utf8().unwrap() {
            let entry = entry.unwrap();
            let path = entry.path().to_path_buf();
            let rel = path.strip_prefix(root).unwrap().to_string();
            if path.is_dir() {
                out.push(format!("{}/", rel));
                walk(root, &path, out);
            } else {
                out.push(rel);
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
