//! Test support utilities for fnsamples integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory holding fnsamples.toml and the blob root
    pub dir: TempDir,
}

impl Test {
    /// Create a new environment without a config file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create an environment whose fnsamples.toml holds `settings`.
    pub fn with_settings(settings: &[(&str, &str)]) -> Self {
        let t = Self::new();
        t.write_config(settings);
        t
    }

    /// Write fnsamples.toml with the given app settings.
    pub fn write_config(&self, settings: &[(&str, &str)]) {
        let mut contents = String::from("blob_root = \"blobs\"\n\n[settings]\n");
        for (key, value) in settings {
            contents.push_str(&format!("{} = {:?}\n", key, value));
        }
        std::fs::write(self.dir.path().join("fnsamples.toml"), contents)
            .expect("failed to write config");
    }

    /// Path of a blob under the blob root.
    pub fn blob_path(&self, path: &str) -> PathBuf {
        self.dir.path().join("blobs").join(path)
    }

    /// Create a blob.
    pub fn put_blob(&self, path: &str, contents: &str) {
        let file = self.blob_path(path);
        std::fs::create_dir_all(file.parent().expect("blob has a parent"))
            .expect("failed to create container");
        std::fs::write(file, contents).expect("failed to write blob");
    }

    /// Read a blob, `None` if missing.
    pub fn blob(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(self.blob_path(path)).ok()
    }
}
