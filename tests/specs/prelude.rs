//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the bulletin CLI inside a temporary
//! project directory.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Roster used by most specs: two people sharing nothing, one sharing a
/// channel with another.
pub const ROSTER: &str = r#"
[[member]]
name = "Maria Silva"
registration = "123.456-7"
unit = "3BPM"
channel = "1001"

[[member]]
name = "Joao Souza"
registration = "765.432-1"
channel = "1002"

[[member]]
name = "Ana Souza"
registration = "555.555-5"
channel = "1002"
"#;

/// Returns a Command configured to run the bulletin binary with a clean
/// environment.
pub fn bulletin_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bulletin"));
    cmd.env_remove("BULLETIN_CONFIG")
        .env_remove("BULLETIN_ROSTER")
        .env_remove("BULLETIN_LOG");
    cmd
}

/// Temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// Project with `roster.toml` holding [`ROSTER`].
    pub fn with_roster() -> Self {
        let project = Self::empty();
        project.file("roster.toml", ROSTER);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write a bulletin whose pages are separated by form feeds.
    pub fn bulletin(&self, name: &str, pages: &[&str]) -> PathBuf {
        self.file(name, &pages.join("\x0c"))
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    /// Outbox records written by `check --deliver`.
    pub fn outbox(&self, name: &str) -> Vec<serde_json::Value> {
        self.read(name).lines().map(|l| serde_json::from_str(l).unwrap()).collect()
    }
}
