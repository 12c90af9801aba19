// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config and roster file discovery.
//!
//! Walks from the current directory up to the git root looking for bulletin.toml.

use std::path::{Path, PathBuf};

use crate::config::defaults::files;

/// Find bulletin.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(files::CONFIG);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Roster path used when none is given explicitly: next to the config file
/// when there is one, otherwise in `cwd`.
pub fn default_roster_path(config_path: Option<&Path>, cwd: &Path) -> PathBuf {
    config_path
        .and_then(Path::parent)
        .unwrap_or(cwd)
        .join(files::ROSTER)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
