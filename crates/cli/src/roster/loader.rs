// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Roster file loading and registration.
//!
//! The roster file is TOML with one `[[member]]` table per person:
//!
//! ```toml
//! [[member]]
//! name = "Maria Silva"
//! registration = "123.456-7"
//! unit = "3BPM"
//! channel = "987654321"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Identity, Roster, canonical_name};

/// Errors raised while reading or writing the roster file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write roster {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid roster {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("roster entry {index} ({name:?}) has no channel")]
    MissingChannel { index: usize, name: String },

    #[error("roster entry {index} has no name")]
    MissingName { index: usize },
}

/// One `[[member]]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    pub channel: String,
}

impl RosterEntry {
    fn to_identity(&self) -> Identity {
        Identity::new(
            &self.name,
            self.channel.trim(),
            self.registration.as_deref(),
            self.unit.as_deref(),
        )
    }
}

/// In-memory form of the roster file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterFile {
    #[serde(default, rename = "member")]
    pub members: Vec<RosterEntry>,
}

impl RosterFile {
    /// Load a roster file. A missing file is an empty roster.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        if !path.exists() {
            tracing::debug!("roster file {} not found, starting empty", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| RosterError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&content, path)
    }

    /// Parse roster TOML. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, RosterError> {
        toml::from_str(content)
            .map_err(|e| RosterError::Parse { path: path.to_path_buf(), message: e.to_string() })
    }

    /// Write the roster back to disk, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), RosterError> {
        let write_err = |source| RosterError::Write { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| RosterError::Parse { path: path.to_path_buf(), message: e.to_string() })?;
        std::fs::write(path, content).map_err(write_err)
    }

    /// Add an entry, replacing any entry with the same canonical name.
    ///
    /// Returns true when an existing entry was replaced.
    pub fn upsert(&mut self, entry: RosterEntry) -> bool {
        let key = canonical_name(&entry.name);
        if let Some(existing) = self.members.iter_mut().find(|m| canonical_name(&m.name) == key) {
            *existing = entry;
            true
        } else {
            self.members.push(entry);
            false
        }
    }

    /// Validate entries and build an immutable roster snapshot.
    pub fn to_roster(&self) -> Result<Roster, RosterError> {
        let mut identities = Vec::with_capacity(self.members.len());
        for (index, entry) in self.members.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(RosterError::MissingName { index });
            }
            if entry.channel.trim().is_empty() {
                return Err(RosterError::MissingChannel { index, name: entry.name.clone() });
            }
            identities.push(entry.to_identity());
        }
        Ok(Roster::new(identities))
    }
}

/// Load a roster file straight into a snapshot.
pub fn load_roster(path: &Path) -> Result<Roster, RosterError> {
    RosterFile::load(path)?.to_roster()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
