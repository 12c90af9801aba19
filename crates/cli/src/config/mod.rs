// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! `bulletin.toml` is optional; every field has a default from [`defaults`].
//!
//! ```toml
//! version = 1
//!
//! [scan]
//! context_chars = 150
//!
//! [header]
//! label = "BOLETIM"
//! fallback = "Bulletin (number not identified)"
//!
//! [notify]
//! max_message_chars = 4096
//! reference_link = "https://example.org/bulletins"
//! greeting = "Hello, {name}!"
//! ```

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The only config version this build understands.
pub const CURRENT_VERSION: u32 = 1;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported config version {found} in {path} (expected {expected})")]
    Version { path: PathBuf, found: u32, expected: u32 },

    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_version")]
    pub version: u32,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub notify: NotifyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            scan: ScanConfig::default(),
            header: HeaderConfig::default(),
            notify: NotifyConfig::default(),
        }
    }
}

impl Config {
    fn default_version() -> u32 {
        CURRENT_VERSION
    }
}

/// Snippet extraction settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Characters kept on each side of the match offset.
    #[serde(default = "ScanConfig::default_context_chars")]
    pub context_chars: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { context_chars: Self::default_context_chars() }
    }
}

impl ScanConfig {
    pub(crate) fn default_context_chars() -> usize {
        defaults::scan::CONTEXT_CHARS
    }
}

/// Bulletin caption settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    /// Label token that opens the caption line (matched case-insensitively).
    #[serde(default = "HeaderConfig::default_label")]
    pub label: String,

    /// Caption used when the document has no label line.
    #[serde(default = "HeaderConfig::default_fallback")]
    pub fallback: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { label: Self::default_label(), fallback: Self::default_fallback() }
    }
}

impl HeaderConfig {
    pub(crate) fn default_label() -> String {
        defaults::header::LABEL.to_string()
    }

    pub(crate) fn default_fallback() -> String {
        defaults::header::FALLBACK.to_string()
    }
}

/// Message composition settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    /// Maximum message length in characters.
    #[serde(default = "NotifyConfig::default_max_message_chars")]
    pub max_message_chars: usize,

    /// Link appended to every message.
    #[serde(default = "NotifyConfig::default_reference_link")]
    pub reference_link: String,

    /// Greeting line; `{name}` expands to the display name.
    #[serde(default = "NotifyConfig::default_greeting")]
    pub greeting: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            max_message_chars: Self::default_max_message_chars(),
            reference_link: Self::default_reference_link(),
            greeting: Self::default_greeting(),
        }
    }
}

impl NotifyConfig {
    pub(crate) fn default_max_message_chars() -> usize {
        defaults::notify::MAX_MESSAGE_CHARS
    }

    pub(crate) fn default_reference_link() -> String {
        defaults::notify::REFERENCE_LINK.to_string()
    }

    pub(crate) fn default_greeting() -> String {
        defaults::notify::GREETING.to_string()
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    parse(&content, path)
}

/// Parse and validate config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| ConfigError::Parse { path: path.to_path_buf(), message: e.to_string() })?;

    if config.version != CURRENT_VERSION {
        return Err(ConfigError::Version {
            path: path.to_path_buf(),
            found: config.version,
            expected: CURRENT_VERSION,
        });
    }

    let invalid = |message: &str| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: message.to_string(),
    };

    // The truncation marker alone takes four characters.
    if config.notify.max_message_chars <= defaults::notify::TRUNCATION_MARKER.chars().count() {
        return Err(invalid("notify.max_message_chars must be greater than 4"));
    }
    if config.header.label.trim().is_empty() {
        return Err(invalid("header.label must not be empty"));
    }

    Ok(config)
}

/// Load the config at `path`, or defaults when no config file was found.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load(path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
