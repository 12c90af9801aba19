// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local send primitives.
//!
//! [`OutboxNotifier`] appends one JSON line per message to an outbox file
//! that a transport process drains. [`PreviewNotifier`] prints messages for
//! dry runs.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Notifier, SendError};

/// One queued message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboxRecord {
    pub queued_at: DateTime<Utc>,
    pub channel: String,
    pub text: String,
}

/// Appends messages to a JSON-lines outbox file.
pub struct OutboxNotifier {
    path: PathBuf,
    file: Mutex<File>,
}

impl OutboxNotifier {
    /// Open (or create) the outbox for appending.
    pub fn open(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { path: path.to_path_buf(), file: Mutex::new(file) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every record in an outbox file.
    pub fn read_all(path: &Path) -> anyhow::Result<Vec<OutboxRecord>> {
        let content = std::fs::read_to_string(path)?;
        content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).map_err(anyhow::Error::from))
            .collect()
    }
}

impl Notifier for OutboxNotifier {
    fn send(&self, channel_id: &str, text: &str) -> Result<(), SendError> {
        let record = OutboxRecord {
            queued_at: Utc::now(),
            channel: channel_id.to_string(),
            text: text.to_string(),
        };
        let mut line =
            serde_json::to_string(&record).map_err(|e| SendError::Transport(e.to_string()))?;
        line.push('\n');

        let mut file = self
            .file
            .lock()
            .map_err(|_| SendError::Transport("outbox lock poisoned".to_string()))?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// Prints messages instead of delivering them.
pub struct PreviewNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> PreviewNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Notifier for PreviewNotifier<W> {
    fn send(&self, channel_id: &str, text: &str) -> Result<(), SendError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| SendError::Transport("output lock poisoned".to_string()))?;
        writeln!(out, "--- to {} ---", channel_id)?;
        writeln!(out, "{}", text)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "outbox_tests.rs"]
mod tests;
