//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the bulletin crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashSet;
use std::fs;
use std::sync::Mutex;

use tempfile::TempDir;

use crate::config::Config;
use crate::dispatch::{Notifier, SendError};
use crate::engine::Engine;
use crate::roster::{Identity, Roster, SharedRoster};
use crate::scan::Mention;

/// Identity with explicit alias terms.
pub fn identity(name: &str, channel: &str, terms: &[&str]) -> Identity {
    Identity::with_terms(name, channel, terms.iter().copied())
}

/// Roster built from identities in order.
pub fn roster_of(identities: Vec<Identity>) -> Roster {
    Roster::new(identities)
}

/// Engine with default config over the given identities.
pub fn engine_with(identities: Vec<Identity>) -> Engine {
    Engine::new(Config::default(), SharedRoster::new(roster_of(identities)))
}

/// Mention with a fixed header, for dispatcher and aggregator tests.
pub fn mention(identity: Identity, snippet: &str, span: usize) -> Mention {
    Mention { identity, snippet: snippet.to_string(), header: "BOLETIM Nº 1".to_string(), span }
}

/// Creates a temp directory holding a roster.toml with the given content.
pub fn temp_roster(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("roster.toml"), content).unwrap();
    dir
}

/// Send primitive that records every message and can be told to fail or
/// panic for specific channels.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail_on: HashSet<String>,
    panic_on: HashSet<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(channels: &[&str]) -> Self {
        Self { fail_on: channels.iter().map(|c| c.to_string()).collect(), ..Self::default() }
    }

    pub fn panicking_on(channels: &[&str]) -> Self {
        Self { panic_on: channels.iter().map(|c| c.to_string()).collect(), ..Self::default() }
    }

    /// (channel, text) pairs successfully sent, sorted by channel.
    pub fn sent(&self) -> Vec<(String, String)> {
        let mut sent = self.sent.lock().unwrap().clone();
        sent.sort();
        sent
    }

    pub fn sent_channels(&self) -> Vec<String> {
        self.sent().into_iter().map(|(c, _)| c).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, channel_id: &str, text: &str) -> Result<(), SendError> {
        if self.panic_on.contains(channel_id) {
            panic!("send primitive exploded for {channel_id}");
        }
        if self.fail_on.contains(channel_id) {
            return Err(SendError::Rejected {
                channel: channel_id.to_string(),
                reason: "chat not found".to_string(),
            });
        }
        self.sent.lock().unwrap().push((channel_id.to_string(), text.to_string()));
        Ok(())
    }
}
