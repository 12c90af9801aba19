// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bulletin mention detection and notification.
//!
//! Given the page-ordered text of a bulletin and a roster of registered
//! identities, finds every identity mentioned, cites each mention with a
//! short excerpt, and delivers one notification per recipient channel.
//!
//! ```ignore
//! let engine = Engine::new(Config::default(), SharedRoster::new(roster));
//! let spans = PlainTextSource.extract_spans(&bytes);
//! let outcome = engine.process_document(spans, &notifier);
//! ```

pub mod aggregate;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod dispatch;
pub mod engine;
pub mod file_reader;
pub mod pattern;
pub mod roster;
pub mod scan;
pub mod source;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use dispatch::{DispatchReport, Dispatcher, Notifier, SendError};
pub use engine::{DocumentOutcome, Engine, Phase};
pub use roster::{Identity, Roster, SharedRoster};
pub use scan::{Mention, TextSpan};
pub use source::{ExtractionError, PlainTextSource, TextSource};
