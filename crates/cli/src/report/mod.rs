// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for command results.

mod json;
mod text;

use termcolor::WriteColor;

use bulletin::cli::OutputFormat;
use bulletin::{DocumentOutcome, Mention, Roster};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for rendering command results in one output format.
pub trait Formatter {
    /// Result of processing one document.
    fn outcome(&self, out: &mut dyn WriteColor, outcome: &DocumentOutcome) -> anyhow::Result<()>;

    /// Mentions found in a plain message.
    fn mentions(&self, out: &mut dyn WriteColor, mentions: &[Mention]) -> anyhow::Result<()>;

    /// Registered identities.
    fn roster(&self, out: &mut dyn WriteColor, roster: &Roster) -> anyhow::Result<()>;
}

/// Formatter for the requested output format.
pub fn formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
