// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mention scanning.
//!
//! Runs every roster member's matcher over one text span and turns each hit
//! into a [`Mention`] carrying a bounded excerpt around the first occurrence.

pub mod header;

use serde::Serialize;

use crate::config::ScanConfig;
use crate::config::defaults::scan::ELLIPSIS;
use crate::roster::{Identity, Roster};

pub use header::HeaderExtractor;

/// One unit of scanned text: a page, or a whole message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Position within the document (0-based).
    pub ordinal: usize,
    pub text: String,
}

impl TextSpan {
    pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
        Self { ordinal, text: text.into() }
    }

    /// Build ordered spans from page texts.
    pub fn from_pages<I, S>(pages: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        pages.into_iter().enumerate().map(|(i, p)| Self::new(i, p)).collect()
    }

    /// True when the span has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A confirmed identity match with its citation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mention {
    pub identity: Identity,
    /// Excerpt around the first occurrence, wrapped in ellipses.
    pub snippet: String,
    /// Bulletin caption of the document the mention came from.
    pub header: String,
    /// Ordinal of the span that produced the mention.
    pub span: usize,
}

/// Scans spans against one roster snapshot.
pub struct Scanner<'r> {
    roster: &'r Roster,
    context_chars: usize,
}

impl<'r> Scanner<'r> {
    pub fn new(roster: &'r Roster, config: &ScanConfig) -> Self {
        Self { roster, context_chars: config.context_chars }
    }

    /// Candidate mentions for one span, at most one per roster member,
    /// in roster order.
    pub fn scan_span(&self, span: &TextSpan, header: &str) -> Vec<Mention> {
        if span.is_blank() {
            return Vec::new();
        }

        self.roster
            .members()
            .filter_map(|member| {
                let hit = member.matcher.find(&span.text)?;
                tracing::debug!(
                    "span {}: {} matched at char {}",
                    span.ordinal,
                    member.identity.display_name,
                    hit.offset
                );
                Some(Mention {
                    identity: member.identity.clone(),
                    snippet: snippet(&span.text, hit.start, self.context_chars),
                    header: header.to_string(),
                    span: span.ordinal,
                })
            })
            .collect()
    }
}

/// Excerpt of up to `context_chars` characters on each side of byte offset
/// `at`, trimmed and wrapped in ellipses.
pub fn snippet(text: &str, at: usize, context_chars: usize) -> String {
    let (Some(before), Some(after)) = (text.get(..at), text.get(at..)) else {
        return format!("{ELLIPSIS}{ELLIPSIS}");
    };

    let start = before.char_indices().rev().take(context_chars).last().map_or(at, |(i, _)| i);
    let end = after.char_indices().nth(context_chars).map_or(text.len(), |(i, _)| at + i);

    format!("{ELLIPSIS}{}{ELLIPSIS}", text[start..end].trim())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
