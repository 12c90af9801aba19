// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bulletin caption extraction.
//!
//! The caption is the line remainder that starts at the label token
//! (e.g. `BOLETIM GERAL Nº 123 - 10 de março`) and contains a numeral.

use regex::{Regex, RegexBuilder};

use super::TextSpan;
use crate::config::HeaderConfig;

/// Finds the bulletin caption of a document.
#[derive(Debug, Clone)]
pub struct HeaderExtractor {
    regex: Option<Regex>,
    fallback: String,
}

impl HeaderExtractor {
    pub fn new(config: &HeaderConfig) -> Self {
        let pattern = format!(
            r"(?:^|[^\p{{L}}\p{{N}}])(?P<caption>{}[^\n\d]*\d+[^\n]*)",
            regex::escape(config.label.trim())
        );
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!("header label could not be compiled, using fallback: {}", e);
                None
            }
        };
        Self { regex, fallback: config.fallback.clone() }
    }

    /// Caption found in `text`, if any.
    pub fn extract(&self, text: &str) -> Option<String> {
        let caption = self.regex.as_ref()?.captures(text)?.name("caption")?;
        let caption = caption.as_str().trim();
        (!caption.is_empty()).then(|| caption.to_string())
    }

    /// Caption for a whole document.
    ///
    /// Only the lowest-ordinal span with any text is inspected. Falls back to
    /// the generic caption when that span has no label line or no span has
    /// text.
    pub fn for_document(&self, spans: &[TextSpan]) -> String {
        spans
            .iter()
            .filter(|s| !s.is_blank())
            .min_by_key(|s| s.ordinal)
            .and_then(|s| self.extract(&s.text))
            .unwrap_or_else(|| self.fallback.clone())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
