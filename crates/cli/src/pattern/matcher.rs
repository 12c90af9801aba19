// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-word, case-insensitive term matcher.

use regex::{Regex, RegexBuilder};

/// Boundary class: anything that is not a Unicode letter or number.
const BOUNDARY: &str = r"[^\p{L}\p{N}]";

/// Position of the first accepted term occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermMatch {
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// Zero-based character offset of the match start.
    pub offset: usize,
}

/// Compiled matcher for one identity's alias terms.
///
/// A matcher built from no usable terms never matches.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    regex: Option<Regex>,
}

impl TermMatcher {
    /// Compile a matcher. Blank terms are ignored and every term is escaped,
    /// so regex metacharacters in names or codes match literally.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Self {
        let alternatives: Vec<String> = terms
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Self { regex: None };
        }

        // The leading group consumes at most one boundary character, so the
        // leftmost overall match always carries the leftmost accepted term.
        let pattern = format!(
            "(?:^|{b})(?P<term>{alts})(?:{b}|$)",
            b = BOUNDARY,
            alts = alternatives.join("|")
        );

        match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => Self { regex: Some(regex) },
            Err(e) => {
                tracing::warn!("alias terms could not be compiled, identity skipped: {}", e);
                Self { regex: None }
            }
        }
    }

    /// True when the matcher can never produce a hit.
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// First whole-word occurrence of any term in `text`.
    pub fn find(&self, text: &str) -> Option<TermMatch> {
        let regex = self.regex.as_ref()?;
        let term = regex.captures(text)?.name("term")?;
        Some(TermMatch {
            start: term.start(),
            end: term.end(),
            offset: byte_offset_to_char(text, term.start()),
        })
    }

    /// Character offset of the first occurrence, if any.
    pub fn first_offset(&self, text: &str) -> Option<usize> {
        self.find(text).map(|m| m.offset)
    }
}

/// Convert a byte offset (on a char boundary) into a character offset.
pub fn byte_offset_to_char(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset).map_or_else(|| text.chars().count(), |prefix| prefix.chars().count())
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
