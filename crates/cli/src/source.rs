// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document text sources.
//!
//! PDF extraction happens outside this crate. [`PlainTextSource`] consumes the
//! page-ordered text such tools produce, where pages are separated by form
//! feed characters (`\x0c`).

use memchr::memchr_iter;

use crate::scan::TextSpan;

/// Page separator emitted by PDF-to-text converters.
pub const PAGE_BREAK: u8 = 0x0c;

/// Why no text could be obtained from a document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("page {page} is not valid UTF-8")]
    NotUtf8 { page: usize },

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Turns document bytes into ordered text spans.
pub trait TextSource {
    /// Zero spans is a valid result.
    fn extract_spans(&self, document: &[u8]) -> Result<Vec<TextSpan>, ExtractionError>;
}

/// Splits form-feed separated UTF-8 text into one span per page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract_spans(&self, document: &[u8]) -> Result<Vec<TextSpan>, ExtractionError> {
        if document.is_empty() {
            return Ok(Vec::new());
        }

        let mut pages: Vec<&[u8]> = Vec::new();
        let mut start = 0;
        for brk in memchr_iter(PAGE_BREAK, document) {
            pages.push(&document[start..brk]);
            start = brk + 1;
        }
        // A trailing page break does not open another page
        if start < document.len() {
            pages.push(&document[start..]);
        }

        pages
            .into_iter()
            .enumerate()
            .map(|(ordinal, bytes)| {
                std::str::from_utf8(bytes)
                    .map(|text| TextSpan::new(ordinal, text))
                    .map_err(|_| ExtractionError::NotUtf8 { page: ordinal + 1 })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
