// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mention aggregation across spans.
//!
//! Collapses per-span candidates into one mention per recipient channel.
//! Spans must be offered in document order: the first span that mentions a
//! recipient wins and later candidates for the same channel are dropped.
//! Pure bookkeeping, no I/O.

use std::collections::HashSet;

use crate::scan::Mention;

/// Accumulates candidates for one document.
#[derive(Debug, Default)]
pub struct MentionAggregator {
    seen_channels: HashSet<String>,
    mentions: Vec<Mention>,
}

impl MentionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer the candidates of the next span. Returns how many were kept.
    pub fn offer(&mut self, candidates: impl IntoIterator<Item = Mention>) -> usize {
        let mut kept = 0;
        for mention in candidates {
            if self.seen_channels.insert(mention.identity.channel_id.clone()) {
                self.mentions.push(mention);
                kept += 1;
            } else {
                tracing::debug!(
                    "span {}: {} already mentioned for channel {}, skipped",
                    mention.span,
                    mention.identity.display_name,
                    mention.identity.channel_id
                );
            }
        }
        kept
    }

    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    /// Aggregated mentions in first-seen order.
    pub fn finish(self) -> Vec<Mention> {
        self.mentions
    }
}

/// Aggregate per-span candidate lists given in span order.
pub fn aggregate<I, C>(per_span: I) -> Vec<Mention>
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = Mention>,
{
    let mut aggregator = MentionAggregator::new();
    for candidates in per_span {
        aggregator.offer(candidates);
    }
    aggregator.finish()
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
