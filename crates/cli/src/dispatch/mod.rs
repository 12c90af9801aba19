// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notification dispatch.
//!
//! Composes one plain-text message per aggregated mention and hands it to a
//! [`Notifier`]. Sends run in parallel using rayon and are isolated from each
//! other: a failing or panicking send is recorded for its recipient and the
//! rest of the batch still goes out. Nothing is retried.

pub mod outbox;

use std::panic::{AssertUnwindSafe, catch_unwind};

use dashmap::DashMap;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::NotifyConfig;
use crate::config::defaults::notify::TRUNCATION_MARKER;
use crate::scan::Mention;

pub use outbox::{OutboxNotifier, OutboxRecord, PreviewNotifier};

/// Why a single delivery failed.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("recipient {channel} rejected the message: {reason}")]
    Rejected { channel: String, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Send primitive supplied by the transport layer.
pub trait Notifier: Sync {
    fn send(&self, channel_id: &str, text: &str) -> Result<(), SendError>;
}

/// A recipient that was attempted but not reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDelivery {
    pub display_name: String,
    pub channel_id: String,
    pub reason: String,
}

/// Per-batch delivery summary, in mention order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    /// Display names of recipients that were notified.
    pub notified: Vec<String>,
    /// Recipients whose send failed.
    pub failed: Vec<FailedDelivery>,
}

impl DispatchReport {
    pub fn attempted(&self) -> usize {
        self.notified.len() + self.failed.len()
    }

    pub fn all_delivered(&self) -> bool {
        self.failed.is_empty()
    }
}

enum Delivery {
    Sent,
    Failed(String),
}

/// Composes and delivers notifications.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: NotifyConfig,
}

impl Dispatcher {
    pub fn new(config: &NotifyConfig) -> Self {
        Self { config: config.clone() }
    }

    /// Full message text for one mention, already fitted to the length limit.
    pub fn compose(&self, mention: &Mention) -> String {
        let greeting = self.config.greeting.replace("{name}", &mention.identity.display_name);
        let body = format!(
            "{greeting}\n\nYou were mentioned in {header}.\n\nExcerpt:\n{snippet}\n\nFull bulletin: {link}",
            header = mention.header,
            snippet = mention.snippet,
            link = self.config.reference_link,
        );
        fit_message(body, self.config.max_message_chars)
    }

    /// Deliver one message per mention and summarize the outcome.
    ///
    /// An empty mention list performs no sends.
    pub fn dispatch(&self, mentions: &[Mention], notifier: &dyn Notifier) -> DispatchReport {
        if mentions.is_empty() {
            return DispatchReport::default();
        }

        let outcomes: DashMap<usize, Delivery> = DashMap::with_capacity(mentions.len());

        mentions.par_iter().enumerate().for_each(|(idx, mention)| {
            let text = self.compose(mention);
            let channel = mention.identity.channel_id.as_str();

            // Catch panics so one misbehaving send cannot take down the batch
            let result = catch_unwind(AssertUnwindSafe(|| notifier.send(channel, &text)));
            let delivery = match result {
                Ok(Ok(())) => {
                    tracing::debug!("notified {} via {}", mention.identity.display_name, channel);
                    Delivery::Sent
                }
                Ok(Err(e)) => {
                    tracing::warn!(
                        "failed to notify {} via {}: {}",
                        mention.identity.display_name,
                        channel,
                        e
                    );
                    Delivery::Failed(e.to_string())
                }
                Err(_) => {
                    tracing::warn!(
                        "send to {} panicked; recipient {} not notified",
                        channel,
                        mention.identity.display_name
                    );
                    Delivery::Failed("Internal error: send panicked".to_string())
                }
            };
            outcomes.insert(idx, delivery);
        });

        let mut report = DispatchReport::default();
        for (idx, mention) in mentions.iter().enumerate() {
            match outcomes.remove(&idx).map(|(_, d)| d) {
                Some(Delivery::Sent) => report.notified.push(mention.identity.display_name.clone()),
                Some(Delivery::Failed(reason)) => report.failed.push(FailedDelivery {
                    display_name: mention.identity.display_name.clone(),
                    channel_id: mention.identity.channel_id.clone(),
                    reason,
                }),
                None => report.failed.push(FailedDelivery {
                    display_name: mention.identity.display_name.clone(),
                    channel_id: mention.identity.channel_id.clone(),
                    reason: "no delivery outcome recorded".to_string(),
                }),
            }
        }
        report
    }
}

/// Fit `body` into `max_chars` characters.
///
/// An oversized body keeps its first `max_chars - 4` characters followed by
/// the four-character truncation marker, so the result is exactly
/// `max_chars` long. A limit too small for the marker cuts the body without
/// one. Works on characters, never splits a code point.
pub fn fit_message(body: String, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        return body;
    }
    let marker_chars = TRUNCATION_MARKER.chars().count();
    let (keep, marker) = if max_chars > marker_chars {
        (max_chars - marker_chars, TRUNCATION_MARKER)
    } else {
        (max_chars, "")
    };
    let cut = body.char_indices().nth(keep).map_or(body.len(), |(i, _)| i);
    let mut truncated = body;
    truncated.truncate(cut);
    truncated.push_str(marker);
    truncated
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
