// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document processing entry points.
//!
//! A run moves forward through [`Phase::Scanning`], [`Phase::Aggregating`],
//! [`Phase::Dispatching`] and [`Phase::Done`]. A document without text skips
//! straight to `Done` and nothing is sent.
//!
//! Every run reads one roster snapshot taken at its start; a roster reload
//! during the run affects only later runs.

use serde::Serialize;

use crate::aggregate::aggregate;
use crate::config::Config;
use crate::dispatch::{DispatchReport, Dispatcher, FailedDelivery, Notifier};
use crate::roster::{Roster, SharedRoster};
use crate::scan::{HeaderExtractor, Mention, Scanner, TextSpan};
use crate::source::ExtractionError;

/// Stage of a document-processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Scanning,
    Aggregating,
    Dispatching,
    Done,
}

/// Forward-only phase tracker for one run.
#[derive(Debug)]
struct Run {
    phase: Phase,
}

impl Run {
    fn start() -> Self {
        tracing::debug!("run phase: {:?}", Phase::Scanning);
        Self { phase: Phase::Scanning }
    }

    fn advance(&mut self, next: Phase) {
        debug_assert!(next > self.phase, "run cannot move from {:?} to {:?}", self.phase, next);
        tracing::debug!("run phase: {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

/// Result of processing one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentOutcome {
    /// No text could be obtained; nothing was sent.
    ExtractionFailed { reason: String },
    /// Text was scanned and nobody was mentioned.
    NoMatches { header: String },
    /// At least one mention was found and dispatch was attempted.
    Dispatched { header: String, mentions: Vec<Mention>, report: DispatchReport },
}

impl DocumentOutcome {
    /// Display names of the recipients that were notified.
    pub fn notified_identities(&self) -> &[String] {
        match self {
            DocumentOutcome::Dispatched { report, .. } => &report.notified,
            _ => &[],
        }
    }

    /// Recipients that were attempted but not reached.
    pub fn failed_deliveries(&self) -> &[FailedDelivery] {
        match self {
            DocumentOutcome::Dispatched { report, .. } => &report.failed,
            _ => &[],
        }
    }

    pub fn no_matches(&self) -> bool {
        matches!(self, DocumentOutcome::NoMatches { .. })
    }

    pub fn extraction_failed(&self) -> bool {
        matches!(self, DocumentOutcome::ExtractionFailed { .. })
    }

    /// Mentions that drove the dispatch, in aggregation order.
    pub fn mentions(&self) -> &[Mention] {
        match self {
            DocumentOutcome::Dispatched { mentions, .. } => mentions,
            _ => &[],
        }
    }
}

/// Mention detection and notification engine.
pub struct Engine {
    config: Config,
    roster: SharedRoster,
    header: HeaderExtractor,
    dispatcher: Dispatcher,
}

impl Engine {
    pub fn new(config: Config, roster: SharedRoster) -> Self {
        let header = HeaderExtractor::new(&config.header);
        let dispatcher = Dispatcher::new(&config.notify);
        Self { config, roster, header, dispatcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn roster(&self) -> &SharedRoster {
        &self.roster
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Scan, aggregate and dispatch one document.
    ///
    /// `spans` is the text source's result. Only a failed or empty extraction
    /// ends the run early; delivery failures are folded into the outcome.
    pub fn process_document(
        &self,
        spans: Result<Vec<TextSpan>, ExtractionError>,
        notifier: &dyn Notifier,
    ) -> DocumentOutcome {
        let mut run = Run::start();

        let spans = match spans {
            Ok(spans) if spans.iter().any(|s| !s.is_blank()) => spans,
            Ok(_) => {
                run.advance(Phase::Done);
                tracing::info!("document has no extractable text");
                return DocumentOutcome::ExtractionFailed {
                    reason: "document has no extractable text".to_string(),
                };
            }
            Err(e) => {
                run.advance(Phase::Done);
                tracing::info!("document extraction failed: {}", e);
                return DocumentOutcome::ExtractionFailed { reason: e.to_string() };
            }
        };

        let roster = self.roster.snapshot();
        let header = self.header.for_document(&spans);
        let per_span = self.scan_spans(&roster, &spans, &header);

        run.advance(Phase::Aggregating);
        let mentions = aggregate(per_span);

        if mentions.is_empty() {
            run.advance(Phase::Done);
            tracing::info!("{}: no mentions in {} spans", header, spans.len());
            return DocumentOutcome::NoMatches { header };
        }

        run.advance(Phase::Dispatching);
        let report = self.dispatcher.dispatch(&mentions, notifier);
        run.advance(Phase::Done);

        tracing::info!(
            "{}: {} mentioned, {} notified, {} failed",
            header,
            mentions.len(),
            report.notified.len(),
            report.failed.len()
        );
        DocumentOutcome::Dispatched { header, mentions, report }
    }

    /// Mentions in a document without dispatching anything.
    pub fn scan_document(&self, spans: &[TextSpan]) -> Vec<Mention> {
        let roster = self.roster.snapshot();
        let header = self.header.for_document(spans);
        aggregate(self.scan_spans(&roster, spans, &header))
    }

    /// Mentions in a single plain message.
    pub fn scan_text(&self, text: &str) -> Vec<Mention> {
        self.scan_document(&[TextSpan::new(0, text)])
    }

    /// Candidates per span, in ordinal order. Spans are scanned sequentially
    /// because aggregation depends on their order.
    fn scan_spans(&self, roster: &Roster, spans: &[TextSpan], header: &str) -> Vec<Vec<Mention>> {
        let scanner = Scanner::new(roster, &self.config.scan);
        in_document_order(spans).into_iter().map(|span| scanner.scan_span(span, header)).collect()
    }
}

/// Spans sorted by ordinal. The sort is stable, so equal ordinals keep
/// their input order.
fn in_document_order(spans: &[TextSpan]) -> Vec<&TextSpan> {
    let mut ordered: Vec<&TextSpan> = spans.iter().collect();
    ordered.sort_by_key(|span| span.ordinal);
    ordered
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
