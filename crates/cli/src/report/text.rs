// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use bulletin::color::scheme;
use bulletin::{DocumentOutcome, Mention, Roster};

use super::Formatter;

/// Text format formatter.
pub struct TextFormatter;

fn styled(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

fn write_mention(out: &mut dyn WriteColor, mention: &Mention) -> std::io::Result<()> {
    write!(out, "  ")?;
    styled(out, &scheme::name(), &mention.identity.display_name)?;
    writeln!(out, " (page {})", mention.span + 1)?;
    write!(out, "    ")?;
    styled(out, &scheme::snippet(), &mention.snippet.replace('\n', " "))?;
    writeln!(out)
}

impl Formatter for TextFormatter {
    fn outcome(&self, out: &mut dyn WriteColor, outcome: &DocumentOutcome) -> anyhow::Result<()> {
        match outcome {
            DocumentOutcome::ExtractionFailed { reason } => {
                styled(out, &scheme::fail(), "FAIL")?;
                writeln!(out, ": could not extract text ({})", reason)?;
            }
            DocumentOutcome::NoMatches { header } => {
                styled(out, &scheme::header(), header)?;
                writeln!(out)?;
                writeln!(out, "No registered person mentioned.")?;
            }
            DocumentOutcome::Dispatched { header, mentions, report } => {
                styled(out, &scheme::header(), header)?;
                writeln!(out)?;
                writeln!(out, "{} mentioned:", mentions.len())?;
                for mention in mentions {
                    write_mention(out, mention)?;
                }
                writeln!(out)?;
                if report.failed.is_empty() {
                    styled(out, &scheme::pass(), "PASS")?;
                    writeln!(out, ": {} notified", report.notified.len())?;
                } else {
                    styled(out, &scheme::fail(), "FAIL")?;
                    writeln!(
                        out,
                        ": {} notified, {} not reached",
                        report.notified.len(),
                        report.failed.len()
                    )?;
                    for failed in &report.failed {
                        writeln!(
                            out,
                            "  {} ({}): {}",
                            failed.display_name, failed.channel_id, failed.reason
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn mentions(&self, out: &mut dyn WriteColor, mentions: &[Mention]) -> anyhow::Result<()> {
        if mentions.is_empty() {
            writeln!(out, "No registered person mentioned.")?;
            return Ok(());
        }
        writeln!(out, "{} mentioned:", mentions.len())?;
        for mention in mentions {
            write_mention(out, mention)?;
        }
        Ok(())
    }

    fn roster(&self, out: &mut dyn WriteColor, roster: &Roster) -> anyhow::Result<()> {
        for identity in roster.identities() {
            styled(out, &scheme::name(), &identity.display_name)?;
            writeln!(out, " -> {}", identity.channel_id)?;
            if identity.is_matchable() {
                writeln!(out, "    terms: {}", identity.alias_terms.join(", "))?;
            } else {
                writeln!(out, "    terms: (none, never matched)")?;
            }
        }
        writeln!(out, "{} registered", roster.len())?;
        Ok(())
    }
}
