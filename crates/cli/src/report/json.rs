// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io::Write;

use serde_json::json;
use termcolor::WriteColor;

use bulletin::{DocumentOutcome, Mention, Roster};

use super::Formatter;

/// JSON format formatter.
pub struct JsonFormatter;

impl JsonFormatter {
    fn emit(out: &mut dyn WriteColor, value: &serde_json::Value) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn outcome(&self, out: &mut dyn WriteColor, outcome: &DocumentOutcome) -> anyhow::Result<()> {
        let mut value = serde_json::to_value(outcome)?;
        if let Some(map) = value.as_object_mut() {
            map.insert("notified_identities".to_string(), json!(outcome.notified_identities()));
            map.insert("no_matches".to_string(), json!(outcome.no_matches()));
            map.insert("extraction_failed".to_string(), json!(outcome.extraction_failed()));
        }
        Self::emit(out, &value)
    }

    fn mentions(&self, out: &mut dyn WriteColor, mentions: &[Mention]) -> anyhow::Result<()> {
        Self::emit(out, &json!({ "mentions": mentions }))
    }

    fn roster(&self, out: &mut dyn WriteColor, roster: &Roster) -> anyhow::Result<()> {
        let identities: Vec<_> = roster
            .identities()
            .map(|i| {
                json!({
                    "display_name": i.display_name,
                    "channel_id": i.channel_id,
                    "alias_terms": i.alias_terms,
                    "matchable": i.is_matchable(),
                })
            })
            .collect();
        Self::emit(out, &json!({ "identities": identities }))
    }
}
