// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command: scan a bulletin and notify everyone mentioned.

use std::process::ExitCode;

use anyhow::Context;
use termcolor::StandardStream;

use bulletin::cli::{CheckArgs, OutputFormat};
use bulletin::dispatch::{Notifier, OutboxNotifier, PreviewNotifier};
use bulletin::file_reader::FileContent;
use bulletin::roster::{SharedRoster, loader::load_roster};
use bulletin::{DocumentOutcome, Engine, PlainTextSource, TextSource};

use crate::report;
use crate::{EXIT_ERROR, EXIT_PARTIAL, Workspace};

/// Run the check command.
pub fn run(workspace: &Workspace, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let roster = load_roster(&workspace.roster_path)
        .with_context(|| format!("failed to load roster {}", workspace.roster_path.display()))?;
    if roster.is_empty() {
        tracing::warn!("roster {} is empty", workspace.roster_path.display());
    }

    let content = FileContent::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let spans = PlainTextSource.extract_spans(content.as_bytes());

    let engine = Engine::new(workspace.config.clone(), SharedRoster::new(roster));

    let outcome = match &args.deliver {
        Some(path) => {
            let outbox = OutboxNotifier::open(path)
                .with_context(|| format!("failed to open outbox {}", path.display()))?;
            engine.process_document(spans, &outbox)
        }
        None => {
            // Keep stdout clean for JSON output
            let preview: Box<dyn Notifier> = match args.output {
                OutputFormat::Text => Box::new(PreviewNotifier::new(std::io::stdout())),
                OutputFormat::Json => Box::new(PreviewNotifier::new(std::io::stderr())),
            };
            engine.process_document(spans, preview.as_ref())
        }
    };

    let mut out = StandardStream::stdout(args.color.choice(args.no_color));
    report::formatter(args.output).outcome(&mut out, &outcome)?;

    Ok(exit_code(&outcome))
}

fn exit_code(outcome: &DocumentOutcome) -> ExitCode {
    if outcome.extraction_failed() {
        ExitCode::from(EXIT_ERROR)
    } else if !outcome.failed_deliveries().is_empty() {
        ExitCode::from(EXIT_PARTIAL)
    } else {
        ExitCode::SUCCESS
    }
}
