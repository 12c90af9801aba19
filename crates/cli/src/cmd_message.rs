// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Message command: scan one plain message without notifying anyone.

use std::process::ExitCode;

use anyhow::Context;
use termcolor::{ColorChoice, StandardStream};

use bulletin::cli::MessageArgs;
use bulletin::roster::{SharedRoster, loader::load_roster};
use bulletin::Engine;

use crate::Workspace;
use crate::report;

pub fn run(workspace: &Workspace, args: &MessageArgs) -> anyhow::Result<ExitCode> {
    let roster = load_roster(&workspace.roster_path)
        .with_context(|| format!("failed to load roster {}", workspace.roster_path.display()))?;
    let engine = Engine::new(workspace.config.clone(), SharedRoster::new(roster));

    let mentions = engine.scan_text(&args.text);

    let mut out = StandardStream::stdout(ColorChoice::Never);
    report::formatter(args.output).mentions(&mut out, &mentions)?;
    Ok(ExitCode::SUCCESS)
}
