// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Roster command: list registered identities.

use std::process::ExitCode;

use anyhow::Context;
use termcolor::{ColorChoice, StandardStream};

use bulletin::cli::RosterArgs;
use bulletin::roster::loader::load_roster;

use crate::Workspace;
use crate::report;

pub fn run(workspace: &Workspace, args: &RosterArgs) -> anyhow::Result<ExitCode> {
    let roster = load_roster(&workspace.roster_path)
        .with_context(|| format!("failed to load roster {}", workspace.roster_path.display()))?;

    for identity in roster.unmatchable() {
        eprintln!(
            "warning: {} has no usable alias terms and will never match",
            identity.display_name
        );
    }

    let mut out = StandardStream::stdout(ColorChoice::Never);
    report::formatter(args.output).roster(&mut out, &roster)?;
    Ok(ExitCode::SUCCESS)
}
