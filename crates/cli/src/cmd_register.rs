// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Register command: add or replace one roster entry.

use std::process::ExitCode;

use anyhow::Context;

use bulletin::cli::RegisterArgs;
use bulletin::roster::{RosterEntry, RosterFile, canonical_name};

use crate::Workspace;

pub fn run(workspace: &Workspace, args: &RegisterArgs) -> anyhow::Result<ExitCode> {
    let path = &workspace.roster_path;
    let mut file = RosterFile::load(path)
        .with_context(|| format!("failed to load roster {}", path.display()))?;

    let entry = RosterEntry {
        name: args.name.trim().to_string(),
        registration: Some(args.registration.trim().to_string()),
        unit: args.unit.as_ref().map(|u| u.trim().to_string()).filter(|u| !u.is_empty()),
        channel: args.channel.trim().to_string(),
    };
    let replaced = file.upsert(entry);

    // Reject entries the engine could not load before touching the file
    file.to_roster().context("registration rejected")?;
    file.save(path).with_context(|| format!("failed to write roster {}", path.display()))?;

    let verb = if replaced { "Updated" } else { "Registered" };
    println!("{} {} ({} entries)", verb, canonical_name(&args.name), file.members.len());
    Ok(ExitCode::SUCCESS)
}
