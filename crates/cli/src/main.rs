// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bulletin::cli::{Cli, Command};
use bulletin::config::{self, Config};
use bulletin::discovery;

mod cmd_check;
mod cmd_message;
mod cmd_register;
mod cmd_roster;
mod report;

/// Some recipients could not be notified.
pub const EXIT_PARTIAL: u8 = 1;
/// Configuration, roster or document could not be used.
pub const EXIT_ERROR: u8 = 2;

/// Files resolved from flags, environment and discovery.
pub struct Workspace {
    pub config: Config,
    pub roster_path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bulletin: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let workspace = resolve_workspace(cli)?;

    match &cli.command {
        Command::Check(args) => cmd_check::run(&workspace, args),
        Command::Message(args) => cmd_message::run(&workspace, args),
        Command::Roster(args) => cmd_roster::run(&workspace, args),
        Command::Register(args) => cmd_register::run(&workspace, args),
    }
}

fn resolve_workspace(cli: &Cli) -> anyhow::Result<Workspace> {
    let cwd = std::env::current_dir()?;

    let config_path = match &cli.config {
        Some(path) => Some(cwd.join(path)),
        None => discovery::find_config(&cwd),
    };
    let config = config::load_or_default(config_path.as_deref()).with_context(|| {
        format!(
            "failed to load config{}",
            config_path.as_ref().map(|p| format!(" from {}", p.display())).unwrap_or_default()
        )
    })?;
    tracing::debug!("config: {:?}", config_path);

    let roster_path = match &cli.roster {
        Some(path) => cwd.join(path),
        None => discovery::default_roster_path(config_path.as_deref(), &cwd),
    };
    tracing::debug!("roster: {}", roster_path.display());

    Ok(Workspace { config, roster_path })
}

/// Log to stderr. `BULLETIN_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "bulletin=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("BULLETIN_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
