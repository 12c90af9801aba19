// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Notifies registered people when they are mentioned in a published bulletin
#[derive(Parser)]
#[command(name = "bulletin")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "BULLETIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use specific roster file
    #[arg(short = 'R', long = "roster", global = true, env = "BULLETIN_ROSTER")]
    pub roster: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a bulletin and notify everyone mentioned in it
    Check(CheckArgs),
    /// Scan a plain message for mentions
    Message(MessageArgs),
    /// List the registered roster
    Roster(RosterArgs),
    /// Add or replace a roster entry
    Register(RegisterArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Extracted bulletin text (pages separated by form feeds)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Append messages to this outbox file instead of printing them
    #[arg(long, value_name = "OUTBOX", conflicts_with = "dry_run")]
    pub deliver: Option<PathBuf>,

    /// Print messages instead of delivering them (default without --deliver)
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct MessageArgs {
    /// Message text to scan
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct RosterArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct RegisterArgs {
    /// Full name as printed in bulletins
    #[arg(long)]
    pub name: String,

    /// Registration number (separators are ignored when matching)
    #[arg(long)]
    pub registration: String,

    /// Unit designator
    #[arg(long)]
    pub unit: Option<String>,

    /// Recipient channel (e.g. chat id)
    #[arg(long)]
    pub channel: String,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
