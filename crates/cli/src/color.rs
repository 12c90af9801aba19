// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling for text output.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` values.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode against `--no-color`, `NO_COLOR` and the terminal.
    pub fn choice(self, no_color: bool) -> ColorChoice {
        match self {
            ColorMode::Always => resolve_color(true, no_color),
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => {
                let env_off = std::env::var_os("NO_COLOR").is_some();
                if !std::io::stdout().is_terminal() {
                    ColorChoice::Never
                } else {
                    resolve_color(false, no_color || env_off)
                }
            }
        }
    }
}

/// `no_color` always wins over `force_color`.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color scheme for outcome output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Recipient names.
    pub fn name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Bulletin captions.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Snippets carry no styling.
    pub fn snippet() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
