// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Snippet extraction defaults.
pub mod scan {
    /// Characters kept on each side of a match (150).
    pub const CONTEXT_CHARS: usize = 150;

    /// Marker wrapped around every snippet to signal truncation.
    pub const ELLIPSIS: &str = "...";
}

/// Bulletin caption defaults.
pub mod header {
    /// Label token that opens a bulletin caption line.
    pub const LABEL: &str = "BOLETIM";

    /// Caption used when no label line is found.
    pub const FALLBACK: &str = "Bulletin (number not identified)";
}

/// Message composition defaults.
pub mod notify {
    /// Transport message limit in characters (4096).
    pub const MAX_MESSAGE_CHARS: usize = 4096;

    /// Appended after a truncated body. Exactly four characters.
    pub const TRUNCATION_MARKER: &str = "\n...";

    /// Link appended to every notification.
    pub const REFERENCE_LINK: &str = "https://www.pm.pb.gov.br/boletins";

    /// Greeting line; `{name}` is replaced with the identity's display name.
    pub const GREETING: &str = "Hello, {name}!";
}

/// File names looked up during discovery.
pub mod files {
    pub const CONFIG: &str = "bulletin.toml";
    pub const ROSTER: &str = "roster.toml";
}
