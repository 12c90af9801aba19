// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alias term matching.
//!
//! One [`TermMatcher`] per identity: a case-insensitive alternation over the
//! identity's alias terms, anchored on word boundaries, compiled once per
//! roster snapshot.

pub mod matcher;

pub use matcher::{TermMatch, TermMatcher, byte_offset_to_char};
