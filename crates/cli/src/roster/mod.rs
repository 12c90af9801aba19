// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identity roster.
//!
//! A [`Roster`] is an immutable, ordered table of registered identities.
//! Readers take an `Arc<Roster>` snapshot from [`SharedRoster`]; a reload
//! builds a new roster and atomically stores the pointer, so a scan in
//! flight never observes a half-replaced table.

pub mod loader;

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::Serialize;

use crate::pattern::TermMatcher;

pub use loader::{RosterEntry, RosterError, RosterFile};

/// Characters stripped from registration numbers before matching.
const REGISTRATION_SEPARATORS: &[char] = &['.', '-', '/'];

/// One registered person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Canonical uppercase full name. Unique within a roster.
    pub display_name: String,
    /// Opaque recipient address (e.g. a chat id).
    pub channel_id: String,
    /// Distinct, non-blank terms that recognize this identity in text.
    pub alias_terms: Vec<String>,
}

impl Identity {
    /// Build an identity from its registration fields.
    ///
    /// The name is uppercased, the registration number loses its separators,
    /// and blank or repeated terms are dropped.
    pub fn new(
        name: &str,
        channel_id: impl Into<String>,
        registration: Option<&str>,
        unit: Option<&str>,
    ) -> Self {
        let display_name = canonical_name(name);
        let mut terms = vec![display_name.clone()];
        if let Some(reg) = registration {
            terms.push(normalize_registration(reg));
        }
        if let Some(unit) = unit {
            terms.push(unit.trim().to_string());
        }
        Self::with_terms(display_name, channel_id, terms)
    }

    /// Build an identity from an explicit term list.
    pub fn with_terms<I, S>(
        display_name: impl Into<String>,
        channel_id: impl Into<String>,
        terms: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut alias_terms: Vec<String> = Vec::new();
        for term in terms {
            let term = term.into();
            let term = term.trim();
            if term.is_empty() {
                continue;
            }
            if alias_terms.iter().any(|t| t.to_lowercase() == term.to_lowercase()) {
                continue;
            }
            alias_terms.push(term.to_string());
        }
        Self { display_name: display_name.into(), channel_id: channel_id.into(), alias_terms }
    }

    /// True when at least one alias term can be matched.
    pub fn is_matchable(&self) -> bool {
        !self.alias_terms.is_empty()
    }
}

/// Uppercase a name and collapse internal whitespace.
pub fn canonical_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase()
}

/// Strip separators and whitespace from a registration number.
pub fn normalize_registration(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !REGISTRATION_SEPARATORS.contains(c))
        .collect()
}

/// An identity paired with its compiled matcher.
#[derive(Debug)]
pub struct RosterMember {
    pub identity: Identity,
    pub matcher: TermMatcher,
}

/// Immutable roster snapshot.
///
/// Matchers are compiled once when the roster is built and reused by every
/// scan against this snapshot.
#[derive(Debug, Default)]
pub struct Roster {
    members: Vec<RosterMember>,
}

impl Roster {
    /// Build a roster. A later identity with the same display name replaces
    /// the earlier one in place.
    pub fn new(identities: impl IntoIterator<Item = Identity>) -> Self {
        let mut members: Vec<RosterMember> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for identity in identities {
            let matcher = TermMatcher::new(&identity.alias_terms);
            let member = RosterMember { identity, matcher };
            match by_name.get(&member.identity.display_name) {
                Some(&idx) => {
                    tracing::debug!("roster entry replaced: {}", member.identity.display_name);
                    members[idx] = member;
                }
                None => {
                    by_name.insert(member.identity.display_name.clone(), members.len());
                    members.push(member);
                }
            }
        }

        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = &RosterMember> {
        self.members.iter()
    }

    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.members.iter().map(|m| &m.identity)
    }

    pub fn get(&self, display_name: &str) -> Option<&Identity> {
        self.identities().find(|i| i.display_name == display_name)
    }

    /// Identities that can never be matched (no usable alias terms).
    pub fn unmatchable(&self) -> impl Iterator<Item = &Identity> {
        self.identities().filter(|i| !i.is_matchable())
    }
}

/// Shared handle to the current roster snapshot.
///
/// Loads and stores are lock-free; clones share the same slot.
#[derive(Debug, Default, Clone)]
pub struct SharedRoster {
    current: Arc<ArcSwap<Roster>>,
}

impl SharedRoster {
    pub fn new(roster: Roster) -> Self {
        Self { current: Arc::new(ArcSwap::from_pointee(roster)) }
    }

    /// Current snapshot. Stays valid after a later [`replace`](Self::replace).
    pub fn snapshot(&self) -> Arc<Roster> {
        self.current.load_full()
    }

    /// Swap in a freshly loaded roster.
    pub fn replace(&self, roster: Roster) {
        let len = roster.len();
        self.current.store(Arc::new(roster));
        tracing::info!("roster reloaded: {} identities", len);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
