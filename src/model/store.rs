//! The immutable, pre-sorted sequence of matches the browser walks over.

use std::collections::BTreeMap;

use super::{Match, Normalized, Severity};

/// Ordered, read-only collection of matches.
///
/// Built once by stable-sorting on `(package.name, vulnerability.id)`; ties keep
/// their report order. An index into the store is the only handle the rest of
/// the browser uses to refer to a match.
#[derive(Debug, Clone, Default)]
pub struct MatchStore {
    matches: Vec<Match>,
}

impl MatchStore {
    pub fn new(mut matches: Vec<Match>) -> Self {
        // slice::sort_by is stable
        matches.sort_by(|a, b| a.key().cmp(&b.key()));
        Self { matches }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Match> {
        self.matches.get(index)
    }

    /// Index of the last match, `None` for an empty store.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.matches.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }

    /// Number of matches per severity level.
    #[must_use]
    pub fn severity_counts(&self) -> BTreeMap<Severity, usize> {
        let mut counts = BTreeMap::new();
        for m in &self.matches {
            *counts.entry(m.severity()).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Normalized> for MatchStore {
    fn from(normalized: Normalized) -> Self {
        Self::new(normalized.matches)
    }
}
