//! Ranked search results.

use komi_core::types::SearchableRecord;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub record: Arc<SearchableRecord>,
    pub score: f32,
}

/// The rows shown under the search box, best match first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    matches: Vec<MatchResult>,
}

impl SearchResults {
    /// Keeps the top `limit` matches of already-sorted matcher output.
    pub fn ranked(mut matches: Vec<MatchResult>, limit: usize) -> Self {
        matches.truncate(limit);
        Self { matches }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchResult> + '_ {
        self.matches.iter()
    }

    pub fn get(&self, index: usize) -> Option<&MatchResult> {
        self.matches.get(index)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
