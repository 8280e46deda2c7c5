//! Per-session snapshot of the searchable catalog.

use komi_core::catalog::DataService;
use komi_core::error::ServiceError;
use komi_core::types::SearchableRecord;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    Unloaded,
    Loaded,
    /// The fetch failed; the cache stays empty until the next load.
    Failed,
}

/// Read-only copy of every searchable record.
///
/// Filled once per session and never refreshed in place. A failed fetch
/// leaves it empty, which matches nothing.
pub struct IndexCache {
    records: Vec<Arc<SearchableRecord>>,
    state: IndexState,
}

impl IndexCache {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            state: IndexState::Unloaded,
        }
    }

    /// Fetches the full record set unless it is already loaded.
    pub fn load<D: DataService + ?Sized>(&mut self, service: &D) {
        if self.state == IndexState::Loaded {
            return;
        }
        self.fill(service.searchable_records());
    }

    /// Stores the outcome of a fetch performed elsewhere.
    pub fn fill(&mut self, result: Result<Vec<SearchableRecord>, ServiceError>) {
        match result {
            Ok(records) => {
                tracing::debug!(records = records.len(), "search index loaded");
                self.records = records.into_iter().map(Arc::new).collect();
                self.state = IndexState::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "search index unavailable, continuing empty");
                self.records.clear();
                self.state = IndexState::Failed;
            }
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.state = IndexState::Unloaded;
    }

    pub fn records(&self) -> &[Arc<SearchableRecord>] {
        &self.records
    }

    pub fn state(&self) -> IndexState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new()
    }
}
