use super::RECENT_SEARCHES_KEY;
use crate::error::StorageError;
use crate::storage::{LocalStorage, read_json, write_json};
use crate::types::SearchTerm;

/// Most-recent-first list of distinct search terms.
pub struct HistoryStore<S> {
    storage: S,
    entries: Vec<SearchTerm>,
    capacity: usize,
}

impl<S: LocalStorage> HistoryStore<S> {
    /// Reads the persisted history, dropping blank or duplicate entries.
    pub fn load(storage: S, capacity: usize) -> Result<Self, StorageError> {
        let capacity = capacity.max(1);
        let raw: Vec<String> = read_json(&storage, RECENT_SEARCHES_KEY)?.unwrap_or_default();

        let mut entries: Vec<SearchTerm> = Vec::with_capacity(capacity);
        for term in raw.into_iter().filter_map(|s| SearchTerm::try_new(s).ok()) {
            if !entries.contains(&term) {
                entries.push(term);
            }
        }
        entries.truncate(capacity);

        Ok(Self {
            storage,
            entries,
            capacity,
        })
    }

    pub fn entries(&self) -> &[SearchTerm] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Moves `term` to the front, evicting the oldest entry past capacity.
    pub fn record_search(&mut self, term: SearchTerm) -> Result<(), StorageError> {
        self.entries.retain(|existing| existing != &term);
        self.entries.insert(0, term);
        self.entries.truncate(self.capacity);
        self.persist()
    }

    /// Returns true if an entry was removed. `term` is trimmed the same way
    /// stored entries are.
    pub fn remove(&mut self, term: &str) -> Result<bool, StorageError> {
        let term = term.trim();
        let before = self.entries.len();
        self.entries.retain(|existing| existing.as_str() != term);
        let removed = self.entries.len() != before;
        self.persist()?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        write_json(&self.storage, RECENT_SEARCHES_KEY, &self.entries)
    }
}
