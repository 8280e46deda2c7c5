//! Search session orchestration.

use crate::config::SearchConfig;
use crate::debounce::DebounceGate;
use crate::index::IndexCache;
use crate::matcher::FuzzyMatcher;
use crate::navigation::{NavKey, NavState};
use crate::results::SearchResults;
use komi_core::catalog::DataService;
use komi_core::error::{ServiceError, StorageError};
use komi_core::prefs::HistoryStore;
use komi_core::storage::LocalStorage;
use komi_core::types::{KeyChord, SearchTerm, SearchableRecord};
use std::sync::Arc;
use std::time::Instant;

/// Identifies the session a catalog fetch was started for.
///
/// Results delivered with a ticket from a closed session are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

/// What the overlay should show below the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Query too short to search: show recent searches instead.
    Suggestions,
    /// Waiting for the debounce gate.
    Searching,
    NoResults,
    Results,
}

/// Outcome of a key press or click the caller must act on.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEffect {
    None,
    /// Open the selected comic.
    Navigate(Arc<SearchableRecord>),
    /// Open the full results page for the query.
    ShowAll(String),
    /// The overlay was dismissed.
    Close,
}

/// State of one open search overlay.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    searchable: bool,
    pending: bool,
    /// The catalog fetch for this session has not completed yet.
    loading: bool,
    results: SearchResults,
    nav: NavState,
}

impl SearchSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.nav.selected()
    }

    pub fn panel(&self) -> Panel {
        if !self.searchable {
            Panel::Suggestions
        } else if self.pending || self.loading {
            Panel::Searching
        } else if self.results.is_empty() {
            Panel::NoResults
        } else {
            Panel::Results
        }
    }

    fn replace_results(&mut self, results: SearchResults) {
        self.nav = NavState::for_results(results.len());
        self.results = results;
        self.pending = false;
    }
}

/// Drives the search overlay: index, debounce, matching, selection, history.
///
/// Nothing here blocks or spawns. The caller forwards input, calls `tick()`
/// from its event loop, and performs the catalog fetch for each session.
pub struct SearchEngine<S> {
    config: SearchConfig,
    index: IndexCache,
    matcher: FuzzyMatcher,
    debounce: DebounceGate,
    history: HistoryStore<S>,
    session: Option<SearchSession>,
    generation: u64,
    matcher_runs: u64,
}

/// Create operations.
impl<S: LocalStorage> SearchEngine<S> {
    /// Creates an engine and reads the persisted search history.
    pub fn new(config: SearchConfig, storage: S) -> Result<Self, StorageError> {
        let history = HistoryStore::load(storage, config.history_limit)?;

        Ok(Self {
            matcher: FuzzyMatcher::new(&config),
            index: IndexCache::new(),
            debounce: DebounceGate::new(),
            history,
            session: None,
            generation: 0,
            matcher_runs: 0,
            config,
        })
    }
}

/// Session lifecycle.
impl<S: LocalStorage> SearchEngine<S> {
    /// Opens a fresh session. The returned ticket must accompany the
    /// catalog fetch result passed to `complete_load`.
    pub fn open(&mut self) -> LoadTicket {
        self.close();
        self.session = Some(SearchSession {
            loading: true,
            ..SearchSession::default()
        });
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Opens a session if `pressed` is the configured open shortcut and the
    /// overlay is closed.
    pub fn handle_shortcut(&mut self, pressed: &KeyChord) -> Option<LoadTicket> {
        let shortcut = self.config.open_shortcut.as_ref()?;
        if self.is_open() || !shortcut.matches(pressed) {
            return None;
        }
        Some(self.open())
    }

    /// Opens a session and fetches the catalog synchronously.
    pub fn open_with<D: DataService + ?Sized>(&mut self, service: &D) {
        let ticket = self.open();
        self.complete_load(ticket, service.searchable_records());
    }

    /// Applies a catalog fetch. Returns false if the ticket's session has
    /// since closed, in which case the result is discarded.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<SearchableRecord>, ServiceError>,
    ) -> bool {
        if self.session.is_none() || ticket.generation != self.generation {
            tracing::debug!("discarding catalog fetch for a closed search session");
            return false;
        }

        self.index.fill(result);
        if let Some(session) = self.session.as_mut() {
            session.loading = false;
        }

        // A query released by the debounce gate while the fetch was in
        // flight has not been matched yet.
        let rerun = self
            .session
            .as_ref()
            .filter(|s| s.searchable && !self.debounce.is_pending())
            .map(|s| s.query.clone());
        if let Some(query) = rerun {
            self.run_matcher(&query);
        }

        true
    }

    /// Discards the session and anything pending for it.
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("search session closed");
        }
        self.debounce.cancel();
        self.index.clear();
        self.generation += 1;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    pub fn index(&self) -> &IndexCache {
        &self.index
    }
}

/// Input operations.
impl<S: LocalStorage> SearchEngine<S> {
    /// Records the input text. Searchable text is matched once the debounce
    /// delay passes without further input; shorter text clears the results.
    pub fn set_query(&mut self, text: &str, now: Instant) {
        let searchable = self.is_searchable(text);
        let Some(session) = self.session.as_mut() else {
            tracing::debug!("ignoring query while search is closed");
            return;
        };

        session.query = text.to_string();
        session.searchable = searchable;

        if searchable {
            session.pending = true;
            self.debounce.schedule(text, self.config.debounce, now);
        } else {
            self.debounce.cancel();
            session.replace_results(SearchResults::default());
        }
    }

    /// Runs the matcher if the debounce gate has released a query.
    /// Returns true if the results were replaced.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(query) = self.debounce.poll(now) else {
            return false;
        };
        match &self.session {
            Some(session) if !session.loading => {}
            _ => return false,
        }
        self.run_matcher(&query);
        true
    }

    /// When the next `tick()` can do work, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn handle_key(&mut self, key: NavKey) -> SearchEffect {
        let Some(session) = self.session.as_mut() else {
            return SearchEffect::None;
        };
        let len = session.results.len();

        match key {
            NavKey::Down => {
                session.nav = session.nav.down(len);
                SearchEffect::None
            }
            NavKey::Up => {
                session.nav = session.nav.up(len);
                SearchEffect::None
            }
            NavKey::Enter => match session.nav.selected() {
                Some(index) => self.select(index),
                None => self.show_all(),
            },
            NavKey::Escape => {
                self.close();
                SearchEffect::Close
            }
        }
    }

    /// Confirms the result at `index`, as a click on that row would.
    pub fn select(&mut self, index: usize) -> SearchEffect {
        let Some(session) = self.session.as_ref() else {
            return SearchEffect::None;
        };
        let Some(record) = session.results.get(index).map(|m| Arc::clone(&m.record)) else {
            return SearchEffect::None;
        };

        let query = session.query.clone();
        self.remember(&query);
        self.close();
        SearchEffect::Navigate(record)
    }

    /// Fills the input with a recent search and searches it right away.
    pub fn apply_history(&mut self, term: &str, now: Instant) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.set_query(term, now);
        self.debounce.cancel();
        if self.is_searchable(term) {
            self.run_matcher(term);
        }
        true
    }

    fn show_all(&mut self) -> SearchEffect {
        let Some(session) = self.session.as_ref() else {
            return SearchEffect::None;
        };
        if !session.searchable {
            return SearchEffect::None;
        }

        let query = session.query.trim().to_string();
        self.remember(&query);
        self.close();
        SearchEffect::ShowAll(query)
    }
}

/// History operations.
impl<S: LocalStorage> SearchEngine<S> {
    pub fn history(&self) -> &[SearchTerm] {
        self.history.entries()
    }

    pub fn remove_history(&mut self, term: &str) -> Result<bool, StorageError> {
        self.history.remove(term)
    }

    pub fn clear_history(&mut self) -> Result<(), StorageError> {
        self.history.clear()
    }
}

/// Introspection.
impl<S> SearchEngine<S> {
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of times the matcher has run.
    pub fn matcher_runs(&self) -> u64 {
        self.matcher_runs
    }
}

/// Internal helpers.
impl<S: LocalStorage> SearchEngine<S> {
    fn is_searchable(&self, text: &str) -> bool {
        text.trim().chars().count() >= self.config.min_query_chars.max(1)
    }

    fn run_matcher(&mut self, query: &str) {
        let matches = self.matcher.match_records(query, self.index.records());
        self.matcher_runs += 1;

        let results = SearchResults::ranked(matches, self.config.result_limit);
        tracing::debug!(query, results = results.len(), "search matched");

        if let Some(session) = self.session.as_mut() {
            session.replace_results(results);
        }
    }

    /// History writes are best effort; a failure is logged and the
    /// navigation still happens.
    fn remember(&mut self, query: &str) {
        let Ok(term) = SearchTerm::try_new(query) else {
            return;
        };
        if let Err(err) = self.history.record_search(term) {
            tracing::warn!(error = %err, "failed to save search history");
        }
    }
}
