use komi_core::types::{AppConfig, CaseMatching, FieldWeights, KeyChord};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
    /// 0.0 keeps only perfect matches, 1.0 keeps anything the matcher finds.
    pub threshold: f32,
    /// Queries shorter than this (after trimming) are not matched.
    pub min_query_chars: usize,
    pub result_limit: usize,
    pub debounce: Duration,
    pub weights: FieldWeights,
    pub history_limit: usize,
    /// Chord that opens the overlay; `None` when disabled or unparsable.
    pub open_shortcut: Option<KeyChord>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for SearchConfig {
    fn from(config: &AppConfig) -> Self {
        let search = &config.search;
        Self {
            case_matching: search.case_matching,
            unicode_normalization: search.unicode_normalization,
            threshold: search.threshold,
            min_query_chars: search.min_query_chars,
            result_limit: search.result_limit,
            debounce: Duration::from_millis(search.debounce_ms),
            weights: search.weights.clone(),
            history_limit: config.history.max_entries,
            open_shortcut: config.shortcuts.open_search_chord().ok().flatten(),
        }
    }
}
