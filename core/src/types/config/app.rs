use crate::types::{KeyChord, ShortcutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub reader: ReaderConfig,
    #[serde(default)]
    pub shortcuts: ShortcutsConfig,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.search.threshold) {
            errors.push("search.threshold must be between 0.0 and 1.0".to_string());
        }

        if self.search.result_limit == 0 {
            errors.push("search.result_limit must be at least 1".to_string());
        }

        if self.search.min_query_chars == 0 {
            errors.push("search.min_query_chars must be at least 1".to_string());
        }

        if !self.search.weights.is_valid() {
            errors.push("search.weights must be non-negative with a positive title weight".to_string());
        }

        if self.history.max_entries == 0 {
            errors.push("history.max_entries must be at least 1".to_string());
        }

        if self.reader.interstitial_interval == 0 {
            errors.push("reader.interstitial_interval must be at least 1".to_string());
        }

        if let Err(err) = self.shortcuts.open_search_chord() {
            errors.push(format!("shortcuts.open_search: {err}"));
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            search: SearchSettings {
                debounce_ms: self.search.debounce_ms,
                min_query_chars: if self.search.min_query_chars == 0 {
                    defaults.search.min_query_chars
                } else {
                    self.search.min_query_chars
                },
                result_limit: if self.search.result_limit == 0 {
                    defaults.search.result_limit
                } else {
                    self.search.result_limit
                },
                threshold: if (0.0..=1.0).contains(&self.search.threshold) {
                    self.search.threshold
                } else {
                    defaults.search.threshold
                },
                case_matching: self.search.case_matching,
                unicode_normalization: self.search.unicode_normalization,
                weights: if self.search.weights.is_valid() {
                    self.search.weights.clone()
                } else {
                    defaults.search.weights
                },
            },
            history: HistoryConfig {
                max_entries: if self.history.max_entries == 0 {
                    defaults.history.max_entries
                } else {
                    self.history.max_entries
                },
            },
            reader: ReaderConfig {
                interstitial_interval: if self.reader.interstitial_interval == 0 {
                    defaults.reader.interstitial_interval
                } else {
                    self.reader.interstitial_interval
                },
            },
            shortcuts: if self.shortcuts.open_search_chord().is_ok() {
                self.shortcuts.clone()
            } else {
                defaults.shortcuts
            },
        }
    }
}

/// Search overlay settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// 0.0 accepts only perfect matches, 1.0 accepts anything the matcher finds.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    #[serde(default)]
    pub case_matching: CaseMatching,
    #[serde(default = "default_true")]
    pub unicode_normalization: bool,
    #[serde(default)]
    pub weights: FieldWeights,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_chars: default_min_query_chars(),
            result_limit: default_result_limit(),
            threshold: default_threshold(),
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
            weights: FieldWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    Sensitive,
    #[default]
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    Smart,
}

impl fmt::Display for CaseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMatching::Sensitive => write!(f, "sensitive"),
            CaseMatching::Insensitive => write!(f, "insensitive"),
            CaseMatching::Smart => write!(f, "smart"),
        }
    }
}

/// Relative importance of each searchable field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    #[serde(default = "default_title_weight")]
    pub title: f32,
    #[serde(default = "default_author_weight")]
    pub author: f32,
    #[serde(default = "default_tags_weight")]
    pub tags: f32,
    #[serde(default = "default_description_weight")]
    pub description: f32,
}

impl FieldWeights {
    pub fn is_valid(&self) -> bool {
        self.title > 0.0 && self.author >= 0.0 && self.tags >= 0.0 && self.description >= 0.0
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: default_title_weight(),
            author: default_author_weight(),
            tags: default_tags_weight(),
            description: default_description_weight(),
        }
    }
}

/// Recent-search history settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_entries")]
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_history_entries(),
        }
    }
}

/// Chapter reader settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// An interstitial is due every N chapter opens.
    #[serde(default = "default_interstitial_interval")]
    pub interstitial_interval: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            interstitial_interval: default_interstitial_interval(),
        }
    }
}

/// Keyboard shortcut settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutsConfig {
    /// Opens the search overlay from anywhere, e.g. `Ctrl+KeyK`.
    #[serde(default = "default_open_search")]
    pub open_search: String,
}

impl ShortcutsConfig {
    /// A blank shortcut disables it.
    pub fn open_search_chord(&self) -> Result<Option<KeyChord>, ShortcutError> {
        if self.open_search.trim().is_empty() {
            return Ok(None);
        }
        self.open_search.parse().map(Some)
    }
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            open_search: default_open_search(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_min_query_chars() -> usize {
    2
}

fn default_result_limit() -> usize {
    10
}

fn default_threshold() -> f32 {
    0.6
}

fn default_title_weight() -> f32 {
    1.0
}

fn default_author_weight() -> f32 {
    0.5
}

fn default_tags_weight() -> f32 {
    0.4
}

fn default_description_weight() -> f32 {
    0.2
}

fn default_history_entries() -> usize {
    5
}

fn default_interstitial_interval() -> u64 {
    7
}

fn default_open_search() -> String {
    "Ctrl+KeyK".to_string()
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
