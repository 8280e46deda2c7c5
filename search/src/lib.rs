//! Komi search overlay pipeline.
//!
//! Provides typo-tolerant search over the comic catalog for the search
//! overlay.
//!
//! # Design
//!
//! - The index cache holds one snapshot of the catalog per search session.
//! - Keystrokes pass through a debounce gate; only the last query of a burst
//!   reaches the matcher.
//! - The matcher scores each searchable field with nucleo and combines them
//!   with per-field weights; a threshold rejects weak matches.
//! - Results are truncated to the configured limit and the selection cursor
//!   resets to the first row.
//!
//! # Non-blocking API
//!
//! - `open()`: Starts a session and hands out a ticket for the catalog fetch
//! - `set_query()`: Records the input text and arms the debounce gate
//! - `tick()`: Runs the matcher once the gate releases a query
//! - `handle_key()`: Moves the selection or confirms it

mod config;
mod debounce;
mod engine;
mod index;
mod matcher;
mod navigation;
mod results;

pub use config::SearchConfig;
pub use debounce::DebounceGate;
pub use engine::{LoadTicket, Panel, SearchEffect, SearchEngine, SearchSession};
pub use index::{IndexCache, IndexState};
pub use matcher::FuzzyMatcher;
pub use navigation::{NavKey, NavState};
pub use results::{MatchResult, SearchResults};
