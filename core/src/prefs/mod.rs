//! Per-client preferences persisted in local storage.
//!
//! Every store reads its entry on construction and re-persists synchronously
//! on each mutation. Payloads are tiny and writes are infrequent.

mod history;
mod profile;
mod reading;

pub use history::HistoryStore;
pub use profile::{Interaction, ProfileStore, UserProfile};
pub use reading::{LastRead, LastReadStore, ReadCount, ReadCounter};

pub const RECENT_SEARCHES_KEY: &str = "recent_searches";
pub const LAST_READ_KEY: &str = "last_read";
pub const READ_COUNT_KEY: &str = "read_count";
pub const USER_PROFILE_KEY: &str = "magic_user_profile";

#[cfg(test)]
mod tests;
