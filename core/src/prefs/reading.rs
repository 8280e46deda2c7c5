use super::{LAST_READ_KEY, READ_COUNT_KEY};
use crate::error::StorageError;
use crate::storage::{LocalStorage, read_json, write_json};
use crate::types::Slug;
use serde::{Deserialize, Serialize};

/// "Continue reading" pointer shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastRead {
    pub title: String,
    pub slug: Slug,
    pub chapter: Slug,
}

pub struct LastReadStore<S> {
    storage: S,
}

impl<S: LocalStorage> LastReadStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> Result<Option<LastRead>, StorageError> {
        read_json(&self.storage, LAST_READ_KEY)
    }

    pub fn set(&self, last_read: &LastRead) -> Result<(), StorageError> {
        write_json(&self.storage, LAST_READ_KEY, last_read)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(LAST_READ_KEY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadCount {
    pub count: u64,
    /// True on every `interval`-th chapter open.
    pub interstitial_due: bool,
}

/// Counts chapter opens across sessions.
pub struct ReadCounter<S> {
    storage: S,
    interval: u64,
}

impl<S: LocalStorage> ReadCounter<S> {
    pub fn new(storage: S, interval: u64) -> Self {
        Self {
            storage,
            interval: interval.max(1),
        }
    }

    pub fn count(&self) -> Result<u64, StorageError> {
        let Some(raw) = self.storage.get_item(READ_COUNT_KEY)? else {
            return Ok(0);
        };
        match raw.trim().parse() {
            Ok(count) => Ok(count),
            Err(_) => {
                tracing::warn!(value = %raw, "resetting unreadable read counter");
                Ok(0)
            }
        }
    }

    pub fn record_open(&self) -> Result<ReadCount, StorageError> {
        let count = self.count()?.saturating_add(1);
        self.storage.set_item(READ_COUNT_KEY, &count.to_string())?;

        Ok(ReadCount {
            count,
            interstitial_due: count % self.interval == 0,
        })
    }
}
