//! Debounce gate between keystrokes and the matcher.

use std::time::{Duration, Instant};

/// Holds back a query until input has been quiet for the scheduled delay.
///
/// Scheduling replaces whatever is pending, so a burst of keystrokes
/// releases only its final text, once.
#[derive(Debug, Default)]
pub struct DebounceGate {
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    query: String,
    deadline: Instant,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending query and schedules `query` to fire after `delay`.
    pub fn schedule(&mut self, query: impl Into<String>, delay: Duration, now: Instant) {
        let deadline = now.checked_add(delay).unwrap_or(now);
        self.pending = Some(Pending {
            query: query.into(),
            deadline,
        });
    }

    /// Releases the pending query if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Returns true if a pending query was dropped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}
