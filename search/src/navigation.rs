//! Keyboard selection over the result list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// Selection cursor. `Browsing(i)` always points at an existing row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Idle,
    Browsing(usize),
}

impl NavState {
    /// Cursor for a freshly replaced result list: first row, if any.
    pub fn for_results(len: usize) -> Self {
        if len == 0 {
            NavState::Idle
        } else {
            NavState::Browsing(0)
        }
    }

    pub fn selected(self) -> Option<usize> {
        match self {
            NavState::Idle => None,
            NavState::Browsing(index) => Some(index),
        }
    }

    /// Moves towards the last row, stopping there.
    pub fn down(self, len: usize) -> Self {
        match self {
            _ if len == 0 => NavState::Idle,
            NavState::Idle => NavState::Browsing(0),
            NavState::Browsing(index) => NavState::Browsing((index + 1).min(len - 1)),
        }
    }

    /// Moves towards the first row, stopping there.
    pub fn up(self, len: usize) -> Self {
        match self {
            _ if len == 0 => NavState::Idle,
            NavState::Idle => NavState::Browsing(0),
            NavState::Browsing(index) => NavState::Browsing(index.saturating_sub(1).min(len - 1)),
        }
    }
}
