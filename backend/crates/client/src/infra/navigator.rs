//! Navigator that records where the view was sent

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::navigator::Navigator;

/// Navigations kept before the oldest are dropped
pub const HISTORY_LIMIT: usize = 32;

/// Keeps the most recent navigations in order; hosts without a real router
/// use this and poll `current()` after each call.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<VecDeque<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .back()
            .cloned()
    }

    /// Oldest first
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, location: &str) {
        tracing::debug!(location, "Navigating");
        let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        if history.len() == HISTORY_LIMIT {
            history.pop_front();
        }
        history.push_back(location.to_string());
    }
}
