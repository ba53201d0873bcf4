//! Superseding calls

use std::sync::Mutex;

use tokio_util::sync::CancellationToken;

/// Hands out one cancellation token at a time
///
/// Starting a new call cancels the previous one, so a view that refetches
/// on every keystroke only ever sees the latest answer. Dropping the guard
/// cancels whatever is still running.
#[derive(Debug, Default)]
pub struct CallGuard {
    current: Mutex<Option<CancellationToken>>,
}

impl CallGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the running call, if any, and return the token for the next one
    pub fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let previous = self
            .current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(token.clone());
        if let Some(previous) = previous {
            previous.cancel();
        }
        token
    }

    pub fn cancel(&self) {
        if let Some(token) = self.current.lock().unwrap_or_else(|e| e.into_inner()).take() {
            token.cancel();
        }
    }
}

impl Drop for CallGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}
