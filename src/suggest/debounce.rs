use std::time::{Duration, Instant};

/// Trailing-edge debouncer: a single pending query plus its deadline. A new
/// trigger inside the quiescence window supersedes the pending one, so only
/// the last query after a pause fires.
///
/// The clock is passed in by the caller so the timer can be tested without
/// sleeping.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    query: String,
    deadline: Instant,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Schedule `query`, replacing any pending one and restarting the window.
    pub fn trigger(&mut self, query: String, now: Instant) {
        self.pending = Some(Pending {
            query,
            deadline: now + self.window,
        });
    }

    /// Take the pending query if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.deadline <= now {
            self.pending.take().map(|p| p.query)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
