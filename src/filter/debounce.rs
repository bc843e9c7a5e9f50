//! Trailing-edge debounce.
//!
//! The caller supplies the current time on every call, so the same primitive
//! is driven by the terminal tick loop in the application and by synthetic
//! instants in tests.

use std::time::{Duration, Instant};

/// Holds at most one pending value that becomes ready once `delay` has
/// passed without another `schedule`.
///
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Cancel any pending value and arm a new deadline for this one.
    ///
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value if its deadline has been reached.
    ///
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(&self.pending, Some((deadline, _)) if now >= *deadline);
        if ready {
            self.pending.take().map(|(_, v)| v)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}
