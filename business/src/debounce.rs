//! Cancellable delayed values, used to debounce the search input.

use chrono::{DateTime, Duration, Utc};

/// Handle to a pending value, returned by [`Debouncer::schedule`].
///
/// Tokens are compared by identity: cancelling with a stale token (one that
/// was already replaced by a newer `schedule`) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: DateTime<Utc>,
    token: DebounceToken,
}

/// Delays a rapidly changing value until it has been stable for `delay`.
///
/// At most one value is pending at a time: scheduling replaces (and thereby
/// cancels) the previous pending value, so a burst of updates produces
/// exactly one downstream delivery carrying the last value of the burst.
/// Deadlines are computed against the caller-supplied `now`, never the wall
/// clock, so the whole thing is deterministic under test.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    next_token: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_token: 0,
        }
    }

    /// Schedules `value` for delivery at `now + delay`, replacing any value
    /// that was still pending.
    pub fn schedule(&mut self, value: T, now: DateTime<Utc>) -> DebounceToken {
        let token = DebounceToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
            token,
        });
        token
    }

    /// Cancels the pending value if `token` is still the live one.
    pub fn cancel(&mut self, token: DebounceToken) {
        if self.pending.as_ref().is_some_and(|p| p.token == token) {
            self.pending = None;
        }
    }

    /// Delivers the pending value if its deadline has passed.
    ///
    /// Returns `Some(value)` exactly once per scheduled value; afterwards the
    /// debouncer is idle until the next `schedule`.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            return self.pending.take().map(|p| p.value);
        }
        None
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any. The UI uses this to schedule
    /// a repaint instead of polling every frame.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
