//! Input debouncing
//!
//! Holds at most one pending commit. Scheduling a new one replaces whatever was pending,
//! so only the last keystroke of a burst reaches the provider.

use std::time::{Duration, Instant};

/// Default quiet period before a pending commit fires
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

#[derive(Debug)]
struct Pending<T> {
    value: T,
    scheduled_at: Instant,
}

/// Single-slot debouncer for values of type `T`
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Schedule `value`, superseding any pending value
    pub fn schedule_at(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            scheduled_at: now,
        });
    }

    /// Whether the pending value's quiet period has elapsed at `now`
    pub fn should_fire_at(&self, now: Instant) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.scheduled_at) >= self.delay)
    }

    /// Take the pending value if its quiet period has elapsed
    pub fn take_ready_at(&mut self, now: Instant) -> Option<T> {
        if self.should_fire_at(now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Take the pending value regardless of timing
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without firing it
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
