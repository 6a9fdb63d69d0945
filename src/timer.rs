//! Cancellable deferred callbacks on a host-driven clock.
//!
//! Fields never spawn threads or sleep. The host advances a virtual clock
//! from its own event loop, and whatever has come due is handed back as
//! plain data for the field to apply.
//!
//! # Example
//!
//! ```
//! use card_entry::timer::DeferredQueue;
//! use std::time::Duration;
//!
//! let mut queue = DeferredQueue::new();
//! let a = queue.schedule(Duration::from_millis(100), "a");
//! queue.schedule(Duration::from_millis(50), "b");
//!
//! assert!(queue.cancel(a));
//! assert_eq!(queue.advance(Duration::from_millis(200)), vec!["b"]);
//! ```

use std::time::Duration;
use tracing::trace;

/// Identifies one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    handle: TimerHandle,
    deadline: Duration,
    payload: T,
}

/// A queue of payloads waiting for their deadline.
#[derive(Debug)]
pub struct DeferredQueue<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeferredQueue<T> {
    /// Creates an empty queue at time zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Time elapsed on this queue's clock.
    #[inline]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending callbacks.
    #[inline]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// True if `handle` is still waiting.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Schedules `payload` to come due after `delay`.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let deadline = self.now.saturating_add(delay);
        trace!(id = handle.0, ?deadline, "scheduled");
        self.entries.push(Entry {
            handle,
            deadline,
            payload,
        });
        handle
    }

    /// Cancels one callback. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        let removed = self.entries.len() != before;
        if removed {
            trace!(id = handle.0, "cancelled");
        }
        removed
    }

    /// Cancels every pending callback. Safe to call when nothing is pending.
    pub fn cancel_all(&mut self) {
        if !self.entries.is_empty() {
            trace!(count = self.entries.len(), "cancelled all");
        }
        self.entries.clear();
    }

    /// Moves the clock forward and returns the payloads that came due.
    ///
    /// Payloads are ordered by deadline; equal deadlines keep scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|e| e.deadline <= now);
        self.entries = waiting;

        // Stable sort keeps handle order for ties.
        due.sort_by_key(|e| e.deadline);
        due.into_iter()
            .map(|e| {
                trace!(id = e.handle.0, "fired");
                e.payload
            })
            .collect()
    }
}
