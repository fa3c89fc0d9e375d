//! One-shot resolution timers driven by the frame loop.
//!
//! The host does not own a real clock. The UI calls `tick(elapsed_ms)` once
//! per frame and every ticket whose delay has elapsed fires, in scheduling
//! order. Timers are never cancelled.

use crate::engine::ResolutionTicket;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scheduled {
    due_ms: u64,
    ticket: ResolutionTicket,
}

/// Pending resolution tickets ordered by due time.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    scheduled: Vec<Scheduled>,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the queue was created.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tickets waiting to fire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    /// Check if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }

    /// Fire `ticket` once `delay_ms` has elapsed.
    pub fn schedule(&mut self, delay_ms: u32, ticket: ResolutionTicket) {
        let due_ms = self.now_ms + u64::from(delay_ms);
        // Stable insert keeps scheduling order among equal due times.
        let at = self.scheduled.partition_point(|s| s.due_ms <= due_ms);
        self.scheduled.insert(at, Scheduled { due_ms, ticket });
    }

    /// Advance time and return every ticket that became due.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<ResolutionTicket> {
        self.now_ms += u64::from(elapsed_ms);
        let due = self.scheduled.partition_point(|s| s.due_ms <= self.now_ms);
        self.scheduled.drain(..due).map(|s| s.ticket).collect()
    }
}
