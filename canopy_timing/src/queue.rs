// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic virtual-clock timer queue.
//!
//! [`TimerQueue`] implements [`Scheduler`] for hosts that have no timer facility
//! of their own, and for tests. Time only moves when the host calls
//! [`TimerQueue::advance_to`] or [`TimerQueue::advance_by`], which return the
//! elapsed timers for the host to route (typically to [`TimingGate::fire`]).
//!
//! [`TimingGate::fire`]: crate::gate::TimingGate::fire

use alloc::vec::Vec;

use crate::types::{Scheduler, TimerError};

/// Identifier of a timer armed on a [`TimerQueue`].
///
/// Identifiers increase monotonically and are never reused by a queue.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw value, for logging or host-side routing tables.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A timer that has been armed but has not elapsed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PendingTimer {
    /// Timer identifier.
    pub id: TimerId,
    /// Queue time at which the timer elapses.
    pub due_at: u64,
}

/// Virtual-clock timer queue.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: u64,
    next_id: u64,
    timers: Vec<PendingTimer>,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue whose clock starts at `now`.
    pub fn starting_at(now: u64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Current queue time.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of armed timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether no timers are armed.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Earliest due time among armed timers.
    pub fn next_due(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_at).min()
    }

    /// Armed timers ordered by due time, then by arming order.
    pub fn pending(&self) -> Vec<PendingTimer> {
        let mut out = self.timers.clone();
        out.sort_by_key(|t| (t.due_at, t.id));
        out
    }

    /// Disarm every timer, returning how many were armed.
    pub fn clear(&mut self) -> usize {
        let cleared = self.timers.len();
        self.timers.clear();
        cleared
    }

    /// Move the clock to `target` and return every timer due at or before it.
    ///
    /// Elapsed timers are removed and returned ordered by due time, then by
    /// arming order. Timers armed while the host processes the result are
    /// relative to `target`.
    pub fn advance_to(&mut self, target: u64) -> Result<Vec<TimerId>, TimerError> {
        if target < self.now {
            return Err(TimerError::ClockWentBackwards {
                now: self.now,
                target,
            });
        }
        self.now = target;
        let (mut due, keep): (Vec<_>, Vec<_>) = core::mem::take(&mut self.timers)
            .into_iter()
            .partition(|t| t.due_at <= target);
        self.timers = keep;
        due.sort_by_key(|t| (t.due_at, t.id));
        if !due.is_empty() {
            tracing::trace!(now = target, due = due.len(), "timers elapsed");
        }
        Ok(due.into_iter().map(|t| t.id).collect())
    }

    /// Move the clock forward by `delta_ms`; see [`TimerQueue::advance_to`].
    pub fn advance_by(&mut self, delta_ms: u64) -> Vec<TimerId> {
        let target = self.now.saturating_add(delta_ms);
        // Never behind `now`, so this cannot fail.
        self.advance_to(target).unwrap_or_default()
    }
}

impl Scheduler for TimerQueue {
    type Handle = TimerId;

    fn schedule(&mut self, delay_ms: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(PendingTimer {
            id,
            due_at: self.now.saturating_add(delay_ms),
        });
        id
    }

    fn cancel(&mut self, handle: TimerId) {
        self.timers.retain(|t| t.id != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn schedule_is_relative_to_now() {
        let mut q = TimerQueue::starting_at(1_000);
        let a = q.schedule(50);
        assert_eq!(q.pending(), vec![PendingTimer { id: a, due_at: 1_050 }]);
        assert_eq!(q.next_due(), Some(1_050));
    }

    #[test]
    fn advance_returns_due_in_order() {
        let mut q = TimerQueue::new();
        let late = q.schedule(30);
        let early = q.schedule(10);
        let tie = q.schedule(10);
        let future = q.schedule(100);
        assert_eq!(q.advance_to(30).unwrap(), vec![early, tie, late]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pending()[0].id, future);
        assert_eq!(q.now(), 30);
    }

    #[test]
    fn advance_by_accumulates() {
        let mut q = TimerQueue::new();
        let a = q.schedule(25);
        assert!(q.advance_by(10).is_empty());
        assert!(q.advance_by(10).is_empty());
        assert_eq!(q.advance_by(10), vec![a]);
        assert_eq!(q.now(), 30);
    }

    #[test]
    fn cancel_removes_and_ignores_unknown() {
        let mut q = TimerQueue::new();
        let a = q.schedule(5);
        let b = q.schedule(5);
        q.cancel(a);
        q.cancel(a);
        assert_eq!(q.advance_to(5).unwrap(), vec![b]);
        assert!(q.is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut q = TimerQueue::new();
        let a = q.schedule(1);
        q.cancel(a);
        let b = q.schedule(1);
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }

    #[test]
    fn clock_cannot_go_backwards() {
        let mut q = TimerQueue::starting_at(10);
        assert_eq!(
            q.advance_to(9),
            Err(TimerError::ClockWentBackwards { now: 10, target: 9 })
        );
        assert_eq!(q.now(), 10);
    }

    #[test]
    fn clear_reports_count() {
        let mut q = TimerQueue::new();
        q.schedule(1);
        q.schedule(2);
        assert_eq!(q.clear(), 2);
        assert_eq!(q.next_due(), None);
    }
}
