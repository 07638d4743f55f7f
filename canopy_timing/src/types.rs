// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for timing gates: modes, outcomes, errors, and the scheduler seam.
//!
//! ## Overview
//!
//! These types describe how a [`TimingGate`](crate::gate::TimingGate) talks to its host.
//! The host owns the timer source and implements [`Scheduler`] for it; the gate only
//! asks for timers to be armed or disarmed and is told when one elapses.

/// Interval used by throttle gates constructed without an explicit interval.
pub const DEFAULT_THROTTLE_MS: u64 = 250;

/// Scheduling policy of a gate, fixed at construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Wait for a quiet period of `interval_ms` after the last request.
    Debounce {
        /// Run on the leading edge of a burst instead of the trailing edge.
        immediate: bool,
    },
    /// Run at most once per `interval_ms`, coalescing the rest into one trailing call.
    Throttle,
}

impl Mode {
    /// Trailing-edge debounce.
    pub const DEBOUNCE: Self = Self::Debounce { immediate: false };
    /// Leading-edge debounce.
    pub const DEBOUNCE_IMMEDIATE: Self = Self::Debounce { immediate: true };
}

/// What a single [`TimingGate::invoke`](crate::gate::TimingGate::invoke) did with the request.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Invocation {
    /// The callback ran synchronously inside `invoke`.
    Immediate,
    /// The callback did not run now; a timer is pending (which may or may not call it).
    Deferred,
}

/// Deferred-callback primitive supplied by the host.
///
/// A gate holds at most one handle at a time and always cancels it before
/// scheduling another. When a scheduled timer elapses the host hands the
/// handle back through [`TimingGate::fire`](crate::gate::TimingGate::fire).
pub trait Scheduler {
    /// Opaque identifier for a scheduled timer.
    type Handle: Copy + Eq + core::fmt::Debug;

    /// Arm a timer that elapses `delay_ms` milliseconds from the host's current time.
    fn schedule(&mut self, delay_ms: u64) -> Self::Handle;

    /// Disarm a timer. Cancelling an elapsed or unknown handle must be a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Errors reported when constructing a gate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GateError {
    /// Debounce gates have no default interval.
    #[error("debounce gates require an explicit interval")]
    MissingInterval,
}

/// Errors reported by [`TimerQueue`](crate::queue::TimerQueue).
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TimerError {
    /// The requested time lies before the queue's current time.
    #[error("timer clock cannot move backwards (now={now}, target={target})")]
    ClockWentBackwards {
        /// Current queue time.
        now: u64,
        /// Requested time.
        target: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_constants() {
        assert_eq!(Mode::DEBOUNCE, Mode::Debounce { immediate: false });
        assert_eq!(Mode::DEBOUNCE_IMMEDIATE, Mode::Debounce { immediate: true });
        assert_ne!(Mode::DEBOUNCE, Mode::Throttle);
    }

    #[test]
    fn timer_error_message_names_both_times() {
        use alloc::string::ToString;
        let msg = TimerError::ClockWentBackwards { now: 10, target: 3 }.to_string();
        assert!(msg.contains("now=10"), "message was {msg}");
        assert!(msg.contains("target=3"), "message was {msg}");
    }
}
