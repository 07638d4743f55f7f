// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing gate implementation.
//!
//! ## Overview
//!
//! A [`TimingGate`] owns a callback and decides, for every request, whether the
//! callback runs now, later, or not at all.
//!
//! ## Policies
//!
//! - Debounce: every request restarts the quiet-period timer. The callback runs
//!   once the timer elapses, with the arguments of the last request.
//! - Debounce (immediate): the first request of a burst runs synchronously; the
//!   timer only marks the end of the burst.
//! - Throttle: a request outside the cooldown runs synchronously. Requests inside
//!   it are coalesced into one trailing call at the end of the window, carrying
//!   the latest arguments.
//!
//! ## Timers
//!
//! The gate never reads a clock or owns a timer source. The host passes `now`
//! and a [`Scheduler`] into [`TimingGate::invoke`], and hands elapsed handles back
//! through [`TimingGate::fire`]. At most one timer is pending per gate.

use crate::types::{DEFAULT_THROTTLE_MS, GateError, Invocation, Mode, Scheduler};

/// Arguments captured for a deferred call.
struct Deferred<A> {
    args: A,
    requested_at: u64,
}

/// Debounce or throttle gate over a callback `F` taking arguments `A`.
///
/// `H` is the handle type of the [`Scheduler`] the host drives the gate with.
///
/// ## Usage
///
/// - Construct with [`TimingGate::new`], or one of the shorthands
///   ([`debounce`](TimingGate::debounce), [`debounce_immediate`](TimingGate::debounce_immediate),
///   [`throttle`](TimingGate::throttle), [`throttle_with_interval`](TimingGate::throttle_with_interval)).
/// - Call [`TimingGate::invoke`] for every request.
/// - When a timer armed by the gate elapses, call [`TimingGate::fire`] with its handle.
pub struct TimingGate<A, F, H> {
    callback: F,
    mode: Mode,
    interval_ms: u64,
    pending: Option<H>,
    last_invoked_at: Option<u64>,
    deferred: Option<Deferred<A>>,
}

impl<A, F, H: core::fmt::Debug> core::fmt::Debug for TimingGate<A, F, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimingGate")
            .field("mode", &self.mode)
            .field("interval_ms", &self.interval_ms)
            .field("pending", &self.pending)
            .field("last_invoked_at", &self.last_invoked_at)
            .finish_non_exhaustive()
    }
}

impl<A, F: FnMut(A), H: Copy + Eq + core::fmt::Debug> TimingGate<A, F, H> {
    /// Create a gate.
    ///
    /// Throttle gates fall back to [`DEFAULT_THROTTLE_MS`] when `interval_ms` is `None`.
    /// Debounce gates have no default and return [`GateError::MissingInterval`].
    pub fn new(mode: Mode, callback: F, interval_ms: Option<u64>) -> Result<Self, GateError> {
        let interval_ms = match (mode, interval_ms) {
            (_, Some(ms)) => ms,
            (Mode::Throttle, None) => DEFAULT_THROTTLE_MS,
            (Mode::Debounce { .. }, None) => return Err(GateError::MissingInterval),
        };
        Ok(Self::from_parts(mode, callback, interval_ms))
    }

    /// Trailing-edge debounce gate.
    pub fn debounce(callback: F, interval_ms: u64) -> Self {
        Self::from_parts(Mode::DEBOUNCE, callback, interval_ms)
    }

    /// Leading-edge debounce gate.
    pub fn debounce_immediate(callback: F, interval_ms: u64) -> Self {
        Self::from_parts(Mode::DEBOUNCE_IMMEDIATE, callback, interval_ms)
    }

    /// Throttle gate with the default interval.
    pub fn throttle(callback: F) -> Self {
        Self::from_parts(Mode::Throttle, callback, DEFAULT_THROTTLE_MS)
    }

    /// Throttle gate with an explicit interval.
    pub fn throttle_with_interval(callback: F, interval_ms: u64) -> Self {
        Self::from_parts(Mode::Throttle, callback, interval_ms)
    }

    fn from_parts(mode: Mode, callback: F, interval_ms: u64) -> Self {
        Self {
            callback,
            mode,
            interval_ms,
            pending: None,
            last_invoked_at: None,
            deferred: None,
        }
    }

    /// Scheduling policy of this gate.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Whether a timer armed by this gate has not yet fired.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time of the last throttled invocation, if any.
    ///
    /// For a trailing call this is the time of the request it carried, not the
    /// time the timer fired. Always `None` for debounce gates.
    pub fn last_invoked_at(&self) -> Option<u64> {
        self.last_invoked_at
    }

    /// Submit a request made at host time `now`.
    pub fn invoke<S>(&mut self, scheduler: &mut S, now: u64, args: A) -> Invocation
    where
        S: Scheduler<Handle = H>,
    {
        match self.mode {
            Mode::Debounce { immediate: false } => {
                self.rearm(scheduler, self.interval_ms);
                self.deferred = Some(Deferred {
                    args,
                    requested_at: now,
                });
                Invocation::Deferred
            }
            Mode::Debounce { immediate: true } => {
                let call_now = self.pending.is_none();
                self.rearm(scheduler, self.interval_ms);
                if call_now {
                    (self.callback)(args);
                    Invocation::Immediate
                } else {
                    Invocation::Deferred
                }
            }
            Mode::Throttle => match self.last_invoked_at {
                Some(last) if now < last.saturating_add(self.interval_ms) => {
                    let window_end = last.saturating_add(self.interval_ms);
                    // A clock that stepped back never waits longer than one interval.
                    let remaining = (window_end - now).min(self.interval_ms);
                    self.rearm(scheduler, remaining);
                    self.deferred = Some(Deferred {
                        args,
                        requested_at: now,
                    });
                    Invocation::Deferred
                }
                _ => {
                    // The synchronous call carries newer arguments than any trailing call.
                    if let Some(handle) = self.pending.take() {
                        scheduler.cancel(handle);
                        self.deferred = None;
                        tracing::trace!(?handle, "throttle: trailing call superseded");
                    }
                    self.last_invoked_at = Some(now);
                    (self.callback)(args);
                    Invocation::Immediate
                }
            },
        }
    }

    /// Deliver an elapsed timer.
    ///
    /// Returns `false` and does nothing if `handle` is not this gate's pending
    /// timer (for example one the host failed to cancel in time).
    pub fn fire(&mut self, handle: H) -> bool {
        if self.pending != Some(handle) {
            tracing::trace!(?handle, pending = ?self.pending, "ignoring stale timer");
            return false;
        }
        self.pending = None;
        tracing::trace!(?handle, mode = ?self.mode, "timer fired");
        match self.mode {
            // Immediate debounce only needed to know the burst is over.
            Mode::Debounce { immediate: true } => {}
            Mode::Debounce { immediate: false } => {
                if let Some(d) = self.deferred.take() {
                    (self.callback)(d.args);
                }
            }
            Mode::Throttle => {
                if let Some(d) = self.deferred.take() {
                    self.last_invoked_at = Some(d.requested_at);
                    (self.callback)(d.args);
                }
            }
        }
        true
    }

    fn rearm<S>(&mut self, scheduler: &mut S, delay_ms: u64)
    where
        S: Scheduler<Handle = H>,
    {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
            tracing::trace!(handle = ?previous, "timer superseded");
        }
        self.pending = Some(scheduler.schedule(delay_ms));
    }
}
