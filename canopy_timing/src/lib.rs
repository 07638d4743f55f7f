// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Timing: host-driven debounce and throttle gates.
//!
//! ## Overview
//!
//! A [`TimingGate`](crate::gate::TimingGate) wraps a callback and applies one of three
//! policies to the requests made against it:
//!
//! - [`Mode::DEBOUNCE`](crate::types::Mode::DEBOUNCE): run once, a full interval after the last request of a burst.
//! - [`Mode::DEBOUNCE_IMMEDIATE`](crate::types::Mode::DEBOUNCE_IMMEDIATE): run on the first request of a burst, then stay quiet until the burst ends.
//! - [`Mode::Throttle`](crate::types::Mode::Throttle): run at most once per interval; requests inside the cooldown coalesce into one trailing call with the latest arguments.
//!
//! ## Timers
//!
//! The gate does not own a clock or a timer source.
//! The host implements [`Scheduler`](crate::types::Scheduler) for whatever it has (an event loop,
//! an async runtime, a frame callback) and passes the current time into every call.
//! When a timer the gate armed elapses, the host hands the handle back via
//! [`TimingGate::fire`](crate::gate::TimingGate::fire).
//! For hosts without a timer facility, and for tests, [`TimerQueue`](crate::queue::TimerQueue)
//! is a deterministic virtual-clock scheduler.
//!
//! ## Example
//!
//! ```
//! use canopy_timing::gate::TimingGate;
//! use canopy_timing::queue::TimerQueue;
//! use canopy_timing::types::Invocation;
//!
//! let mut queue = TimerQueue::new();
//! let mut seen = Vec::new();
//! {
//!     let mut gate = TimingGate::throttle_with_interval(|n: u32| seen.push(n), 100);
//!     assert_eq!(gate.invoke(&mut queue, 0, 1), Invocation::Immediate);
//!     assert_eq!(gate.invoke(&mut queue, 0, 2), Invocation::Deferred);
//!     assert_eq!(gate.invoke(&mut queue, 0, 3), Invocation::Deferred);
//!     for id in queue.advance_to(100).unwrap() {
//!         gate.fire(id);
//!     }
//! }
//! assert_eq!(seen, [1, 3]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod gate;
pub mod queue;
pub mod types;
