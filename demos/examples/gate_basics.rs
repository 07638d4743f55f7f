// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing gate basics.
//!
//! Feeds the same burst of scroll positions through a debounce, an immediate
//! debounce, and a throttle gate on a virtual clock, and prints when each
//! callback runs.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p canopy_demos --example gate_basics`

use std::cell::Cell;

use canopy_timing::gate::TimingGate;
use canopy_timing::queue::TimerQueue;
use canopy_timing::types::Mode;
use tracing_subscriber::EnvFilter;

/// Scroll offsets reported at these times (ms).
const BURST: [(u64, u32); 6] = [(0, 10), (40, 20), (80, 30), (120, 40), (400, 50), (430, 60)];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for (name, mode) in [
        ("debounce", Mode::DEBOUNCE),
        ("debounce (immediate)", Mode::DEBOUNCE_IMMEDIATE),
        ("throttle", Mode::Throttle),
    ] {
        println!("== {name} (100 ms) ==");
        let clock = Cell::new(0_u64);
        let mut queue = TimerQueue::new();
        let mut gate = TimingGate::new(
            mode,
            |offset: u32| println!("  t={:>3}  scrolled to {offset}", clock.get()),
            Some(100),
        )
        .expect("interval supplied");

        for (t, offset) in BURST {
            deliver(&mut gate, &mut queue, &clock, t);
            gate.invoke(&mut queue, t, offset);
        }
        deliver(&mut gate, &mut queue, &clock, 1_000);
    }
}

/// Advance the virtual clock, firing any timers that elapse on the way.
fn deliver<F: FnMut(u32)>(
    gate: &mut TimingGate<u32, F, canopy_timing::queue::TimerId>,
    queue: &mut TimerQueue,
    clock: &Cell<u64>,
    until: u64,
) {
    while let Some(due) = queue.next_due().filter(|&due| due <= until) {
        clock.set(due);
        for id in queue.advance_to(due).expect("clock only moves forward") {
            gate.fire(id);
        }
    }
    clock.set(until);
    for id in queue.advance_to(until).expect("clock only moves forward") {
        gate.fire(id);
    }
}
