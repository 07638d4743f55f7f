// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_timing::gate::TimingGate;
use canopy_timing::queue::TimerQueue;
use canopy_timing::types::Mode;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Request times for `n` events spaced `step` ms apart.
fn burst(n: u64, step: u64) -> Vec<u64> {
    (0..n).map(|i| i * step).collect()
}

fn run_burst(mode: Mode, times: &[u64]) -> u64 {
    let mut calls = 0_u64;
    let mut queue = TimerQueue::new();
    let mut gate = TimingGate::new(mode, |v: u64| calls += v, Some(16)).unwrap();
    for &t in times {
        for id in queue.advance_to(t).unwrap() {
            gate.fire(id);
        }
        gate.invoke(&mut queue, t, 1);
    }
    for id in queue.advance_by(1_000) {
        gate.fire(id);
    }
    drop(gate);
    calls
}

fn bench_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_bursts");
    for (label, step) in [("dense_1ms", 1), ("sparse_20ms", 20)] {
        let times = burst(10_000, step);
        group.throughput(Throughput::Elements(times.len() as u64));
        for (name, mode) in [
            ("debounce", Mode::DEBOUNCE),
            ("debounce_immediate", Mode::DEBOUNCE_IMMEDIATE),
            ("throttle", Mode::Throttle),
        ] {
            group.bench_function(format!("{name}/{label}"), |b| {
                b.iter_batched(
                    || times.clone(),
                    |times| black_box(run_burst(mode, &times)),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_gates);
criterion_main!(benches);
