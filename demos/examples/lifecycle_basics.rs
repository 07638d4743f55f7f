// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page lifecycle basics.
//!
//! Registers ready and load callbacks with the process-wide registry, then
//! simulates the host reporting the page's ready states.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p canopy_demos --example lifecycle_basics`

use canopy_lifecycle::global::{on_page_load, on_page_ready, set_ready_state};
use canopy_lifecycle::types::{ReadyState, Registered};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if on_page_ready(|| println!("  ready: wire up widgets")) == Registered::ArmListener {
        println!("host: listening for DOMContentLoaded");
    }
    on_page_ready(|| println!("  ready: restore scroll position"));
    if on_page_load(|| println!("  load: measure images")) == Registered::ArmListener {
        println!("host: listening for load");
    }

    for state in [ReadyState::Interactive, ReadyState::Complete] {
        println!("host: ready state -> {state:?}");
        match set_ready_state(state) {
            Ok(ran) => println!("host: ran {ran} callback(s)"),
            Err(err) => println!("host: {err}"),
        }
    }

    // Already loaded: runs straight away.
    let late = on_page_load(|| println!("  load: late registration"));
    println!("host: late registration {late:?}");
}
