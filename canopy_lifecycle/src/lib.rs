// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Lifecycle: run callbacks when a page becomes ready or finishes loading.
//!
//! ## Overview
//!
//! Code that wants to run "once the page is ready" registers a callback for a
//! [`Stage`](crate::types::Stage). Callbacks wait in a per-stage queue until the host reports a
//! [`ReadyState`](crate::types::ReadyState) that reaches the stage, and run immediately when
//! registered after that point.
//!
//! - A queue is created by the first registration for its stage. That registration
//!   reports [`ArmListener`](crate::types::Registration::ArmListener) so the host knows to
//!   start listening for the corresponding event.
//! - A queue is drained exactly once, in registration order, and then torn down.
//!
//! ## Layering
//!
//! - [`Lifecycle`](crate::registry::Lifecycle) is an owned registry for one page. It hands
//!   callbacks back instead of running them.
//! - [`global`](crate::global) wraps a single process-wide registry behind a lock and runs
//!   callbacks with the lock released.
//!
//! ## Example
//!
//! ```
//! use canopy_lifecycle::registry::Lifecycle;
//! use canopy_lifecycle::types::{ReadyState, Registration, Stage};
//!
//! let mut page = Lifecycle::new(ReadyState::Loading);
//! let first = page.register(Stage::Load, Box::new(|| println!("loaded")));
//! assert!(matches!(first, Registration::ArmListener));
//!
//! for callback in page.advance(ReadyState::Complete).unwrap() {
//!     callback();
//! }
//! assert_eq!(page.queued(Stage::Load), 0);
//! ```

pub mod global;
pub mod registry;
pub mod types;
