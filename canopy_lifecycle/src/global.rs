// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide page lifecycle.
//!
//! A single [`Lifecycle`] shared by the whole process, for hosts that manage one
//! page. The host reports progress with [`set_ready_state`]; code anywhere in the
//! process registers with [`on_page_ready`] / [`on_page_load`].
//!
//! Callbacks always run with the registry unlocked, so they may register further
//! callbacks (which run immediately, since their stage has been reached).

use parking_lot::{Mutex, const_mutex};

use crate::registry::Lifecycle;
use crate::types::{Callback, LifecycleError, ReadyState, Registered, Registration, Stage};

static PAGE: Mutex<Lifecycle> = const_mutex(Lifecycle::new(ReadyState::Loading));

/// Run `f` once the page is parsed, or now if it already is.
pub fn on_page_ready(f: impl FnOnce() + Send + 'static) -> Registered {
    register(Stage::Ready, Box::new(f))
}

/// Run `f` once the page has fully loaded, or now if it already has.
pub fn on_page_load(f: impl FnOnce() + Send + 'static) -> Registered {
    register(Stage::Load, Box::new(f))
}

/// Run `callback` once `stage` is reached.
pub fn register(stage: Stage, callback: Callback) -> Registered {
    // Bind first so the guard is dropped before the callback runs.
    let registration = PAGE.lock().register(stage, callback);
    match registration {
        Registration::RunNow(callback) => {
            callback();
            Registered::Ran
        }
        Registration::ArmListener => Registered::ArmListener,
        Registration::Queued => Registered::Queued,
    }
}

/// Report the page's ready state, running every callback whose stage it reaches.
///
/// Returns the number of callbacks run.
///
/// The drained callbacks run after the lock is released. A registration made
/// on another thread in that gap sees the stage as reached and runs at once,
/// possibly before callbacks that were queued earlier. Registration order is
/// only preserved among callbacks registered before this call.
pub fn set_ready_state(state: ReadyState) -> Result<usize, LifecycleError> {
    let due = PAGE.lock().advance(state)?;
    let count = due.len();
    for callback in due {
        callback();
    }
    Ok(count)
}

/// Current process-wide ready state.
pub fn ready_state() -> ReadyState {
    PAGE.lock().ready_state()
}

/// Number of callbacks waiting for `stage` in the process-wide registry.
pub fn queued(stage: Stage) -> usize {
    PAGE.lock().queued(stage)
}
