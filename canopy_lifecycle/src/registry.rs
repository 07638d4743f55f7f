// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned lifecycle registry.
//!
//! [`Lifecycle`] keeps one queue per [`Stage`]. A queue exists only between the
//! first registration for its stage and the moment the stage is reached; it is
//! then drained once and torn down. Registrations after that point are handed
//! straight back to the caller to run.
//!
//! The registry never runs callbacks itself, so a host can release any lock it
//! holds around the registry before running them.

use crate::types::{Callback, LifecycleError, ReadyState, Registration, Stage};

/// Ready/load callback queues for one page.
pub struct Lifecycle {
    state: ReadyState,
    ready: Option<Vec<Callback>>,
    load: Option<Vec<Callback>>,
}

impl core::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("state", &self.state)
            .field("ready", &self.queued(Stage::Ready))
            .field("load", &self.queued(Stage::Load))
            .finish()
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new(ReadyState::Loading)
    }
}

impl Lifecycle {
    /// Create a registry for a page currently in `state`.
    pub const fn new(state: ReadyState) -> Self {
        Self {
            state,
            ready: None,
            load: None,
        }
    }

    /// Last state reported through [`Lifecycle::advance`] (or the initial one).
    pub fn ready_state(&self) -> ReadyState {
        self.state
    }

    /// Number of callbacks waiting for `stage`.
    pub fn queued(&self, stage: Stage) -> usize {
        self.slot(stage).as_ref().map_or(0, Vec::len)
    }

    /// Register `callback` to run once `stage` is reached.
    pub fn register(&mut self, stage: Stage, callback: Callback) -> Registration {
        if self.state.has_reached(stage) {
            return Registration::RunNow(callback);
        }
        let slot = self.slot_mut(stage);
        match slot {
            Some(queue) => {
                queue.push(callback);
                Registration::Queued
            }
            None => {
                *slot = Some(vec![callback]);
                Registration::ArmListener
            }
        }
    }

    /// Record a new ready state and drain every stage it reaches.
    ///
    /// Callbacks are returned in registration order, ready callbacks before
    /// load callbacks. Each queue is drained at most once.
    pub fn advance(&mut self, state: ReadyState) -> Result<Vec<Callback>, LifecycleError> {
        if state < self.state {
            return Err(LifecycleError::Regressed {
                from: self.state,
                to: state,
            });
        }
        self.state = state;
        let mut due = Vec::new();
        for stage in Stage::ALL {
            if !state.has_reached(stage) {
                continue;
            }
            if let Some(queue) = self.slot_mut(stage).take() {
                tracing::debug!(?stage, count = queue.len(), "draining lifecycle queue");
                due.extend(queue);
            }
        }
        Ok(due)
    }

    fn slot(&self, stage: Stage) -> &Option<Vec<Callback>> {
        match stage {
            Stage::Ready => &self.ready,
            Stage::Load => &self.load,
        }
    }

    fn slot_mut(&mut self, stage: Stage) -> &mut Option<Vec<Callback>> {
        match stage {
            Stage::Ready => &mut self.ready,
            Stage::Load => &mut self.load,
        }
    }
}
