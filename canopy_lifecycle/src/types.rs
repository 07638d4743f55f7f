// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle states, stages, registration outcomes, and errors.

/// Callback queued until a lifecycle stage is reached.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Loading progress of a page, in the order a host reports it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ReadyState {
    /// The document is still being parsed.
    Loading,
    /// Parsing finished; subresources may still be loading.
    Interactive,
    /// The document and all subresources have loaded.
    Complete,
}

/// A point in the page lifecycle callbacks can wait for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Stage {
    /// The document is parsed ([`ReadyState::Interactive`] or later).
    Ready,
    /// Everything is loaded ([`ReadyState::Complete`]).
    Load,
}

impl Stage {
    /// Stages in the order they are drained.
    pub const ALL: [Self; 2] = [Self::Ready, Self::Load];

    /// The earliest state at which this stage counts as reached.
    pub const fn reached_at(self) -> ReadyState {
        match self {
            Self::Ready => ReadyState::Interactive,
            Self::Load => ReadyState::Complete,
        }
    }
}

impl ReadyState {
    /// Whether `stage` has been reached in this state.
    pub fn has_reached(self, stage: Stage) -> bool {
        self >= stage.reached_at()
    }
}

/// Result of [`Lifecycle::register`](crate::registry::Lifecycle::register).
pub enum Registration {
    /// The stage was already reached; the callback is handed back to be run by the caller.
    RunNow(Callback),
    /// First callback for the stage: its queue was created and the host should
    /// start listening for the stage.
    ArmListener,
    /// Appended to an existing queue.
    Queued,
}

impl core::fmt::Debug for Registration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::RunNow(_) => f.write_str("RunNow(..)"),
            Self::ArmListener => f.write_str("ArmListener"),
            Self::Queued => f.write_str("Queued"),
        }
    }
}

/// Result of registering with the process-wide registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Registered {
    /// The stage was already reached and the callback has run.
    Ran,
    /// First callback for the stage; the host should start listening for it.
    ArmListener,
    /// Appended to an existing queue.
    Queued,
}

/// Errors reported by the lifecycle registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LifecycleError {
    /// Ready states only move forward.
    #[error("ready state cannot move from {from:?} back to {to:?}")]
    Regressed {
        /// State before the update.
        from: ReadyState,
        /// Rejected state.
        to: ReadyState,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_reached_in_order() {
        assert!(!ReadyState::Loading.has_reached(Stage::Ready));
        assert!(ReadyState::Interactive.has_reached(Stage::Ready));
        assert!(!ReadyState::Interactive.has_reached(Stage::Load));
        assert!(ReadyState::Complete.has_reached(Stage::Ready));
        assert!(ReadyState::Complete.has_reached(Stage::Load));
    }
}
