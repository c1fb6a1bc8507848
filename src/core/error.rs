//! The error raised when a stopwatch operation is called out of turn.

use crate::core::WatchState;
use thiserror::Error;

/// An operation was applied in a state that does not permit it.
///
/// This is the only error the stopwatch produces. It is raised before any
/// field is touched, so a failed call never leaves a partial transition
/// behind, and retrying without an intervening legal transition will fail
/// identically.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot {operation}: requires {requires}, but the stopwatch is {state}")]
pub struct IllegalState {
    operation: &'static str,
    requires: &'static str,
    state: WatchState,
}

impl IllegalState {
    pub(crate) fn new(
        operation: &'static str,
        requires: &'static str,
        state: WatchState,
    ) -> Self {
        Self {
            operation,
            requires,
            state,
        }
    }

    /// The operation that was rejected.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The state the stopwatch was in when the operation was rejected.
    pub fn state(&self) -> WatchState {
        self.state
    }
}
