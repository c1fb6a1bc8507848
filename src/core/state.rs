//! State positions of the stopwatch machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four positions of the stopwatch state machine.
///
/// Exactly one value holds at any time, and every mutating operation is
/// guarded by a precondition on it. `Ready` is the initial position;
/// `Stopped` can only be left through a reset.
///
/// # Example
///
/// ```rust
/// use chronograph::{Stopwatch, WatchState};
///
/// let watch = Stopwatch::new();
/// assert_eq!(watch.state(), WatchState::Ready);
/// assert_eq!(watch.state().name(), "Ready");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum WatchState {
    /// Freshly constructed or reset; timing has not begun.
    Ready,
    /// Actively measuring elapsed time.
    Running,
    /// Measurement paused; the pause will not be counted.
    Suspended,
    /// Measurement finished; the reading is frozen until reset.
    Stopped,
}

impl WatchState {
    /// The state's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Running => "Running",
            Self::Suspended => "Suspended",
            Self::Stopped => "Stopped",
        }
    }

    /// Check whether the stopwatch is counting time in this state.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Check whether a started measurement is currently paused or done.
    ///
    /// In these states the elapsed reading is frozen at a stored mark.
    pub fn is_halted(&self) -> bool {
        matches!(self, Self::Suspended | Self::Stopped)
    }
}

impl fmt::Display for WatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_returns_correct_value() {
        assert_eq!(WatchState::Ready.name(), "Ready");
        assert_eq!(WatchState::Running.name(), "Running");
        assert_eq!(WatchState::Suspended.name(), "Suspended");
        assert_eq!(WatchState::Stopped.name(), "Stopped");
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(WatchState::Suspended.to_string(), "Suspended");
    }

    #[test]
    fn is_running_identifies_the_live_state() {
        assert!(WatchState::Running.is_running());
        assert!(!WatchState::Ready.is_running());
        assert!(!WatchState::Suspended.is_running());
        assert!(!WatchState::Stopped.is_running());
    }

    #[test]
    fn is_halted_identifies_frozen_states() {
        assert!(WatchState::Suspended.is_halted());
        assert!(WatchState::Stopped.is_halted());
        assert!(!WatchState::Ready.is_halted());
        assert!(!WatchState::Running.is_halted());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = WatchState::Suspended;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: WatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
