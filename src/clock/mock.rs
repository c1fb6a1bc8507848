use super::Clock;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Manually advanced clock for deterministic timing tests.
///
/// Cloning produces a handle onto the same underlying instant, so a test
/// can keep one handle while the stopwatch under test owns the other:
///
/// ```rust
/// use chronograph::clock::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
///
/// let before = clock.now();
/// handle.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - before, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, amount: Duration) {
        let mut now = self.now.lock().expect("manual clock mutex poisoned");
        *now += amount;
    }

    /// Move the clock forward by whole milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("manual clock mutex poisoned")
    }
}
