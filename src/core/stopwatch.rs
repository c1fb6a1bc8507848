//! The stopwatch state machine.

use crate::clock::{Clock, SystemClock};
use crate::core::{IllegalState, WatchState};
use std::fmt;
use std::time::{Duration, Instant};

/// A stopwatch for accurately measuring elapsed time.
///
/// The stopwatch is a four-state machine (see [`WatchState`]) wrapping a
/// monotonic [`Clock`]. It protects itself against inappropriate calls:
/// each transition is legal only from specific source states and fails
/// with [`IllegalState`] otherwise, leaving the stopwatch untouched.
///
/// Reading the time is always legal. While running without a split the
/// reading is computed live against the clock; in every other situation a
/// stored mark is used, so stopping, suspending or splitting first gives
/// the most precise result, but a measurement at any point in time still
/// returns an appropriate one.
///
/// # Example
///
/// ```rust
/// use chronograph::Stopwatch;
///
/// let mut watch = Stopwatch::new();
/// watch.start()?;
/// // ... the code under measurement ...
/// watch.stop()?;
///
/// println!("elapsed: {watch}");
/// # Ok::<(), chronograph::IllegalState>(())
/// ```
///
/// # Split timing
///
/// [`split`](Stopwatch::split) freezes the reading while the stopwatch
/// keeps running, which lets a caller note a lap time without stopping
/// the clock; [`unsplit`](Stopwatch::unsplit) returns to live readings.
///
/// ```rust
/// use chronograph::clock::ManualClock;
/// use chronograph::Stopwatch;
///
/// let clock = ManualClock::new();
/// let mut watch = Stopwatch::with_clock(clock.clone());
///
/// watch.start()?;
/// clock.advance_millis(400);
/// watch.split()?;
/// clock.advance_millis(300);
///
/// // Frozen at the split mark while time keeps passing.
/// assert_eq!(watch.elapsed_millis(), 400);
///
/// watch.unsplit()?;
/// assert_eq!(watch.elapsed_millis(), 700);
/// # Ok::<(), chronograph::IllegalState>(())
/// ```
///
/// This type is not thread-safe. Sharing it across threads requires
/// external mutual exclusion; concurrent unsynchronized use is a contract
/// violation, not a supported mode.
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    state: WatchState,
    split_active: bool,
    started_at: Option<Instant>,
    marked_at: Option<Instant>,
}

impl Stopwatch<SystemClock> {
    /// Construct a ready stopwatch backed by the system timer.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Construct a ready stopwatch reading time from `clock`.
    ///
    /// Injecting a [`ManualClock`](crate::clock::ManualClock) makes every
    /// timing assertion deterministic; see the examples on this type.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: WatchState::Ready,
            split_active: false,
            started_at: None,
            marked_at: None,
        }
    }

    /// The current state of the machine.
    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Whether a split mark is currently recorded.
    pub fn is_split(&self) -> bool {
        self.split_active
    }

    /// Start measuring.
    ///
    /// # Errors
    ///
    /// Fails with [`IllegalState`] unless the stopwatch is ready.
    pub fn start(&mut self) -> Result<(), IllegalState> {
        if self.state != WatchState::Ready {
            return Err(IllegalState::new("start", "a ready stopwatch", self.state));
        }
        self.started_at = Some(self.clock.now());
        self.state = WatchState::Running;
        Ok(())
    }

    /// Stop measuring and freeze the reading.
    ///
    /// Stopping a suspended stopwatch keeps the suspend instant as the
    /// final mark, so the suspended tail is not counted.
    ///
    /// # Errors
    ///
    /// Fails with [`IllegalState`] unless the stopwatch is running or
    /// suspended.
    pub fn stop(&mut self) -> Result<(), IllegalState> {
        match self.state {
            WatchState::Running => {
                self.marked_at = Some(self.clock.now());
            }
            // The suspend mark already holds the instant timing ended.
            WatchState::Suspended => {}
            state => {
                return Err(IllegalState::new(
                    "stop",
                    "a running or suspended stopwatch",
                    state,
                ))
            }
        }
        self.state = WatchState::Stopped;
        Ok(())
    }

    /// Pause measuring until [`resume`](Stopwatch::resume) is called.
    ///
    /// Time spent suspended is excluded from the total.
    ///
    /// # Errors
    ///
    /// Fails with [`IllegalState`] unless the stopwatch is running.
    pub fn suspend(&mut self) -> Result<(), IllegalState> {
        if !self.state.is_running() {
            return Err(IllegalState::new(
                "suspend",
                "a running stopwatch",
                self.state,
            ));
        }
        self.marked_at = Some(self.clock.now());
        self.state = WatchState::Suspended;
        Ok(())
    }

    /// Resume a suspended measurement.
    ///
    /// # Errors
    ///
    /// Fails with [`IllegalState`] unless the stopwatch is suspended.
    pub fn resume(&mut self) -> Result<(), IllegalState> {
        if self.state != WatchState::Suspended {
            return Err(IllegalState::new(
                "resume",
                "a suspended stopwatch",
                self.state,
            ));
        }
        // Both marks are always set while suspended. Shifting the origin
        // forward by the paused interval preserves the elapsed time
        // accumulated before the suspension.
        if let (Some(started), Some(suspended)) = (self.started_at, self.marked_at) {
            let paused = self.clock.now().saturating_duration_since(suspended);
            self.started_at = Some(started + paused);
        }
        self.state = WatchState::Running;
        Ok(())
    }

    /// Return the stopwatch to its initial ready state.
    ///
    /// The only operation that is legal from every state. Clears the
    /// marks and any recorded split, allowing the stopwatch to be reused.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.marked_at = None;
        self.split_active = false;
        self.state = WatchState::Ready;
    }

    /// Reset and immediately start a fresh measurement.
    ///
    /// Equivalent to [`reset`](Stopwatch::reset) followed by
    /// [`start`](Stopwatch::start), and like reset it is legal from every
    /// state.
    pub fn restart(&mut self) {
        self.reset();
        self.started_at = Some(self.clock.now());
        self.state = WatchState::Running;
    }

    /// Record a split mark, freezing the readable time at this instant.
    ///
    /// The stopwatch keeps running; queries return the split reading
    /// until [`unsplit`](Stopwatch::unsplit) erases it.
    ///
    /// # Errors
    ///
    /// Fails with [`IllegalState`] unless the stopwatch is running.
    pub fn split(&mut self) -> Result<(), IllegalState> {
        if !self.state.is_running() {
            return Err(IllegalState::new(
                "split",
                "a running stopwatch",
                self.state,
            ));
        }
        self.marked_at = Some(self.clock.now());
        self.split_active = true;
        Ok(())
    }

    /// Erase the recorded split mark, returning to live readings.
    ///
    /// # Errors
    ///
    /// Fails with [`IllegalState`] unless the stopwatch is running with
    /// an active split.
    pub fn unsplit(&mut self) -> Result<(), IllegalState> {
        if !self.state.is_running() || !self.split_active {
            return Err(IllegalState::new(
                "unsplit",
                "a running stopwatch with an active split",
                self.state,
            ));
        }
        self.marked_at = None;
        self.split_active = false;
        Ok(())
    }

    /// The time on the stopwatch.
    ///
    /// The reported duration is one of:
    ///
    /// 1. the interval from start to now, while running without a split;
    /// 2. the interval from start to the stop or suspend mark;
    /// 3. the last recorded split reading;
    /// 4. zero, before the first start.
    ///
    /// Always legal and never mutates the stopwatch. Convert with the
    /// integer accessors of [`Duration`] (`as_millis`, `as_nanos`, ...),
    /// which truncate toward zero.
    pub fn elapsed(&self) -> Duration {
        if self.state.is_running() && !self.split_active {
            return match self.started_at {
                Some(started) => self.clock.now().saturating_duration_since(started),
                None => Duration::ZERO,
            };
        }
        match (self.started_at, self.marked_at) {
            (Some(started), Some(marked)) => marked.saturating_duration_since(started),
            _ => Duration::ZERO,
        }
    }

    /// The time on the stopwatch in whole milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed().as_millis()
    }
}

/// Renders the elapsed time as `hours:minutes:seconds.millis`.
///
/// The trailing field carries the full millisecond count rather than the
/// sub-second remainder.
impl<C: Clock> fmt::Display for Stopwatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.elapsed_millis();
        let hours = millis / 3_600_000;
        let minutes = (millis / 60_000) % 60;
        let seconds = (millis / 1_000) % 60;
        write!(f, "{hours}:{minutes}:{seconds}.{millis}")
    }
}
