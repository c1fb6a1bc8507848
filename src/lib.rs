//! Chronograph: a precision stopwatch built on guarded state transitions.
//!
//! A [`Stopwatch`] measures elapsed time against a monotonic clock and
//! protects itself against inappropriate calls: every transition is legal
//! only from specific states, and an illegal call fails with a typed error
//! while leaving the stopwatch untouched.
//!
//! # Core Concepts
//!
//! - **States**: [`WatchState`] enumerates the four positions of the
//!   machine (`Ready`, `Running`, `Suspended`, `Stopped`)
//! - **Guards**: each operation checks its source-state precondition and
//!   returns [`IllegalState`] when it does not hold
//! - **Clocks**: time is read through the [`Clock`] trait, so tests can
//!   substitute a manually advanced clock for the system timer
//!
//! Reading the elapsed time is always legal: while running it is computed
//! live against the clock, otherwise a frozen mark is used, so a
//! measurement at any point in time returns an appropriate result.
//!
//! # Example
//!
//! ```rust
//! use chronograph::clock::ManualClock;
//! use chronograph::Stopwatch;
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut watch = Stopwatch::with_clock(clock.clone());
//!
//! watch.start()?;
//! clock.advance(Duration::from_millis(1500));
//! watch.stop()?;
//!
//! assert_eq!(watch.elapsed(), Duration::from_millis(1500));
//! # Ok::<(), chronograph::IllegalState>(())
//! ```
//!
//! The stopwatch is not thread-safe; concurrent use requires external
//! mutual exclusion.
//!
//! The crate also ships an unrelated sibling utility, [`numeric`], a naive
//! powerful-number test with its own thin CLI wrapper.

pub mod clock;
pub mod core;
pub mod numeric;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use core::{IllegalState, Stopwatch, WatchState};
