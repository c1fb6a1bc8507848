//! Basic Timing
//!
//! This example demonstrates the plain start/stop measurement cycle.
//!
//! Key concepts:
//! - Starting and stopping a measurement
//! - Reading a live elapsed time while running
//! - The `hours:minutes:seconds.millis` rendering
//!
//! Run with: cargo run --example basic_timing

use chronograph::Stopwatch;

fn busywork(rounds: u64) -> u64 {
    (0..rounds).fold(0, |acc, n| acc.wrapping_add(n * n))
}

fn main() -> Result<(), chronograph::IllegalState> {
    println!("=== Basic Timing ===\n");

    let mut watch = Stopwatch::new();

    watch.start()?;
    let checksum = busywork(5_000_000);
    println!("mid-flight reading: {watch}");

    let more = busywork(5_000_000);
    watch.stop()?;

    println!("final reading:      {watch}");
    println!("(checksums {checksum} / {more} keep the work observable)");

    // The stopwatch can be reused after a reset.
    watch.reset();
    println!("\nafter reset: state = {}, reading = {watch}", watch.state());

    Ok(())
}
