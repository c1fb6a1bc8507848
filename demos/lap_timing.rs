//! Lap Timing
//!
//! This example demonstrates split timing: reading intermediate lap
//! times without stopping the clock.
//!
//! Key concepts:
//! - `split` freezes the readable time while the stopwatch keeps running
//! - `unsplit` erases the mark and returns to live readings
//! - Suspending between laps excludes the pause from the total
//!
//! Run with: cargo run --example lap_timing

use chronograph::Stopwatch;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), chronograph::IllegalState> {
    println!("=== Lap Timing ===\n");

    let mut watch = Stopwatch::new();
    watch.start()?;

    for lap in 1..=3 {
        thread::sleep(Duration::from_millis(120));

        watch.split()?;
        println!("lap {lap}: {watch}");
        watch.unsplit()?;
    }

    // A pit stop: suspended time is not counted.
    watch.suspend()?;
    thread::sleep(Duration::from_millis(200));
    watch.resume()?;

    thread::sleep(Duration::from_millis(120));
    watch.stop()?;

    println!("\ntotal (pit stop excluded): {watch}");
    Ok(())
}
