//! Walk a gate through a gain window and a loss window.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p rotation-gate-core --example entropy_windows
//! ```

use anyhow::Result;
use rotation_gate_core::{RotationGate, WindowTracker};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tracker = WindowTracker::new(RotationGate::certified(0.2)?);

    // Entropy falls after the event: alignment improved
    println!("--- Window 1: gain ---");
    let record = tracker.observe(0.55, 0.50)?;
    println!("delta_a (t-1): {:.4}", record.result.delta_a());
    println!("theta (t):     {:.4}", tracker.next_rotation());

    // Entropy rises after the event: the veto holds theta at zero
    println!("--- Window 2: loss ---");
    let record = tracker.observe(0.40, 0.45)?;
    println!("delta_a (t-1): {:.4}", record.result.delta_a());
    println!(
        "theta (t):     {:.4} (vetoed: {})",
        tracker.next_rotation(),
        record.result.vetoed()
    );

    Ok(())
}
