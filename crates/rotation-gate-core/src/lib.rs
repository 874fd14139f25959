//! Rotation Gate Core - veto-clipped reinforcement from alignment entropy
//!
//! Rotation Gate Core turns a before/after measurement of alignment entropy
//! into a single reinforcement angle θ, and guarantees that a measured
//! regression can never be rewarded.
//!
//! # Architecture
//!
//! 1. **Types** (`types`): validated entropy and scale values
//! 2. **Gate** (`gate`): ΔA, the veto, θ, and window tracking
//! 3. **Config** (`config`): κ and the certified-range switch, from JSON or TOML
//!
//! # Quick Start
//!
//! ```
//! use rotation_gate_core::{compute, RotationGate, WindowTracker};
//!
//! // Stateless: entropy halved, so ΔA = ln 2
//! let result = compute(1.0, 0.5, 1.0).unwrap();
//! assert!(!result.vetoed());
//! assert!((result.delta_a() - std::f64::consts::LN_2).abs() < 1e-12);
//!
//! // Regression: vetoed regardless of κ
//! let result = compute(1.0, 2.0, 5.0).unwrap();
//! assert!(result.vetoed());
//! assert_eq!(result.theta(), 0.0);
//!
//! // Across windows: θ for the next window comes from the last ΔA
//! let mut tracker = WindowTracker::new(RotationGate::certified(0.2).unwrap());
//! tracker.observe(0.55, 0.50).unwrap();
//! println!("theta_t = {:.4}", tracker.next_rotation());
//! ```
//!
//! # Guarantees
//!
//! - θ >= 0 for every accepted input
//! - θ > 0 only when ΔA > 0 and κ > 0
//! - Invalid entropies or scales are rejected, never replaced by defaults
//! - Evaluation is pure; gates are `Copy + Send + Sync`

#![deny(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod error;
pub mod gate;
pub mod types;

// Re-export commonly used types for convenience
pub use config::GateConfig;
pub use error::{GateError, Result, ResultExt};
pub use gate::{compute, GainClass, GainResult, RotationGate, WindowRecord, WindowTracker};
pub use types::{AlignmentEntropy, Kappa, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
