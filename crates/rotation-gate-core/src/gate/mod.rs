//! Rotation Gate - turns alignment entropy change into a reinforcement angle
//!
//! # Architecture
//!
//! ```text
//! +-----------------------------------------------------------+
//! |          External measurement subsystem                   |
//! |  "How disordered is the ethical state?"                   |
//! +----------------------|------------------------------------+
//!                        | h_before, h_after
//!                        v
//! +-----------------------------------------------------------+
//! |                 Rotation Gate                             |
//! |                                                           |
//! |  delta_a = ln(h_before / h_after)                         |
//! |  theta   = kappa * max(0, delta_a)     <-- veto           |
//! |  vetoed  = delta_a <= 0                                   |
//! +----------------------|------------------------------------+
//!                        | GainResult
//!                        v
//! +-----------------------------------------------------------+
//! |          External rotation applier                        |
//! +-----------------------------------------------------------+
//! ```
//!
//! ## Components
//!
//! - [`compute`]: the stateless gate as a free function
//! - [`RotationGate`]: the same gate bound to a validated κ
//! - [`WindowTracker`]: keeps ΔA from the previous window so the next
//!   window can read its angle
//! - [`GainResult`]: the immutable outcome of one evaluation
//!
//! # Veto
//!
//! A regression (entropy up) or a no-op (entropy unchanged) gives ΔA <= 0,
//! which is clamped to zero before scaling. No κ can turn that into a
//! positive angle.

pub mod result;
pub mod rotation;
pub mod window;

pub use result::{GainClass, GainResult};
pub use rotation::{compute, evaluate, RotationGate};
pub use window::{WindowRecord, WindowTracker};
