//! Rotation Gate - entropy gain and veto-clipped rotation angle
//!
//! The whole computation is three steps:
//!
//! ```text
//! delta_a = ln(h_before / h_after)
//! theta   = kappa * max(0, delta_a)
//! vetoed  = delta_a <= 0
//! ```
//!
//! Lower entropy after the event means better alignment, so a drop in
//! entropy yields a positive ΔA. The ratio is never inverted.

use super::result::GainResult;
use crate::config::GateConfig;
use crate::error::Result;
use crate::types::{AlignmentEntropy, Kappa};
use serde::{Deserialize, Serialize};

/// Evaluate the gate for one before/after measurement pair.
///
/// # Errors
///
/// - [`GateError::InvalidMeasurement`] if either entropy is not a finite value > 0
/// - [`GateError::InvalidScale`] if `kappa` is negative or not finite
///
/// # Examples
///
/// ```
/// use rotation_gate_core::gate::compute;
///
/// // Entropy doubled: a regression, so the veto holds theta at zero
/// let result = compute(1.0, 2.0, 5.0).unwrap();
/// assert!(result.vetoed());
/// assert_eq!(result.theta(), 0.0);
///
/// assert!(compute(0.0, 1.0, 1.0).is_err());
/// ```
///
/// [`GateError::InvalidMeasurement`]: crate::error::GateError::InvalidMeasurement
/// [`GateError::InvalidScale`]: crate::error::GateError::InvalidScale
pub fn compute(h_before: f64, h_after: f64, kappa: f64) -> Result<GainResult> {
    let before = AlignmentEntropy::named("h_before", h_before).map_err(log_rejection)?;
    let after = AlignmentEntropy::named("h_after", h_after).map_err(log_rejection)?;
    let kappa = Kappa::new(kappa).map_err(log_rejection)?;

    Ok(evaluate(before, after, kappa))
}

/// Evaluate the gate on already validated inputs. Infallible.
pub fn evaluate(before: AlignmentEntropy, after: AlignmentEntropy, kappa: Kappa) -> GainResult {
    let delta_a = log_gain(before.value(), after.value());
    let theta = kappa.value() * delta_a.max(0.0);
    let vetoed = delta_a <= 0.0;

    tracing::debug!(
        "Gate evaluated: h_before={}, h_after={}, delta_a={:.6}, theta={:.6}, vetoed={}",
        before,
        after,
        delta_a,
        theta,
        vetoed
    );

    GainResult::new(delta_a, theta, vetoed, kappa.value())
}

/// `ln(before / after)`, evaluated as `ln_1p((before - after) / after)` so
/// ratios near 1 keep their precision. Falls back to a difference of logs
/// when the ratio leaves the normal range (extreme magnitudes overflow or go
/// subnormal).
fn log_gain(before: f64, after: f64) -> f64 {
    if (before / after).is_normal() {
        ((before - after) / after).ln_1p()
    } else {
        before.ln() - after.ln()
    }
}

fn log_rejection(err: crate::error::GateError) -> crate::error::GateError {
    tracing::warn!("Gate input rejected: {}", err);
    err
}

/// A gate bound to one scaling constant.
///
/// `RotationGate` is `Copy` and holds no mutable state, so a single instance
/// can be shared freely across threads.
///
/// ```
/// use rotation_gate_core::gate::RotationGate;
///
/// let gate = RotationGate::certified(0.2).unwrap();
/// let result = gate.compute(0.55, 0.50).unwrap();
/// assert!(!result.vetoed());
/// assert!((result.theta() - 0.2 * (0.55f64 / 0.50).ln()).abs() < 1e-12);
///
/// assert!(RotationGate::certified(0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationGate {
    kappa: Kappa,
}

impl RotationGate {
    /// Create a gate with any finite κ >= 0
    pub fn new(kappa: f64) -> Result<Self> {
        Ok(Self {
            kappa: Kappa::new(kappa)?,
        })
    }

    /// Create a gate whose κ must lie within the certified range
    pub fn certified(kappa: f64) -> Result<Self> {
        Ok(Self {
            kappa: Kappa::certified(kappa)?,
        })
    }

    /// Create a gate from a validated κ
    pub fn with_kappa(kappa: Kappa) -> Self {
        Self { kappa }
    }

    /// Create a gate from configuration
    pub fn from_config(config: &GateConfig) -> Result<Self> {
        if config.enforce_certified_range {
            Self::certified(config.kappa)
        } else {
            Self::new(config.kappa)
        }
    }

    /// Scaling constant of this gate
    pub fn kappa(&self) -> f64 {
        self.kappa.value()
    }

    /// Evaluate one before/after measurement pair
    pub fn compute(&self, h_before: f64, h_after: f64) -> Result<GainResult> {
        let before = AlignmentEntropy::named("h_before", h_before).map_err(log_rejection)?;
        let after = AlignmentEntropy::named("h_after", h_after).map_err(log_rejection)?;
        Ok(evaluate(before, after, self.kappa))
    }
}

impl Default for RotationGate {
    fn default() -> Self {
        Self::with_kappa(Kappa::DEFAULT)
    }
}
