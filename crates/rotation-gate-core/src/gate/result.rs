//! Gain Result - outcome of one gate evaluation

use crate::error::{GateError, Result};
use serde::{Deserialize, Serialize};

/// Immutable record of a single gate evaluation.
///
/// Holds the logarithmic gain ΔA, the veto-clipped angle θ (radians), the
/// veto flag, and the κ that produced θ.
///
/// # Examples
///
/// ```
/// use rotation_gate_core::gate::{compute, GainClass};
///
/// let result = compute(1.0, 0.5, 1.0).unwrap();
/// assert_eq!(result.class(), GainClass::Gain);
/// assert!(result.is_reinforcing());
/// assert!((result.theta() - 2f64.ln()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GainResult {
    delta_a: f64,
    theta: f64,
    vetoed: bool,
    kappa: f64,
}

impl GainResult {
    pub(crate) fn new(delta_a: f64, theta: f64, vetoed: bool, kappa: f64) -> Self {
        Self {
            delta_a,
            theta,
            vetoed,
            kappa,
        }
    }

    /// Rebuild a record from stored fields, rejecting any combination the
    /// gate could not have produced.
    pub fn from_parts(delta_a: f64, theta: f64, vetoed: bool, kappa: f64) -> Result<Self> {
        let invalid = |reason: &str| -> Result<Self> {
            Err(GateError::InvalidRecord(format!(
                "{reason} (delta_a={delta_a}, theta={theta}, vetoed={vetoed}, kappa={kappa})"
            )))
        };

        if !(delta_a.is_finite() && theta.is_finite() && kappa.is_finite()) {
            return invalid("non-finite value");
        }
        if kappa < 0.0 {
            return invalid("negative kappa");
        }
        if theta < 0.0 {
            return invalid("negative theta");
        }
        if vetoed != (delta_a <= 0.0) {
            return invalid("veto flag disagrees with delta_a");
        }

        // Relative slack absorbs float text round-trips; a veto or κ = 0 still
        // demands exactly zero.
        let expected = kappa * delta_a.max(0.0);
        if (theta - expected).abs() > expected * 1e-12 {
            return invalid("theta is not kappa * max(0, delta_a)");
        }

        Ok(Self::new(delta_a, theta, vetoed, kappa))
    }

    /// Logarithmic gain `ln(h_before / h_after)`
    pub fn delta_a(&self) -> f64 {
        self.delta_a
    }

    /// Rotation angle in radians, never negative
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Rotation angle in degrees
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    /// True iff ΔA <= 0
    pub fn vetoed(&self) -> bool {
        self.vetoed
    }

    /// Scaling constant used for this evaluation
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Classify the gain
    pub fn class(&self) -> GainClass {
        if self.delta_a > 0.0 {
            GainClass::Gain
        } else if self.delta_a < 0.0 {
            GainClass::Loss
        } else {
            GainClass::Neutral
        }
    }

    /// True when the result would actually rotate something downstream
    pub fn is_reinforcing(&self) -> bool {
        self.theta > 0.0
    }
}

#[derive(Deserialize)]
struct RawGainResult {
    delta_a: f64,
    theta: f64,
    vetoed: bool,
    kappa: f64,
}

impl<'de> Deserialize<'de> for GainResult {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawGainResult::deserialize(deserializer)?;
        Self::from_parts(raw.delta_a, raw.theta, raw.vetoed, raw.kappa)
            .map_err(serde::de::Error::custom)
    }
}

/// Direction of an alignment change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GainClass {
    /// Entropy decreased, alignment improved
    Gain,

    /// Entropy unchanged
    Neutral,

    /// Entropy increased, alignment regressed
    Loss,
}
