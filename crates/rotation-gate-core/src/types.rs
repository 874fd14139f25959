//! Core types for the rotation gate
//!
//! Validated scalar wrappers for the two gate inputs plus the timestamp alias
//! used by window records.

use crate::error::{GateError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type alias
pub type Timestamp = DateTime<Utc>;

/// Create a timestamp for the current moment
pub fn now() -> Timestamp {
    Utc::now()
}

/// Alignment entropy: disorder of the system's ethical state. Lower is better.
///
/// Always finite and strictly positive.
///
/// ```
/// use rotation_gate_core::types::AlignmentEntropy;
///
/// assert!(AlignmentEntropy::new(0.55).is_ok());
/// assert!(AlignmentEntropy::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct AlignmentEntropy(f64);

impl AlignmentEntropy {
    /// Validate a raw measurement
    pub fn new(value: f64) -> Result<Self> {
        Self::named("entropy", value)
    }

    /// Validate a raw measurement, naming it in the error
    pub(crate) fn named(name: &'static str, value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(GateError::InvalidMeasurement { name, value })
        }
    }

    /// Raw value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for AlignmentEntropy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for AlignmentEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Scaling constant κ applied to the clipped gain.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Kappa(f64);

impl Kappa {
    /// Default scale, centre of the certified range
    pub const DEFAULT: Kappa = Kappa(0.2);

    /// Lower bound of the certified range (inclusive)
    pub const CERTIFIED_MIN: f64 = 0.1;

    /// Upper bound of the certified range (inclusive)
    pub const CERTIFIED_MAX: f64 = 0.3;

    /// Accept any finite κ >= 0
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(GateError::InvalidScale(value))
        }
    }

    /// Accept only κ within `[CERTIFIED_MIN, CERTIFIED_MAX]`
    pub fn certified(value: f64) -> Result<Self> {
        let kappa = Self::new(value)?;
        if !kappa.is_certified() {
            return Err(GateError::KappaOutOfRange {
                kappa: value,
                min: Self::CERTIFIED_MIN,
                max: Self::CERTIFIED_MAX,
            });
        }
        Ok(kappa)
    }

    /// Whether this κ lies in the certified range
    pub fn is_certified(self) -> bool {
        (Self::CERTIFIED_MIN..=Self::CERTIFIED_MAX).contains(&self.0)
    }

    /// Raw value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Kappa {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for Kappa {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Kappa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_rejects_non_positive() {
        assert!(AlignmentEntropy::new(1e-12).is_ok());
        assert!(AlignmentEntropy::new(0.0).is_err());
        assert!(AlignmentEntropy::new(-1.0).is_err());
    }

    #[test]
    fn test_entropy_rejects_non_finite() {
        assert!(AlignmentEntropy::new(f64::NAN).is_err());
        assert!(AlignmentEntropy::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_entropy_error_names_input() {
        let err = AlignmentEntropy::named("h_after", -2.0).unwrap_err();
        assert!(matches!(
            err,
            GateError::InvalidMeasurement { name: "h_after", value } if value == -2.0
        ));
    }

    #[test]
    fn test_kappa_validation() {
        assert_eq!(Kappa::new(0.0).unwrap().value(), 0.0);
        assert!(Kappa::new(7.5).is_ok());
        assert!(matches!(Kappa::new(-0.5), Err(GateError::InvalidScale(_))));
        assert!(Kappa::new(f64::NAN).is_err());
        assert!(Kappa::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_kappa_certified_range() {
        assert!(Kappa::certified(0.1).is_ok());
        assert!(Kappa::certified(0.3).is_ok());
        assert!(matches!(
            Kappa::certified(0.35),
            Err(GateError::KappaOutOfRange { .. })
        ));
        // Negative is a scale error, not a range error
        assert!(matches!(
            Kappa::certified(-0.2),
            Err(GateError::InvalidScale(_))
        ));
        assert!(Kappa::default().is_certified());
    }

    #[test]
    fn test_deserialize_validates() {
        let kappa: Kappa = serde_json::from_str("0.25").unwrap();
        assert_eq!(kappa.value(), 0.25);
        assert!(serde_json::from_str::<Kappa>("-1.0").is_err());
        assert!(serde_json::from_str::<AlignmentEntropy>("0").is_err());
    }
}
