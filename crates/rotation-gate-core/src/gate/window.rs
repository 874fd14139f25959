//! Window Tracker - carries ΔA across an event boundary
//!
//! A measurement taken in window `t-1` decides the rotation applied in
//! window `t`:
//!
//! ```text
//! theta_t = kappa * max(0, delta_a(t-1))
//! ```
//!
//! The tracker stores the most recent evaluation so the next window can ask
//! for its angle without re-supplying measurements.

use super::result::GainResult;
use super::rotation::RotationGate;
use crate::error::{Result, ResultExt};
use crate::types::{now, Timestamp};
use serde::{Deserialize, Serialize};

/// One observed event window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    /// Window index, starting at 1
    pub window: u64,

    /// When the window was observed
    pub recorded_at: Timestamp,

    /// Gate output for this window
    pub result: GainResult,
}

/// Stateful wrapper around a [`RotationGate`].
///
/// # Examples
///
/// ```
/// use rotation_gate_core::gate::{RotationGate, WindowTracker};
///
/// let mut tracker = WindowTracker::new(RotationGate::default());
/// assert_eq!(tracker.next_rotation(), 0.0);
///
/// tracker.observe(0.55, 0.50).unwrap();
/// assert!(tracker.next_rotation() > 0.0);
///
/// tracker.observe(0.40, 0.45).unwrap();
/// assert_eq!(tracker.next_rotation(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct WindowTracker {
    gate: RotationGate,
    last: Option<WindowRecord>,
    windows_observed: u64,
}

impl WindowTracker {
    /// Create a tracker with no observations yet
    pub fn new(gate: RotationGate) -> Self {
        Self {
            gate,
            last: None,
            windows_observed: 0,
        }
    }

    /// Evaluate a window's before/after pair and remember it.
    ///
    /// On error the tracker is left untouched.
    pub fn observe(&mut self, h_before: f64, h_after: f64) -> Result<WindowRecord> {
        let window = self.windows_observed + 1;
        let result = self
            .gate
            .compute(h_before, h_after)
            .with_context(|| format!("Window {} rejected", window))?;

        let record = WindowRecord {
            window,
            recorded_at: now(),
            result,
        };

        tracing::debug!(
            "Window {} observed: delta_a={:.6}, vetoed={}",
            window,
            result.delta_a(),
            result.vetoed()
        );

        self.windows_observed = window;
        self.last = Some(record);
        Ok(record)
    }

    /// θ for the next window, from the last observed ΔA.
    ///
    /// Zero before the first observation.
    pub fn next_rotation(&self) -> f64 {
        self.last.map_or(0.0, |record| record.result.theta())
    }

    /// Most recent window, if any
    pub fn last(&self) -> Option<&WindowRecord> {
        self.last.as_ref()
    }

    /// Number of windows successfully observed
    pub fn windows_observed(&self) -> u64 {
        self.windows_observed
    }

    /// The gate this tracker evaluates with
    pub fn gate(&self) -> &RotationGate {
        &self.gate
    }

    /// Forget all observations
    pub fn reset(&mut self) {
        tracing::info!(
            "Window tracker reset after {} windows",
            self.windows_observed
        );
        self.last = None;
        self.windows_observed = 0;
    }
}

impl Default for WindowTracker {
    fn default() -> Self {
        Self::new(RotationGate::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GateError;

    #[test]
    fn test_next_rotation_uses_previous_window() {
        let mut tracker = WindowTracker::new(RotationGate::new(0.2).unwrap());

        let first = tracker.observe(0.55, 0.50).unwrap();
        assert_eq!(first.window, 1);
        let expected = 0.2 * (0.55f64 / 0.50).ln();
        assert!((tracker.next_rotation() - expected).abs() < 1e-12);

        let second = tracker.observe(0.40, 0.45).unwrap();
        assert_eq!(second.window, 2);
        assert!(second.result.vetoed());
        assert_eq!(tracker.next_rotation(), 0.0);
    }

    #[test]
    fn test_error_leaves_state_untouched() {
        let mut tracker = WindowTracker::default();
        tracker.observe(1.0, 0.5).unwrap();
        let before = tracker.next_rotation();

        let err = tracker.observe(1.0, 0.0).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, GateError::WithContext { .. }));
        assert!(err.to_string().contains("Window 2"));

        assert_eq!(tracker.windows_observed(), 1);
        assert_eq!(tracker.next_rotation(), before);
    }

    #[test]
    fn test_stored_record_cannot_claim_a_vetoed_reward() {
        let mut tracker = WindowTracker::default();
        let record = tracker.observe(0.40, 0.45).unwrap();

        let mut json = serde_json::to_value(record).unwrap();
        let restored: WindowRecord = serde_json::from_value(json.clone()).unwrap();
        assert!(restored.result.vetoed());

        json["result"]["theta"] = serde_json::json!(0.5);
        assert!(serde_json::from_value::<WindowRecord>(json).is_err());
    }

    #[test]
    fn test_reset() {
        let mut tracker = WindowTracker::default();
        tracker.observe(1.0, 0.5).unwrap();
        tracker.reset();

        assert!(tracker.last().is_none());
        assert_eq!(tracker.windows_observed(), 0);
        assert_eq!(tracker.next_rotation(), 0.0);
        assert_eq!(tracker.observe(1.0, 0.9).unwrap().window, 1);
    }
}
