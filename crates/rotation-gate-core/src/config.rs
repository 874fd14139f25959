//! Gate configuration

use crate::error::Result;
use crate::gate::RotationGate;
use crate::types::Kappa;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gate configuration
///
/// Loaded from JSON or TOML. Missing fields fall back to defaults.
///
/// ```toml
/// kappa = 0.2
/// enforce_certified_range = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Scaling constant applied to the clipped gain
    pub kappa: f64,

    /// Reject κ outside `[0.1, 0.3]`
    pub enforce_certified_range: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            kappa: Kappa::DEFAULT.value(),
            enforce_certified_range: true,
        }
    }
}

impl GateConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set kappa
    pub fn with_kappa(mut self, kappa: f64) -> Self {
        self.kappa = kappa;
        self
    }

    /// Enable or disable the certified range check
    pub fn with_certified_range(mut self, enforce: bool) -> Self {
        self.enforce_certified_range = enforce;
        self
    }

    /// Check that a gate can be built from this configuration
    pub fn validate(&self) -> Result<()> {
        RotationGate::from_config(self).map(|_| ())
    }

    /// Load configuration from a file (`.toml`, otherwise JSON)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        tracing::debug!("Loaded gate config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file (`.toml`, otherwise JSON)
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string_pretty(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
