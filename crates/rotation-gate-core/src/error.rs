//! Error types for the rotation gate
//!
//! Every failure the gate can report lives here. Measurement and scale errors
//! are raised before any arithmetic happens, so a failed evaluation never
//! leaves a partial result behind.

use thiserror::Error;

/// Result type alias for gate operations
pub type Result<T> = std::result::Result<T, GateError>;

/// Main error type for gate operations
#[derive(Error, Debug)]
pub enum GateError {
    /// An entropy measurement was zero, negative, or not finite
    #[error("Invalid measurement: {name} must be a finite value > 0, got {value}")]
    InvalidMeasurement {
        /// Which input was rejected (`h_before` or `h_after`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The scaling constant was negative or not finite
    #[error("Invalid scale: kappa must be a finite value >= 0, got {0}")]
    InvalidScale(f64),

    /// The scaling constant lies outside the certified range
    #[error("Kappa {kappa} outside certified range [{min}, {max}]")]
    KappaOutOfRange {
        /// Requested kappa
        kappa: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// A stored gain record breaks the gate's guarantees
    #[error("Invalid gain record: {0}")]
    InvalidRecord(String),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML write errors
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        /// What was being attempted
        context: String,
        /// Underlying error
        source: Box<GateError>,
    },
}

impl GateError {
    /// Add context to an error
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// True when the caller supplied a malformed measurement or scale and
    /// must correct it upstream.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidMeasurement { .. }
            | Self::InvalidScale(_)
            | Self::KappaOutOfRange { .. } => true,
            Self::WithContext { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add lazy context to a Result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.context(f()))
    }
}
