//! Error types for the generator core

use pommel_model::ModelError;
use thiserror::Error;

/// Result type alias for generator operations
pub type PommelResult<T> = Result<T, PommelError>;

/// Errors of the generator core
///
/// Every variant aborts a generation run except [`PommelError::RenderError`],
/// which [`Pipeline`](crate::Pipeline) turns into a
/// [`Diagnostic`](crate::Diagnostic) for the one construct that failed.
#[derive(Error, Debug)]
pub enum PommelError {
    /// The host model could not be read or queried
    #[error("host model error: {0}")]
    Model(#[from] ModelError),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The host handed over a construct that breaks its own contract
    #[error("host invariant violated for {construct}: {reason}")]
    InvariantViolation { construct: String, reason: String },

    /// An accepted binding could not be rendered; rejects that construct only
    #[error("render error for {construct}: {reason}")]
    RenderError { construct: String, reason: String },

    /// The worker pool could not be set up
    #[error("worker pool error: {0}")]
    Concurrency(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PommelError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            PommelError::Model(_) => 1,
            PommelError::ConfigError(_) => 2,
            PommelError::InvariantViolation { .. } => 3,
            PommelError::RenderError { .. } => 4,
            PommelError::Concurrency(_) => 5,
            PommelError::Io(_) => 6,
        }
    }

    pub fn invariant(construct: impl Into<String>, reason: impl Into<String>) -> Self {
        PommelError::InvariantViolation {
            construct: construct.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for PommelError {
    fn from(err: toml::de::Error) -> Self {
        PommelError::ConfigError(err.to_string())
    }
}
