//! Error types for the host model

use thiserror::Error;

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Error type for host model queries and manifest decoding
///
/// Every variant describes a broken contract with the host that produced the
/// model. None of them are user-facing validation problems; those are
/// reported as diagnostics by `pommel-core`.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A type name could not be parsed
    #[error("invalid type name '{name}': {reason}")]
    InvalidTypeName { name: String, reason: String },

    /// Metadata for a lexical container was requested but the host has none
    #[error("missing metadata for container: {0}")]
    MissingMetadata(String),

    /// A construct is structurally incomplete
    #[error("malformed construct {construct}: {reason}")]
    MalformedConstruct { construct: String, reason: String },

    /// The construct manifest could not be decoded
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Reading the manifest failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            ModelError::InvalidTypeName { .. } => 1,
            ModelError::MissingMetadata(_) => 2,
            ModelError::MalformedConstruct { .. } => 3,
            ModelError::Manifest(_) => 4,
            ModelError::Io(_) => 5,
        }
    }

    pub(crate) fn invalid_type_name(name: &str, reason: impl Into<String>) -> Self {
        ModelError::InvalidTypeName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Manifest(err.to_string())
    }
}
