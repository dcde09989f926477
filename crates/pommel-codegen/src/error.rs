//! Error types for source emission

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for code generation
pub type CodegenResult<T> = Result<T, CodegenError>;

#[derive(Error, Debug)]
pub enum CodegenError {
    /// A generated name is not a legal Java identifier
    #[error("invalid {context} '{identifier}'")]
    InvalidIdentifier { identifier: String, context: String },

    /// The binding cannot be expressed with the requested declaration
    #[error("cannot render {type_name}: {reason}")]
    UnsupportedType { type_name: String, reason: String },

    /// Output directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generated file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            CodegenError::InvalidIdentifier { .. } => 1,
            CodegenError::UnsupportedType { .. } => 2,
            CodegenError::CreateDir { .. } => 3,
            CodegenError::Write { .. } => 4,
        }
    }

    pub(crate) fn invalid_identifier(identifier: &str, context: &str) -> Self {
        CodegenError::InvalidIdentifier {
            identifier: identifier.to_string(),
            context: context.to_string(),
        }
    }
}
