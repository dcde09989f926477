//! pommel-core - Inference and validation engine of the pommel module generator
//!
//! This crate decides what gets generated for each `@SoloModule` construct:
//! - [`resolve_binding`] picks the exposed type
//! - [`ScopeMapper`] maps scope markers to install targets
//! - [`Validator`] gates generation and collects [`Diagnostic`]s
//! - [`Pipeline`] runs all of it over a construct set and hands accepted
//!   [`BindingDescriptor`]s to an [`ArtifactRenderer`]

mod cache;
mod config;
mod descriptor;
mod diagnostic;
mod error;
mod pipeline;
mod resolver;
mod scope;
mod validator;

pub use cache::MetadataCache;
pub use config::{CONFIG_FILE_NAME, GeneratorConfig, LoggingConfig, OutputConfig, PommelConfig};
pub use descriptor::{
    BindingDescriptor, DescriptorBuilder, ProvidedParameter, RenderStrategy, SourceConstruct,
};
pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, Severity};
pub use error::{PommelError, PommelResult};
pub use pipeline::{Artifact, ArtifactRenderer, ConstructReport, Outcome, Pipeline, RunSummary};
pub use resolver::{BindingConflict, BindingInputs, ResolvedBinding, resolve_binding};
pub use scope::{BuiltinScope, ScopeMapper, ScopeMapping};
pub use validator::{Validation, Validator, messages};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = PommelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(PommelError::ConfigError(format!(
                "unknown log level '{other}'"
            ))),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Artifact, ArtifactRenderer, BindingDescriptor, Diagnostic, DiagnosticSink, LogLevel,
        Pipeline, PommelConfig, PommelError, PommelResult, RenderStrategy, ScopeMapper,
    };
}
