//! pommel-logging - Tracing setup and diagnostic reporting
//!
//! This crate provides:
//! - [`init_logging`] to install a `tracing-subscriber` fmt subscriber
//! - [`TracingSink`], a [`DiagnosticSink`](pommel_core::DiagnosticSink) that
//!   reports construct diagnostics through tracing

mod sink;
mod subscriber;

pub use pommel_core::LogLevel;
pub use sink::TracingSink;
pub use subscriber::{init_logging, level_filter, log_level};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, TracingSink, init_logging};
}
