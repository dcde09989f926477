//! Diagnostics reported through tracing

use pommel_core::{Diagnostic, DiagnosticSink, Severity};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{error, warn};

/// Logs each diagnostic and counts them by severity
#[derive(Debug, Default)]
pub struct TracingSink {
    errors: AtomicUsize,
    warnings: AtomicUsize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => {
                self.errors.fetch_add(1, Ordering::Relaxed);
                error!(location = %diagnostic.location, "{}", diagnostic.message);
            }
            Severity::Warning => {
                self.warnings.fetch_add(1, Ordering::Relaxed);
                warn!(location = %diagnostic.location, "{}", diagnostic.message);
            }
        }
    }
}
