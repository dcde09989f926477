//! # pommel
//!
//! Generates one Dagger-Hilt `@Module` per declaration annotated with
//! `@SoloModule`, so a class or factory function can be installed into the
//! dependency graph without a hand-written module.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pommel::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = Manifest::from_file("build/pommel/manifest.json")?;
//! let config = PommelConfig::default();
//!
//! let pipeline = Pipeline::new(
//!     JavaRenderer::new(config.generator.clone()),
//!     ScopeMapper::new(config.generator.application_component.clone()),
//! );
//! let summary = pipeline.process_all(&manifest.constructs, &manifest, &TracingSink::new())?;
//! write_artifacts(summary.artifacts(), &config.output.directory)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`pommel_model`] - Type names, annotations, constructs and the host manifest
//! - [`pommel_core`] - Binding resolution, scope mapping, validation and the pipeline
//! - [`pommel_codegen`] - Java module rendering and file output
//! - [`pommel_logging`] - Tracing setup and the tracing diagnostic sink

// Re-export model types
pub use pommel_model::{
    Annotated, Annotation, BindingClass, ClassName, Construct, ContainerKind, FunctionConstruct,
    Manifest, MetadataSource, ModelError, ModelResult, PropertyAccessor, SoloModule,
    TypeConstruct, TypeName, Visibility,
};

// Re-export the engine
pub use pommel_core::{
    Artifact, ArtifactRenderer, BindingDescriptor, CollectingSink, Diagnostic, DiagnosticSink,
    GeneratorConfig, LogLevel, Outcome, Pipeline, PommelConfig, PommelError, PommelResult,
    RenderStrategy, RunSummary, ScopeMapper, Severity, resolve_binding,
};

// Re-export rendering and output
pub use pommel_codegen::{CodegenError, CodegenResult, JavaRenderer, WriteReport, write_artifacts};

pub use pommel_logging::{TracingSink, init_logging};

// Re-export common dependencies that host adapters need
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use pommel::prelude::*;` to import the types needed to run a
/// generation pass end to end.
pub mod prelude {
    pub use crate::{
        ClassName, Construct, ContainerKind, Diagnostic, DiagnosticSink, JavaRenderer, Manifest,
        MetadataSource, Outcome, Pipeline, PommelConfig, PommelError, PommelResult, RunSummary,
        ScopeMapper, TracingSink, TypeName, write_artifacts,
    };
}
