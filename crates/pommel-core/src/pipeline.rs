//! One generation run over a set of constructs

use crate::cache::MetadataCache;
use crate::descriptor::BindingDescriptor;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::{PommelError, PommelResult};
use crate::scope::ScopeMapper;
use crate::validator::{Validation, Validator};
use pommel_model::{Construct, MetadataSource};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Turns an accepted binding into source text
pub trait ArtifactRenderer: Send + Sync {
    fn render(&self, descriptor: &BindingDescriptor) -> PommelResult<Artifact>;
}

/// One generated source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Package of the generated type, same as the source construct
    pub package: String,
    /// Simple name of the generated type
    pub type_name: String,
    /// File name including the host extension
    pub file_name: String,
    pub contents: String,
}

impl Artifact {
    /// Path below the output root: package directories, then the file
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(&self.file_name);
        path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(Artifact),
    Rejected(Vec<Diagnostic>),
    /// Not a candidate for generation (a class without an `@Inject` constructor)
    Skipped { reason: String },
}

/// What happened to one construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructReport {
    pub construct: String,
    pub outcome: Outcome,
}

/// Reports of a run, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reports: Vec<ConstructReport>,
}

impl RunSummary {
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.reports.iter().filter_map(|report| match &report.outcome {
            Outcome::Generated(artifact) => Some(artifact),
            _ => None,
        })
    }

    pub fn generated_count(&self) -> usize {
        self.artifacts().count()
    }

    pub fn rejected_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Rejected(_)))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Skipped { .. }))
    }

    pub fn has_errors(&self) -> bool {
        self.rejected_count() > 0
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.reports.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

/// Validates and renders constructs
pub struct Pipeline<R> {
    renderer: R,
    scopes: ScopeMapper,
    jobs: Option<usize>,
}

impl<R: ArtifactRenderer> Pipeline<R> {
    pub fn new(renderer: R, scopes: ScopeMapper) -> Self {
        Self {
            renderer,
            scopes,
            jobs: None,
        }
    }

    /// Use a dedicated pool of `jobs` workers instead of the global one
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Process one construct against a run's cache
    pub fn process(
        &self,
        construct: &Construct,
        cache: &MetadataCache<'_>,
    ) -> PommelResult<ConstructReport> {
        let name = construct.display_name();

        if let Construct::Type(ty) = construct
            && ty.injectable_constructors().is_empty()
        {
            debug!(construct = %name, "skipping class without @Inject constructor");
            return Ok(ConstructReport {
                construct: name,
                outcome: Outcome::Skipped {
                    reason: "no @Inject constructor".to_string(),
                },
            });
        }

        let outcome = match Validator::new(cache, &self.scopes).validate(construct)? {
            Validation::Accepted(descriptor) => match self.renderer.render(&descriptor) {
                Ok(artifact) => {
                    debug!(construct = %name, artifact = %artifact.type_name, "rendered module");
                    Outcome::Generated(artifact)
                }
                // The construct asked for something the target cannot express
                Err(PommelError::RenderError { reason, .. }) => {
                    debug!(construct = %name, %reason, "construct could not be rendered");
                    Outcome::Rejected(vec![Diagnostic::error(&name, reason)])
                }
                Err(err) => return Err(err),
            },
            Validation::Rejected(diagnostics) => {
                debug!(construct = %name, count = diagnostics.len(), "construct rejected");
                Outcome::Rejected(diagnostics)
            }
        };

        Ok(ConstructReport {
            construct: name,
            outcome,
        })
    }

    /// Process every construct and report diagnostics grouped per construct.
    ///
    /// Constructs are evaluated in parallel; reports come back in input
    /// order. A construct that fails validation or rendering is rejected on
    /// its own; only a fatal error aborts the run.
    pub fn process_all(
        &self,
        constructs: &[Construct],
        source: &dyn MetadataSource,
        sink: &dyn DiagnosticSink,
    ) -> PommelResult<RunSummary> {
        let cache = MetadataCache::new(source);
        let run = || {
            constructs
                .par_iter()
                .map(|construct| self.process(construct, &cache))
                .collect::<PommelResult<Vec<_>>>()
        };

        let reports = match self.jobs {
            Some(jobs) => rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|e| PommelError::Concurrency(e.to_string()))?
                .install(run)?,
            None => run()?,
        };

        for report in &reports {
            if let Outcome::Rejected(diagnostics) = &report.outcome {
                warn!(construct = %report.construct, "@SoloModule construct rejected");
                sink.report_all(diagnostics);
            }
        }

        let summary = RunSummary { reports };
        info!(
            generated = summary.generated_count(),
            rejected = summary.rejected_count(),
            skipped = summary.skipped_count(),
            containers = cache.len(),
            "generation run complete"
        );
        Ok(summary)
    }
}
