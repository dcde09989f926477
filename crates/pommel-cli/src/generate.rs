//! `pommel generate`

use anyhow::{Context, Result, bail};
use pommel_codegen::{JavaRenderer, write_artifacts};
use pommel_core::{Pipeline, PommelConfig, RunSummary, ScopeMapper};
use pommel_logging::TracingSink;
use pommel_model::Manifest;
use std::path::{Path, PathBuf};
use tracing::info;

/// Run the pipeline over a manifest and write accepted modules
pub fn run(
    manifest_path: &Path,
    output: Option<PathBuf>,
    jobs: Option<usize>,
    config: &PommelConfig,
) -> Result<()> {
    let summary = process(manifest_path, jobs, config)?;

    let root = output.unwrap_or_else(|| config.output.directory.clone());
    let report = write_artifacts(summary.artifacts(), &root)
        .with_context(|| format!("Failed to write modules to {}", root.display()))?;

    info!(
        written = report.written.len(),
        unchanged = report.unchanged.len(),
        "output up to date"
    );
    println!(
        "Generated {} module(s) in {} ({} written, {} unchanged)",
        summary.generated_count(),
        root.display(),
        report.written.len(),
        report.unchanged.len()
    );

    fail_on_rejections(&summary)
}

/// Load a manifest and run it through the pipeline
pub(crate) fn process(
    manifest_path: &Path,
    jobs: Option<usize>,
    config: &PommelConfig,
) -> Result<RunSummary> {
    let manifest = Manifest::from_file(manifest_path)
        .with_context(|| format!("Failed to load manifest: {}", manifest_path.display()))?;

    let scopes = ScopeMapper::new(config.generator.application_component.clone());
    let mut pipeline = Pipeline::new(JavaRenderer::new(config.generator.clone()), scopes);
    if let Some(jobs) = jobs {
        pipeline = pipeline.with_jobs(jobs);
    }

    let sink = TracingSink::new();
    let summary = pipeline
        .process_all(&manifest.constructs, &manifest, &sink)
        .context("Generation aborted")?;

    Ok(summary)
}

pub(crate) fn fail_on_rejections(summary: &RunSummary) -> Result<()> {
    if summary.has_errors() {
        bail!(
            "{} @SoloModule construct(s) rejected",
            summary.rejected_count()
        );
    }
    Ok(())
}
