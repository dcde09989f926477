//! `pommel check`

use crate::generate::{fail_on_rejections, process};
use anyhow::Result;
use pommel_core::{Outcome, PommelConfig};
use std::path::Path;

/// Validate every construct of a manifest without writing
pub fn run(manifest_path: &Path, config: &PommelConfig) -> Result<()> {
    println!("Checking manifest: {}", manifest_path.display());

    let summary = process(manifest_path, None, config)?;

    for report in &summary.reports {
        match &report.outcome {
            Outcome::Generated(artifact) => {
                println!("✓ {} -> {}", report.construct, artifact.type_name)
            }
            Outcome::Rejected(diagnostics) => {
                for diagnostic in diagnostics {
                    println!("✗ {diagnostic}");
                }
            }
            Outcome::Skipped { reason } => println!("- {} skipped: {reason}", report.construct),
        }
    }

    fail_on_rejections(&summary)?;
    println!("\nManifest is valid!");
    Ok(())
}
