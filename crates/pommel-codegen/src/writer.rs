//! Writing generated files below an output root

use crate::error::{CodegenError, CodegenResult};
use pommel_core::Artifact;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Files touched by [`write_artifacts`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    /// Already present with identical contents
    pub unchanged: Vec<PathBuf>,
}

/// Write every artifact to `<root>/<package dirs>/<file name>`.
///
/// A file whose current contents already match is left alone so its
/// modification time does not trigger downstream recompilation.
pub fn write_artifacts<'a>(
    artifacts: impl IntoIterator<Item = &'a Artifact>,
    root: &Path,
) -> CodegenResult<WriteReport> {
    let mut report = WriteReport::default();

    for artifact in artifacts {
        let path = root.join(artifact.relative_path());

        if fs::read_to_string(&path).is_ok_and(|existing| existing == artifact.contents) {
            debug!(path = %path.display(), "unchanged");
            report.unchanged.push(path);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CodegenError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &artifact.contents).map_err(|source| CodegenError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "wrote module");
        report.written.push(path);
    }

    Ok(report)
}

#[cfg(test)]
#[path = "writer/writer_tests.rs"]
mod writer_tests;
