//! Commit rendered artifacts to their targets.
//!
//! Artifacts are written only after the whole pipeline has succeeded. File
//! targets are staged as temporary files in their destination directories
//! and renamed over the targets together, so a failed run leaves the
//! previous chart and image map in place.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::{InputSource, OutputTarget};
use crate::error::ChartError;

/// Read the whole input text.
///
/// # Errors
///
/// Returns [`ChartError::Read`] if the source cannot be read.
pub fn read_input(source: &InputSource) -> Result<String, ChartError> {
    match source {
        InputSource::Stdin => io::read_to_string(io::stdin().lock())
            .map_err(|source| ChartError::Read { path: PathBuf::from("<stdin>"), source }),
        InputSource::File(path) => {
            std::fs::read_to_string(path).map_err(|source| ChartError::Read { path: path.clone(), source })
        }
    }
}

/// Commit every artifact, or none of the file targets.
///
/// All file contents are first staged in temporary files next to their
/// targets and synced. Only when every staging write succeeded are they
/// renamed over the targets. Stdout targets are written last.
///
/// # Errors
///
/// Returns [`ChartError::Write`] naming the target that could not be written.
/// A staging failure leaves every existing file target untouched.
pub fn commit_all(artifacts: &[(&OutputTarget, &str)]) -> Result<(), ChartError> {
    let mut staged = Vec::new();
    for (target, contents) in artifacts {
        if let OutputTarget::File(path) = target {
            let tmp = stage_file(path, contents).map_err(|source| ChartError::Write { path: path.clone(), source })?;
            staged.push((path, tmp, contents.len()));
        }
    }

    for (path, tmp, bytes) in staged {
        tmp.persist(path).map_err(|err| ChartError::Write { path: path.clone(), source: err.error })?;
        tracing::info!(path = %path.display(), bytes, "wrote artifact");
    }

    for (target, contents) in artifacts {
        if let OutputTarget::Stdout = target {
            write_stdout(contents)?;
        }
    }
    Ok(())
}

fn write_stdout(contents: &str) -> Result<(), ChartError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(contents.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| ChartError::Write { path: PathBuf::from("<stdout>"), source })
}

fn stage_file(path: &Path, contents: &str) -> io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
