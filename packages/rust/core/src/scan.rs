//! Enumeration of candidate files in the target directory.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::trace;

use titlepatch_shared::{Result, TitlePatchError};

/// A file selected for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// File name, used in status lines and the report.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

/// List regular files directly inside `dir` whose extension is `extension`.
///
/// Subdirectories are not entered, even when their name matches. The result
/// is sorted by file name.
pub fn list_candidates(dir: &Path, extension: &str) -> Result<Vec<Candidate>> {
    let entries = std::fs::read_dir(dir).map_err(|e| TitlePatchError::io(dir, e))?;
    let extension = extension.trim_start_matches('.');

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TitlePatchError::io(dir, e))?;
        let path = entry.path();

        if path.extension() != Some(OsStr::new(extension)) {
            continue;
        }
        if !path.is_file() {
            trace!(?path, "skipping non-file entry");
            continue;
        }

        candidates.push(Candidate {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(candidates)
}
