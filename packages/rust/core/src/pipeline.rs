//! The title-patching pass over a directory.
//!
//! Files are handled one at a time in name order: read, inspect, and, when a
//! heading is found and no title exists yet, rewritten with a header block.
//! The first I/O failure aborts the pass.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, instrument};

use titlepatch_markdown::{Inspection, inspect, prepend_title};
use titlepatch_shared::{
    FileEntry, FileOutcome, PatchOptions, PatchReport, Result, TitlePatchError,
};

use crate::scan::{Candidate, list_candidates};

// ---------------------------------------------------------------------------
// Progress reporting
// ---------------------------------------------------------------------------

/// Trait for reporting per-file progress to the caller.
pub trait ProgressReporter: Send + Sync {
    /// Called once per file, after its outcome is known (and written, unless dry-run).
    fn file_done(&self, name: &str, outcome: &FileOutcome, dry_run: bool);
    /// Called when the pass completes.
    fn done(&self, report: &PatchReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn file_done(&self, _name: &str, _outcome: &FileOutcome, _dry_run: bool) {}
    fn done(&self, _report: &PatchReport) {}
}

// ---------------------------------------------------------------------------
// Directory pass
// ---------------------------------------------------------------------------

/// Give every matching file in `dir` a title header taken from its first
/// second-level heading.
///
/// Files that already contain the title marker, or that have no heading,
/// are left byte-for-byte unchanged. With `opts.dry_run` nothing is written
/// but the report reads as if it had been.
#[instrument(skip_all, fields(dir = %dir.display(), dry_run = opts.dry_run))]
pub fn patch_directory(
    dir: &Path,
    opts: &PatchOptions,
    progress: &dyn ProgressReporter,
) -> Result<PatchReport> {
    let start = Instant::now();
    let candidates = list_candidates(dir, &opts.extension)?;
    info!(files = candidates.len(), "starting title pass");

    let mut report = PatchReport::new(dir, opts.dry_run);
    for candidate in candidates {
        let outcome = patch_file(&candidate, opts.dry_run)?;
        progress.file_done(&candidate.name, &outcome, opts.dry_run);
        report.files.push(FileEntry {
            name: candidate.name,
            outcome,
        });
    }

    info!(
        patched = report.patched(),
        already_patched = report.already_patched(),
        no_heading = report.no_heading(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "title pass complete"
    );
    progress.done(&report);

    Ok(report)
}

/// Process a single file.
fn patch_file(candidate: &Candidate, dry_run: bool) -> Result<FileOutcome> {
    let path = &candidate.path;
    let content = std::fs::read_to_string(path).map_err(|e| TitlePatchError::io(path, e))?;

    let outcome = match inspect(&content) {
        Inspection::AlreadyTitled => FileOutcome::AlreadyPatched,
        Inspection::NoHeading => FileOutcome::NoHeading,
        Inspection::Untitled { title } => {
            if !dry_run {
                let patched = prepend_title(&content, &title);
                std::fs::write(path, patched).map_err(|e| TitlePatchError::io(path, e))?;
            }
            FileOutcome::Patched { title }
        }
    };

    debug!(file = %candidate.name, ?outcome, "processed");
    Ok(outcome)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
