//! Result types produced by a titlepatch directory pass.

use std::path::PathBuf;

use serde::Serialize;

// ---------------------------------------------------------------------------
// FileOutcome
// ---------------------------------------------------------------------------

/// What a pass decided for a single Markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file already carries the title marker and was left untouched.
    AlreadyPatched,
    /// A header block with `title` was prepended (or would be, in a dry run).
    Patched { title: String },
    /// No second-level heading was found; the file was left untouched.
    NoHeading,
}

impl FileOutcome {
    /// Whether the file was (or would be) rewritten.
    pub fn is_patched(&self) -> bool {
        matches!(self, Self::Patched { .. })
    }
}

// ---------------------------------------------------------------------------
// PatchReport
// ---------------------------------------------------------------------------

/// One processed file and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// File name relative to the scanned directory.
    pub name: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Summary of a full directory pass.
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    /// The directory that was scanned.
    pub dir: PathBuf,
    /// Whether the pass ran without writing.
    pub dry_run: bool,
    /// Entries in processing order (sorted by file name).
    pub files: Vec<FileEntry>,
}

impl PatchReport {
    pub fn new(dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            dir: dir.into(),
            dry_run,
            files: Vec::new(),
        }
    }

    /// Number of files that were (or would be) given a title.
    pub fn patched(&self) -> usize {
        self.count(|o| o.is_patched())
    }

    /// Number of files skipped because they already had a title.
    pub fn already_patched(&self) -> usize {
        self.count(|o| *o == FileOutcome::AlreadyPatched)
    }

    /// Number of files skipped because no heading was found.
    pub fn no_heading(&self) -> usize {
        self.count(|o| *o == FileOutcome::NoHeading)
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> PatchReport {
        let mut report = PatchReport::new("pages/api", false);
        report.files.push(FileEntry {
            name: "a.md".into(),
            outcome: FileOutcome::AlreadyPatched,
        });
        report.files.push(FileEntry {
            name: "b.md".into(),
            outcome: FileOutcome::Patched {
                title: "Example.run() method".into(),
            },
        });
        report.files.push(FileEntry {
            name: "c.md".into(),
            outcome: FileOutcome::NoHeading,
        });
        report
    }

    #[test]
    fn report_counts() {
        let report = sample_report();
        assert_eq!(report.patched(), 1);
        assert_eq!(report.already_patched(), 1);
        assert_eq!(report.no_heading(), 1);
    }

    #[test]
    fn report_serializes_flat_entries() {
        let json = serde_json::to_value(sample_report()).expect("serialize");
        let files = json["files"].as_array().unwrap();
        assert_eq!(files[0]["name"], "a.md");
        assert_eq!(files[0]["outcome"], "already_patched");
        assert_eq!(files[1]["outcome"], "patched");
        assert_eq!(files[1]["title"], "Example.run() method");
        assert_eq!(files[2]["outcome"], "no_heading");
        assert_eq!(json["dry_run"], false);
    }
}
