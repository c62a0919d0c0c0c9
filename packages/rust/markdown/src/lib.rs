//! Title header detection and construction for Markdown documents.
//!
//! Everything here is a pure `&str` function so it can be tested without
//! touching the filesystem. The directory pass in `titlepatch-core` is the
//! only caller that reads or writes files.

mod heading;

use tracing::trace;

pub use heading::extract_heading;

/// Substring whose presence marks a document as already titled.
pub const TITLE_MARKER: &str = "title: ";

/// Delimiter line surrounding the header block.
const FENCE: &str = "---";

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

/// What should happen to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// The marker is already present; leave the document alone.
    AlreadyTitled,
    /// No marker, and a heading to build the header from.
    Untitled { title: String },
    /// No marker and no usable second-level heading.
    NoHeading,
}

/// Whether `md` already contains the title marker anywhere.
pub fn has_title(md: &str) -> bool {
    md.contains(TITLE_MARKER)
}

/// Decide whether `md` needs a header, and with which title.
pub fn inspect(md: &str) -> Inspection {
    if has_title(md) {
        return Inspection::AlreadyTitled;
    }

    match extract_heading(md) {
        Some(title) => {
            trace!(%title, "found second-level heading");
            Inspection::Untitled { title }
        }
        None => Inspection::NoHeading,
    }
}

// ---------------------------------------------------------------------------
// Header block
// ---------------------------------------------------------------------------

/// Build the header block for `title`, including the trailing blank line.
pub fn title_header(title: &str) -> String {
    format!("{FENCE}\n{TITLE_MARKER}{title}\n{FENCE}\n\n")
}

/// Prepend the header block for `title` to `md`. The body is kept verbatim.
pub fn prepend_title(md: &str, title: &str) -> String {
    let header = title_header(title);
    let mut out = String::with_capacity(header.len() + md.len());
    out.push_str(&header);
    out.push_str(md);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
