//! Second-level heading extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Return the text of the first `## ` heading in `md`, trimmed.
///
/// Only lines starting with exactly two `#` followed by a space qualify;
/// `#`, `###` and deeper headings are ignored. Later `##` headings never
/// override the first one. A heading with nothing after the marker yields
/// `None`. A leading byte-order mark does not hide a heading on the first line.
pub fn extract_heading(md: &str) -> Option<String> {
    static H2_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)^## ([^\r\n]*)").expect("valid regex"));

    let md = md.strip_prefix('\u{feff}').unwrap_or(md);
    let caps = H2_RE.captures(md)?;
    let title = caps[1].trim();
    (!title.is_empty()).then(|| title.to_string())
}
