// crates/comment_marker_snippets/src/marker_tag.rs

use std::borrow::Borrow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses every whitespace run to one space and trims both ends.
///
/// `"marker1"`, `" marker1 "` and `"marker1  "` all become `"marker1"`, while
/// `"marker 4"` keeps its single interior space. Case is preserved.
pub fn normalize_name(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw.trim(), " ").into_owned()
}

/// A normalized, non-empty marker name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerName(String);

impl MarkerName {
    /// Normalizes `raw`; returns `None` when nothing but whitespace is left.
    pub fn new(raw: &str) -> Option<Self> {
        let name = normalize_name(raw);
        (!name.is_empty()).then_some(MarkerName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MarkerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `BTreeMap<MarkerName, _>` be queried with a plain `&str`.
impl Borrow<str> for MarkerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Parses a comment payload as a marker tag.
///
/// The payload must be exactly one bracketed group once surrounding
/// whitespace is trimmed: `[name]`. Prose, `[a][b]`, `[name] trailing` and
/// `[ ]` are ordinary comments and yield `None`.
pub fn parse_marker_tag(payload: &str) -> Option<MarkerName> {
    let interior = payload.trim().strip_prefix('[')?.strip_suffix(']')?;
    if interior.contains(['[', ']']) {
        return None;
    }
    MarkerName::new(interior)
}
