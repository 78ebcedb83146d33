// crates/comment_marker_snippets/src/extractor.rs

use std::collections::BTreeMap;

use thiserror::Error;

use crate::comment_style::{match_comment, CommentStyle};
use crate::diagnostic::Diagnostic;
use crate::marker_tag::{normalize_name, parse_marker_tag, MarkerName};
use crate::span_tracker::{MarkerEvent, MarkerSpan, SpanTracker};

/// Which comment styles may carry markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub styles: Vec<CommentStyle>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            styles: CommentStyle::CORE.to_vec(),
        }
    }
}

impl ExtractOptions {
    /// Also accepts `##` and single-line HTML comment markers.
    pub fn extended() -> Self {
        ExtractOptions {
            styles: CommentStyle::EXTENDED.to_vec(),
        }
    }

    pub fn with_styles<I: IntoIterator<Item = CommentStyle>>(styles: I) -> Self {
        ExtractOptions {
            styles: styles.into_iter().collect(),
        }
    }

    /// Returns the marker name carried by `line`, if it is a marker comment.
    pub fn recognize(&self, line: &str) -> Option<MarkerName> {
        let comment = match_comment(line, &self.styles)?;
        parse_marker_tag(comment.payload)
    }
}

/// A line of the scanned file; `number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Everything one scan of one file produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub file_id: String,
    pub snippets: BTreeMap<MarkerName, String>,
    pub spans: Vec<MarkerSpan>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Snippet text for `name`, which is normalized before lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.snippets.get(normalize_name(name).as_str()).map(String::as_str)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics.iter().filter(move |d| d.name.as_str() == name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("{file_id}: no marker named [{name}]")]
    NotFound { file_id: String, name: String },
    #[error("{file_id}: marker [{name}] has no complete span")]
    Malformed {
        file_id: String,
        name: String,
        diagnostics: Vec<Diagnostic>,
    },
}

/// Scans one file's lines and resolves every marker pair in it.
///
/// Never fails: malformed markup is reported in `diagnostics` next to
/// whatever spans did resolve. Snippet text is the verbatim body lines
/// joined with `\n`, without the marker lines and without de-indentation.
pub fn extract<I, S>(file_id: &str, lines: I, options: &ExtractOptions) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    let mut tracker = SpanTracker::new(file_id);

    let source = lines.iter().enumerate().map(|(idx, text)| SourceLine {
        number: idx + 1,
        text: text.as_ref(),
    });
    for line in source {
        let Some(name) = options.recognize(line.text) else {
            continue;
        };
        match tracker.observe(name, line.number) {
            MarkerEvent::Open { name, line } => log::trace!("{file_id}:{line}: open [{name}]"),
            MarkerEvent::Close { name, line } => log::trace!("{file_id}:{line}: close [{name}]"),
            MarkerEvent::Duplicate { name, line } => {
                log::trace!("{file_id}:{line}: duplicate [{name}]")
            }
        }
    }

    let (spans, diagnostics) = tracker.finish();
    let mut snippets = BTreeMap::new();
    for span in &spans {
        let body: Vec<&str> = lines[span.body()].iter().map(|line| line.as_ref()).collect();
        snippets
            .entry(span.name.clone())
            .or_insert_with(|| body.join("\n"));
    }

    log::debug!(
        "{file_id}: {} line(s), {} snippet(s), {} diagnostic(s)",
        lines.len(),
        snippets.len(),
        diagnostics.len()
    );

    Extraction {
        file_id: file_id.to_string(),
        snippets,
        spans,
        diagnostics,
    }
}

/// [`extract`] over whole file content, split with [`str::lines`].
pub fn extract_str(file_id: &str, content: &str, options: &ExtractOptions) -> Extraction {
    extract(file_id, content.lines(), options)
}

/// Returns the snippet named `name` from `content`.
///
/// A name that resolved once but was repeated afterwards still returns its
/// first snippet; only a name with no complete span is an error.
pub fn snippet(
    file_id: &str,
    content: &str,
    name: &str,
    options: &ExtractOptions,
) -> Result<String, LookupError> {
    let mut extraction = extract_str(file_id, content, options);
    let key = normalize_name(name);
    if let Some(text) = extraction.snippets.remove(key.as_str()) {
        return Ok(text);
    }

    let diagnostics: Vec<Diagnostic> = extraction.diagnostics_for(&key).cloned().collect();
    if diagnostics.is_empty() {
        Err(LookupError::NotFound {
            file_id: file_id.to_string(),
            name: key,
        })
    } else {
        Err(LookupError::Malformed {
            file_id: file_id.to_string(),
            name: key,
            diagnostics,
        })
    }
}

/// Drops every marker comment line from `text`, keeping all other lines
/// verbatim. Useful on an outer snippet that still contains inner markers.
pub fn strip_marker_lines(text: &str, options: &ExtractOptions) -> String {
    text.lines()
        .filter(|line| options.recognize(line).is_none())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;

    const NESTED: &str = "\
fn demo() {
    //! [outer]
    let a = 1;
    /// [inner]
    let b = 2;
    /// [inner]
    let c = 3;
    //! [outer]
}";

    #[test]
    fn test_extract_simple_pair() {
        let content = "before\n/// [only]\n  body one\n\tbody two\n/// [only]\nafter";
        let result = extract_str("f.rs", content, &ExtractOptions::default());
        assert!(result.is_clean());
        assert_eq!(result.get("only"), Some("  body one\n\tbody two"));
        assert_eq!(result.spans.len(), 1);
    }

    #[test]
    fn test_outer_snippet_keeps_inner_markers_verbatim() {
        let result = extract_str("f.rs", NESTED, &ExtractOptions::default());
        assert!(result.is_clean());
        assert_eq!(
            result.get("outer"),
            Some("    let a = 1;\n    /// [inner]\n    let b = 2;\n    /// [inner]\n    let c = 3;")
        );
        assert_eq!(result.get("inner"), Some("    let b = 2;"));
    }

    #[test]
    fn test_adjacent_markers_give_empty_snippet() {
        let result = extract_str("f.rs", "/// [empty]\n/// [empty]", &ExtractOptions::default());
        assert_eq!(result.get("empty"), Some(""));
        assert!(result.is_clean());
    }

    #[test]
    fn test_lookup_normalizes_requested_name() {
        let content = "/// [ marker 6 ]\nint h;\n///   [marker   6]";
        let result = extract_str("f.cpp", content, &ExtractOptions::default());
        assert_eq!(result.get(" marker 6 "), Some("int h;"));
        assert_eq!(result.get("marker  6"), Some("int h;"));
    }

    #[test]
    fn test_duplicate_keeps_first_snippet_and_reports() {
        let content = "//! [x]\nfirst\n//! [x]\nsecond\n//! [x]\nthird\n//! [x]";
        let result = extract_str("f.rs", content, &ExtractOptions::default());
        assert_eq!(result.get("x"), Some("first"));
        assert_eq!(result.diagnostics.len(), 2);
        assert_eq!(result.diagnostics[0].lines, vec![1, 3, 5]);
        assert_eq!(result.diagnostics[1].lines, vec![1, 3, 7]);
    }

    #[test]
    fn test_unclosed_marker_has_no_snippet() {
        let content = "/// [open]\nbody\n/// [ok]\n/// [ok]";
        let result = extract_str("f.rs", content, &ExtractOptions::default());
        assert_eq!(result.get("open"), None);
        assert_eq!(result.get("ok"), Some(""));
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::UnclosedMarker);
        assert_eq!(result.diagnostics[0].lines, vec![1]);
    }

    #[test]
    fn test_non_tag_comments_are_inert() {
        let content = "/// Documented item.\n//! [a][b]\n// [plain]\n/** not a [tag] */\n/// [a] b";
        let result = extract_str("f.rs", content, &ExtractOptions::default());
        assert!(result.snippets.is_empty());
        assert!(result.spans.is_empty());
        assert!(result.is_clean());
    }

    #[test]
    fn test_extract_accepts_owned_lines() {
        let lines = vec!["/// [a]".to_string(), "x".to_string(), "/// [a]".to_string()];
        let result = extract("owned", lines, &ExtractOptions::default());
        assert_eq!(result.get("a"), Some("x"));
    }

    #[test]
    fn test_crlf_content() {
        let result = extract_str("f", "/// [a]\r\nx\r\n/// [a]\r\n", &ExtractOptions::default());
        assert_eq!(result.get("a"), Some("x"));
    }

    #[test]
    fn test_styles_outside_options_are_ignored() {
        let content = "## [py]\nprint()\n## [py]";
        let core = extract_str("f.py", content, &ExtractOptions::default());
        assert!(core.snippets.is_empty());
        let extended = extract_str("f.py", content, &ExtractOptions::extended());
        assert_eq!(extended.get("py"), Some("print()"));
        let hash_only = extract_str("f.py", content, &ExtractOptions::with_styles([CommentStyle::Hash]));
        assert_eq!(hash_only.get("py"), Some("print()"));
    }

    #[test]
    fn test_snippet_lookup() {
        let options = ExtractOptions::default();
        assert_eq!(snippet("f.rs", NESTED, "inner", &options).unwrap(), "    let b = 2;");

        let err = snippet("f.rs", NESTED, "missing", &options).unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound {
                file_id: "f.rs".to_string(),
                name: "missing".to_string()
            }
        );
        assert_eq!(err.to_string(), "f.rs: no marker named [missing]");
    }

    #[test]
    fn test_snippet_lookup_of_unclosed_marker() {
        let err = snippet("f.rs", "/// [ dangling ]\ncode", "dangling", &ExtractOptions::default())
            .unwrap_err();
        match err {
            LookupError::Malformed { name, diagnostics, .. } => {
                assert_eq!(name, "dangling");
                assert_eq!(diagnostics.len(), 1);
                assert_eq!(diagnostics[0].kind, DiagnosticKind::UnclosedMarker);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strip_marker_lines() {
        let options = ExtractOptions::default();
        let outer = snippet("f.rs", NESTED, "outer", &options).unwrap();
        assert_eq!(
            strip_marker_lines(&outer, &options),
            "    let a = 1;\n    let b = 2;\n    let c = 3;"
        );
        // Ordinary comments survive.
        assert_eq!(strip_marker_lines("/// docs\n/// [m]\nx", &options), "/// docs\nx");
    }
}
