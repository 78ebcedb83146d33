// crates/comment_marker_snippets/src/diagnostic.rs

use std::fmt;

use crate::marker_tag::MarkerName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Opened but never closed before end of file.
    UnclosedMarker,
    /// Seen again after its pair was already complete.
    DuplicateMarker,
}

/// A non-fatal report of malformed marker usage in one file.
///
/// `lines` holds `[open_line]` for an unclosed marker and
/// `[open_line, close_line, extra_line]` for a duplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub file_id: String,
    pub name: MarkerName,
    pub lines: Vec<usize>,
}

impl Diagnostic {
    pub(crate) fn unclosed(file_id: &str, name: MarkerName, open_line: usize) -> Self {
        Diagnostic {
            kind: DiagnosticKind::UnclosedMarker,
            file_id: file_id.to_string(),
            name,
            lines: vec![open_line],
        }
    }

    pub(crate) fn duplicate(
        file_id: &str,
        name: MarkerName,
        open_line: usize,
        close_line: usize,
        extra_line: usize,
    ) -> Self {
        Diagnostic {
            kind: DiagnosticKind::DuplicateMarker,
            file_id: file_id.to_string(),
            name,
            lines: vec![open_line, close_line, extra_line],
        }
    }

    /// The line the problem points at: the open line of an unclosed marker,
    /// the extra occurrence of a duplicate.
    pub fn line(&self) -> usize {
        match self.kind {
            DiagnosticKind::UnclosedMarker => self.lines[0],
            DiagnosticKind::DuplicateMarker => self.lines[self.lines.len() - 1],
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnclosedMarker => write!(
                f,
                "{}:{}: marker [{}] is never closed",
                self.file_id,
                self.line(),
                self.name
            ),
            DiagnosticKind::DuplicateMarker => write!(
                f,
                "{}:{}: duplicate marker [{}] (already paired on lines {} and {})",
                self.file_id,
                self.line(),
                self.name,
                self.lines[0],
                self.lines[1]
            ),
        }
    }
}
