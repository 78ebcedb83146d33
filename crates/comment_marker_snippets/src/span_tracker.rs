// crates/comment_marker_snippets/src/span_tracker.rs

use std::collections::HashMap;

use crate::diagnostic::Diagnostic;
use crate::marker_tag::MarkerName;

/// A resolved marker pair. Always `open_line < close_line` (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpan {
    pub name: MarkerName,
    pub open_line: usize,
    pub close_line: usize,
}

impl MarkerSpan {
    /// Zero-based indices of the body lines, marker lines excluded.
    pub fn body(&self) -> std::ops::Range<usize> {
        self.open_line..self.close_line - 1
    }
}

/// What one marker occurrence meant, decided by position alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerEvent {
    Open { name: MarkerName, line: usize },
    Close { name: MarkerName, line: usize },
    Duplicate { name: MarkerName, line: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerState {
    Unopened,
    Open { line: usize },
    Closed { open: usize, close: usize },
}

/// Per-file automaton: the first occurrence of a name opens it, the second
/// closes it, any later one is a duplicate.
///
/// Distinct names never constrain each other, so nested and overlapping
/// spans of different names both resolve.
#[derive(Debug)]
pub struct SpanTracker {
    file_id: String,
    states: HashMap<MarkerName, MarkerState>,
    spans: Vec<MarkerSpan>,
    diagnostics: Vec<Diagnostic>,
    last_line: usize,
}

impl SpanTracker {
    pub fn new(file_id: &str) -> Self {
        SpanTracker {
            file_id: file_id.to_string(),
            states: HashMap::new(),
            spans: Vec::new(),
            diagnostics: Vec::new(),
            last_line: 0,
        }
    }

    /// Feeds one marker occurrence. Lines must be strictly increasing.
    pub fn observe(&mut self, name: MarkerName, line: usize) -> MarkerEvent {
        debug_assert!(line > self.last_line, "marker lines must be strictly increasing");
        self.last_line = line;

        let state = self.states.entry(name.clone()).or_insert(MarkerState::Unopened);
        match *state {
            MarkerState::Unopened => {
                *state = MarkerState::Open { line };
                MarkerEvent::Open { name, line }
            }
            MarkerState::Open { line: open } => {
                *state = MarkerState::Closed { open, close: line };
                self.spans.push(MarkerSpan {
                    name: name.clone(),
                    open_line: open,
                    close_line: line,
                });
                MarkerEvent::Close { name, line }
            }
            MarkerState::Closed { open, close } => {
                self.diagnostics
                    .push(Diagnostic::duplicate(&self.file_id, name.clone(), open, close, line));
                MarkerEvent::Duplicate { name, line }
            }
        }
    }

    /// Ends the file: every name still open becomes an unclosed diagnostic,
    /// appended after the duplicates in open-line order.
    pub fn finish(self) -> (Vec<MarkerSpan>, Vec<Diagnostic>) {
        let SpanTracker {
            file_id,
            states,
            spans,
            mut diagnostics,
            ..
        } = self;

        let mut unclosed: Vec<(MarkerName, usize)> = states
            .into_iter()
            .filter_map(|(name, state)| match state {
                MarkerState::Open { line } => Some((name, line)),
                MarkerState::Unopened | MarkerState::Closed { .. } => None,
            })
            .collect();
        unclosed.sort_by_key(|(_, line)| *line);

        diagnostics.extend(
            unclosed
                .into_iter()
                .map(|(name, line)| Diagnostic::unclosed(&file_id, name, line)),
        );
        (spans, diagnostics)
    }
}
