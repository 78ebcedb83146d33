// crates/comment_marker_snippets/src/lib.rs

//! `comment_marker_snippets` — pulls named code excerpts out of source files.
//!
//! A snippet is bounded by two comment lines carrying the same `[name]`:
//!
//! ```text
//! //! [setup]
//! let client = Client::new();
//! //! [setup]
//! ```
//!
//!  * **Comment styles** – `//!`, `///` and single-line `/** … */` by default;
//!    `##` and `<!--! … -->` / `<!--/ … -->` on request.  A bare `//` never
//!    carries a marker.
//!  * **Names** – whitespace runs collapse to one space and the ends are
//!    trimmed, so `[ marker 6 ]` and `[marker   6]` are the same marker.
//!  * **Pairing** – the first occurrence of a name opens it, the second closes
//!    it.  Different names may nest or overlap freely; a third occurrence is a
//!    duplicate and an open name at end of file is unclosed.  Both are
//!    reported as [`Diagnostic`]s, never as a failed scan.
//!
//! Each call owns all of its state, so files can be scanned concurrently
//! from any number of threads.

pub mod comment_style;
pub mod diagnostic;
pub mod extractor;
pub mod marker_tag;
pub mod span_tracker;

pub use comment_style::{match_comment, CommentMatch, CommentStyle};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use extractor::{
    extract, extract_str, snippet, strip_marker_lines, ExtractOptions, Extraction, LookupError,
    SourceLine,
};
pub use marker_tag::{normalize_name, parse_marker_tag, MarkerName};
pub use span_tracker::{MarkerEvent, MarkerSpan, SpanTracker};
