// crates/comment_marker_snippets/src/comment_style.rs

/// A comment syntax that can carry a marker tag.
///
/// Only these literal introducers are recognized. A bare `//` comment is
/// never a marker comment, even when its text looks like `[name]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// `//! [name]`
    InnerDoc,
    /// `/// [name]`
    OuterDoc,
    /// `/** [name] */`, opened and closed on the same line.
    DocBlock,
    /// `## [name]`
    Hash,
    /// `<!--! [name] -->`
    HtmlBang,
    /// `<!--/ [name] -->`
    HtmlSlash,
}

impl CommentStyle {
    /// Styles recognized by a default engine.
    pub const CORE: [CommentStyle; 3] = [
        CommentStyle::InnerDoc,
        CommentStyle::OuterDoc,
        CommentStyle::DocBlock,
    ];

    /// Core styles plus the shell and HTML forms.
    pub const EXTENDED: [CommentStyle; 6] = [
        CommentStyle::InnerDoc,
        CommentStyle::OuterDoc,
        CommentStyle::DocBlock,
        CommentStyle::Hash,
        CommentStyle::HtmlBang,
        CommentStyle::HtmlSlash,
    ];

    pub fn introducer(self) -> &'static str {
        match self {
            CommentStyle::InnerDoc => "//!",
            CommentStyle::OuterDoc => "///",
            CommentStyle::DocBlock => "/**",
            CommentStyle::Hash => "##",
            CommentStyle::HtmlBang => "<!--!",
            CommentStyle::HtmlSlash => "<!--/",
        }
    }

    /// Closing delimiter for block styles, `None` for line styles.
    pub fn closer(self) -> Option<&'static str> {
        match self {
            CommentStyle::DocBlock => Some("*/"),
            CommentStyle::HtmlBang | CommentStyle::HtmlSlash => Some("-->"),
            CommentStyle::InnerDoc | CommentStyle::OuterDoc | CommentStyle::Hash => None,
        }
    }

    /// Returns the untrimmed tag payload if `line` is a comment of this style.
    ///
    /// Leading spaces and tabs are ignored. Block styles also require the
    /// closer at the end of the line (trailing whitespace allowed), and the
    /// payload is the text strictly between introducer and closer.
    pub fn payload(self, line: &str) -> Option<&str> {
        let rest = line
            .trim_start_matches(is_horizontal_whitespace)
            .strip_prefix(self.introducer())?;
        match self.closer() {
            Some(closer) => rest.trim_end().strip_suffix(closer),
            None => Some(rest),
        }
    }
}

/// A line recognized as a comment in one of the enabled styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentMatch<'a> {
    pub style: CommentStyle,
    pub payload: &'a str,
}

/// Matches `line` against `styles`, preferring the longest introducer when
/// several styles match.
pub fn match_comment<'a>(line: &'a str, styles: &[CommentStyle]) -> Option<CommentMatch<'a>> {
    styles
        .iter()
        .filter_map(|&style| style.payload(line).map(|payload| CommentMatch { style, payload }))
        .max_by_key(|m| m.style.introducer().len())
}

pub(crate) fn is_horizontal_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}
