//! Stylesheet tokenizer
//!
//!     A single forward scan over the source with one cursor and no
//!     backtracking. The scanner distinguishes exactly two kinds of spans:
//!     comment blocks (`/* ... */`, delimiters included) and style text
//!     (everything else).
//!
//! Quoted runs
//!
//!     The subtle part is quoted string literals. A comment opener inside a
//!     quoted value, e.g. `a{content:"/*x*/"}`, must not start a comment, and a
//!     quote inside a comment must not open a string. The scanner handles this
//!     by absorbing a quoted run wholesale into the in-progress style text:
//!     on seeing `"` or `'` it jumps straight past the matching close quote,
//!     so the quoted interior is never inspected for comment delimiters.
//!     Comments are absorbed the same way, so quotes inside them are inert.
//!
//! Leniency
//!
//!     Unterminated quotes and unterminated comments absorb to the end of the
//!     source instead of failing. Stylesheets in the wild are sometimes
//!     malformed and the tool's job is to round-trip their text, not to
//!     validate it. Comments do not nest; the first `*/` closes.

use serde::Serialize;

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// Classification of a source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Style text, including quoted string literals.
    Style,
    /// A comment block, delimiters included.
    Comment,
}

/// A classified contiguous span of stylesheet source text.
///
/// Segments are emitted in source order, and concatenating their `text`
/// reconstructs the source exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn style(text: impl Into<String>) -> Self {
        Segment {
            kind: SegmentKind::Style,
            text: text.into(),
        }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Segment {
            kind: SegmentKind::Comment,
            text: text.into(),
        }
    }
}

/// Byte position just past the next occurrence of `needle`, searching from
/// byte offset `from`. `None` when `needle` does not occur again.
fn index_after(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack[from..]
        .find(needle)
        .map(|found| from + found + needle.len())
}

/// Scan `source`, pushing each segment to `emit` in source order.
///
/// A zero-length style segment is never emitted, so comment-only input
/// produces comment segments alone.
pub fn scan(source: &str, mut emit: impl FnMut(Segment)) {
    let mut style = String::new();
    let mut idx = 0;

    while idx < source.len() {
        let rest = &source[idx..];
        let ch = match rest.chars().next() {
            Some(ch) => ch,
            None => break,
        };

        if ch == '"' || ch == '\'' {
            // Absorb the whole quoted run; its interior is never scanned.
            let end = index_after(source, &rest[..1], idx + 1).unwrap_or(source.len());
            style.push_str(&source[idx..end]);
            idx = end;
        } else if rest.starts_with(COMMENT_OPEN) {
            let end =
                index_after(source, COMMENT_CLOSE, idx + COMMENT_OPEN.len()).unwrap_or(source.len());
            if !style.is_empty() {
                emit(Segment::style(std::mem::take(&mut style)));
            }
            emit(Segment::comment(&source[idx..end]));
            idx = end;
        } else {
            style.push(ch);
            idx += ch.len_utf8();
        }
    }

    if !style.is_empty() {
        emit(Segment::style(style));
    }
}

/// Scan `source` and collect the segments eagerly.
pub fn tokenize(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    scan(source, |segment| segments.push(segment));
    segments
}
