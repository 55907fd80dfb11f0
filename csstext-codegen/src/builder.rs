//! Module body builder
//!
//!     `ModuleBuilder` owns the document accumulator for one generated module.
//!     Exactly one producer drives it end to end: raw pass-through text goes in
//!     via [`ModuleBuilder::push_raw`], stylesheet values via
//!     [`ModuleBuilder::push_literal`], and [`ModuleBuilder::finish`] wraps the
//!     document with the template for the bound (format, exports, name).
//!
//!     `push_raw` is for trusted pass-through only (comments and whitespace
//!     copied verbatim from the source). Anything that must survive as value
//!     text goes through `push_literal`, which escapes it into a string
//!     literal appended to the accumulator binding.

use crate::module::{ExportMode, ModuleFormat};
use crate::template::template;

/// Accumulates one generated module's body.
#[derive(Debug, Clone)]
pub struct ModuleBuilder {
    format: ModuleFormat,
    exports: ExportMode,
    const_name: String,
    content: String,
}

impl ModuleBuilder {
    /// Start an empty document. It begins with a single newline so the first
    /// appended statement never abuts the template prefix.
    pub fn new(format: ModuleFormat, exports: ExportMode, const_name: impl Into<String>) -> Self {
        ModuleBuilder {
            format,
            exports,
            const_name: const_name.into(),
            content: "\n".to_string(),
        }
    }

    /// Append `text` verbatim. Pass-through only.
    pub fn push_raw(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Append one `_<CONST>+="<escaped>"` statement carrying `value`.
    ///
    /// Trailing spaces left behind by pass-through text are dropped and a
    /// newline is inserted if needed, so the statement always starts on its
    /// own line and cannot glue onto a preceding comment.
    pub fn push_literal(&mut self, value: &str) {
        let kept = self.content.trim_end_matches(' ').len();
        self.content.truncate(kept);

        if !self.content.ends_with('\n') {
            self.content.push('\n');
        }

        self.content.push_str("_");
        self.content.push_str(&self.const_name);
        self.content.push_str("+=\"");
        self.content.push_str(&escape(value));
        self.content.push('"');
    }

    /// Wrap the document with its template and return the module text.
    pub fn finish(&self) -> String {
        let t = template(self.format, self.exports, &self.const_name);
        format!("{}{}\n{}", t.prefix, self.content, t.suffix)
    }
}

/// Escape `value` for splicing into a double-quoted JS string literal.
///
/// Backslashes and double quotes are backslash-escaped; every line terminator
/// (CRLF as one unit, then bare LF or CR) becomes the two-character sequence
/// `\n`. The output therefore contains no unescaped quote and no raw line
/// terminator, so the literal can never end early or spill onto a new
/// statement. Normalizing CRLF down to a single escaped newline is a policy
/// choice; see DESIGN.md.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }

    out
}
