//! Comment handling policies
//!
//!     Policies decide how tokenized segments feed a [`ModuleBuilder`]. The
//!     default, `InFileOnly`, keeps comments readable in the generated file
//!     while excluding them from the exported value. `InConst` folds the whole
//!     source, comments included, into the constant; `Exclude` drops comments
//!     entirely and collapses the style text into one literal.

use crate::builder::ModuleBuilder;
use crate::error::CodegenError;
use csstext_parser::{tokenize, SegmentKind};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// What happens to stylesheet comments in the generated module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentPolicy {
    /// Comments stay in the generated file as JS comments, excluded from the
    /// exported value.
    #[default]
    InFileOnly,
    /// Comments are folded into the exported value; the source round-trips.
    InConst,
    /// Comments are dropped and style text is trimmed and concatenated.
    Exclude,
}

impl CommentPolicy {
    pub const ALL: [CommentPolicy; 3] = [
        CommentPolicy::InFileOnly,
        CommentPolicy::InConst,
        CommentPolicy::Exclude,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommentPolicy::InFileOnly => "in-file-only",
            CommentPolicy::InConst => "in-const",
            CommentPolicy::Exclude => "exclude",
        }
    }
}

impl fmt::Display for CommentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentPolicy {
    type Err = CodegenError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "in-file-only" => Ok(CommentPolicy::InFileOnly),
            "in-const" => Ok(CommentPolicy::InConst),
            "exclude" => Ok(CommentPolicy::Exclude),
            other => Err(CodegenError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Feed `source` into `builder` under `policy`.
///
/// `InConst` skips tokenization entirely: the exported value must equal the
/// source verbatim (modulo newline normalization), so classification would
/// only get in the way.
pub fn apply_policy(policy: CommentPolicy, source: &str, builder: &mut ModuleBuilder) {
    match policy {
        CommentPolicy::InConst => {
            builder.push_literal(source);
        }
        CommentPolicy::InFileOnly => {
            for segment in tokenize(source) {
                match segment.kind {
                    SegmentKind::Comment => builder.push_raw(&segment.text),
                    SegmentKind::Style => {
                        let text = segment.text.as_str();
                        let core = text.trim();
                        if core.is_empty() {
                            // Whitespace-only style runs stay pass-through.
                            builder.push_raw(text);
                        } else {
                            let lead = &text[..text.len() - text.trim_start().len()];
                            let trail = &text[text.trim_end().len()..];
                            builder.push_raw(lead);
                            builder.push_literal(core);
                            builder.push_raw(trail);
                        }
                    }
                }
            }
        }
        CommentPolicy::Exclude => {
            let mut style = String::new();
            for segment in tokenize(source) {
                if segment.kind == SegmentKind::Style {
                    style.push_str(segment.text.trim());
                }
            }
            builder.push_literal(&style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{ExportMode, ModuleFormat};

    fn builder() -> ModuleBuilder {
        ModuleBuilder::new(ModuleFormat::Es, ExportMode::Default, "CSS_TEXT")
    }

    #[test]
    fn policy_tags_round_trip() {
        for policy in CommentPolicy::ALL {
            assert_eq!(policy.as_str().parse::<CommentPolicy>(), Ok(policy));
        }
        assert!("none".parse::<CommentPolicy>().is_err());
    }

    #[test]
    fn in_const_keeps_comments_in_the_value() {
        let mut b = builder();
        apply_policy(CommentPolicy::InConst, "/* c */a{}", &mut b);
        assert!(b.finish().contains("_CSS_TEXT+=\"/* c */a{}\""));
    }

    #[test]
    fn in_file_only_splits_whitespace_around_the_literal() {
        let mut b = builder();
        apply_policy(CommentPolicy::InFileOnly, "  a{color:red}  \n/* c */", &mut b);
        let module = b.finish();
        assert!(module.contains("_CSS_TEXT+=\"a{color:red}\""));
        assert!(module.contains("/* c */"));
    }

    #[test]
    fn in_file_only_passes_whitespace_only_style_through() {
        let mut b = builder();
        apply_policy(CommentPolicy::InFileOnly, "/* a */\n  \n/* b */", &mut b);
        let module = b.finish();
        // No literal statement at all: the exported value stays empty.
        assert!(!module.contains("+="));
        assert!(module.contains("/* a */\n  \n/* b */"));
    }

    #[test]
    fn exclude_drops_comments_and_trims_style_runs() {
        let mut b = builder();
        apply_policy(
            CommentPolicy::Exclude,
            " a{} /* gone */ b{} ",
            &mut b,
        );
        assert!(b.finish().contains("_CSS_TEXT+=\"a{}b{}\""));
    }

    #[test]
    fn exclude_on_comment_only_source_exports_empty() {
        let mut b = builder();
        apply_policy(CommentPolicy::Exclude, "/* only */", &mut b);
        assert!(b.finish().contains("_CSS_TEXT+=\"\""));
    }
}
