//! # csstext-parser
//!
//! A tokenizer for stylesheet sources.
//!
//! This crate performs the lexical half of the csstext pipeline: it splits raw
//! stylesheet text into classified segments (style text vs comment blocks) that
//! the code generator consumes. It is a pure library, no I/O happens here.
//!
//! The segmentation is deliberately shallow. We never parse selectors, rules or
//! values; the only classification that matters downstream is "is this span a
//! comment or not", because comment handling is a user-facing policy. Everything
//! else, including quoted string literals, stays opaque style text.

pub mod css;

pub use css::tokenizer::{scan, tokenize, Segment, SegmentKind};
