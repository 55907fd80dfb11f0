//! Stylesheet handling modules

pub mod tokenizer;
