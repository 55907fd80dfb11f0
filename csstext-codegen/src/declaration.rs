//! TypeScript declaration stub
//!
//! Two lines: declare the constant as a string, re-export it as the default.
//! Written next to the generated module as `<name>.css-text.d.ts`.

/// Declaration text for a constant named `const_name`.
pub fn declaration(const_name: &str) -> String {
    format!("declare const {const_name}: string;\nexport default {const_name};")
}
