//! Errors for option tags arriving from configuration or the CLI
//!
//! Everything inside the generator proper is total: template lookup covers the
//! whole (format, exports) cross product and escaping accepts arbitrary text.
//! The only thing that can go wrong is an unrecognized tag at the boundary.

use std::fmt;

/// Error raised when parsing an option tag into its closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Module format tag not one of the six supported formats
    UnknownFormat(String),
    /// Export mode tag not "named" or "default"
    UnknownExportMode(String),
    /// Comment policy tag not one of the recognized policies
    UnknownPolicy(String),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::UnknownFormat(tag) => write!(
                f,
                "unknown module format '{tag}' (expected one of: amd, cjs, es, iife, system, umd)"
            ),
            CodegenError::UnknownExportMode(tag) => {
                write!(f, "unknown export mode '{tag}' (expected 'named' or 'default')")
            }
            CodegenError::UnknownPolicy(tag) => write!(
                f,
                "unknown comment policy '{tag}' (expected 'in-file-only', 'in-const' or 'exclude')"
            ),
        }
    }
}

impl std::error::Error for CodegenError {}
