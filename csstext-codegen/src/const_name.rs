//! Constant-name resolution
//!
//! The exported binding name is usually one fixed identifier, but callers
//! embedding this crate can derive it per stylesheet (e.g. from the file
//! name). The CLI only ever uses `Fixed`.

use std::fmt;
use std::path::Path;

pub const DEFAULT_CONST_NAME: &str = "CSS_TEXT";

/// How the exported constant's name is chosen for each stylesheet.
pub enum ConstName {
    /// One name for every file.
    Fixed(String),
    /// A name derived from the stylesheet's path.
    PerFile(Box<dyn Fn(&Path) -> String + Send + Sync>),
}

impl ConstName {
    pub fn resolve(&self, path: &Path) -> String {
        match self {
            ConstName::Fixed(name) => name.clone(),
            ConstName::PerFile(derive) => derive(path),
        }
    }
}

impl Default for ConstName {
    fn default() -> Self {
        ConstName::Fixed(DEFAULT_CONST_NAME.to_string())
    }
}

impl fmt::Debug for ConstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstName::Fixed(name) => f.debug_tuple("Fixed").field(name).finish(),
            ConstName::PerFile(_) => f.write_str("PerFile(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_the_path() {
        let name = ConstName::Fixed("STYLES".to_string());
        assert_eq!(name.resolve(Path::new("any/where.css")), "STYLES");
    }

    #[test]
    fn per_file_sees_the_path() {
        let name = ConstName::PerFile(Box::new(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or(DEFAULT_CONST_NAME)
                .to_ascii_uppercase()
        }));
        assert_eq!(name.resolve(Path::new("dist/button.css")), "BUTTON");
    }

    #[test]
    fn default_is_css_text() {
        assert_eq!(ConstName::default().resolve(Path::new("x.css")), "CSS_TEXT");
    }
}
