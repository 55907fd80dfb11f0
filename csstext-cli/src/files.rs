//! Stylesheet discovery
//!
//! Recursively collects `.css` files under a directory. Generated artifacts
//! are written as siblings of each stylesheet, so the parent directory is
//! recorded alongside the content.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One discovered stylesheet.
#[derive(Debug, Clone)]
pub struct CssFile {
    pub path: PathBuf,
    /// File name without the `.css` extension.
    pub stem: String,
    /// Directory the generated artifacts land in.
    pub dir: PathBuf,
    pub content: String,
}

/// Walk `dir` recursively and read every `.css` file.
pub fn collect_css_files(dir: &Path) -> io::Result<Vec<CssFile>> {
    let mut css_files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            css_files.extend(collect_css_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "css") {
            let stem = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            css_files.push(CssFile {
                stem,
                dir: dir.to_path_buf(),
                content: fs::read_to_string(&path)?,
                path,
            });
        }
    }

    Ok(css_files)
}
