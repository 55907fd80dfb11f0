//! Shared configuration loader for the csstext toolchain.
//!
//! `defaults/csstext.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`CsstextConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use csstext_codegen::{CommentPolicy, ExportMode, ModuleFormat};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as Error;

const DEFAULT_TOML: &str = include_str!("../defaults/csstext.default.toml");

/// Top-level configuration consumed by csstext applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CsstextConfig {
    pub output: OutputConfig,
    pub generate: GenerateConfig,
}

/// Target module shape of the generated files.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: ModuleFormat,
    pub exports: ExportMode,
}

/// Per-file generation knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateConfig {
    pub include_comments: CommentPolicy,
    pub declaration: bool,
    pub const_name: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CsstextConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CsstextConfig, ConfigError> {
    Loader::new().build()
}
