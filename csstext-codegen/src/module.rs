//! Module format and export mode descriptors
//!
//! Both enums are closed: the template table matches exhaustively over their
//! cross product, so adding a variant forces every template through the
//! compiler. They parse from their lowercase CLI/config spelling and render
//! back the same way.

use crate::error::CodegenError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// JavaScript module loading convention for the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// CommonJS (`module.exports` / `exports`)
    Cjs,
    /// ECMAScript module (`export default`)
    Es,
    /// AMD (`define(...)`)
    Amd,
    /// UMD (AMD/CommonJS probe with a global fallback)
    Umd,
    /// SystemJS (`System.register(...)`)
    System,
    /// Immediately-invoked expression assigning a global
    Iife,
}

impl ModuleFormat {
    pub const ALL: [ModuleFormat; 6] = [
        ModuleFormat::Cjs,
        ModuleFormat::Es,
        ModuleFormat::Amd,
        ModuleFormat::Umd,
        ModuleFormat::System,
        ModuleFormat::Iife,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleFormat::Cjs => "cjs",
            ModuleFormat::Es => "es",
            ModuleFormat::Amd => "amd",
            ModuleFormat::Umd => "umd",
            ModuleFormat::System => "system",
            ModuleFormat::Iife => "iife",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModuleFormat::Cjs => "CommonJS module (module.exports)",
            ModuleFormat::Es => "ECMAScript module (export default)",
            ModuleFormat::Amd => "AMD module (define)",
            ModuleFormat::Umd => "UMD module (AMD/CommonJS/global)",
            ModuleFormat::System => "SystemJS module (System.register)",
            ModuleFormat::Iife => "immediately-invoked expression with a global binding",
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleFormat {
    type Err = CodegenError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "cjs" => Ok(ModuleFormat::Cjs),
            "es" => Ok(ModuleFormat::Es),
            "amd" => Ok(ModuleFormat::Amd),
            "umd" => Ok(ModuleFormat::Umd),
            "system" => Ok(ModuleFormat::System),
            "iife" => Ok(ModuleFormat::Iife),
            other => Err(CodegenError::UnknownFormat(other.to_string())),
        }
    }
}

/// Whether the generated module exposes its value as the sole default binding
/// or as a named `default` property alongside an `__esModule` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    Named,
    Default,
}

impl ExportMode {
    pub const ALL: [ExportMode; 2] = [ExportMode::Named, ExportMode::Default];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportMode::Named => "named",
            ExportMode::Default => "default",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportMode {
    type Err = CodegenError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "named" => Ok(ExportMode::Named),
            "default" => Ok(ExportMode::Default),
            other => Err(CodegenError::UnknownExportMode(other.to_string())),
        }
    }
}
