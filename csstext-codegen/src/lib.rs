//! JavaScript module generation for embedded stylesheet text
//!
//!     This crate turns tokenized stylesheet text into a minified JavaScript
//!     module that exports the stylesheet as a string constant. It is a pure
//!     lib, that is, it powers the csstext CLI but is shell agnostic: no code
//!     here touches the filesystem, std streams or env vars.
//!
//! Architecture
//!
//!     - module.rs       ModuleFormat / ExportMode closed enums
//!     - template.rs     total (format, exports, name) -> prefix/suffix lookup
//!     - builder.rs      ModuleBuilder accumulating the module body + escaping
//!     - policy.rs       CommentPolicy driving tokenizer segments into a builder
//!     - const_name.rs   fixed or per-file constant-name resolution
//!     - declaration.rs  the two-line TypeScript declaration stub
//!     - error.rs        CodegenError for tag parsing at the config boundary
//!
//! Generated shape
//!
//!     Every template introduces a private accumulator `_<CONST>` initialized
//!     to the empty string. The body consists solely of statements of the form
//!     `_<CONST>+="<escaped literal>"`, interleaved with verbatim pass-through
//!     text (comments and whitespace, which are no-ops in JS at statement
//!     position). The suffix copies the accumulator into `var <CONST>` and
//!     wires up the export for the target module system. The core guarantee is
//!     that `prefix + body + "\n" + suffix` is valid under the target loader
//!     and exports exactly the concatenation of the appended literals.

pub mod builder;
pub mod const_name;
pub mod declaration;
pub mod error;
pub mod module;
pub mod policy;
pub mod template;

pub use builder::ModuleBuilder;
pub use const_name::{ConstName, DEFAULT_CONST_NAME};
pub use declaration::declaration;
pub use error::CodegenError;
pub use module::{ExportMode, ModuleFormat};
pub use policy::{apply_policy, CommentPolicy};
pub use template::{template, Template};
