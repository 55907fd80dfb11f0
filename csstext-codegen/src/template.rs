//! Module template table
//!
//!     A total lookup over the (format, export mode) cross product. Each entry
//!     is a minified prefix/suffix pair; the builder's body slots in between.
//!     The accumulator binding is the constant name with a `_` prefix, which
//!     cannot collide with the public binding for any non-empty name.
//!
//!     Named mode additionally exposes the value as a `default` property (and
//!     flags `__esModule`) where the module system has an exports object to
//!     hang it on. ES and SystemJS carry a real default export either way, so
//!     their named and default entries coincide.

use crate::module::{ExportMode, ModuleFormat};

/// Code fragments wrapped around a generated module body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub prefix: String,
    pub suffix: String,
}

/// Resolve the template for one (format, export mode) combination.
///
/// Total over both enums; the only input that varies the emitted text beyond
/// the tags is the constant name, spliced verbatim into the boilerplate.
pub fn template(format: ModuleFormat, exports: ExportMode, const_name: &str) -> Template {
    use ExportMode::*;
    use ModuleFormat::*;

    let (prefix, suffix) = match (format, exports) {
        (Cjs, Named) => (
            format!(
                "\"use strict\";Object.defineProperty(exports,\"__esModule\",{{value:!0}});var _{const_name}=\"\";"
            ),
            format!("var {const_name}=_{const_name};exports[\"default\"]={const_name};"),
        ),
        (Cjs, Default) => (
            format!("\"use strict\";var _{const_name}=\"\";"),
            format!("var {const_name}=_{const_name};module.exports={const_name};"),
        ),
        (Es, Named) | (Es, Default) => (
            format!("var _{const_name}=\"\";"),
            format!("var {const_name}=_{const_name};export default {const_name};"),
        ),
        (Amd, Named) => (
            format!("define([\"exports\"],function(exports){{\"use strict\";var _{const_name}=\"\";"),
            format!(
                "var {const_name}=_{const_name};exports[\"default\"]={const_name};Object.defineProperty(exports,\"__esModule\",{{value:!0}});}});"
            ),
        ),
        (Amd, Default) => (
            format!("define(function(){{\"use strict\";var _{const_name}=\"\";"),
            format!("var {const_name}=_{const_name};return {const_name};}});"),
        ),
        (Umd, Named) => (
            format!(
                "(function(global,factory){{typeof exports===\"object\"&&typeof module!==\"undefined\"?factory(exports):typeof define===\"function\"&&define.amd?define([\"exports\"],factory):((global=typeof globalThis!==\"undefined\"?globalThis:global||self),factory((global.{const_name}={{}})));}})(this,function(exports){{\"use strict\";var _{const_name}=\"\";"
            ),
            format!(
                "var {const_name}=_{const_name};exports[\"default\"]={const_name};Object.defineProperty(exports,\"__esModule\",{{value:!0}});}});"
            ),
        ),
        (Umd, Default) => (
            format!(
                "(function(global,factory){{typeof exports===\"object\"&&typeof module!==\"undefined\"?(module.exports=factory()):typeof define===\"function\"&&define.amd?define(factory):((global=typeof globalThis!==\"undefined\"?globalThis:global||self),(global.{const_name}=factory()));}})(this,function(){{\"use strict\";var _{const_name}=\"\";"
            ),
            format!("var {const_name}=_{const_name};return {const_name};}});"),
        ),
        (System, Named) | (System, Default) => (
            format!(
                "System.register([],function(exports){{\"use strict\";return{{execute:function(){{var _{const_name}=\"\";"
            ),
            format!("var {const_name}=exports(\"default\",_{const_name});}},}};}});"),
        ),
        (Iife, Named) => (
            format!("var {const_name}=(function(exports){{\"use strict\";var _{const_name}=\"\";"),
            format!(
                "var {const_name}=_{const_name};exports[\"default\"]={const_name};Object.defineProperty(exports,\"__esModule\",{{value:!0}});return exports;}})({{}});"
            ),
        ),
        (Iife, Default) => (
            format!("var {const_name}=(function(){{\"use strict\";var _{const_name}=\"\";"),
            format!("var {const_name}=_{const_name};return {const_name};}})();"),
        ),
    };

    Template { prefix, suffix }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_binding_is_declared_in_every_prefix() {
        for format in ModuleFormat::ALL {
            for exports in ExportMode::ALL {
                let t = template(format, exports, "CSS_TEXT");
                assert!(
                    t.prefix.ends_with("var _CSS_TEXT=\"\";"),
                    "{format}/{exports} prefix must declare the accumulator"
                );
            }
        }
    }

    #[test]
    fn balanced_braces_and_parens_around_empty_body() {
        for format in ModuleFormat::ALL {
            for exports in ExportMode::ALL {
                let t = template(format, exports, "CSS_TEXT");
                let module = format!("{}{}", t.prefix, t.suffix);
                for (open, close) in [('{', '}'), ('(', ')'), ('[', ']')] {
                    let opens = module.matches(open).count();
                    let closes = module.matches(close).count();
                    assert_eq!(opens, closes, "{format}/{exports} unbalanced {open}{close}");
                }
            }
        }
    }

    #[test]
    fn es_named_and_default_coincide() {
        assert_eq!(
            template(ModuleFormat::Es, ExportMode::Named, "X"),
            template(ModuleFormat::Es, ExportMode::Default, "X")
        );
    }
}
