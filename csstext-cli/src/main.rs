//! Command-line interface for csstext
//! This binary scans a directory for stylesheet files and writes, next to each
//! one, a JavaScript module embedding the stylesheet text as a string constant
//! (plus a TypeScript declaration stub unless suppressed).
//!
//! Usage:
//!   csstext `<dir>` [--format `<fmt>`] [--exports `<mode>`]   - Generate modules for every .css file
//!   csstext --segments `<file>`                             - Tokenize one stylesheet, print segments as JSON
//!   csstext --list-formats                                 - List supported module formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use csstext_codegen::{apply_policy, declaration, ConstName, ModuleBuilder, ModuleFormat};
use csstext_config::{CsstextConfig, Loader};
use std::fs;
use std::path::Path;
use std::process;

mod files;

fn main() {
    let matches = Command::new("csstext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Embeds stylesheet files into JavaScript modules as string constants")
        .arg_required_else_help(true)
        .arg(
            Arg::new("dir")
                .help("Directory scanned recursively for .css files")
                .required_unless_present_any(["list-formats", "segments"])
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Module format of the generated files: amd, cjs, es, iife, system, umd"),
        )
        .arg(
            Arg::new("exports")
                .long("exports")
                .short('e')
                .help("Export mode: named or default"),
        )
        .arg(
            Arg::new("include-comments")
                .long("include-comments")
                .help("Comment policy: in-file-only, in-const or exclude"),
        )
        .arg(
            Arg::new("const-name")
                .long("const-name")
                .help("Name of the exported constant"),
        )
        .arg(
            Arg::new("no-declaration")
                .long("no-declaration")
                .help("Skip the TypeScript declaration stub")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("segments")
                .long("segments")
                .value_name("FILE")
                .help("Tokenize one stylesheet and print its segments as JSON"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List supported module formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Some(path) = matches.get_one::<String>("segments") {
        handle_segments_command(path);
        return;
    }

    let dir = matches
        .get_one::<String>("dir")
        .expect("dir is required unless listing formats or dumping segments");
    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        process::exit(1);
    });
    handle_generate_command(Path::new(dir), &config);
}

/// Layer the embedded defaults, an optional config file and CLI flags.
fn load_config(matches: &ArgMatches) -> Result<CsstextConfig, csstext_config::Error> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("csstext.toml"),
    };

    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(exports) = matches.get_one::<String>("exports") {
        loader = loader.set_override("output.exports", exports.as_str())?;
    }
    if let Some(policy) = matches.get_one::<String>("include-comments") {
        loader = loader.set_override("generate.include_comments", policy.as_str())?;
    }
    if let Some(name) = matches.get_one::<String>("const-name") {
        loader = loader.set_override("generate.const_name", name.as_str())?;
    }
    if matches.get_flag("no-declaration") {
        loader = loader.set_override("generate.declaration", false)?;
    }

    loader.build()
}

/// Handle the generate command
fn handle_generate_command(dir: &Path, config: &CsstextConfig) {
    if !dir.is_dir() {
        eprintln!("'{}' is not a directory", dir.display());
        process::exit(1);
    }

    let css_files = files::collect_css_files(dir).unwrap_or_else(|e| {
        eprintln!("Failed to scan '{}': {e}", dir.display());
        process::exit(1);
    });

    let const_name = ConstName::Fixed(config.generate.const_name.clone());

    for file in &css_files {
        let name = const_name.resolve(&file.path);

        let mut builder =
            ModuleBuilder::new(config.output.format, config.output.exports, name.as_str());
        apply_policy(config.generate.include_comments, &file.content, &mut builder);

        let module_path = file.dir.join(format!("{}.css-text.js", file.stem));
        write_or_exit(&module_path, &builder.finish());

        if config.generate.declaration {
            let declaration_path = file.dir.join(format!("{}.css-text.d.ts", file.stem));
            write_or_exit(&declaration_path, &declaration(&name));
        }
    }
}

fn write_or_exit(path: &Path, content: &str) {
    if let Err(e) = fs::write(path, content) {
        eprintln!("Failed to write '{}': {e}", path.display());
        process::exit(1);
    }
}

/// Handle the segments command (tokenizer debugging aid)
fn handle_segments_command(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read '{path}': {e}");
        process::exit(1);
    });

    let segments = csstext_parser::tokenize(&source);
    let json = serde_json::to_string_pretty(&segments).unwrap_or_else(|e| {
        eprintln!("Error formatting segments: {e}");
        process::exit(1);
    });

    println!("{json}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Supported module formats:\n");

    for format in ModuleFormat::ALL {
        println!("  {}", format.as_str());
        println!("    {}", format.description());
        println!();
    }
}
