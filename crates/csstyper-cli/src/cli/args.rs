//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Value-definition syntax (positional). `-` reads stdin.
pub fn syntax_arg() -> Arg {
    Arg::new("syntax")
        .value_name("SYNTAX")
        .required(true)
        .help("Value-definition syntax, or - to read it from stdin")
}

/// mdn-data checkout (--mdn-data).
pub fn mdn_data_arg() -> Arg {
    Arg::new("mdn_data")
        .long("mdn-data")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("mdn-data directory containing css/types.json and css/syntaxes.json")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}
