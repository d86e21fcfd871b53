//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, OutputFormat};
use crate::commands::parse::ParseArgs;
use crate::commands::types::TypesArgs;

pub struct TypesParams {
    pub syntax: String,
    pub mdn_data: Option<PathBuf>,
    pub format: OutputFormat,
    pub compact: bool,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            syntax: parse_syntax(m),
            mdn_data: m.get_one::<PathBuf>("mdn_data").cloned(),
            format: parse_format(m),
            compact: m.get_flag("compact"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            syntax: p.syntax,
            mdn_data: p.mdn_data,
            format: p.format,
            compact: p.compact,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ParseParams {
    pub syntax: String,
    pub format: OutputFormat,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            syntax: parse_syntax(m),
            format: parse_format(m),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            syntax: p.syntax,
            format: p.format,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_syntax(m: &ArgMatches) -> String {
    m.get_one::<String>("syntax").cloned().unwrap_or_default()
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
