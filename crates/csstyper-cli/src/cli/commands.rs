//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("csstyper")
        .about("Value types from CSS value-definition syntax")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(types_command())
        .subcommand(parse_command())
}

/// Type a syntax against the data type catalog.
pub fn types_command() -> Command {
    Command::new("types")
        .about("Show the value types a syntax accepts")
        .override_usage(
            "\
  csstyper types <SYNTAX>
  csstyper types <SYNTAX> --mdn-data <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  csstyper types 'auto | <length>'                       # built-in catalog
  csstyper types '<color>' --mdn-data node_modules/mdn-data
  csstyper types '[ <length> | auto ]{1,4}' --format json
  echo 'none | <integer>' | csstyper types -             # from stdin

NOTE: Without --mdn-data only number, integer, length and hex-color are
known; other data types are printed as <name> references."#,
        )
        .arg(syntax_arg())
        .arg(mdn_data_arg())
        .arg(format_arg())
        .arg(compact_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}

/// Show the parsed entity tree.
pub fn parse_command() -> Command {
    Command::new("parse")
        .about("Show the entity tree of a syntax")
        .override_usage("  csstyper parse <SYNTAX>")
        .after_help(
            r#"EXAMPLES:
  csstyper parse '<line-width> || <line-style>'          # outline
  csstyper parse 'auto | <length>' --format json         # serialized entities"#,
        )
        .arg(syntax_arg())
        .arg(format_arg())
        .arg(compact_arg())
        .arg(color_arg())
}
