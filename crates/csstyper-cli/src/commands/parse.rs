use csstyper_compiler::dump;
use csstyper_core::Entity;

use super::common::{CommandError, exit_with, parse_or_exit, read_syntax, to_json};
use crate::cli::OutputFormat;

pub struct ParseArgs {
    pub syntax: String,
    pub format: OutputFormat,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: ParseArgs) {
    let source = read_syntax(&args.syntax).unwrap_or_else(|err| exit_with(err));
    let entities = parse_or_exit(&source, args.color);

    let output = render(&entities, args.format, args.compact).unwrap_or_else(|err| exit_with(err));
    println!("{output}");
}

/// Indented outline, or the serialized entity sequence.
pub fn render(
    entities: &[Entity],
    format: OutputFormat,
    compact: bool,
) -> Result<String, CommandError> {
    match format {
        OutputFormat::Text => Ok(dump(entities).trim_end().to_string()),
        OutputFormat::Json => to_json(entities, compact),
    }
}
