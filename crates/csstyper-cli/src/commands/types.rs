use std::path::PathBuf;

use csstyper_compiler::Typer;
use csstyper_core::TypeType;

use super::common::{
    CommandError, exit_with, load_catalog, parse_or_exit, read_syntax, to_json, write_output,
};
use crate::cli::OutputFormat;

pub struct TypesArgs {
    pub syntax: String,
    pub mdn_data: Option<PathBuf>,
    pub format: OutputFormat,
    pub compact: bool,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: TypesArgs) {
    let source = read_syntax(&args.syntax).unwrap_or_else(|err| exit_with(err));
    let catalog = load_catalog(args.mdn_data.as_deref()).unwrap_or_else(|err| exit_with(err));
    let entities = parse_or_exit(&source, args.color);

    let types = Typer::new(&catalog).type_entities(&entities);
    log::debug!("`{source}` accepts {} value types", types.len());

    let output = render(types.as_slice(), args.format, args.compact)
        .unwrap_or_else(|err| exit_with(err));
    write_output(args.output.as_deref(), &output).unwrap_or_else(|err| exit_with(err));
}

/// One descriptor per line, or a JSON array.
pub fn render(
    types: &[TypeType],
    format: OutputFormat,
    compact: bool,
) -> Result<String, CommandError> {
    match format {
        OutputFormat::Text => Ok(types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => to_json(types, compact),
    }
}
