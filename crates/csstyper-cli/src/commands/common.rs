//! Shared input/output plumbing for commands.

use std::fmt::Display;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csstyper_compiler::parse;
use csstyper_core::{CatalogError, DataTypeCatalog, Entity};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read syntax from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// The syntax argument itself, or stdin when it is `-`.
pub fn read_syntax(arg: &str) -> Result<String, CommandError> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CommandError::Stdin)?;
    Ok(buf.trim().to_string())
}

/// Catalog from an mdn-data checkout, or the built-in one.
pub fn load_catalog(mdn_data: Option<&Path>) -> Result<DataTypeCatalog, CommandError> {
    match mdn_data {
        Some(dir) => Ok(DataTypeCatalog::from_mdn_data(dir)?),
        None => Ok(DataTypeCatalog::default()),
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String, CommandError> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

/// Print to stdout, or write to `path` when given.
pub fn write_output(path: Option<&Path>, output: &str) -> Result<(), CommandError> {
    match path {
        Some(path) => std::fs::write(path, format!("{output}\n")).map_err(|source| {
            CommandError::Write {
                path: path.to_path_buf(),
                source,
            }
        }),
        None => {
            println!("{output}");
            Ok(())
        }
    }
}

/// Parse `source`, exiting with a rendered diagnostic on failure.
pub fn parse_or_exit(source: &str, color: bool) -> Vec<Entity> {
    parse(source).unwrap_or_else(|err| {
        eprint!("{}", err.render_colored(source, color));
        std::process::exit(1);
    })
}

pub fn exit_with(err: impl Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
