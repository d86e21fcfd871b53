//! csstyper compiler: value-definition syntax parser and value typer.
//!
//! This crate provides the pipeline from a CSS value-definition syntax string
//! to the descriptor set consumed by code generation:
//! - `syntax` - lexer and parser producing the entity tree
//! - `typing` - entity tree to deduplicated type descriptors

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod syntax;
pub mod typing;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod lib_tests;

use csstyper_core::DataTypeCatalog;

pub use syntax::{ParseError, Span, dump, parse};
pub use typing::{TypeSet, Typer, type_entities};

/// Errors that can occur while typing a syntax string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("syntax parsing failed: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for syntax operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse `source` and type its top-level sequence.
pub fn type_syntax(source: &str, catalog: &DataTypeCatalog) -> Result<TypeSet> {
    let entities = parse(source)?;
    Ok(Typer::new(catalog).type_entities(&entities))
}
