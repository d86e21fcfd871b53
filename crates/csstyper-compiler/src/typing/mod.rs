//! Value typing: entity sequence to deduplicated type descriptors.
//!
//! - `TypeSet`: ordered descriptor accumulator
//! - `Typer`: the recursive walk over an entity sequence

mod type_set;
mod typer;


pub use type_set::TypeSet;
pub use typer::{Typer, type_entities};
