#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for csstyper.
//!
//! Three pieces:
//! - **Syntax**: entity tree of a parsed CSS value-definition syntax
//! - **Types**: value type descriptors produced from that tree
//! - **Catalog**: basic data type lookup built from the mdn-data tables

pub mod catalog;
pub mod syntax;
pub mod types;

#[cfg(test)]
mod catalog_tests;
#[cfg(test)]
mod types_tests;

pub use catalog::{CatalogError, DataTypeCatalog};
pub use syntax::{Combinator, Component, ComponentKind, Entity, Function, Multiplier};
pub use types::{Generic, Primitive, TypeType};
