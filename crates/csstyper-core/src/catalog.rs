//! Basic data type catalog.
//!
//! Classifies the names of primitive CSS data types into [`Primitive`] kinds.
//! Built once from two mdn-data tables:
//! - `css/types.json`: every data type name CSS defines
//! - `css/syntaxes.json`: data types that have their own syntax rule
//!
//! Names with a syntax rule are composite and stay out of the catalog, except
//! `number`, `integer` and `length`, which always map to their primitive.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::IgnoredAny;

use crate::types::Primitive;

/// Data type added on top of `css/types.json`.
const EXTRA_TYPE_NAMES: &[&str] = &["hex-color"];

/// Names the built-in catalog knows without any mdn-data tables.
const BUILTIN_TYPE_NAMES: &[&str] = &["number", "integer", "length"];

/// Error while loading catalog tables.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only lookup from basic data type name to its primitive kind.
#[derive(Debug, Clone)]
pub struct DataTypeCatalog {
    entries: IndexMap<String, Primitive>,
}

impl DataTypeCatalog {
    /// Build from data type names and the names that have their own syntax rule.
    pub fn build<'a, T, S>(type_names: T, syntax_names: S) -> Self
    where
        T: IntoIterator<Item = &'a str>,
        S: IntoIterator<Item = &'a str>,
    {
        let syntaxes: HashSet<&str> = syntax_names.into_iter().collect();
        let mut entries = IndexMap::new();

        let mut insert = |name: &str| {
            if let Some(primitive) = classify(name, &syntaxes) {
                entries.entry(name.to_string()).or_insert(primitive);
            }
        };
        for name in type_names {
            insert(name);
        }
        for name in EXTRA_TYPE_NAMES {
            insert(name);
        }

        log::debug!(
            "built data type catalog: {} entries from {} syntax rules",
            entries.len(),
            syntaxes.len()
        );

        Self { entries }
    }

    /// Build from the JSON contents of `css/types.json` and `css/syntaxes.json`.
    ///
    /// Both tables are objects keyed by data type name; values are not inspected.
    pub fn from_json(types_json: &str, syntaxes_json: &str) -> Result<Self, CatalogError> {
        let types: IndexMap<String, IgnoredAny> = serde_json::from_str(types_json)?;
        let syntaxes: IndexMap<String, IgnoredAny> = serde_json::from_str(syntaxes_json)?;
        Ok(Self::build(
            types.keys().map(String::as_str),
            syntaxes.keys().map(String::as_str),
        ))
    }

    /// Build from an mdn-data checkout (the directory containing `css/`).
    pub fn from_mdn_data(dir: &Path) -> Result<Self, CatalogError> {
        let types = read_table(&dir.join("css").join("types.json"))?;
        let syntaxes = read_table(&dir.join("css").join("syntaxes.json"))?;
        Self::from_json(&types, &syntaxes)
    }

    pub fn get(&self, name: &str) -> Option<Primitive> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Primitive)> {
        self.entries.iter().map(|(name, p)| (name.as_str(), *p))
    }
}

impl Default for DataTypeCatalog {
    /// Built-in catalog: the numeric and length primitives plus `hex-color`.
    fn default() -> Self {
        Self::build(BUILTIN_TYPE_NAMES.iter().copied(), std::iter::empty())
    }
}

fn classify(name: &str, syntaxes: &HashSet<&str>) -> Option<Primitive> {
    match name {
        "number" | "integer" => Some(Primitive::Number),
        "length" => Some(Primitive::Length),
        _ if syntaxes.contains(name) => None,
        _ => Some(Primitive::String),
    }
}

fn read_table(path: &Path) -> Result<String, CatalogError> {
    log::trace!("reading catalog table {}", path.display());
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
