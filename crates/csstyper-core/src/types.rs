//! Value type descriptors.
//!
//! A descriptor names one kind of value a CSS property or data type accepts.
//! Descriptors are collected into ordered, deduplicated sets by the typer and
//! handed to the alias resolution and emission stages.

use std::fmt;

use serde::Serialize;

/// Semantic value type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TypeType {
    /// Any text value.
    String,
    /// Any numeric value.
    Number,
    /// Any length value.
    Length,
    /// One exact keyword.
    StringLiteral { literal: String },
    /// One exact number, written as a keyword in the grammar.
    NumericLiteral {
        #[serde(serialize_with = "serialize_number")]
        literal: f64,
    },
    /// Reference to a composite data type, resolved later.
    DataType { name: String },
    /// Named alias with generic parameters. Only produced by alias resolution.
    Alias { name: String, generics: Vec<Generic> },
}

impl TypeType {
    pub fn string_literal(literal: impl Into<String>) -> Self {
        TypeType::StringLiteral {
            literal: literal.into(),
        }
    }

    pub fn numeric_literal(literal: f64) -> Self {
        TypeType::NumericLiteral { literal }
    }

    pub fn data_type(name: impl Into<String>) -> Self {
        TypeType::DataType { name: name.into() }
    }

    /// Returns true for the generic `String`, `Number` and `Length` descriptors.
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeType::String | TypeType::Number | TypeType::Length)
    }
}

impl fmt::Display for TypeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeType::String => f.write_str("string"),
            TypeType::Number => f.write_str("number"),
            TypeType::Length => f.write_str("length"),
            TypeType::StringLiteral { literal } => write!(f, "{literal:?}"),
            TypeType::NumericLiteral { literal } => f.write_str(&format_number(*literal)),
            TypeType::DataType { name } => write!(f, "<{name}>"),
            TypeType::Alias { name, generics } => {
                f.write_str(name)?;
                if generics.is_empty() {
                    return Ok(());
                }
                f.write_str("<")?;
                for (i, generic) in generics.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{generic}")?;
                }
                f.write_str(">")
            }
        }
    }
}

/// Shortest round-trip rendering in the style of ECMAScript `Number#toString`.
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if number == 0.0 {
        return "0".to_string();
    }

    let magnitude = number.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return number.to_string();
    }

    let scientific = format!("{number:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

/// JSON has no non-finite numbers; those are written as their keyword text.
fn serialize_number<S: serde::Serializer>(number: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if number.is_finite() {
        serializer.serialize_f64(*number)
    } else {
        serializer.serialize_str(&format_number(*number))
    }
}

/// Generic parameter of an alias, e.g. `TLength = (string & {})`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generic {
    pub name: String,
    pub default: Option<String>,
}

impl Generic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl fmt::Display for Generic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default {
            Some(default) => write!(f, "{} = {}", self.name, default),
            None => f.write_str(&self.name),
        }
    }
}

/// Primitive kind a basic data type maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Primitive {
    Number,
    Length,
    String,
}

impl Primitive {
    pub fn to_type(self) -> TypeType {
        match self {
            Primitive::Number => TypeType::Number,
            Primitive::Length => TypeType::Length,
            Primitive::String => TypeType::String,
        }
    }
}

impl From<Primitive> for TypeType {
    fn from(primitive: Primitive) -> Self {
        primitive.to_type()
    }
}
