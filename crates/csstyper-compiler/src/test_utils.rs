//! Test utilities: a catalog fixture in the mdn-data layout and descriptor rendering.

use csstyper_core::{DataTypeCatalog, TypeType};

use crate::type_syntax;

/// Excerpt of mdn-data `css/types.json`.
pub const TYPES_JSON: &str = r#"{
    "alpha-value": {},
    "angle": {},
    "color": {},
    "custom-ident": {},
    "integer": {},
    "length": {},
    "number": {},
    "percentage": {},
    "position": {},
    "string": {},
    "url": {}
}"#;

/// Excerpt of mdn-data `css/syntaxes.json`.
pub const SYNTAXES_JSON: &str = r#"{
    "alpha-value": { "syntax": "<number> | <percentage>" },
    "color": { "syntax": "<rgb()> | <rgba()> | <hsl()> | <hex-color> | <named-color> | currentcolor" },
    "length-percentage": { "syntax": "<length> | <percentage>" },
    "line-style": { "syntax": "none | hidden | dotted | dashed | solid | double | groove | ridge | inset | outset" },
    "line-width": { "syntax": "<length> | thin | medium | thick" },
    "number": { "syntax": "<integer> | <decimal>" },
    "position": { "syntax": "[ left | center | right ] || [ top | center | bottom ]" }
}"#;

pub fn mdn_catalog() -> DataTypeCatalog {
    DataTypeCatalog::from_json(TYPES_JSON, SYNTAXES_JSON).unwrap()
}

/// One descriptor per line.
pub fn render_types<'a>(types: impl IntoIterator<Item = &'a TypeType>) -> String {
    let mut out = String::new();
    for ty in types {
        out.push_str(&ty.to_string());
        out.push('\n');
    }
    out
}

/// Parse and type `source` against [`mdn_catalog`], rendered with [`render_types`].
pub fn types_of(source: &str) -> String {
    let types = type_syntax(source, &mdn_catalog()).unwrap();
    render_types(&types)
}
