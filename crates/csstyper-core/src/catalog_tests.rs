use indoc::indoc;

use crate::catalog::{CatalogError, DataTypeCatalog};
use crate::types::Primitive;

const TYPES_JSON: &str = indoc! {r#"
    {
      "angle": { "groups": ["CSS Types"], "status": "standard" },
      "color": { "groups": ["CSS Color"], "status": "standard" },
      "custom-ident": { "groups": ["CSS Types"], "status": "standard" },
      "integer": { "groups": ["CSS Types"], "status": "standard" },
      "length": { "groups": ["CSS Types"], "status": "standard" },
      "number": { "groups": ["CSS Types"], "status": "standard" },
      "percentage": { "groups": ["CSS Types"], "status": "standard" },
      "position": { "groups": ["CSS Types"], "status": "standard" },
      "string": { "groups": ["CSS Types"], "status": "standard" }
    }
"#};

const SYNTAXES_JSON: &str = indoc! {r#"
    {
      "color": { "syntax": "<rgb()> | <rgba()> | <hsl()> | <hex-color> | <named-color> | currentcolor" },
      "length-percentage": { "syntax": "<length> | <percentage>" },
      "number": { "syntax": "<integer> | <decimal>" },
      "position": { "syntax": "[ left | center | right ] || [ top | center | bottom ]" }
    }
"#};

fn mdn_catalog() -> DataTypeCatalog {
    DataTypeCatalog::from_json(TYPES_JSON, SYNTAXES_JSON).unwrap()
}

#[test]
fn number_and_integer_map_to_number() {
    let catalog = mdn_catalog();
    assert_eq!(catalog.get("number"), Some(Primitive::Number));
    assert_eq!(catalog.get("integer"), Some(Primitive::Number));
}

#[test]
fn length_maps_to_length() {
    assert_eq!(mdn_catalog().get("length"), Some(Primitive::Length));
}

#[test]
fn other_basic_types_map_to_string() {
    let catalog = mdn_catalog();
    assert_eq!(catalog.get("angle"), Some(Primitive::String));
    assert_eq!(catalog.get("custom-ident"), Some(Primitive::String));
    assert_eq!(catalog.get("percentage"), Some(Primitive::String));
    assert_eq!(catalog.get("string"), Some(Primitive::String));
}

#[test]
fn names_with_syntax_rule_are_excluded() {
    let catalog = mdn_catalog();
    assert!(!catalog.contains("color"));
    assert!(!catalog.contains("position"));
}

#[test]
fn syntax_only_names_are_not_added() {
    assert!(!mdn_catalog().contains("length-percentage"));
}

#[test]
fn hex_color_is_always_added() {
    assert_eq!(mdn_catalog().get("hex-color"), Some(Primitive::String));
    assert_eq!(
        DataTypeCatalog::default().get("hex-color"),
        Some(Primitive::String)
    );
}

#[test]
fn default_catalog_has_builtin_primitives() {
    let catalog = DataTypeCatalog::default();
    let entries: Vec<_> = catalog.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("number", Primitive::Number),
            ("integer", Primitive::Number),
            ("length", Primitive::Length),
            ("hex-color", Primitive::String),
        ]
    );
    assert!(!catalog.contains("color"));
}

#[test]
fn preserves_table_order() {
    let catalog = mdn_catalog();
    let names: Vec<_> = catalog.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec![
            "angle",
            "custom-ident",
            "integer",
            "length",
            "number",
            "percentage",
            "string",
            "hex-color",
        ]
    );
}

#[test]
fn duplicate_names_keep_first_entry() {
    let catalog = DataTypeCatalog::build(["hex-color", "angle"], []);
    let names: Vec<_> = catalog.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["hex-color", "angle"]);
}

#[test]
fn invalid_json_is_an_error() {
    let err = DataTypeCatalog::from_json("[1, 2]", "{}").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn loads_from_mdn_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let css = dir.path().join("css");
    std::fs::create_dir(&css).unwrap();
    std::fs::write(css.join("types.json"), TYPES_JSON).unwrap();
    std::fs::write(css.join("syntaxes.json"), SYNTAXES_JSON).unwrap();

    let catalog = DataTypeCatalog::from_mdn_data(dir.path()).unwrap();
    assert_eq!(catalog.get("length"), Some(Primitive::Length));
    assert!(!catalog.contains("color"));
}

#[test]
fn missing_table_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = DataTypeCatalog::from_mdn_data(dir.path()).unwrap_err();
    let CatalogError::Io { path, .. } = &err else {
        panic!("expected io error, got {err:?}");
    };
    assert!(path.ends_with("css/types.json"));
    assert!(err.to_string().starts_with("failed to read"));
}
