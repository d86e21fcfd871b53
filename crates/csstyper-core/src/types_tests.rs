use crate::types::{Generic, Primitive, TypeType, format_number};

#[test]
fn display_primitives() {
    assert_eq!(TypeType::String.to_string(), "string");
    assert_eq!(TypeType::Number.to_string(), "number");
    assert_eq!(TypeType::Length.to_string(), "length");
}

#[test]
fn display_literals() {
    assert_eq!(TypeType::string_literal("auto").to_string(), "\"auto\"");
    assert_eq!(TypeType::numeric_literal(0.0).to_string(), "0");
    assert_eq!(TypeType::numeric_literal(1.5).to_string(), "1.5");
    assert_eq!(TypeType::data_type("color").to_string(), "<color>");
}

#[test]
fn display_alias() {
    let plain = TypeType::Alias {
        name: "Color".into(),
        generics: vec![],
    };
    let generic = TypeType::Alias {
        name: "LineWidth".into(),
        generics: vec![Generic::new("TLength").with_default("string & {}")],
    };
    assert_eq!(plain.to_string(), "Color");
    assert_eq!(generic.to_string(), "LineWidth<TLength = string & {}>");
}

#[test]
fn primitive_conversion() {
    assert_eq!(TypeType::from(Primitive::Number), TypeType::Number);
    assert_eq!(Primitive::Length.to_type(), TypeType::Length);
    assert_eq!(Primitive::String.to_type(), TypeType::String);
}

#[test]
fn is_primitive() {
    assert!(TypeType::Length.is_primitive());
    assert!(!TypeType::string_literal("auto").is_primitive());
    assert!(!TypeType::data_type("color").is_primitive());
}

#[test]
fn serialize_tagged() {
    let types = vec![
        TypeType::String,
        TypeType::string_literal("auto"),
        TypeType::numeric_literal(0.0),
        TypeType::data_type("color"),
    ];
    insta::assert_snapshot!(serde_json::to_string(&types).unwrap(), @r#"[{"type":"String"},{"type":"StringLiteral","literal":"auto"},{"type":"NumericLiteral","literal":0.0},{"type":"DataType","name":"color"}]"#);
}

#[test]
fn number_formatting() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(1.5), "1.5");
    assert_eq!(format_number(-2.0), "-2");
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(1.5e-7), "1.5e-7");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_number(f64::NAN), "NaN");
}

#[test]
fn non_finite_literals_keep_keyword_text() {
    let types = vec![
        TypeType::numeric_literal(f64::INFINITY),
        TypeType::numeric_literal(f64::NAN),
    ];
    assert_eq!(types[0].to_string(), "Infinity");
    assert_eq!(types[1].to_string(), "NaN");
    insta::assert_snapshot!(serde_json::to_string(&types).unwrap(), @r#"[{"type":"NumericLiteral","literal":"Infinity"},{"type":"NumericLiteral","literal":"NaN"}]"#);
}
