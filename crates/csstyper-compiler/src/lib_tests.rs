use csstyper_core::{DataTypeCatalog, TypeType};

use crate::{Error, ParseError, Span, type_syntax};

#[test]
fn types_a_syntax_string() {
    let types = type_syntax("auto | <length> | <color>", &DataTypeCatalog::default()).unwrap();
    assert_eq!(
        types.into_vec(),
        vec![
            TypeType::string_literal("auto"),
            TypeType::Length,
            TypeType::data_type("color"),
        ]
    );
}

#[test]
fn parse_errors_are_wrapped() {
    let err = type_syntax("auto |", &DataTypeCatalog::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::DanglingCombinator {
            span: Span { start: 5, end: 6 },
            ..
        })
    ));
    assert_eq!(
        err.to_string(),
        "syntax parsing failed: combinator `|` is missing an operand"
    );
}
