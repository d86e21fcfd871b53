use super::lexer::{TokenKind, lex, token_text};

fn snapshot(input: &str) -> String {
    let mut out = String::new();
    for token in lex(input) {
        out.push_str(&format!(
            "{:?} {:?}\n",
            token.kind,
            token_text(input, &token)
        ));
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("[ ] ( ) && || | * + ? # ! {1,4}"), @r##"
    BracketOpen "["
    BracketClose "]"
    ParenOpen "("
    ParenClose ")"
    DoubleAmpersand "&&"
    DoubleBar "||"
    SingleBar "|"
    Asterisk "*"
    PlusSign "+"
    QuestionMark "?"
    HashMark "#"
    ExclamationPoint "!"
    CurlyRange "{1,4}"
    "##);
}

#[test]
fn data_types() {
    insta::assert_snapshot!(snapshot("<length> <'margin-top'> <length [0,∞]> <rgb()>"), @r#"
    DataType "<length>"
    DataType "<'margin-top'>"
    DataType "<length [0,∞]>"
    DataType "<rgb()>"
    "#);
}

#[test]
fn keywords_and_functions() {
    insta::assert_snapshot!(snapshot("auto 0 , / calc( ) 'x'"), @r#"
    Keyword "auto"
    Keyword "0"
    Keyword ","
    Keyword "/"
    FunctionOpen "calc("
    ParenClose ")"
    QuotedKeyword "'x'"
    "#);
}

#[test]
fn multipliers_attached() {
    insta::assert_snapshot!(snapshot("<length>#{1,4} a+# b?"), @r##"
    DataType "<length>"
    HashMark "#"
    CurlyRange "{1,4}"
    Keyword "a"
    PlusSign "+"
    HashMark "#"
    Keyword "b"
    QuestionMark "?"
    "##);
}

#[test]
fn curly_range_forms() {
    insta::assert_snapshot!(snapshot("{2} {1,} {0,3}"), @r#"
    CurlyRange "{2}"
    CurlyRange "{1,}"
    CurlyRange "{0,3}"
    "#);
}

#[test]
fn unexpected_characters_are_coalesced() {
    let tokens = lex("auto & none");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Keyword, TokenKind::Unexpected, TokenKind::Keyword]
    );
    assert_eq!(tokens[1].span.start, 5);
}

#[test]
fn trailing_unexpected_runs_to_end() {
    let input = "auto &";
    let tokens = lex(input);
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Unexpected);
    assert_eq!(token_text(input, last), "&");
}

#[test]
fn empty_input() {
    assert!(lex("").is_empty());
    assert!(lex("   \n\t").is_empty());
}
