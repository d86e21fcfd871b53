//! Lexer for CSS value-definition syntax.
//!
//! Produces span-based tokens; text is sliced from the source only when needed.
//! Consecutive unrecognized characters are coalesced into one `Unexpected` token.

use logos::Logos;

use super::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// `<length>`, `<'margin-top'>`, `<length [0,∞]>`, `<rgb()>`
    #[regex(r"<[^<>]+>")]
    DataType,

    /// `calc(`: function name with its opening parenthesis.
    #[regex(r"[A-Za-z_-][A-Za-z0-9_-]*\(")]
    FunctionOpen,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("&&")]
    DoubleAmpersand,

    #[token("||")]
    DoubleBar,

    #[token("|")]
    SingleBar,

    #[token("*")]
    Asterisk,

    #[token("+")]
    PlusSign,

    #[token("?")]
    QuestionMark,

    #[token("#")]
    HashMark,

    #[token("!")]
    ExclamationPoint,

    /// `{2}`, `{1,}`, `{1,4}`
    #[regex(r"\{[0-9]+(,[0-9]*)?\}")]
    CurlyRange,

    /// `'['`: quoted literal, used for characters that are otherwise syntax.
    #[regex(r"'[^']*'")]
    QuotedKeyword,

    /// `auto`, `0`, `,`, `/`
    #[regex(r"[^ \t\r\n\f<>()\[\]&|*+?#!{}']+")]
    Keyword,

    /// Coalesced run of characters the lexer does not recognize.
    Unexpected,
}

impl TokenKind {
    pub fn is_multiplier(self) -> bool {
        matches!(
            self,
            TokenKind::Asterisk
                | TokenKind::PlusSign
                | TokenKind::QuestionMark
                | TokenKind::HashMark
                | TokenKind::ExclamationPoint
                | TokenKind::CurlyRange
        )
    }

    pub fn is_combinator(self) -> bool {
        matches!(
            self,
            TokenKind::DoubleAmpersand | TokenKind::DoubleBar | TokenKind::SingleBar
        )
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Unexpected, Span::new(start, end)));
                }
                tokens.push(Token::new(kind, lexer.span().into()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Unexpected,
                        Span::new(start, source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.range()]
}
