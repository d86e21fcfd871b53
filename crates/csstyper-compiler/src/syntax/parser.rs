//! Recursive-descent parser producing the entity tree.
//!
//! Adjacent terms are joined by an explicit `Juxtaposition` combinator, so
//! every sequence returned here alternates terms and combinators. Sequences
//! mixing combinators are nested by precedence until each one uses a single
//! combinator kind.

use std::fmt::Write as _;

use csstyper_core::{Combinator, ComponentKind, Entity, Multiplier};

use super::Span;
use super::error::ParseError;
use super::invariants::ensure_well_formed;
use super::lexer::{Token, TokenKind, lex, token_text};

/// Parse a value-definition syntax into its top-level entity sequence.
pub fn parse(source: &str) -> Result<Vec<Entity>, ParseError> {
    let tokens = lex(source);
    log::trace!("lexed {} tokens from `{source}`", tokens.len());

    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
    };
    let entities = parser.parse_sequence(None)?;
    ensure_well_formed(&entities);
    Ok(entities)
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    /// Parse terms and combinators until end of input, or until the `]`
    /// closing the group opened at `group_open`.
    fn parse_sequence(&mut self, group_open: Option<Span>) -> Result<Vec<Entity>, ParseError> {
        let mut entities = Vec::new();
        let mut pending: Option<(Combinator, Span)> = None;

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::BracketClose if group_open.is_some() => break,
                TokenKind::BracketClose | TokenKind::Unexpected => {
                    return Err(ParseError::UnexpectedToken {
                        text: self.text(&token).to_string(),
                        span: token.span,
                    });
                }
                kind if kind.is_combinator() => {
                    let combinator = combinator_for(kind);
                    if entities.is_empty() || pending.is_some() {
                        return Err(ParseError::DanglingCombinator {
                            combinator,
                            span: token.span,
                        });
                    }
                    pending = Some((combinator, token.span));
                    self.bump();
                }
                kind if kind.is_multiplier() => {
                    return Err(ParseError::MisplacedMultiplier {
                        text: self.text(&token).to_string(),
                        span: token.span,
                    });
                }
                _ => {
                    let term = self.parse_term()?;
                    if !entities.is_empty() {
                        let combinator = pending
                            .take()
                            .map_or(Combinator::Juxtaposition, |(combinator, _)| combinator);
                        entities.push(Entity::Combinator(combinator));
                    }
                    entities.push(term);
                }
            }
        }

        if let Some((combinator, span)) = pending {
            return Err(ParseError::DanglingCombinator { combinator, span });
        }

        if let Some(span) = group_open {
            match self.bump() {
                Some(token) if token.kind == TokenKind::BracketClose => {}
                _ => return Err(ParseError::UnclosedGroup { span }),
            }
        }

        Ok(group_by_precedence(entities))
    }

    fn parse_term(&mut self) -> Result<Entity, ParseError> {
        let Some(token) = self.bump() else {
            unreachable!("parse_term is only called with a token ahead");
        };
        let text = self.text(&token);

        let entity = match token.kind {
            TokenKind::DataType => Entity::data_type(normalize_data_type(text)),
            TokenKind::Keyword | TokenKind::ParenOpen | TokenKind::ParenClose => {
                Entity::keyword(text)
            }
            TokenKind::QuotedKeyword => Entity::keyword(&text[1..text.len() - 1]),
            TokenKind::BracketOpen => Entity::group(self.parse_sequence(Some(token.span))?),
            TokenKind::FunctionOpen => {
                let name = &text[..text.len() - 1];
                self.skip_arguments(name, token.span)?;
                Entity::function(name)
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    text: text.to_string(),
                    span: token.span,
                });
            }
        };

        match self.parse_multipliers()? {
            Some(multiplier) => Ok(entity.with_multiplier(multiplier)),
            None => Ok(entity),
        }
    }

    /// Consume a function's argument list through its balancing `)`.
    fn skip_arguments(&mut self, name: &str, open: Span) -> Result<(), ParseError> {
        let mut depth = 1usize;
        while let Some(token) = self.bump() {
            match token.kind {
                TokenKind::FunctionOpen | TokenKind::ParenOpen => depth += 1,
                TokenKind::ParenClose => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(ParseError::UnclosedFunction {
            name: name.to_string(),
            span: open,
        })
    }

    /// The first multiplier wins; stacked ones (`+#`, `#{1,4}`) are consumed and dropped.
    fn parse_multipliers(&mut self) -> Result<Option<Multiplier>, ParseError> {
        let mut multiplier = None;
        while let Some(token) = self.peek() {
            if !token.kind.is_multiplier() {
                break;
            }
            self.bump();
            let parsed = self.multiplier_for(&token)?;
            if multiplier.is_none() {
                multiplier = Some(parsed);
            } else {
                log::trace!("dropping stacked multiplier `{parsed}` at {}", token.span);
            }
        }
        Ok(multiplier)
    }

    fn multiplier_for(&self, token: &Token) -> Result<Multiplier, ParseError> {
        let multiplier = match token.kind {
            TokenKind::Asterisk => Multiplier::Asterisk,
            TokenKind::PlusSign => Multiplier::PlusSign,
            TokenKind::QuestionMark => Multiplier::QuestionMark,
            TokenKind::HashMark => Multiplier::HashMark,
            TokenKind::ExclamationPoint => Multiplier::ExclamationPoint,
            TokenKind::CurlyRange => self.curly_range(token)?,
            kind => unreachable!("{kind:?} is not a multiplier"),
        };
        Ok(multiplier)
    }

    fn curly_range(&self, token: &Token) -> Result<Multiplier, ParseError> {
        let text = self.text(token);
        let invalid = || ParseError::InvalidRange {
            text: text.to_string(),
            span: token.span,
        };

        let inner = &text[1..text.len() - 1];
        let (min, max) = match inner.split_once(',') {
            None => {
                let n = inner.parse::<u32>().map_err(|_| invalid())?;
                (n, Some(n))
            }
            Some((min, "")) => (min.parse::<u32>().map_err(|_| invalid())?, None),
            Some((min, max)) => (
                min.parse::<u32>().map_err(|_| invalid())?,
                Some(max.parse::<u32>().map_err(|_| invalid())?),
            ),
        };

        if max.is_some_and(|max| max < min) {
            return Err(invalid());
        }
        Ok(Multiplier::CurlyBracket { min, max })
    }
}

fn combinator_for(kind: TokenKind) -> Combinator {
    match kind {
        TokenKind::DoubleAmpersand => Combinator::DoubleAmpersand,
        TokenKind::DoubleBar => Combinator::DoubleBar,
        TokenKind::SingleBar => Combinator::SingleBar,
        kind => unreachable!("{kind:?} is not a combinator"),
    }
}

/// Juxtaposition binds tightest, then `&&`, then `||`, then `|`.
fn precedence(combinator: Combinator) -> u8 {
    match combinator {
        Combinator::SingleBar => 0,
        Combinator::DoubleBar => 1,
        Combinator::DoubleAmpersand => 2,
        Combinator::Juxtaposition => 3,
    }
}

/// Split on the loosest combinator and nest each tighter-bound run in an
/// unmultiplied group, so every sequence uses a single combinator kind.
fn group_by_precedence(entities: Vec<Entity>) -> Vec<Entity> {
    let mut combinators = entities.iter().filter_map(Entity::as_combinator);
    let Some(first) = combinators.next() else {
        return entities;
    };
    let loosest = combinators.fold(first, |loosest, combinator| {
        if precedence(combinator) < precedence(loosest) {
            combinator
        } else {
            loosest
        }
    });
    if entities
        .iter()
        .filter_map(Entity::as_combinator)
        .all(|combinator| combinator == loosest)
    {
        return entities;
    }

    let mut grouped = Vec::new();
    let mut run = Vec::new();
    for entity in entities {
        if entity.as_combinator() == Some(loosest) {
            grouped.push(close_run(std::mem::take(&mut run)));
            grouped.push(entity);
        } else {
            run.push(entity);
        }
    }
    grouped.push(close_run(run));
    grouped
}

fn close_run(run: Vec<Entity>) -> Entity {
    match <[Entity; 1]>::try_from(run) {
        Ok([term]) => term,
        Err(run) => Entity::group(group_by_precedence(run)),
    }
}

/// Drop range annotations: `<length [0,∞]>` becomes `<length>`.
fn normalize_data_type(text: &str) -> String {
    let inner = &text[1..text.len() - 1];
    if inner.starts_with('\'') {
        return text.to_string();
    }
    let name = match inner.find('[') {
        Some(idx) => &inner[..idx],
        None => inner,
    };
    format!("<{}>", name.trim())
}

/// Render an entity sequence as an indented outline, one entity per line.
pub fn dump(entities: &[Entity]) -> String {
    let mut out = String::new();
    dump_into(&mut out, entities, 0);
    out
}

fn dump_into(out: &mut String, entities: &[Entity], depth: usize) {
    let indent = "  ".repeat(depth);
    for entity in entities {
        match entity {
            Entity::Component(component) => {
                let suffix = component
                    .multiplier
                    .map(|m| format!(" {m}"))
                    .unwrap_or_default();
                match &component.kind {
                    ComponentKind::Keyword { value } => {
                        let _ = writeln!(out, "{indent}Keyword {value:?}{suffix}");
                    }
                    ComponentKind::DataType { value } => {
                        let _ = writeln!(out, "{indent}DataType {value}{suffix}");
                    }
                    ComponentKind::Group { entities } => {
                        let _ = writeln!(out, "{indent}Group{suffix}");
                        dump_into(out, entities, depth + 1);
                    }
                }
            }
            Entity::Combinator(combinator) => {
                let _ = writeln!(out, "{indent}{combinator:?}");
            }
            Entity::Function(function) => {
                let _ = writeln!(out, "{indent}Function {}()", function.name);
            }
        }
    }
}
