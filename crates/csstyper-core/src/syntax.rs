//! Entity tree for CSS value-definition syntax.
//!
//! A syntax such as `<length> | [ auto || none ]#` is represented as a flat
//! sequence of entities where terms and combinators alternate:
//!
//! ```text
//! DataType "<length>"  SingleBar  Group# [ Keyword "auto"  DoubleBar  Keyword "none" ]
//! ```
//!
//! Groups nest their own sequence. Juxtaposition is explicit: two adjacent
//! terms always have a `Juxtaposition` combinator between them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One element of a syntax sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Component(Component),
    Combinator(Combinator),
    Function(Function),
}

impl Entity {
    /// Keyword component without multiplier.
    pub fn keyword(value: impl Into<String>) -> Self {
        Entity::Component(Component::new(ComponentKind::Keyword {
            value: value.into(),
        }))
    }

    /// Data type component without multiplier. `value` keeps its angle brackets.
    pub fn data_type(value: impl Into<String>) -> Self {
        Entity::Component(Component::new(ComponentKind::DataType {
            value: value.into(),
        }))
    }

    /// Group component without multiplier.
    pub fn group(entities: Vec<Entity>) -> Self {
        Entity::Component(Component::new(ComponentKind::Group { entities }))
    }

    pub fn function(name: impl Into<String>) -> Self {
        Entity::Function(Function { name: name.into() })
    }

    /// Attach a multiplier. No-op for combinators and functions.
    pub fn with_multiplier(self, multiplier: Multiplier) -> Self {
        match self {
            Entity::Component(component) => {
                Entity::Component(component.with_multiplier(multiplier))
            }
            other => other,
        }
    }

    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Entity::Component(component) => Some(component),
            _ => None,
        }
    }

    pub fn as_combinator(&self) -> Option<Combinator> {
        match self {
            Entity::Combinator(combinator) => Some(*combinator),
            _ => None,
        }
    }

    pub fn is_combinator(&self) -> bool {
        matches!(self, Entity::Combinator(_))
    }
}

/// A single grammatical unit, optionally repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub kind: ComponentKind,
    #[serde(default)]
    pub multiplier: Option<Multiplier>,
}

impl Component {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            multiplier: None,
        }
    }

    pub fn with_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.multiplier = Some(multiplier);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Literal keyword text, e.g. `auto`, `,` or `/`.
    Keyword { value: String },
    /// Bracketed reference, e.g. `<length>` or `<'margin-top'>`.
    DataType { value: String },
    /// Bracketed sub-grammar `[ ... ]`.
    Group { entities: Vec<Entity> },
}

/// How two adjacent terms relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combinator {
    /// Space separated: all terms, in order.
    Juxtaposition,
    /// `&&`: all terms, any order.
    DoubleAmpersand,
    /// `||`: one or more terms, any order.
    DoubleBar,
    /// `|`: exactly one term.
    SingleBar,
}

impl Combinator {
    /// Juxtaposition and `&&` require every term to be present.
    pub fn is_mandatory(self) -> bool {
        matches!(self, Combinator::Juxtaposition | Combinator::DoubleAmpersand)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Juxtaposition => " ",
            Combinator::DoubleAmpersand => "&&",
            Combinator::DoubleBar => "||",
            Combinator::SingleBar => "|",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS function call form such as `calc()`. Arguments are not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
}

/// Repetition suffix of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    /// `*`
    Asterisk,
    /// `+`
    PlusSign,
    /// `?`
    QuestionMark,
    /// `#`
    HashMark,
    /// `!`
    ExclamationPoint,
    /// `{min}`, `{min,}` or `{min,max}`. `max: None` is unbounded.
    CurlyBracket { min: u32, max: Option<u32> },
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Multiplier::Asterisk => f.write_str("*"),
            Multiplier::PlusSign => f.write_str("+"),
            Multiplier::QuestionMark => f.write_str("?"),
            Multiplier::HashMark => f.write_str("#"),
            Multiplier::ExclamationPoint => f.write_str("!"),
            Multiplier::CurlyBracket { min, max: Some(max) } if min == max => {
                write!(f, "{{{min}}}")
            }
            Multiplier::CurlyBracket { min, max: Some(max) } => write!(f, "{{{min},{max}}}"),
            Multiplier::CurlyBracket { min, max: None } => write!(f, "{{{min},}}"),
        }
    }
}
