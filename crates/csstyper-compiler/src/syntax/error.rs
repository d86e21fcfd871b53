//! Syntax error type and rendering.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use csstyper_core::Combinator;

use super::Span;

/// Error while parsing a value-definition syntax.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected `{text}`")]
    UnexpectedToken { text: String, span: Span },

    #[error("unclosed group")]
    UnclosedGroup { span: Span },

    #[error("unclosed function `{name}(`")]
    UnclosedFunction { name: String, span: Span },

    #[error("combinator `{combinator}` is missing an operand")]
    DanglingCombinator { combinator: Combinator, span: Span },

    #[error("multiplier `{text}` does not follow a component")]
    MisplacedMultiplier { text: String, span: Span },

    #[error("invalid repetition range `{text}`")]
    InvalidRange { text: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnclosedGroup { span }
            | ParseError::UnclosedFunction { span, .. }
            | ParseError::DanglingCombinator { span, .. }
            | ParseError::MisplacedMultiplier { span, .. }
            | ParseError::InvalidRange { span, .. } => *span,
        }
    }

    /// Render with the offending span underlined in `source`.
    pub fn render(&self, source: &str) -> String {
        self.render_colored(source, false)
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        let Span { start, end } = self.span();
        // Zero-width spans still need one visible column.
        let end = if start == end {
            (start + 1).min(source.len())
        } else {
            end
        };

        let message = self.to_string();
        let snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(start..end).label(&message));
        let report = vec![Level::ERROR.primary_title(&message).element(snippet)];

        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        renderer.render(&report).to_string()
    }
}
