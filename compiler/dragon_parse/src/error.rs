//! Parse error types.

use dragon_diagnostic::{Diagnostic, ErrorCode};
use dragon_ir::{Span, TokenKind};
use dragon_lexer::LexError;
use thiserror::Error;

/// A parse error: what went wrong, where, and optionally a related location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// What kind of parse error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseErrorKind {
    /// The source did not lex.
    #[error(transparent)]
    Lex(LexError),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },

    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: String },

    #[error("unclosed delimiter `{open}`")]
    UnclosedDelimiter { open: &'static str, opened_at: Span },

    /// Valid Python the tree has no node for.
    #[error("{construct} is not supported")]
    UnsupportedSyntax { construct: String },

    #[error("unexpected indent")]
    UnexpectedIndent,

    #[error("expected an indented block")]
    ExpectedIndentedBlock,

    #[error("cannot assign to {found}")]
    InvalidTarget { found: &'static str },

    #[error("only single target (not {found}) can be annotated")]
    InvalidAnnotationTarget { found: &'static str },

    #[error("'{found}' is an illegal expression for augmented assignment")]
    InvalidAugmentedTarget { found: &'static str },

    #[error("cannot mix bytes and nonbytes literals")]
    MixedLiterals,

    #[error("expression nested too deeply")]
    NestingTooDeep,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    /// Error for a token the grammar has no place for.
    ///
    /// Operators with no node in the tree (`:=` outside parentheses, `->`)
    /// report unsupported syntax; anything else is an unexpected token.
    #[cold]
    pub fn unexpected(found: &TokenKind, span: Span, expected: &'static str) -> Self {
        let kind = match unsupported_construct(found) {
            Some(construct) => ParseErrorKind::UnsupportedSyntax { construct },
            None => ParseErrorKind::UnexpectedToken {
                found: found.display_name(),
                expected,
            },
        };
        ParseError::new(kind, span)
    }

    /// Error for a token that cannot start an expression.
    #[cold]
    pub fn expected_expression(found: &TokenKind, span: Span) -> Self {
        let kind = match unsupported_construct(found) {
            Some(construct) => ParseErrorKind::UnsupportedSyntax { construct },
            None => ParseErrorKind::ExpectedExpression {
                found: found.display_name(),
            },
        };
        ParseError::new(kind, span)
    }

    #[cold]
    pub fn unsupported(construct: impl Into<String>, span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::UnsupportedSyntax {
                construct: construct.into(),
            },
            span,
        )
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Lex(err) => err.kind.code(),
            ParseErrorKind::UnexpectedToken { .. }
            | ParseErrorKind::InvalidTarget { .. }
            | ParseErrorKind::InvalidAnnotationTarget { .. }
            | ParseErrorKind::InvalidAugmentedTarget { .. }
            | ParseErrorKind::MixedLiterals
            | ParseErrorKind::NestingTooDeep => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1003,
            ParseErrorKind::UnsupportedSyntax { .. } => ErrorCode::E1004,
            ParseErrorKind::UnexpectedIndent | ParseErrorKind::ExpectedIndentedBlock => {
                ErrorCode::E1005
            }
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        if let ParseErrorKind::Lex(err) = &self.kind {
            return err.to_diagnostic();
        }
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match &self.kind {
            ParseErrorKind::UnclosedDelimiter { open, opened_at } => diag
                .with_label(self.span, "expected a closing delimiter")
                .with_secondary_label(*opened_at, format!("`{open}` opened here")),
            ParseErrorKind::UnexpectedIndent => diag
                .with_label(self.span, "this line is indented")
                .with_note("only the body of a compound statement may be indented"),
            ParseErrorKind::ExpectedIndentedBlock => {
                diag.with_label(self.span, "the block should start here")
            }
            ParseErrorKind::UnsupportedSyntax { .. } => {
                diag.with_label(self.span, "not in the supported subset")
            }
            _ => diag.with_label(self.span, "here"),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span;
        ParseError::new(ParseErrorKind::Lex(err), span)
    }
}

/// Name of the construct an out-of-subset token introduces.
fn unsupported_construct(kind: &TokenKind) -> Option<String> {
    match kind {
        TokenKind::Unsupported(op) => Some(format!("`{op}`")),
        _ => None,
    }
}
