//! Lexer error types.

use dragon_diagnostic::{Diagnostic, ErrorCode};
use dragon_ir::Span;
use thiserror::Error;

use crate::escape::EscapeError;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    #[error("invalid character {found:?} in source")]
    InvalidCharacter { found: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("bytes can only contain ASCII literal characters, found {found:?}")]
    NonAsciiBytes { found: char },
    #[error(transparent)]
    InvalidEscape(EscapeError),
    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String },
    #[error("unindent does not match any outer indentation level")]
    InconsistentDedent,
    #[error("source is larger than 4 GiB")]
    SourceTooLarge,
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::InvalidCharacter { .. } | LexErrorKind::NonAsciiBytes { .. } => {
                ErrorCode::E0001
            }
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::InvalidNumber { .. } => ErrorCode::E0003,
            LexErrorKind::InconsistentDedent => ErrorCode::E0004,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0005,
            LexErrorKind::SourceTooLarge => ErrorCode::E9001,
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::InconsistentDedent => "dedent to an unknown level",
            LexErrorKind::InvalidEscape(_) => "in this literal",
            _ => "here",
        };
        Diagnostic::error(self.kind.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label)
    }
}
