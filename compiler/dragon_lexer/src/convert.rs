//! Token Conversion
//!
//! Converts raw logos tokens to final `TokenKind`s, decoding literals.

use dragon_ir::{Span, TokenKind};

use crate::escape::{unescape_bytes, unescape_str, EscapeError};
use crate::keywords;
use crate::parse_helpers::{has_leading_zero, parse_float, parse_int, to_decimal};
use crate::raw_token::RawToken;
use crate::{LexError, LexErrorKind};

/// Convert a raw token to a `TokenKind`.
pub(crate) fn convert_token(raw: RawToken, slice: &str, span: Span) -> Result<TokenKind, LexError> {
    let kind = match raw {
        // Literals
        RawToken::Int => {
            if has_leading_zero(slice) {
                return Err(invalid_number(slice, span));
            }
            int_token(slice, slice, 10, false, span)?
        }
        RawToken::HexInt => int_token(slice, &slice[2..], 16, true, span)?,
        RawToken::OctInt => int_token(slice, &slice[2..], 8, true, span)?,
        RawToken::BinInt => int_token(slice, &slice[2..], 2, true, span)?,
        RawToken::Float => {
            let value = parse_float(slice).ok_or_else(|| invalid_number(slice, span))?;
            TokenKind::Float(value.to_bits())
        }
        RawToken::Str => convert_string(slice, span)?,
        RawToken::UnterminatedStr => {
            return Err(LexError::new(LexErrorKind::UnterminatedString, span));
        }
        RawToken::FString => TokenKind::FString,
        RawToken::Ident => keywords::lookup(slice).unwrap_or_else(|| TokenKind::Ident(slice.to_string())),

        // Operators
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::DoubleStar => TokenKind::DoubleStar,
        RawToken::DoubleSlash => TokenKind::DoubleSlash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::At => TokenKind::At,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::AugAssign => TokenKind::AugAssign(static_text(&slice[..slice.len() - 1])),
        RawToken::CompareOp => TokenKind::CompareOp(static_text(slice)),
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::OtherOperator => TokenKind::Unsupported(static_text(slice)),

        // Delimiters
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Semicolon => TokenKind::Semicolon,

        RawToken::Comment | RawToken::Newline | RawToken::LineContinuation => {
            unreachable!("trivia is handled by the lexer loop")
        }
    };
    Ok(kind)
}

fn invalid_number(text: &str, span: Span) -> LexError {
    LexError::new(
        LexErrorKind::InvalidNumber {
            text: text.to_string(),
        },
        span,
    )
}

/// An `Int` token, or `BigInt` decimal digits when the value overflows `i64`.
fn int_token(
    text: &str,
    body: &str,
    radix: u32,
    prefixed: bool,
    span: Span,
) -> Result<TokenKind, LexError> {
    if let Some(value) = parse_int(body, radix, prefixed) {
        return Ok(TokenKind::Int(value));
    }
    to_decimal(body, radix, prefixed)
        .map(TokenKind::BigInt)
        .ok_or_else(|| invalid_number(text, span))
}

/// Decode a string or bytes literal, prefix and quotes included.
fn convert_string(slice: &str, span: Span) -> Result<TokenKind, LexError> {
    let quote = slice.find(['"', '\'']).unwrap_or(0);
    let prefix = &slice[..quote];
    let body = &slice[quote + 1..slice.len() - 1];
    let raw = prefix.contains(['r', 'R']);

    let escape_error = |err: EscapeError| {
        let kind = match err {
            EscapeError::NonAsciiBytes { found } => LexErrorKind::NonAsciiBytes { found },
            other => LexErrorKind::InvalidEscape(other),
        };
        LexError::new(kind, span)
    };

    if prefix.contains(['b', 'B']) {
        let bytes = unescape_bytes(body, raw).map_err(escape_error)?;
        return Ok(TokenKind::Bytes(bytes));
    }
    let text = if raw {
        body.to_string()
    } else {
        unescape_str(body).map_err(escape_error)?
    };
    Ok(TokenKind::Str(text))
}

/// Static text for an operator slice matched by one of the fixed patterns.
fn static_text(op: &str) -> &'static str {
    const OPERATORS: &[&str] = &[
        "+", "-", "*", "/", "**", "//", "%", "@", "<<", ">>", "&", "|", "^", "==", "!=", "<",
        ">", "<=", ">=", "->", ":=", "...",
    ];
    OPERATORS.iter().copied().find(|known| *known == op).unwrap_or("?")
}
