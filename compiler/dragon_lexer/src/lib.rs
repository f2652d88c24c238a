//! Lexer for Dragonsnake using logos.
//!
//! Produces a [`TokenList`] of logical lines: newlines inside brackets and
//! after a backslash are dropped, blank and comment-only lines produce
//! nothing, and every logical line ends with one [`TokenKind::Newline`]. The
//! list always ends with [`TokenKind::Eof`].
//!
//! Leading whitespace is tracked the way Python's tokenizer does it: a
//! logical line indented deeper than the enclosing block yields
//! [`TokenKind::Indent`], and each block it closes yields one
//! [`TokenKind::Dedent`]. Tabs advance to the next multiple of eight
//! columns. Whether an indent is allowed is the parser's call.

mod convert;
mod escape;
mod keywords;
mod lex_error;
mod parse_helpers;
mod raw_token;

use logos::Logos;

use dragon_ir::{Span, Token, TokenKind, TokenList};

pub use escape::EscapeError;
pub use lex_error::{LexError, LexErrorKind};

use convert::convert_token;
use raw_token::RawToken;

/// Lex source code into a [`TokenList`].
///
/// Stops at the first error.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::new(LexErrorKind::SourceTooLarge, Span::DUMMY));
    }

    let mut logos = RawToken::lexer(source);
    let mut result = TokenList::with_capacity(source.len() / 2 + 1);
    // Open `(`, `[` and `{` count; newlines inside them are insignificant.
    let mut depth: u32 = 0;
    // Byte offset where the current physical line starts, while no token of
    // the current logical line has been seen yet.
    let mut line_start: Option<usize> = Some(0);
    // Column widths of the open blocks; never empty.
    let mut indents: Vec<u32> = vec![0];

    while let Some(raw) = logos.next() {
        let range = logos.span();
        let slice = logos.slice();
        let span = span_of(range.clone());

        let Ok(raw) = raw else {
            return Err(invalid_character(slice, span));
        };

        match raw {
            RawToken::Comment | RawToken::LineContinuation => continue,
            RawToken::Newline => {
                if depth == 0 {
                    if line_start.is_none() {
                        result.push(Token::new(TokenKind::Newline, span));
                    }
                    line_start = Some(range.end);
                }
                continue;
            }
            _ => {}
        }

        if let Some(start) = line_start.take() {
            let width = indent_width(&source[start..range.start]);
            let whitespace = span_of(start..range.start);
            if width > current_indent(&indents) {
                indents.push(width);
                result.push(Token::new(TokenKind::Indent, whitespace));
            }
            while width < current_indent(&indents) {
                indents.pop();
                result.push(Token::new(TokenKind::Dedent, span_of(range.start..range.start)));
            }
            if width != current_indent(&indents) {
                return Err(LexError::new(LexErrorKind::InconsistentDedent, whitespace));
            }
        }

        match raw {
            RawToken::LParen | RawToken::LBracket | RawToken::LBrace => depth += 1,
            RawToken::RParen | RawToken::RBracket | RawToken::RBrace => {
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }

        let kind = convert_token(raw, slice, span)?;
        tracing::trace!(?kind, %span, "token");
        result.push(Token::new(kind, span));
    }

    let end = span_of(source.len()..source.len());
    if line_start.is_none() {
        result.push(Token::new(TokenKind::Newline, end));
    }
    for _ in 1..indents.len() {
        result.push(Token::new(TokenKind::Dedent, end));
    }
    result.push(Token::new(TokenKind::Eof, end));
    tracing::debug!(tokens = result.len(), "lexed");
    Ok(result)
}

fn current_indent(indents: &[u32]) -> u32 {
    indents.last().copied().unwrap_or(0)
}

/// Column width of a line's leading whitespace. A form feed resets the
/// count.
fn indent_width(whitespace: &str) -> u32 {
    whitespace.chars().fold(0, |col, c| match c {
        ' ' => col + 1,
        '\t' => (col / 8 + 1) * 8,
        '\x0c' => 0,
        _ => col,
    })
}

/// Span for a byte range. The source length was checked against `u32::MAX`
/// on entry, so the conversion cannot fail.
fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::DUMMY)
}

/// Error for text no token matches.
fn invalid_character(slice: &str, span: Span) -> LexError {
    let found = slice.chars().next().unwrap_or('\0');
    let kind = if matches!(found, '"' | '\'') {
        LexErrorKind::UnterminatedString
    } else {
        LexErrorKind::InvalidCharacter { found }
    };
    LexError::new(kind, span)
}
