//! Token cursor for navigating the token stream.

use dragon_ir::{Span, Token, TokenKind, TokenList};

/// Cursor over a lexed token stream.
///
/// Invariant: the stream is non-empty and its last token is `Eof`; the
/// cursor never moves past it.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Get the current token, or `None` for an empty stream.
    #[inline]
    fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).or_else(|| self.tokens.last())
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        static EOF: TokenKind = TokenKind::Eof;
        self.current_token().map_or(&EOF, |t| &t.kind)
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current_token().map_or(Span::DUMMY, |t| t.span)
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_kind(&self) -> &'a TokenKind {
        static EOF: TokenKind = TokenKind::Eof;
        self.tokens.get(self.pos + 1).map_or(&EOF, |t| &t.kind)
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same variant as `kind`.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Advance past the current token (never past `Eof`).
    #[inline]
    pub fn advance(&mut self) -> Span {
        let span = self.current_span();
        if !self.is_at_end() {
            self.pos += 1;
        }
        span
    }

    /// Consume the current token if it matches `kind`.
    #[inline]
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}
