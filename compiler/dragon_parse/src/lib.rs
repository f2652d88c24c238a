//! Parser for the Dragonsnake Python subset.
//!
//! Recursive descent over the token stream from `dragon_lexer`, producing a
//! [`Module`]. The first error stops parsing.
//!
//! Grammar (one logical line per `NEWLINE`):
//!
//! ```text
//! module      = (compound | line)* EOF
//! compound    = decorator* header NEWLINE [INDENT ... DEDENT] clause*
//! line        = simple (";" simple)* [";"] NEWLINE
//! simple      = "pass"
//!             | KEYWORD ...                       return, import, del, ...
//!             | exprs ":" expr ["=" exprs]        annotated assignment
//!             | exprs ("=" exprs)+                assignment
//!             | exprs AUGOP exprs                 augmented assignment
//!             | exprs                             expression statement
//! exprs       = "yield" ... | expr ("," expr)* [","]
//! expr        = "lambda" ... ":" expr | or ["if" or "else" expr]
//! or          = and ("or" and)*
//! and         = not ("and" not)*
//! not         = "not" not | compare
//! compare     = bitor (CMPOP bitor)*
//! bitor       = bitxor ("|" bitxor)*
//! bitxor      = bitand ("^" bitand)*
//! bitand      = shift ("&" shift)*
//! shift       = arith (("<<" | ">>") arith)*
//! arith       = term (("+" | "-") term)*
//! term        = factor (("*" | "/" | "//" | "%" | "@") factor)*
//! factor      = ("+" | "-" | "~") factor | power
//! power       = ["await"] primary ["**" factor]
//! primary     = atom ("(" args ")" | "." NAME | "[" ... "]")*
//! atom        = NAME | NUMBER | STRING+ | "True" | "False" | "None" | "..."
//!             | "(" [exprs] ")" | "[" [exprs] "]" | "{" ... "}"
//! ```
//!
//! Constructs outside the subset are parsed only far enough to find their
//! extent and become [`StmtKind::Unsupported`](dragon_ir::StmtKind) or
//! [`ExprKind::Unsupported`](dragon_ir::ExprKind) nodes named after their
//! Python AST class. Compound statement headers and bodies, keyword
//! statement operands and bracketed displays they own (`{...}`,
//! subscripts, comprehensions) are skipped token by token, not checked.

mod cursor;
mod error;
mod grammar;

use dragon_ir::{Module, Span, TokenKind, TokenList};

pub use error::{ParseError, ParseErrorKind};

use cursor::Cursor;

/// Maximum expression nesting (parentheses, brackets, unary chains, calls).
const MAX_NESTING: u32 = 100;

/// Lex and parse source text.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> Result<Module, ParseError> {
    let tokens = dragon_lexer::lex(source)?;
    parse_tokens(&tokens)
}

/// Parse an already lexed token stream.
pub fn parse_tokens(tokens: &TokenList) -> Result<Module, ParseError> {
    let module = Parser::new(tokens).parse_module()?;
    tracing::debug!(statements = module.len(), "parsed module");
    Ok(module)
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    nesting: u32,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            nesting: 0,
        }
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    /// Whether the current token is the reserved word `keyword`.
    #[inline]
    pub(crate) fn at_keyword(&self, keyword: &str) -> bool {
        matches!(self.current_kind(), TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Consume the reserved word `keyword` if it is next.
    pub(crate) fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.at_keyword(keyword) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Expect the delimiter closing one opened at `opened_at`.
    ///
    /// Reaching the end of the line first reports the delimiter as unclosed.
    pub(crate) fn expect_closing(
        &mut self,
        close: &TokenKind,
        open: &'static str,
        opened_at: Span,
        expected: &'static str,
    ) -> Result<Span, ParseError> {
        if self.cursor.check(close) {
            return Ok(self.cursor.advance());
        }
        if matches!(self.current_kind(), TokenKind::Newline | TokenKind::Eof) {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedDelimiter { open, opened_at },
                self.current_span(),
            ));
        }
        Err(ParseError::unexpected(
            self.current_kind(),
            self.current_span(),
            expected,
        ))
    }

    /// Run `f` one nesting level deeper, failing past [`MAX_NESTING`].
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.nesting >= MAX_NESTING {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep,
                self.current_span(),
            ));
        }
        self.nesting += 1;
        let result = f(self);
        self.nesting -= 1;
        result
    }
}

#[cfg(test)]
mod tests;
