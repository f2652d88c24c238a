//! Grammar rules: statements in [`stmt`], expressions in [`expr`].

mod expr;
mod stmt;

use dragon_ir::{Module, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse a whole module.
    pub(crate) fn parse_module(&mut self) -> Result<Module, ParseError> {
        let mut module = Module::default();
        while !self.cursor.is_at_end() {
            if self.cursor.eat(&TokenKind::Newline) {
                continue;
            }
            if self.cursor.check(&TokenKind::Indent) {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedIndent,
                    self.current_span(),
                ));
            }
            self.parse_line(&mut module.body)?;
        }
        Ok(module)
    }
}
