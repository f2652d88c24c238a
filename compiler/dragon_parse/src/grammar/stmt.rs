//! Statement parsing.

use dragon_ir::{BinaryOp, Constant, Expr, ExprKind, Span, Stmt, StmtKind, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

/// Where an expression is used as an assignment target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TargetContext {
    Assign,
    Annotated,
    Augmented,
}

/// Keywords that may continue each compound statement.
const IF_CLAUSES: &[&str] = &["elif", "else"];
const LOOP_CLAUSES: &[&str] = &["else"];
const TRY_CLAUSES: &[&str] = &["except", "else", "finally"];
const NO_CLAUSES: &[&str] = &[];

impl Parser<'_> {
    /// Parse one logical line (or one whole compound statement) into `body`.
    pub(super) fn parse_line(&mut self, body: &mut Vec<Stmt>) -> Result<(), ParseError> {
        if let Some(stmt) = self.parse_compound_statement()? {
            tracing::trace!(kind = stmt.kind_name(), span = %stmt.span, "compound statement");
            body.push(stmt);
            return Ok(());
        }
        loop {
            let stmt = self.parse_simple_statement()?;
            tracing::trace!(kind = stmt.kind_name(), span = %stmt.span, "statement");
            body.push(stmt);

            if self.cursor.eat(&TokenKind::Semicolon) {
                if self.cursor.eat(&TokenKind::Newline) || self.cursor.is_at_end() {
                    return Ok(());
                }
                continue;
            }
            if self.cursor.eat(&TokenKind::Newline) || self.cursor.is_at_end() {
                return Ok(());
            }
            return Err(ParseError::unexpected(
                self.current_kind(),
                self.current_span(),
                "`;` or end of line",
            ));
        }
    }

    /// A compound statement with all of its clauses, as an opaque node.
    fn parse_compound_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        let start = self.current_span();
        let decorated = self.cursor.check(&TokenKind::At);
        while self.cursor.eat(&TokenKind::At) {
            self.skip_line();
            self.cursor.eat(&TokenKind::Newline);
        }
        let Some((kind, clauses)) = self.compound_kind() else {
            if decorated {
                return Err(ParseError::unexpected(
                    self.current_kind(),
                    self.current_span(),
                    "`def` or `class` after a decorator",
                ));
            }
            return Ok(None);
        };

        let mut end = self.skip_clause()?;
        while clauses.iter().any(|kw| self.at_keyword(kw)) {
            end = self.skip_clause()?;
        }
        Ok(Some(Stmt::unsupported(kind).with_span(start.merge(end))))
    }

    /// AST class of the compound statement starting here, and the keywords
    /// of its continuation clauses.
    fn compound_kind(&self) -> Option<(&'static str, &'static [&'static str])> {
        let TokenKind::Keyword(keyword) = self.current_kind() else {
            return None;
        };
        let found = match *keyword {
            "if" => ("If", IF_CLAUSES),
            "while" => ("While", LOOP_CLAUSES),
            "for" => ("For", LOOP_CLAUSES),
            "try" => ("Try", TRY_CLAUSES),
            "with" => ("With", NO_CLAUSES),
            "def" => ("FunctionDef", NO_CLAUSES),
            "class" => ("ClassDef", NO_CLAUSES),
            "async" => match self.cursor.peek_kind() {
                TokenKind::Keyword("def") => ("AsyncFunctionDef", NO_CLAUSES),
                TokenKind::Keyword("for") => ("AsyncFor", LOOP_CLAUSES),
                TokenKind::Keyword("with") => ("AsyncWith", NO_CLAUSES),
                _ => return None,
            },
            _ => return None,
        };
        Some(found)
    }

    /// Skip one clause: its header through `:`, then its body, either on
    /// the same line or as an indented block. Returns the span of the last
    /// token skipped.
    fn skip_clause(&mut self) -> Result<Span, ParseError> {
        let mut last = self.current_span();
        let mut seen_colon = false;
        let mut ends_with_colon = false;
        while !matches!(self.current_kind(), TokenKind::Newline | TokenKind::Eof) {
            ends_with_colon = self.cursor.check(&TokenKind::Colon);
            seen_colon |= ends_with_colon;
            last = self.cursor.advance();
        }
        if !seen_colon {
            return Err(ParseError::unexpected(
                self.current_kind(),
                self.current_span(),
                "`:`",
            ));
        }
        self.cursor.eat(&TokenKind::Newline);
        if !ends_with_colon {
            return Ok(last);
        }

        if !self.cursor.eat(&TokenKind::Indent) {
            return Err(ParseError::new(
                ParseErrorKind::ExpectedIndentedBlock,
                self.current_span(),
            ));
        }
        let mut depth: u32 = 1;
        while depth > 0 {
            match self.current_kind() {
                TokenKind::Indent => depth += 1,
                TokenKind::Dedent => depth -= 1,
                TokenKind::Eof => break,
                TokenKind::Newline => {}
                _ => last = self.current_span(),
            }
            self.cursor.advance();
        }
        Ok(last)
    }

    /// Skip to the end of the logical line, leaving the `NEWLINE`.
    fn skip_line(&mut self) {
        while !matches!(self.current_kind(), TokenKind::Newline | TokenKind::Eof) {
            self.cursor.advance();
        }
    }

    fn parse_simple_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        match self.current_kind() {
            TokenKind::Pass => {
                let span = self.cursor.advance();
                return Ok(Stmt::pass().with_span(span));
            }
            TokenKind::Keyword(keyword) => {
                if let Some(kind) = keyword_statement(keyword) {
                    let mut end = self.cursor.advance();
                    while !matches!(
                        self.current_kind(),
                        TokenKind::Semicolon | TokenKind::Newline | TokenKind::Eof
                    ) {
                        end = self.cursor.advance();
                    }
                    return Ok(Stmt::unsupported(kind).with_span(start.merge(end)));
                }
            }
            _ => {}
        }

        let first = self.parse_expression_list()?;

        let kind = match self.current_kind() {
            TokenKind::Colon => self.parse_annotated(first)?,
            TokenKind::Eq => self.parse_assign(first)?,
            TokenKind::AugAssign(op) => {
                let op = augmented_op(op, self.current_span())?;
                self.cursor.advance();
                check_target(&first, TargetContext::Augmented)?;
                let value = self.parse_expression_list()?;
                StmtKind::AugAssign {
                    target: first,
                    op,
                    value,
                }
            }
            _ => StmtKind::Expr(first),
        };
        Ok(Stmt::new(kind, start.merge(self.cursor.previous_span())))
    }

    /// `target ":" annotation ["=" value]`, with the cursor at `:`.
    fn parse_annotated(&mut self, target: Expr) -> Result<StmtKind, ParseError> {
        check_target(&target, TargetContext::Annotated)?;
        self.cursor.advance();
        let annotation = self.parse_expression()?;
        let value = if self.cursor.eat(&TokenKind::Eq) {
            Some(self.parse_expression_list()?)
        } else if matches!(
            self.current_kind(),
            TokenKind::Newline | TokenKind::Semicolon | TokenKind::Eof
        ) {
            None
        } else {
            return Err(ParseError::unexpected(
                self.current_kind(),
                self.current_span(),
                "`=`",
            ));
        };
        Ok(StmtKind::AnnAssign {
            target,
            annotation,
            value,
        })
    }

    /// `target ("=" exprs)+`, with the cursor at the first `=`.
    fn parse_assign(&mut self, first: Expr) -> Result<StmtKind, ParseError> {
        check_target(&first, TargetContext::Assign)?;
        let mut targets = vec![first];
        self.cursor.advance();
        let mut value = self.parse_expression_list()?;
        while self.cursor.eat(&TokenKind::Eq) {
            check_target(&value, TargetContext::Assign)?;
            targets.push(value);
            value = self.parse_expression_list()?;
        }
        Ok(StmtKind::Assign { targets, value })
    }
}

/// AST class of a one-line statement introduced by `keyword`.
fn keyword_statement(keyword: &str) -> Option<&'static str> {
    let kind = match keyword {
        "return" => "Return",
        "import" => "Import",
        "from" => "ImportFrom",
        "del" => "Delete",
        "global" => "Global",
        "nonlocal" => "Nonlocal",
        "raise" => "Raise",
        "assert" => "Assert",
        "break" => "Break",
        "continue" => "Continue",
        _ => return None,
    };
    Some(kind)
}

/// Map the symbol of an augmented assignment token to its operator.
fn augmented_op(symbol: &str, span: Span) -> Result<BinaryOp, ParseError> {
    BinaryOp::ALL
        .iter()
        .copied()
        .find(|op| op.as_symbol() == symbol)
        .ok_or_else(|| ParseError::unsupported(format!("`{symbol}=`"), span))
}

/// Check that `expr` may be assigned to in `context`.
fn check_target(expr: &Expr, context: TargetContext) -> Result<(), ParseError> {
    let invalid = |found: &'static str| {
        let kind = match context {
            TargetContext::Assign => ParseErrorKind::InvalidTarget { found },
            TargetContext::Annotated => ParseErrorKind::InvalidAnnotationTarget { found },
            TargetContext::Augmented => ParseErrorKind::InvalidAugmentedTarget { found },
        };
        Err(ParseError::new(kind, expr.span))
    };

    match &expr.kind {
        ExprKind::Name(_) | ExprKind::Attribute { .. } | ExprKind::Unsupported("Subscript") => {
            Ok(())
        }
        ExprKind::Tuple(elts) | ExprKind::List(elts) => {
            let found = if matches!(expr.kind, ExprKind::Tuple(_)) {
                "tuple"
            } else {
                "list"
            };
            match context {
                TargetContext::Assign => elts
                    .iter()
                    .try_for_each(|elt| check_target(elt, TargetContext::Assign)),
                TargetContext::Annotated | TargetContext::Augmented => invalid(found),
            }
        }
        ExprKind::Constant(Constant::Ellipsis) => invalid("ellipsis"),
        ExprKind::Constant(_) => invalid("literal"),
        ExprKind::Call { .. } => invalid("function call"),
        ExprKind::Unsupported(kind) => invalid(unsupported_target(kind)),
        ExprKind::BinOp { .. } | ExprKind::UnaryOp { .. } => invalid("expression"),
    }
}

/// How Python names an opaque expression in a bad-target message.
fn unsupported_target(kind: &str) -> &'static str {
    match kind {
        "Compare" => "comparison",
        "IfExp" => "conditional expression",
        "Lambda" => "lambda",
        "Dict" => "dict literal",
        "Set" => "set display",
        "JoinedStr" => "f-string expression",
        "ListComp" => "list comprehension",
        "DictComp" => "dict comprehension",
        "SetComp" => "set comprehension",
        "GeneratorExp" => "generator expression",
        "Await" => "await expression",
        "Yield" | "YieldFrom" => "yield expression",
        "NamedExpr" => "named expression",
        _ => "expression",
    }
}
