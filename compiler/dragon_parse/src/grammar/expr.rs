//! Expression parsing.
//!
//! One method per precedence level, lowest first. Binary levels are
//! left-associative; `**` is right-associative and binds tighter than a
//! unary operator on its left (`-2 ** 2` is `-(2 ** 2)`). Levels with no
//! node in the tree (`or`, `and`, comparisons, conditional expressions)
//! still parse their operands, then collapse into an opaque node.

use dragon_ir::{BinaryOp, Constant, Expr, ExprKind, Span, TokenKind, UnaryOp};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `"yield" ... | expr ("," expr)* [","]`; more than one element (or a
    /// trailing comma) makes a tuple.
    pub(crate) fn parse_expression_list(&mut self) -> Result<Expr, ParseError> {
        if self.at_keyword("yield") {
            return self.parse_yield();
        }
        let first = self.parse_expression()?;
        self.finish_expression_list(first)
    }

    /// The rest of an expression list whose first element is parsed.
    fn finish_expression_list(&mut self, first: Expr) -> Result<Expr, ParseError> {
        if !self.cursor.check(&TokenKind::Comma) {
            return Ok(first);
        }
        let start = first.span;
        let mut elts = vec![first];
        while self.cursor.eat(&TokenKind::Comma) {
            if !starts_expression(self.current_kind()) {
                break;
            }
            elts.push(self.parse_expression()?);
        }
        let span = start.merge(self.cursor.previous_span());
        Ok(Expr::new(ExprKind::Tuple(elts), span))
    }

    /// `"yield" [exprs] | "yield" "from" expr`
    fn parse_yield(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance();
        if self.eat_keyword("from") {
            self.parse_expression()?;
            return Ok(self.unsupported_since("YieldFrom", start));
        }
        if starts_expression(self.current_kind()) {
            self.parse_expression_list()?;
        }
        Ok(self.unsupported_since("Yield", start))
    }

    /// A single expression: `lambda | or ["if" or "else" expr]`.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        if self.at_keyword("lambda") {
            return self.nested(Self::parse_lambda);
        }
        let body = self.parse_disjunction()?;
        if !self.eat_keyword("if") {
            return Ok(body);
        }
        self.parse_disjunction()?;
        if !self.eat_keyword("else") {
            return Err(ParseError::unexpected(
                self.current_kind(),
                self.current_span(),
                "`else`",
            ));
        }
        self.nested(Self::parse_expression)?;
        Ok(self.unsupported_since("IfExp", body.span))
    }

    /// `"lambda" params ":" expr`; the parameters are skipped.
    fn parse_lambda(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance();
        let mut depth: u32 = 0;
        loop {
            match self.current_kind() {
                TokenKind::Colon if depth == 0 => break,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace if depth > 0 => {
                    depth -= 1;
                }
                TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::Newline
                | TokenKind::Eof => {
                    return Err(ParseError::unexpected(
                        self.current_kind(),
                        self.current_span(),
                        "`:`",
                    ));
                }
                _ => {}
            }
            self.cursor.advance();
        }
        self.cursor.advance();
        self.parse_expression()?;
        Ok(self.unsupported_since("Lambda", start))
    }

    /// An expression that may be a `name := value` binding.
    fn parse_named_expression(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        if matches!(expr.kind, ExprKind::Name(_))
            && matches!(self.current_kind(), TokenKind::Unsupported(":="))
        {
            self.cursor.advance();
            self.nested(Self::parse_expression)?;
            return Ok(self.unsupported_since("NamedExpr", expr.span));
        }
        Ok(expr)
    }

    fn parse_disjunction(&mut self) -> Result<Expr, ParseError> {
        self.parse_bool_op("or", Self::parse_conjunction)
    }

    fn parse_conjunction(&mut self) -> Result<Expr, ParseError> {
        self.parse_bool_op("and", Self::parse_inversion)
    }

    /// `operand (keyword operand)*`; any `and`/`or` makes a `BoolOp`.
    fn parse_bool_op(
        &mut self,
        keyword: &str,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let first = operand(self)?;
        if !self.at_keyword(keyword) {
            return Ok(first);
        }
        while self.eat_keyword(keyword) {
            operand(self)?;
        }
        Ok(self.unsupported_since("BoolOp", first.span))
    }

    /// `"not" not | compare`
    fn parse_inversion(&mut self) -> Result<Expr, ParseError> {
        if !self.cursor.check(&TokenKind::Not) {
            return self.parse_comparison();
        }
        let start = self.cursor.advance();
        let operand = self.nested(Self::parse_inversion)?;
        Ok(unary(UnaryOp::Not, operand, start))
    }

    /// `bitor (CMPOP bitor)*`
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_bit_or()?;
        if !self.eat_compare_op() {
            return Ok(first);
        }
        loop {
            self.parse_bit_or()?;
            if !self.eat_compare_op() {
                break;
            }
        }
        Ok(self.unsupported_since("Compare", first.span))
    }

    /// Consume a comparison operator, including `not in` and `is not`.
    fn eat_compare_op(&mut self) -> bool {
        match self.current_kind() {
            TokenKind::CompareOp(_) | TokenKind::Keyword("in") => {
                self.cursor.advance();
            }
            TokenKind::Not if matches!(self.cursor.peek_kind(), TokenKind::Keyword("in")) => {
                self.cursor.advance();
                self.cursor.advance();
            }
            TokenKind::Keyword("is") => {
                self.cursor.advance();
                self.cursor.eat(&TokenKind::Not);
            }
            _ => return false,
        }
        true
    }

    fn parse_bit_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_bit_xor, |kind| match kind {
            TokenKind::Pipe => Some(BinaryOp::BitOr),
            _ => None,
        })
    }

    fn parse_bit_xor(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_bit_and, |kind| match kind {
            TokenKind::Caret => Some(BinaryOp::BitXor),
            _ => None,
        })
    }

    fn parse_bit_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_shift, |kind| match kind {
            TokenKind::Amp => Some(BinaryOp::BitAnd),
            _ => None,
        })
    }

    fn parse_shift(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_arith, |kind| match kind {
            TokenKind::Shl => Some(BinaryOp::LShift),
            TokenKind::Shr => Some(BinaryOp::RShift),
            _ => None,
        })
    }

    fn parse_arith(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_term, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(Self::parse_factor, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mult),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::DoubleSlash => Some(BinaryOp::FloorDiv),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::At => Some(BinaryOp::MatMult),
            _ => None,
        })
    }

    /// One left-associative binary level.
    fn parse_binary_level(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
        match_op: fn(&TokenKind) -> Option<BinaryOp>,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;
        while let Some(op) = match_op(self.current_kind()) {
            self.cursor.advance();
            let right = operand(self)?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    /// `("+" | "-" | "~") factor | power`
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Plus => UnaryOp::UAdd,
            TokenKind::Minus => UnaryOp::USub,
            TokenKind::Tilde => UnaryOp::Invert,
            _ => return self.parse_power(),
        };
        let start = self.cursor.advance();
        let operand = self.nested(Self::parse_factor)?;
        Ok(unary(op, operand, start))
    }

    /// `["await"] primary ["**" factor]`
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = if self.at_keyword("await") {
            let start = self.cursor.advance();
            self.nested(Self::parse_primary)?;
            self.unsupported_since("Await", start)
        } else {
            self.parse_primary()?
        };
        if !self.cursor.eat(&TokenKind::DoubleStar) {
            return Ok(base);
        }
        let exponent = self.nested(Self::parse_factor)?;
        Ok(binary(base, BinaryOp::Pow, exponent))
    }

    /// `atom ("(" args ")" | "." NAME | "[" ... "]")*`
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_atom()?;
        loop {
            match self.current_kind() {
                TokenKind::LParen => {
                    let open = self.cursor.advance();
                    let args = self.nested(|p| p.parse_call_args(open))?;
                    let span = expr.span.merge(self.cursor.previous_span());
                    expr = Expr::new(
                        ExprKind::Call {
                            func: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let TokenKind::Ident(attr) = self.current_kind() else {
                        return Err(ParseError::unexpected(
                            self.current_kind(),
                            self.current_span(),
                            "attribute name",
                        ));
                    };
                    let end = self.cursor.advance();
                    let span = expr.span.merge(end);
                    expr = Expr::new(
                        ExprKind::Attribute {
                            value: Box::new(expr),
                            attr: attr.clone(),
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    let open = self.cursor.advance();
                    self.skip_bracket_contents();
                    self.expect_closing(&TokenKind::RBracket, "[", open, "`]`")?;
                    expr = self.unsupported_since("Subscript", expr.span);
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Positional call arguments after `(`, through the closing `)`.
    fn parse_call_args(&mut self, open: Span) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        while !self.cursor.check(&TokenKind::RParen) {
            match self.current_kind() {
                TokenKind::Star | TokenKind::DoubleStar => {
                    return Err(ParseError::unsupported(
                        "argument unpacking",
                        self.current_span(),
                    ));
                }
                TokenKind::Newline | TokenKind::Eof => break,
                _ => {}
            }
            let arg = self.parse_named_expression()?;
            if self.cursor.check(&TokenKind::Eq) && matches!(arg.kind, ExprKind::Name(_)) {
                return Err(ParseError::unsupported("keyword argument", arg.span));
            }
            if self.at_keyword("for") {
                self.skip_bracket_contents();
                args.push(self.unsupported_since("GeneratorExp", arg.span));
                break;
            }
            args.push(arg);
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(&TokenKind::RParen, "(", open, "`,` or `)`")?;
        Ok(args)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Ident(name) => ExprKind::Name(name.clone()),
            TokenKind::Int(value) => ExprKind::Constant(Constant::Int(*value)),
            TokenKind::BigInt(digits) => ExprKind::Constant(Constant::BigInt(digits.clone())),
            TokenKind::Float(bits) => ExprKind::Constant(Constant::Float(*bits)),
            TokenKind::True => ExprKind::Constant(Constant::Bool(true)),
            TokenKind::False => ExprKind::Constant(Constant::Bool(false)),
            TokenKind::None => ExprKind::Constant(Constant::None),
            TokenKind::Ellipsis => ExprKind::Constant(Constant::Ellipsis),
            TokenKind::Str(_) | TokenKind::Bytes(_) | TokenKind::FString => {
                return self.parse_strings();
            }
            TokenKind::LParen => return self.nested(Self::parse_parenthesized),
            TokenKind::LBracket => return self.nested(Self::parse_list),
            TokenKind::LBrace => return self.nested(Self::parse_braces),
            other => return Err(ParseError::expected_expression(other, span)),
        };
        self.cursor.advance();
        Ok(Expr::new(kind, span))
    }

    /// Adjacent string literals concatenate into one constant. Any f-string
    /// among them makes the whole run a `JoinedStr`.
    fn parse_strings(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let mut text = String::new();
        let mut bytes = Vec::new();
        let mut has_text = false;
        let mut has_bytes = false;
        let mut formatted = false;
        loop {
            match self.current_kind() {
                TokenKind::Str(part) => {
                    text.push_str(part);
                    has_text = true;
                }
                TokenKind::Bytes(part) => {
                    bytes.extend_from_slice(part);
                    has_bytes = true;
                }
                TokenKind::FString => formatted = true,
                _ => break,
            }
            self.cursor.advance();
        }
        let span = start.merge(self.cursor.previous_span());
        if has_bytes && (has_text || formatted) {
            return Err(ParseError::new(ParseErrorKind::MixedLiterals, span));
        }
        let kind = if formatted {
            ExprKind::Unsupported("JoinedStr")
        } else if has_bytes {
            ExprKind::Constant(Constant::Bytes(bytes))
        } else {
            ExprKind::Constant(Constant::Str(text))
        };
        Ok(Expr::new(kind, span))
    }

    /// `"(" [exprs] ")"`: a parenthesized expression, a tuple, a generator
    /// expression or a parenthesized `yield`.
    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.advance();
        if self.cursor.check(&TokenKind::RParen) {
            let close = self.cursor.advance();
            return Ok(Expr::new(ExprKind::Tuple(Vec::new()), open.merge(close)));
        }
        if self.at_keyword("yield") {
            let inner = self.parse_yield()?;
            self.expect_closing(&TokenKind::RParen, "(", open, "`)`")?;
            return Ok(inner);
        }
        let first = self.parse_named_expression()?;
        if self.at_keyword("for") {
            self.skip_bracket_contents();
            let close = self.expect_closing(&TokenKind::RParen, "(", open, "`)`")?;
            return Ok(Expr::new(
                ExprKind::Unsupported("GeneratorExp"),
                open.merge(close),
            ));
        }
        let inner = self.finish_expression_list(first)?;
        let close = self.expect_closing(&TokenKind::RParen, "(", open, "`)`")?;
        Ok(match inner.kind {
            // A parenthesized tuple's span covers its parentheses.
            ExprKind::Tuple(elts) => Expr::new(ExprKind::Tuple(elts), open.merge(close)),
            _ => inner,
        })
    }

    /// `"[" [exprs] "]"`, or a list comprehension.
    fn parse_list(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.advance();
        let mut elts = Vec::new();
        while starts_expression(self.current_kind()) {
            elts.push(self.parse_named_expression()?);
            if elts.len() == 1 && self.at_keyword("for") {
                self.skip_bracket_contents();
                let close = self.expect_closing(&TokenKind::RBracket, "[", open, "`]`")?;
                return Ok(Expr::new(ExprKind::Unsupported("ListComp"), open.merge(close)));
            }
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        let close = self.expect_closing(&TokenKind::RBracket, "[", open, "`,` or `]`")?;
        Ok(Expr::new(ExprKind::List(elts), open.merge(close)))
    }

    /// `"{" ... "}"`: a dict or set display or comprehension. The contents
    /// are only scanned to tell which.
    fn parse_braces(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.advance();
        let contents = self.skip_bracket_contents();
        let close = self.expect_closing(&TokenKind::RBrace, "{", open, "`}`")?;
        let kind = match contents {
            Skipped { tokens: 0, .. } => "Dict",
            Skipped {
                comprehension: true,
                colon,
                ..
            } => {
                if colon {
                    "DictComp"
                } else {
                    "SetComp"
                }
            }
            Skipped { colon: true, .. } | Skipped { unpacks: true, .. } => "Dict",
            Skipped { .. } => "Set",
        };
        Ok(Expr::new(ExprKind::Unsupported(kind), open.merge(close)))
    }

    /// Skip tokens up to the closing bracket of the current nesting level,
    /// leaving it (or the end of the line) for the caller.
    fn skip_bracket_contents(&mut self) -> Skipped {
        let mut skipped = Skipped {
            unpacks: self.cursor.check(&TokenKind::DoubleStar),
            ..Skipped::default()
        };
        let mut depth: u32 = 0;
        // Colons that end a lambda's parameters are not dict colons.
        let mut lambdas: u32 = 0;
        loop {
            match self.current_kind() {
                TokenKind::Newline | TokenKind::Eof => break,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                TokenKind::Keyword("lambda") if depth == 0 => lambdas += 1,
                TokenKind::Colon if depth == 0 => {
                    if lambdas > 0 {
                        lambdas -= 1;
                    } else {
                        skipped.colon = true;
                    }
                }
                TokenKind::Keyword("for") if depth == 0 => skipped.comprehension = true,
                _ => {}
            }
            skipped.tokens += 1;
            self.cursor.advance();
        }
        skipped
    }

    /// Opaque node for a construct that started at `start` and ends at the
    /// last consumed token.
    fn unsupported_since(&self, kind: &'static str, start: Span) -> Expr {
        Expr::new(
            ExprKind::Unsupported(kind),
            start.merge(self.cursor.previous_span()),
        )
    }
}

/// What a skipped bracket body held at its top level.
#[derive(Clone, Copy, Debug, Default)]
struct Skipped {
    tokens: usize,
    colon: bool,
    comprehension: bool,
    /// Starts with `**`.
    unpacks: bool,
}

/// Whether `kind` can begin an expression.
fn starts_expression(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident(_)
            | TokenKind::Int(_)
            | TokenKind::BigInt(_)
            | TokenKind::Float(_)
            | TokenKind::Str(_)
            | TokenKind::Bytes(_)
            | TokenKind::FString
            | TokenKind::True
            | TokenKind::False
            | TokenKind::None
            | TokenKind::Ellipsis
            | TokenKind::Not
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Tilde
            | TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::LBrace
            | TokenKind::Keyword("lambda" | "await")
    )
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}

fn unary(op: UnaryOp, operand: Expr, start: Span) -> Expr {
    let span = start.merge(operand.span);
    Expr::new(
        ExprKind::UnaryOp {
            op,
            operand: Box::new(operand),
        },
        span,
    )
}
