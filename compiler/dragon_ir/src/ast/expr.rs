//! Expression Types

use std::fmt;

use super::{BinaryOp, Constant, Spanned, UnaryOp};
use crate::Span;

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// `left op right`
    BinOp {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },

    /// `op operand`
    UnaryOp { op: UnaryOp, operand: Box<Expr> },

    /// `func(args...)`
    Call { func: Box<Expr>, args: Vec<Expr> },

    /// Literal value.
    Constant(Constant),

    /// Bare identifier.
    Name(String),

    /// `value.attr`
    Attribute { value: Box<Expr>, attr: String },

    /// `[elts...]`
    List(Vec<Expr>),

    /// `(elts...)` or `a, b`
    Tuple(Vec<Expr>),

    /// An expression outside the subset (`Compare`, `Dict`, `Subscript`,
    /// ...), kept only as its AST class name.
    Unsupported(&'static str),
}

impl ExprKind {
    /// Returns the AST class name of this variant (e.g. `"BinOp"`).
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ExprKind::BinOp { .. } => "BinOp",
            ExprKind::UnaryOp { .. } => "UnaryOp",
            ExprKind::Call { .. } => "Call",
            ExprKind::Constant(_) => "Constant",
            ExprKind::Name(_) => "Name",
            ExprKind::Attribute { .. } => "Attribute",
            ExprKind::List(_) => "List",
            ExprKind::Tuple(_) => "Tuple",
            ExprKind::Unsupported(kind) => kind,
        }
    }
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Returns the AST class name of this expression.
    pub const fn kind_name(&self) -> &'static str {
        self.kind.kind_name()
    }

    /// The identifier text, if this is a bare name.
    pub fn as_name(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Name(name) => Some(name),
            _ => None,
        }
    }

    // Builders for trees constructed in code. All use `Span::DUMMY`.

    pub fn name(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Name(name.into()), Span::DUMMY)
    }

    pub fn constant(value: Constant) -> Self {
        Self::new(ExprKind::Constant(value), Span::DUMMY)
    }

    pub fn int(value: i64) -> Self {
        Self::constant(Constant::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Self::constant(Constant::float(value))
    }

    pub fn bool(value: bool) -> Self {
        Self::constant(Constant::Bool(value))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::constant(Constant::str(value))
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Self::new(
            ExprKind::BinOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            Span::DUMMY,
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::new(
            ExprKind::UnaryOp {
                op,
                operand: Box::new(operand),
            },
            Span::DUMMY,
        )
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Self::new(
            ExprKind::Call {
                func: Box::new(func),
                args,
            },
            Span::DUMMY,
        )
    }

    pub fn attribute(value: Expr, attr: impl Into<String>) -> Self {
        Self::new(
            ExprKind::Attribute {
                value: Box::new(value),
                attr: attr.into(),
            },
            Span::DUMMY,
        )
    }

    pub fn list(elts: Vec<Expr>) -> Self {
        Self::new(ExprKind::List(elts), Span::DUMMY)
    }

    pub fn tuple(elts: Vec<Expr>) -> Self {
        Self::new(ExprKind::Tuple(elts), Span::DUMMY)
    }

    pub fn unsupported(kind: &'static str) -> Self {
        Self::new(ExprKind::Unsupported(kind), Span::DUMMY)
    }

    /// Replace the span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}
