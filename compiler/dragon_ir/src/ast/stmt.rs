//! Statement Types

use std::fmt;

use super::{BinaryOp, Expr, Spanned};
use crate::Span;

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `target: annotation = value`, or a bare `target: annotation`
    /// declaration when `value` is `None`.
    AnnAssign {
        target: Expr,
        annotation: Expr,
        value: Option<Expr>,
    },

    /// Expression evaluated for its side effect.
    Expr(Expr),

    /// `t1 = t2 = value`
    Assign { targets: Vec<Expr>, value: Expr },

    /// `target op= value`
    AugAssign {
        target: Expr,
        op: BinaryOp,
        value: Expr,
    },

    /// `pass`
    Pass,

    /// A statement outside the subset (`FunctionDef`, `If`, `Return`, ...),
    /// kept only as its AST class name. Compound statements span their
    /// whole body.
    Unsupported(&'static str),
}

impl StmtKind {
    /// Returns the AST class name of this variant (e.g. `"AnnAssign"`).
    pub const fn kind_name(&self) -> &'static str {
        match self {
            StmtKind::AnnAssign { .. } => "AnnAssign",
            StmtKind::Expr(_) => "Expr",
            StmtKind::Assign { .. } => "Assign",
            StmtKind::AugAssign { .. } => "AugAssign",
            StmtKind::Pass => "Pass",
            StmtKind::Unsupported(kind) => kind,
        }
    }
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// Returns the AST class name of this statement.
    pub const fn kind_name(&self) -> &'static str {
        self.kind.kind_name()
    }

    /// `target: annotation = value` with a dummy span.
    pub fn ann_assign(target: Expr, annotation: Expr, value: Expr) -> Self {
        Self::new(
            StmtKind::AnnAssign {
                target,
                annotation,
                value: Some(value),
            },
            Span::DUMMY,
        )
    }

    /// `target: annotation` with no value and a dummy span.
    pub fn declare(target: Expr, annotation: Expr) -> Self {
        Self::new(
            StmtKind::AnnAssign {
                target,
                annotation,
                value: None,
            },
            Span::DUMMY,
        )
    }

    /// Expression statement with a dummy span.
    pub fn expr(expr: Expr) -> Self {
        Self::new(StmtKind::Expr(expr), Span::DUMMY)
    }

    /// Plain assignment with a dummy span.
    pub fn assign(targets: Vec<Expr>, value: Expr) -> Self {
        Self::new(StmtKind::Assign { targets, value }, Span::DUMMY)
    }

    /// `pass` with a dummy span.
    pub fn pass() -> Self {
        Self::new(StmtKind::Pass, Span::DUMMY)
    }

    /// Out-of-subset statement with a dummy span.
    pub fn unsupported(kind: &'static str) -> Self {
        Self::new(StmtKind::Unsupported(kind), Span::DUMMY)
    }

    /// Replace the span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}
