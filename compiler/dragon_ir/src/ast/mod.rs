//! Syntax tree nodes.
//!
//! A [`Module`] owns its statements in source order. [`Stmt`] and [`Expr`]
//! pair a closed `*Kind` enum with the node's [`Span`].

mod constant;
mod expr;
mod operators;
mod stmt;

pub use constant::{format_float, Constant};
pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};

use crate::Span;

/// Trait for types that have a source location.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

/// A parsed source module: its statements in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Module {
    pub body: Vec<Stmt>,
}

impl Module {
    pub fn new(body: Vec<Stmt>) -> Self {
        Module { body }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
