//! Dragonsnake IR - Syntax Tree Types
//!
//! This crate contains the data structures shared by every phase of the
//! transpiler:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - Syntax tree nodes (`Module`, `Stmt`, `Expr`, operators, constants)
//! - A tree dump in the style of Python's `ast.dump(indent=4)`
//!
//! Every node type derives Clone, Eq, Hash and Debug. Floats are stored as
//! `u64` bits so that constants stay `Eq + Hash`.
//!
//! The tree is a closed set of variants per syntax category. Adding a source
//! construct means adding a variant here; the generators' exhaustive matches
//! then refuse to compile until a rule exists for it.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod dump;
mod span;
mod token;

pub use ast::{
    format_float, BinaryOp, Constant, Expr, ExprKind, Module, Spanned, Stmt, StmtKind, UnaryOp,
};
pub use dump::dump;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
