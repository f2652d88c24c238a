//! Binary and Unary Operators
//!
//! Operator names follow the source language's AST class names (`Mult`,
//! `FloorDiv`, `USub`, ...) so diagnostics and dumps read the same as the
//! source language's own tooling.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mult,
    Div,
    Pow,
    FloorDiv,
    Mod,
    MatMult,

    // Bitwise
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
}

impl BinaryOp {
    /// All binary operators, in declaration order.
    pub const ALL: [BinaryOp; 13] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mult,
        BinaryOp::Div,
        BinaryOp::Pow,
        BinaryOp::FloorDiv,
        BinaryOp::Mod,
        BinaryOp::MatMult,
        BinaryOp::LShift,
        BinaryOp::RShift,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
        BinaryOp::BitAnd,
    ];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mult => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::MatMult => "@",
            Self::LShift => "<<",
            Self::RShift => ">>",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
        }
    }

    /// Returns the AST class name of this operator (e.g. `"FloorDiv"`).
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mult => "Mult",
            Self::Div => "Div",
            Self::Pow => "Pow",
            Self::FloorDiv => "FloorDiv",
            Self::Mod => "Mod",
            Self::MatMult => "MatMult",
            Self::LShift => "LShift",
            Self::RShift => "RShift",
            Self::BitOr => "BitOr",
            Self::BitXor => "BitXor",
            Self::BitAnd => "BitAnd",
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// - 1: `|`
    /// - 2: `^`
    /// - 3: `&`
    /// - 4: `<<` `>>`
    /// - 5: `+` `-`
    /// - 6: `*` `/` `//` `%` `@`
    /// - 8: `**` (unary operators sit at 7)
    pub const fn precedence(self) -> u8 {
        match self {
            Self::BitOr => 1,
            Self::BitXor => 2,
            Self::BitAnd => 3,
            Self::LShift | Self::RShift => 4,
            Self::Add | Self::Sub => 5,
            Self::Mult | Self::Div | Self::FloorDiv | Self::Mod | Self::MatMult => 6,
            Self::Pow => 8,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `+x`
    UAdd,
    /// `-x`
    USub,
    /// `not x`
    Not,
    /// `~x`
    Invert,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::UAdd => "+",
            Self::USub => "-",
            Self::Not => "not",
            Self::Invert => "~",
        }
    }

    /// Returns the AST class name of this operator.
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::UAdd => "UAdd",
            Self::USub => "USub",
            Self::Not => "Not",
            Self::Invert => "Invert",
        }
    }
}
