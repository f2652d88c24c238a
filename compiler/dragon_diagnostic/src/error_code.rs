//! Error codes for all transpiler diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase.

use std::fmt;

/// Error codes for all transpiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E5xxx: Code generation errors
/// - E8xxx: Driver errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Invalid number literal
    E0003,
    /// Dedent to a level no enclosing block uses
    E0004,
    /// Invalid escape sequence
    E0005,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Unsupported syntax (keyword arguments, argument unpacking)
    E1004,
    /// Unexpected indent, or a missing indented block
    E1005,

    // Codegen Errors (E5xxx)
    /// Unsupported feature (no generation rule for a node)
    E5001,
    /// Malformed construct (node in a position that requires another shape)
    E5002,

    // Driver Errors (E8xxx)
    /// Input or output file could not be read or written
    E8001,
    /// Unknown output format
    E8002,
    /// Invalid command line
    E8003,

    // Internal Errors (E9xxx)
    /// Internal error
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()`, which is exhaustive.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E5001,
        ErrorCode::E5002,
        ErrorCode::E8001,
        ErrorCode::E8002,
        ErrorCode::E8003,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E5001 => "E5001",
            ErrorCode::E5002 => "E5002",
            ErrorCode::E8001 => "E8001",
            ErrorCode::E8002 => "E8002",
            ErrorCode::E8003 => "E8003",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line description, used by `--explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character in source",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0004 => "inconsistent dedent",
            ErrorCode::E0005 => "invalid escape sequence",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "unsupported syntax",
            ErrorCode::E1005 => "indentation error",
            ErrorCode::E5001 => "feature not yet supported by the code generator",
            ErrorCode::E5002 => "malformed construct",
            ErrorCode::E8001 => "file could not be read or written",
            ErrorCode::E8002 => "unknown output format",
            ErrorCode::E8003 => "invalid command line",
            ErrorCode::E9001 => "internal error",
            ErrorCode::E9002 => "too many errors",
        }
    }

    /// Check if this is a lexer error (E0xxx).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a code generation error (E5xxx).
    pub fn is_codegen_error(&self) -> bool {
        self.as_str().starts_with("E5")
    }

    /// Check if this is a driver error (E8xxx).
    pub fn is_driver_error(&self) -> bool {
        self.as_str().starts_with("E8")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
