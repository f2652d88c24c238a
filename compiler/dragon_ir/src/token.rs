//! Token types produced by the lexer.

use std::fmt;

use crate::Span;

/// Token kinds.
///
/// Literal payloads are already decoded: integers are parsed, string escapes
/// are resolved, float values are stored as `u64` bits.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Int(i64),
    /// An integer literal outside `i64`, as decimal digits.
    BigInt(String),
    Float(u64),
    Str(String),
    Bytes(Vec<u8>),
    /// `f"..."`; the contents are not decoded.
    FString,
    Ident(String),

    // Keywords with a meaning in the supported subset
    True,
    False,
    None,
    Pass,
    Not,
    /// Any other reserved word (`def`, `if`, `while`, ...).
    Keyword(&'static str),

    // Arithmetic and bitwise operators
    Plus,
    Minus,
    Star,
    Slash,
    DoubleStar,
    DoubleSlash,
    Percent,
    At,
    Shl,
    Shr,
    Amp,
    Pipe,
    Caret,
    Tilde,

    /// `+=`, `**=`, ... carrying the symbol without the `=`.
    AugAssign(&'static str),

    /// `==`, `!=`, `<`, `>`, `<=` or `>=`.
    CompareOp(&'static str),

    /// `...`
    Ellipsis,

    /// Python operators with no place in the grammar (`->` outside a
    /// skipped header, `:=`). The lexer accepts them so the parser can
    /// report them as unsupported rather than invalid.
    Unsupported(&'static str),

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Eq,
    Dot,
    Semicolon,

    /// End of a logical line.
    Newline,
    /// The next logical line is indented deeper than the current block.
    Indent,
    /// The current block ends.
    Dedent,
    Eof,
}

impl TokenKind {
    /// Human-readable description used in error messages.
    pub fn display_name(&self) -> String {
        match self {
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::BigInt(digits) => format!("integer `{digits}`"),
            TokenKind::FString => "f-string".to_string(),
            TokenKind::Float(_) => "float literal".to_string(),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::Bytes(_) => "bytes literal".to_string(),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Keyword(kw) => format!("keyword `{kw}`"),
            TokenKind::AugAssign(op) => format!("`{op}=`"),
            TokenKind::Unsupported(text) => format!("`{text}`"),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Indent => "indent".to_string(),
            TokenKind::Dedent => "dedent".to_string(),
            TokenKind::Eof => "end of file".to_string(),
            other => format!("`{}`", other.symbol()),
        }
    }

    /// Fixed source text of punctuation and keyword tokens.
    fn symbol(&self) -> &'static str {
        match self {
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::None => "None",
            TokenKind::Pass => "pass",
            TokenKind::Not => "not",
            TokenKind::Keyword(kw) => *kw,
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::DoubleStar => "**",
            TokenKind::DoubleSlash => "//",
            TokenKind::Percent => "%",
            TokenKind::At => "@",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::AugAssign(op) | TokenKind::CompareOp(op) | TokenKind::Unsupported(op) => {
                *op
            }
            TokenKind::Ellipsis => "...",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Eq => "=",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Int(_)
            | TokenKind::BigInt(_)
            | TokenKind::Float(_)
            | TokenKind::Str(_)
            | TokenKind::Bytes(_)
            | TokenKind::FString
            | TokenKind::Ident(_)
            | TokenKind::Newline
            | TokenKind::Indent
            | TokenKind::Dedent
            | TokenKind::Eof => "",
        }
    }
}

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Lexer output. Always ends with a single [`TokenKind::Eof`] token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Kind of the most recently pushed token.
    #[inline]
    pub fn last_kind(&self) -> Option<&TokenKind> {
        self.tokens.last().map(|t| &t.kind)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
