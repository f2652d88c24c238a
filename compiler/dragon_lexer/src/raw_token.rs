//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before literal
//! decoding and final token conversion.

use logos::Logos;

/// Raw token from logos. Literal variants carry no payload; their text is
/// decoded in `convert` so that failures can be reported with a precise error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\x0c]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    Comment,

    #[token("\n")]
    Newline,

    #[regex(r"\\[ \t]*\r?\n")]
    LineContinuation,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("**")]
    DoubleStar,
    #[token("//")]
    DoubleSlash,
    #[token("%")]
    Percent,
    #[token("@")]
    At,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,

    #[regex(r"(\+|-|\*\*|\*|//|/|%|@|<<|>>|&|\||\^)=")]
    AugAssign,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,

    #[token("==")]
    #[token("!=")]
    #[token("<")]
    #[token(">")]
    #[token("<=")]
    #[token(">=")]
    CompareOp,

    #[token("...")]
    Ellipsis,

    // Valid Python with no place in the grammar.
    #[token("->")]
    #[token(":=")]
    OtherOperator,

    #[regex(r"0[xX][0-9a-fA-F_]+")]
    HexInt,
    #[regex(r"0[oO][0-7_]+")]
    OctInt,
    #[regex(r"0[bB][01_]+")]
    BinInt,
    #[regex(r"[0-9][0-9_]*")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9_]+")]
    Float,

    // String and bytes literals, with optional `r`/`b` prefixes. Literals
    // may not span lines.
    #[regex(r#"([rR]|[bB]|[rR][bB]|[bB][rR])?"([^"\\\n]|\\.)*""#)]
    #[regex(r#"([rR]|[bB]|[rR][bB]|[bB][rR])?'([^'\\\n]|\\.)*'"#)]
    Str,

    #[regex(r#"([rR]|[bB]|[rR][bB]|[bB][rR])?"([^"\\\n]|\\.)*"#)]
    #[regex(r#"([rR]|[bB]|[rR][bB]|[bB][rR])?'([^'\\\n]|\\.)*"#)]
    UnterminatedStr,

    #[regex(r#"([fF]|[fF][rR]|[rR][fF])"([^"\\\n]|\\.)*""#)]
    #[regex(r#"([fF]|[fF][rR]|[rR][fF])'([^'\\\n]|\\.)*'"#)]
    FString,

    #[regex(r"[\p{XID_Start}_]\p{XID_Continue}*")]
    Ident,
}
