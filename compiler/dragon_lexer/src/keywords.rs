//! Keyword resolution.
//!
//! Identifiers are lexed by one regex and then checked against the Python
//! keyword table. `True`, `False`, `None`, `pass` and `not` get their own
//! token kinds; every other hard keyword becomes [`TokenKind::Keyword`].
//! Soft keywords (`match`, `case`, `type`, `_`) stay identifiers.

use dragon_ir::TokenKind;

/// Look up a reserved keyword by text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "True" => TokenKind::True,
        "False" => TokenKind::False,
        "None" => TokenKind::None,
        "pass" => TokenKind::Pass,
        "not" => TokenKind::Not,
        _ => TokenKind::Keyword(reserved(text)?),
    };
    Some(kind)
}

/// Static text of a reserved keyword.
fn reserved(text: &str) -> Option<&'static str> {
    const RESERVED: &[&str] = &[
        "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
        "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in",
        "is", "lambda", "nonlocal", "or", "raise", "return", "try", "while", "with", "yield",
    ];
    RESERVED.iter().copied().find(|kw| *kw == text)
}
