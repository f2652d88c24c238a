//! Escape Sequence Processing
//!
//! Python's escape table: the single-character escapes `\n \r \t \a \b \f
//! \v \\ \' \"`, octal `\o` to `\ooo`, and `\xhh`. String literals also
//! take `\uxxxx` and `\Uxxxxxxxx`. Unknown escapes keep their backslash
//! (`\q` stays `\q`). `\N{...}` needs the Unicode name table and is
//! rejected.

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

/// An escape sequence that cannot be decoded.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum EscapeError {
    #[error("truncated `\\{escape}` escape: expected {digits} hex digits")]
    Truncated { escape: char, digits: usize },
    #[error("`\\{escape}` escape value {value:#x} is not a valid character")]
    InvalidCodePoint { escape: char, value: u32 },
    #[error("`\\N{{...}}` named escapes are not supported")]
    NamedUnicode,
    #[error("octal escape value {value:#o} does not fit in a byte")]
    ByteOutOfRange { value: u32 },
    #[error("bytes can only contain ASCII literal characters, found {found:?}")]
    NonAsciiBytes { found: char },
}

/// Resolve a single escape character to its replacement.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'a' => Some('\u{7}'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Process string escape sequences.
pub(crate) fn unescape_str(s: &str) -> Result<String, EscapeError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let Some(esc) = chars.next() else {
            result.push('\\');
            break;
        };
        if let Some(resolved) = resolve_escape(esc) {
            result.push(resolved);
            continue;
        }
        let value = match esc {
            '0'..='7' => octal(esc, &mut chars),
            'x' => hex(&mut chars, 'x', 2)?,
            'u' => hex(&mut chars, 'u', 4)?,
            'U' => hex(&mut chars, 'U', 8)?,
            'N' => return Err(EscapeError::NamedUnicode),
            _ => {
                result.push('\\');
                result.push(esc);
                continue;
            }
        };
        let decoded =
            char::from_u32(value).ok_or(EscapeError::InvalidCodePoint { escape: esc, value })?;
        result.push(decoded);
    }

    Ok(result)
}

/// Decode the body of a bytes literal.
pub(crate) fn unescape_bytes(s: &str, raw: bool) -> Result<Vec<u8>, EscapeError> {
    if let Some(found) = s.chars().find(|c| !c.is_ascii()) {
        return Err(EscapeError::NonAsciiBytes { found });
    }
    if raw {
        return Ok(s.as_bytes().to_vec());
    }

    let mut result = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            push_ascii(&mut result, c);
            continue;
        }
        let Some(esc) = chars.next() else {
            result.push(b'\\');
            break;
        };
        if let Some(resolved) = resolve_escape(esc) {
            push_ascii(&mut result, resolved);
            continue;
        }
        let value = match esc {
            '0'..='7' => octal(esc, &mut chars),
            'x' => hex(&mut chars, 'x', 2)?,
            // `\u`, `\U` and `\N` are not escapes in bytes.
            _ => {
                result.push(b'\\');
                push_ascii(&mut result, esc);
                continue;
            }
        };
        let byte = u8::try_from(value).map_err(|_| EscapeError::ByteOutOfRange { value })?;
        result.push(byte);
    }
    Ok(result)
}

/// Push a character known to be ASCII.
fn push_ascii(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

/// Up to three octal digits, the first already consumed.
fn octal(first: char, chars: &mut Peekable<Chars<'_>>) -> u32 {
    let mut value = first.to_digit(8).unwrap_or(0);
    for _ in 0..2 {
        match chars.next_if(|c| c.is_digit(8)) {
            Some(digit) => value = value * 8 + digit.to_digit(8).unwrap_or(0),
            None => break,
        }
    }
    value
}

/// Exactly `digits` hex digits.
fn hex(chars: &mut Peekable<Chars<'_>>, escape: char, digits: usize) -> Result<u32, EscapeError> {
    let mut value: u32 = 0;
    for _ in 0..digits {
        let digit = chars
            .next_if(char::is_ascii_hexdigit)
            .and_then(|c| c.to_digit(16))
            .ok_or(EscapeError::Truncated { escape, digits })?;
        // Saturates past `u32::MAX`; such values are not code points.
        value = value.saturating_mul(16).saturating_add(digit);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use super::*;

    #[test]
    fn test_resolve_escape() {
        assert_eq!(resolve_escape('n'), Some('\n'));
        assert_eq!(resolve_escape('\''), Some('\''));
        assert_eq!(resolve_escape('v'), Some('\u{b}'));
        assert_eq!(resolve_escape('0'), None);
        assert_eq!(resolve_escape('q'), None);
        assert_eq!(resolve_escape('x'), None);
    }

    #[test]
    fn test_unescape_str() {
        assert_eq!(unescape_str("hello world").unwrap(), "hello world");
        assert_eq!(unescape_str(r"line\nbreak").unwrap(), "line\nbreak");
        assert_eq!(unescape_str(r#"say \"hi\""#).unwrap(), "say \"hi\"");
        assert_eq!(unescape_str(r"it\'s").unwrap(), "it's");
        assert_eq!(unescape_str(r"back\\slash").unwrap(), "back\\slash");
        assert_eq!(unescape_str(r"\a\b\f\v").unwrap(), "\u{7}\u{8}\u{c}\u{b}");
    }

    #[test]
    fn test_octal_escapes_take_up_to_three_digits() {
        assert_eq!(unescape_str(r"\012").unwrap(), "\n");
        assert_eq!(unescape_str(r"\0").unwrap(), "\0");
        assert_eq!(unescape_str(r"\08").unwrap(), "\08");
        assert_eq!(unescape_str(r"\1011").unwrap(), "A1");
        assert_eq!(unescape_str(r"\777").unwrap(), "\u{1ff}");
    }

    #[test]
    fn test_hex_and_unicode_escapes() {
        assert_eq!(unescape_str(r"\x41").unwrap(), "A");
        assert_eq!(unescape_str(r"\012\x41").unwrap(), "\nA");
        assert_eq!(unescape_str(r"\u00e9").unwrap(), "é");
        assert_eq!(unescape_str(r"\U0001F600").unwrap(), "\u{1F600}");
    }

    #[test]
    fn test_bad_escapes_are_errors() {
        assert_eq!(
            unescape_str(r"\x4"),
            Err(EscapeError::Truncated {
                escape: 'x',
                digits: 2
            })
        );
        assert_eq!(
            unescape_str(r"\u12g4"),
            Err(EscapeError::Truncated {
                escape: 'u',
                digits: 4
            })
        );
        assert_eq!(
            unescape_str(r"\ud800"),
            Err(EscapeError::InvalidCodePoint {
                escape: 'u',
                value: 0xd800
            })
        );
        assert_eq!(
            unescape_str(r"\U00110000"),
            Err(EscapeError::InvalidCodePoint {
                escape: 'U',
                value: 0x11_0000
            })
        );
        assert_eq!(unescape_str(r"\N{DASH}"), Err(EscapeError::NamedUnicode));
    }

    #[test]
    fn test_unknown_escape_keeps_backslash() {
        assert_eq!(unescape_str(r"\q").unwrap(), "\\q");
        assert_eq!(unescape_str(r"a\d+").unwrap(), "a\\d+");
    }

    #[test]
    fn test_unescape_bytes() {
        assert_eq!(unescape_bytes(r"ab\n", false), Ok(b"ab\n".to_vec()));
        assert_eq!(unescape_bytes(r"ab\n", true), Ok(b"ab\\n".to_vec()));
        assert_eq!(unescape_bytes(r"\x00\377\012", false), Ok(vec![0, 0xff, b'\n']));
        assert_eq!(unescape_bytes(r"\u0041", false), Ok(b"\\u0041".to_vec()));
        assert_eq!(
            unescape_bytes(r"\400", false),
            Err(EscapeError::ByteOutOfRange { value: 0o400 })
        );
        assert_eq!(
            unescape_bytes("é", false),
            Err(EscapeError::NonAsciiBytes { found: 'é' })
        );
    }
}
