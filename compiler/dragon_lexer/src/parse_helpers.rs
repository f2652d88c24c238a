//! Numeric Parsing Helpers
//!
//! Literal text arrives with its radix prefix and `_` separators intact.

/// Whether every `_` sits between two digits of the given radix.
fn underscores_well_placed(body: &str, radix: u32) -> bool {
    let chars: Vec<char> = body.chars().collect();
    chars.iter().enumerate().all(|(i, &c)| {
        c != '_'
            || (i > 0
                && i + 1 < chars.len()
                && chars[i - 1].is_digit(radix)
                && chars[i + 1].is_digit(radix))
    })
}

/// Parse an integer body (prefix already stripped) into an `i64`.
///
/// `None` on overflow or misplaced underscores.
pub(crate) fn parse_int(body: &str, radix: u32, prefixed: bool) -> Option<i64> {
    // `0x_ff` is allowed: one separator right after the prefix.
    let body = if prefixed {
        body.strip_prefix('_').unwrap_or(body)
    } else {
        body
    };
    if body.is_empty() || !underscores_well_placed(body, radix) {
        return None;
    }
    let mut result: i64 = 0;
    for c in body.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(radix)?;
        result = result.checked_mul(i64::from(radix))?;
        result = result.checked_add(i64::from(digit))?;
    }
    Some(result)
}

/// Decimal digits of a well-formed integer body of any size.
///
/// Used when [`parse_int`] overflows; `None` on the same malformed input it
/// rejects.
pub(crate) fn to_decimal(body: &str, radix: u32, prefixed: bool) -> Option<String> {
    let body = if prefixed {
        body.strip_prefix('_').unwrap_or(body)
    } else {
        body
    };
    if body.is_empty() || !underscores_well_placed(body, radix) {
        return None;
    }
    // Little-endian base-10 digits; multiply by the radix and add each digit.
    let mut decimal: Vec<u32> = vec![0];
    for c in body.chars().filter(|&c| c != '_') {
        let mut carry = c.to_digit(radix)?;
        for d in &mut decimal {
            let value = *d * radix + carry;
            *d = value % 10;
            carry = value / 10;
        }
        while carry > 0 {
            decimal.push(carry % 10);
            carry /= 10;
        }
    }
    while decimal.len() > 1 && decimal.last() == Some(&0) {
        decimal.pop();
    }
    decimal
        .iter()
        .rev()
        .map(|&d| char::from_digit(d, 10))
        .collect()
}

/// Decimal integers may not have leading zeros, except for zero itself.
pub(crate) fn has_leading_zero(text: &str) -> bool {
    text.len() > 1 && text.starts_with('0') && text.chars().any(|c| c.is_ascii_digit() && c != '0')
}

/// Parse a float literal, only allocating if underscores are present.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    if !text.contains('_') {
        return text.parse().ok();
    }
    if !underscores_well_placed(text, 10) {
        return None;
    }
    text.replace('_', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_decimal() {
        assert_eq!(parse_int("123", 10, false), Some(123));
        assert_eq!(parse_int("1_000_000", 10, false), Some(1_000_000));
        assert_eq!(parse_int("9223372036854775807", 10, false), Some(i64::MAX));
        assert_eq!(parse_int("9223372036854775808", 10, false), None);
    }

    #[test]
    fn test_parse_int_radix() {
        assert_eq!(parse_int("ff", 16, true), Some(255));
        assert_eq!(parse_int("_ff", 16, true), Some(255));
        assert_eq!(parse_int("17", 8, true), Some(15));
        assert_eq!(parse_int("1010", 2, true), Some(10));
    }

    #[test]
    fn test_to_decimal_beyond_i64() {
        assert_eq!(
            to_decimal("99999999999999999999", 10, false).as_deref(),
            Some("99999999999999999999")
        );
        assert_eq!(
            to_decimal("1_0000_0000_0000_0000", 16, true).as_deref(),
            Some("18446744073709551616")
        );
        assert_eq!(to_decimal("_ff", 16, true).as_deref(), Some("255"));
        assert_eq!(to_decimal("0", 2, true).as_deref(), Some("0"));
        assert_eq!(to_decimal("1__0", 10, false), None);
    }

    #[test]
    fn test_misplaced_underscores() {
        assert_eq!(parse_int("1__0", 10, false), None);
        assert_eq!(parse_int("10_", 10, false), None);
        assert_eq!(parse_int("_", 16, true), None);
        assert_eq!(parse_float("1_.5"), None);
    }

    #[test]
    fn test_leading_zero() {
        assert!(has_leading_zero("007"));
        assert!(!has_leading_zero("0"));
        assert!(!has_leading_zero("000"));
        assert!(!has_leading_zero("10"));
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "exact literal values")]
    fn test_parse_float() {
        assert_eq!(parse_float("1.5"), Some(1.5));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("1."), Some(1.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("1_000.25"), Some(1000.25));
    }
}
