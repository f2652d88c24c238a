//! Literal constants.

/// A literal value.
///
/// Floats are stored as `u64` bits so the type stays `Eq + Hash`; use
/// [`Constant::float`] and [`Constant::as_float`] to convert.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Constant {
    Bool(bool),
    Int(i64),
    /// An integer outside `i64`, as decimal digits.
    BigInt(String),
    Float(u64),
    Str(String),
    /// The `None` singleton.
    None,
    /// A `b"..."` literal.
    Bytes(Vec<u8>),
    /// `...`
    Ellipsis,
}

impl Constant {
    /// Create a float constant.
    pub fn float(value: f64) -> Self {
        Constant::Float(value.to_bits())
    }

    /// Create a string constant.
    pub fn str(value: impl Into<String>) -> Self {
        Constant::Str(value.into())
    }

    /// The float value, if this is a float constant.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Constant::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    /// Name of the literal's kind, as the source language spells its type.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Constant::Bool(_) => "bool",
            Constant::Int(_) | Constant::BigInt(_) => "int",
            Constant::Float(_) => "float",
            Constant::Str(_) => "str",
            Constant::None => "None",
            Constant::Bytes(_) => "bytes",
            Constant::Ellipsis => "ellipsis",
        }
    }
}

/// Format a float the way the source language's `str()` does.
///
/// Shortest round-trip digits; positional notation for decimal exponents in
/// `-4..16` (always with a fractional part, `2.0`), scientific otherwise with
/// a signed two-digit exponent (`1e+20`, `1.5e-05`). Non-finite values print
/// as `inf`, `-inf` and `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e3".
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };
    let sign = if mantissa.starts_with('-') { "-" } else { "" };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    if (-4..16).contains(&exponent) {
        let point = exponent + 1;
        if point <= 0 {
            let zeros = "0".repeat(point.unsigned_abs() as usize);
            format!("{sign}0.{zeros}{digits}")
        } else {
            let point = point.unsigned_abs() as usize;
            if digits.len() <= point {
                let zeros = "0".repeat(point - digits.len());
                format!("{sign}{digits}{zeros}.0")
            } else {
                format!("{sign}{}.{}", &digits[..point], &digits[point..])
            }
        }
    } else {
        let (first, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{sign}{first}{fraction}e{exp_sign}{:02}", exponent.unsigned_abs())
    }
}
