//! Process-ending failure path.
//!
//! Generation itself never exits; it returns typed failures. The driver maps
//! a failure to an [`AbortCode`] and calls [`abort`], which prints
//! `[Error 0x........] message` and terminates with that status.

use std::fmt;

/// Fixed exit statuses, one per failure class.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AbortCode {
    /// Catch-all for failures without a dedicated status.
    Unknown,
    /// A node variant, operator or literal kind has no generation rule.
    UnsupportedFeature,
    /// A node appears where a different shape is structurally required.
    MalformedConstruct,
    /// The source could not be lexed or parsed.
    Syntax,
}

impl AbortCode {
    /// The 32-bit status value.
    pub const fn value(self) -> u32 {
        match self {
            AbortCode::Unknown => 0xFFFF_FFFF,
            AbortCode::UnsupportedFeature => 0x111E_ED42,
            AbortCode::MalformedConstruct => 0x111E_ED43,
            AbortCode::Syntax => 0x111E_ED01,
        }
    }

    /// The value as a process exit status.
    #[allow(clippy::cast_possible_wrap, reason = "0xFFFF_FFFF is meant to be -1")]
    pub const fn exit_status(self) -> i32 {
        self.value() as i32
    }
}

impl fmt::Display for AbortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.value())
    }
}

/// Compose the line printed on abort.
///
/// An empty message is replaced by a generic one.
pub fn abort_message(code: AbortCode, message: &str) -> String {
    if message.is_empty() {
        format!("[Error {code}] An unknown error occured.")
    } else {
        format!("[Error {code}] {message}")
    }
}

/// Print the abort line to stdout and terminate the process with `code`.
pub fn abort(code: AbortCode, message: &str) -> ! {
    println!("{}", abort_message(code, message));
    std::process::exit(code.exit_status())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_are_distinct_and_nonzero() {
        let codes = [
            AbortCode::Unknown,
            AbortCode::UnsupportedFeature,
            AbortCode::MalformedConstruct,
            AbortCode::Syntax,
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(a.exit_status(), 0);
            for b in &codes[i + 1..] {
                assert_ne!(a.value(), b.value());
            }
        }
    }

    #[test]
    fn test_unknown_is_minus_one() {
        assert_eq!(AbortCode::Unknown.exit_status(), -1);
    }

    #[test]
    fn test_abort_message_format() {
        assert_eq!(
            abort_message(
                AbortCode::UnsupportedFeature,
                "Feature not yet supported: generator/cpp/statement/Pass"
            ),
            "[Error 0x111eed42] Feature not yet supported: generator/cpp/statement/Pass"
        );
        assert_eq!(
            abort_message(AbortCode::Unknown, ""),
            "[Error 0xffffffff] An unknown error occured."
        );
    }
}
