//! Variable name mangling.
//!
//! Not applied by the generators; identifiers are emitted verbatim. Kept as a
//! utility for backends that need collision-free local names.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Resolve a source variable name to a target identifier.
///
/// - `__name` is a class attribute and is kept as is.
/// - `@name` opts out of mangling; the `@` is stripped.
/// - Anything else becomes `_<function>_<name>`, six hex digits each.
///
/// ```
/// use dragon_codegen::resolve_variable_name;
///
/// assert_eq!(resolve_variable_name(7, "__init"), "__init");
/// assert_eq!(resolve_variable_name(7, "@main"), "main");
/// assert_eq!(resolve_variable_name(7, "x").len(), 14);
/// ```
pub fn resolve_variable_name(function_id: u64, name: &str) -> String {
    if name.starts_with("__") {
        return name.to_string();
    }
    if let Some(unmangled) = name.strip_prefix('@') {
        return unmangled.to_string();
    }
    format!("_{}_{}", hex6(&function_id), hex6(name))
}

/// Low 24 bits of the value's hash as six hex digits.
fn hex6<T: Hash + ?Sized>(value: &T) -> String {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    format!("{:06x}", hasher.finish() & 0x00FF_FFFF)
}
