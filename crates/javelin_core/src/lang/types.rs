//! Primitive type spellings and the typename classification rule.
//!
//! Javelin distinguishes type names from ordinary names lexically, by casing:
//! an identifier whose first character is an uppercase letter and whose
//! remainder contains at least one lowercase letter is a typename. The fixed
//! primitive spellings are typenames too, casing aside.
//!
//! ## Examples
//! ```rust
//! use javelin_core::lang::types;
//!
//! assert!(types::is_type_name("MyClass"));
//! assert!(types::is_type_name("int"));
//! assert!(!types::is_type_name("myVar"));
//! assert!(!types::is_type_name("CONST_NAME"));
//! ```

/// The fixed primitive-type spellings.
pub const PRIMITIVES: &[&str] = &["void", "boolean", "char", "int", "float"];

/// Whether `name` is a primitive type spelling.
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}

/// Whether an identifier classifies as a typename.
///
/// ## Notes
/// - ALL-CAPS constant-style names (`CONST_NAME`) are NOT typenames: the
///   remainder after the initial letter must contain a lowercase letter.
/// - A single uppercase letter (`X`) or uppercase-plus-digits (`X1`) is a
///   plain name for the same reason.
pub fn is_type_name(name: &str) -> bool {
    if is_primitive(name) {
        return true;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.is_ascii_uppercase() && chars.any(|c| c.is_ascii_lowercase()),
        None => false,
    }
}
