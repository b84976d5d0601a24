//! Identifier validation for generated code
//!
//! Generated wrappers are only valid source if the names substituted into
//! them are valid identifiers, so names derived from file names are checked
//! here before anything is written.

use crate::lexer::is_identifier_part;

/// Validates a generated type name.
///
/// # Requirements
/// - Non-empty
/// - First character is an uppercase letter
/// - Remaining characters are letters, digits or `_`
///
/// # Example
/// ```
/// use plugscript_lang::validation::is_valid_type_identifier;
///
/// assert!(is_valid_type_identifier("MyPluginInit"));
/// assert!(!is_valid_type_identifier("My-Plugin"));
/// assert!(!is_valid_type_identifier("1stPlugin"));
/// ```
pub fn is_valid_type_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(is_identifier_part),
        _ => false,
    }
}

/// Validates a dotted name such as `org.acme.Build_gradle`.
pub fn is_valid_qualified_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_')
                && chars.all(is_identifier_part)
        })
}
