//! Naming conventions for script plugins
//!
//! Pure string transforms turning script file names into plugin ids and
//! class names. All functions are total: inputs that don't follow the
//! conventions pass through unchanged.

use crate::lexer::{is_identifier_part, is_identifier_start};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Suffix of script files turned into plugins
pub const DEFAULT_SCRIPT_SUFFIX: &str = ".gradle.kts";

/// A hyphen followed by a lowercase ASCII letter
static KEBAB_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-[a-z]").expect("Valid kebab segment regex"));

/// Remove `suffix` from `file_name` if present
///
/// # Example
///
/// ```rust
/// use plugscript_lang::naming::strip_script_suffix;
///
/// assert_eq!(strip_script_suffix("my-plugin.gradle.kts", ".gradle.kts"), "my-plugin");
/// assert_eq!(strip_script_suffix("notes.txt", ".gradle.kts"), "notes.txt");
/// ```
pub fn strip_script_suffix<'a>(file_name: &'a str, suffix: &str) -> &'a str {
    file_name.strip_suffix(suffix).unwrap_or(file_name)
}

/// `my-kebab-name` → `myKebabName`
///
/// Only hyphens followed by a lowercase ASCII letter are folded; matches are
/// non-overlapping, left to right.
pub fn kebab_to_camel_case(name: &str) -> String {
    KEBAB_SEGMENT
        .replace_all(name, |caps: &Captures| caps[0][1..].to_uppercase())
        .into_owned()
}

/// `my-kebab-name` → `MyKebabName`
pub fn kebab_to_pascal_case(name: &str) -> String {
    capitalize(&kebab_to_camel_case(name))
}

/// Upper-case the first character
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Wrapper class name for a script name with its suffix already stripped
///
/// Dots separate words like hyphens do, so `my-plugin.init` becomes
/// `MyPluginInit`.
pub fn implementation_class_name(stripped_name: &str) -> String {
    kebab_to_pascal_case(&stripped_name.replace('.', "-"))
}

/// Simple name of the class the toolchain compiles a script file into
///
/// The last extension is dropped, characters that cannot appear in an
/// identifier become `_`, and the result is capitalized:
/// `my-plugin.init.gradle.kts` → `My_plugin_init_gradle`.
pub fn script_class_name_for_file(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);

    let mut legal: String = stem
        .chars()
        .map(|c| if is_identifier_part(c) { c } else { '_' })
        .collect();

    if !legal.chars().next().is_some_and(is_identifier_start) {
        legal.insert(0, '_');
    }

    capitalize(&legal)
}
