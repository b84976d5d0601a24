//! Namespace declaration scanning
//!
//! Finds the namespace declaration at the top of a script without parsing
//! the script. The scan is a four-step state machine with no backtracking:
//!
//! 1. skip leading trivia
//! 2. expect one of the namespace keywords, otherwise there is no namespace
//! 3. skip trivia after the keyword
//! 4. accumulate contiguous identifier and dot tokens
//!
//! Nothing is validated. `package .a` yields `.a` and `package a..b` yields
//! `a..b`; the scan just stops at the first token that is neither an
//! identifier nor a dot.

use crate::lexer::{Lexer, Token, TokenKind};

/// Keywords introducing a namespace declaration in scripts
///
/// `package` is the current form; `namespace` is the legacy spelling still
/// found in older scripts.
pub const DEFAULT_NAMESPACE_KEYWORDS: [&str; 2] = ["package", "namespace"];

/// Run the namespace scan over any token stream
///
/// The declaration may start with any of `keywords`.
///
/// # Example
///
/// ```rust
/// use plugscript_lang::lexer::Lexer;
/// use plugscript_lang::namespace::scan_namespace;
///
/// let ns = scan_namespace(Lexer::new("module org.acme"), &["module"]);
/// assert_eq!(ns.as_deref(), Some("org.acme"));
/// ```
pub fn scan_namespace<'a, I, K>(tokens: I, keywords: &[K]) -> Option<String>
where
    I: IntoIterator<Item = Token<'a>>,
    K: AsRef<str>,
{
    let mut tokens = tokens.into_iter().skip_while(Token::is_trivia);

    let first = tokens.next()?;
    if !keywords.iter().any(|keyword| first.is_keyword(keyword.as_ref())) {
        return None;
    }

    let namespace = tokens
        .skip_while(Token::is_trivia)
        .take_while(|token| matches!(token.kind, TokenKind::Identifier | TokenKind::Dot))
        .map(|token| token.text)
        .collect();

    Some(namespace)
}

/// Namespace declared by `source` with one of `keywords`
pub fn namespace_of<K: AsRef<str>>(source: &str, keywords: &[K]) -> Option<String> {
    scan_namespace(Lexer::new(source), keywords)
}

/// Package declared by a script source, using the default keywords
///
/// # Example
///
/// ```rust
/// use plugscript_lang::namespace::package_name_of;
///
/// assert_eq!(package_name_of("package org.acme\n\nplugins {}").as_deref(), Some("org.acme"));
/// assert_eq!(package_name_of("namespace org.acme").as_deref(), Some("org.acme"));
/// assert_eq!(package_name_of("plugins {}"), None);
/// ```
pub fn package_name_of(source: &str) -> Option<String> {
    namespace_of(source, &DEFAULT_NAMESPACE_KEYWORDS)
}
