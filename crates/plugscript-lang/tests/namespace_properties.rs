//! Property-based tests for the namespace scan
//!
//! Sources are assembled from random trivia, a random dotted name and a random
//! tail, and the scan must recover exactly the name.

use plugscript_lang::namespace::{namespace_of, package_name_of};
use proptest::prelude::*;

fn trivia() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("\t".to_string()),
            "// [a-z ]{0,10}\n",
            "/\\* [a-z ]{0,10} \\*/",
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

fn dotted_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..5).prop_map(|parts| parts.join("."))
}

proptest! {
    /// Property: any leading trivia before `namespace a.b.c` is skipped
    #[test]
    fn prop_namespace_after_trivia(
        leading in trivia(),
        name in dotted_name(),
        tail in "(\n|;| )[a-z(){} \n]{0,20}",
    ) {
        let source = format!("{}namespace {}{}", leading, name, tail);
        prop_assert_eq!(package_name_of(&source), Some(name.clone()));
        prop_assert_eq!(namespace_of(&source, &["namespace"]), Some(name));
    }

    /// Property: trivia between keyword and name is also skipped
    #[test]
    fn prop_trivia_after_keyword(gap in trivia(), name in dotted_name()) {
        let source = format!("package {}{}", gap, name);
        prop_assert_eq!(package_name_of(&source), Some(name));
    }

    /// Property: a first token other than the keyword means no namespace
    #[test]
    fn prop_no_keyword_no_namespace(
        leading in trivia(),
        first in "[a-oq-z][a-z]{0,6}|[(){}@=\"]",
        rest in "[a-z .\n]{0,30}",
    ) {
        let source = format!("{}{} package a.b {}", leading, first, rest);
        prop_assert_eq!(package_name_of(&source), None);
    }

    /// Property: the scan never fails, whatever the input
    #[test]
    fn prop_scan_is_total(source in "\\PC{0,64}") {
        let _ = package_name_of(&source);
    }

    /// Property: scanning is deterministic
    #[test]
    fn prop_scan_deterministic(source in "(package )?[a-z. \n;/*]{0,40}") {
        prop_assert_eq!(package_name_of(&source), package_name_of(&source));
    }
}
