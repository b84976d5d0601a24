//! Property-based tests for the naming conventions

use plugscript_lang::naming::*;
use plugscript_lang::validation::is_valid_type_identifier;
use plugscript_lang::ScriptDescriptor;
use proptest::prelude::*;

fn kebab_name() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..5).prop_map(|parts| parts.join("-"))
}

proptest! {
    /// Property: names without the suffix pass through unchanged
    #[test]
    fn prop_strip_without_suffix_is_identity(name in "[a-z.-]{0,20}") {
        prop_assume!(!name.ends_with(DEFAULT_SCRIPT_SUFFIX));
        prop_assert_eq!(strip_script_suffix(&name, DEFAULT_SCRIPT_SUFFIX), name.as_str());
    }

    /// Property: stripping is a left inverse of appending the suffix
    #[test]
    fn prop_strip_inverts_append(name in "[a-z.-]{0,20}") {
        let file_name = format!("{}{}", name, DEFAULT_SCRIPT_SUFFIX);
        prop_assert_eq!(strip_script_suffix(&file_name, DEFAULT_SCRIPT_SUFFIX), name.as_str());
    }

    /// Property: pascal case is idempotent on its own output
    #[test]
    fn prop_pascal_idempotent(name in "[a-zA-Z0-9._-]{0,24}") {
        let once = kebab_to_pascal_case(&name);
        prop_assert_eq!(kebab_to_pascal_case(&once), once);
    }

    /// Property: strings without hyphens only change their first letter
    #[test]
    fn prop_no_hyphen_only_capitalized(name in "[a-zA-Z0-9_]{1,24}") {
        prop_assert_eq!(kebab_to_camel_case(&name), name.clone());
        let pascal = kebab_to_pascal_case(&name);
        prop_assert_eq!(&pascal[1..], &name[1..]);
    }

    /// Property: conventional kebab names yield valid wrapper class names
    #[test]
    fn prop_kebab_names_give_valid_classes(
        name in kebab_name(),
        variant in prop_oneof![Just(""), Just(".init"), Just(".settings")],
    ) {
        let file_name = format!("{}{}{}", name, variant, DEFAULT_SCRIPT_SUFFIX);
        let script = ScriptDescriptor::from_source(&file_name, DEFAULT_SCRIPT_SUFFIX, "");
        let class = script.implementation_class_name();
        prop_assert!(is_valid_type_identifier(class), "invalid class name {}", class);
        prop_assert!(!class.contains('-'));
    }

    /// Property: without a namespace the id is the stripped file name
    #[test]
    fn prop_id_without_namespace(name in kebab_name()) {
        let file_name = format!("{}{}", name, DEFAULT_SCRIPT_SUFFIX);
        let script = ScriptDescriptor::from_source(&file_name, DEFAULT_SCRIPT_SUFFIX, "plugins {}");
        prop_assert_eq!(script.id().unwrap(), name.as_str());
    }

    /// Property: with a namespace the id is `namespace.name`
    #[test]
    fn prop_id_with_namespace(
        name in kebab_name(),
        namespace in prop::collection::vec("[a-z]{1,6}", 1..4).prop_map(|p| p.join(".")),
    ) {
        let file_name = format!("{}{}", name, DEFAULT_SCRIPT_SUFFIX);
        let source = format!("package {}\n", namespace);
        let script = ScriptDescriptor::from_source(&file_name, DEFAULT_SCRIPT_SUFFIX, &source);
        prop_assert_eq!(script.id().unwrap(), format!("{}.{}", namespace, name));
    }
}
