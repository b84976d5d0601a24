//! Script scanning and naming for precompiled script plugins
//!
//! Turns script files into [`ScriptDescriptor`]s: the plugin id, the wrapper
//! class name and the compiled script type name of each script.
//!
//! # Modules
//!
//! - [`lexer`] - Lazy tokenizer distinguishing trivia, identifiers and dots
//! - [`namespace`] - Shallow scan for the `package`/`namespace` declaration
//! - [`naming`] - Suffix stripping and kebab/camel/pascal conversions
//! - [`script`] - Per-file descriptors with cached derived values
//! - [`validation`] - Identifier checks for generated names
//! - [`io`] - Script discovery on the file system
//! - [`testing`] - Fixture helpers
//!
//! # Example
//!
//! ```rust
//! use plugscript_lang::ScriptDescriptor;
//!
//! let script = ScriptDescriptor::from_source(
//!     "my-plugin.init.gradle.kts",
//!     ".gradle.kts",
//!     "package org.acme\n",
//! );
//! assert_eq!(script.id().unwrap(), "org.acme.my-plugin.init");
//! assert_eq!(script.implementation_class_name(), "MyPluginInit");
//! ```

pub mod io;
pub mod lexer;
pub mod namespace;
pub mod naming;
pub mod script;
pub mod testing;
pub mod validation;

pub use io::{find_script_files, read_source, FsScriptSource};
pub use lexer::{Lexer, Token, TokenKind};
pub use namespace::{namespace_of, package_name_of, scan_namespace, DEFAULT_NAMESPACE_KEYWORDS};
pub use naming::{
    capitalize, implementation_class_name, kebab_to_camel_case, kebab_to_pascal_case,
    script_class_name_for_file, strip_script_suffix, DEFAULT_SCRIPT_SUFFIX,
};
pub use script::ScriptDescriptor;
pub use validation::{is_valid_qualified_name, is_valid_type_identifier};
