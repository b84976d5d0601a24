//! Wrapper source generation for precompiled script plugins
//!
//! Each script plugin gets a small generated class implementing the plugin
//! contract. The class instantiates the compiled script reflectively, so the
//! wrapper compiles without linking against the script class.
//!
//! ```rust,no_run
//! use plugscript_codegen::{WrapperGenerator, WrapperTemplate};
//! use plugscript_lang::ScriptDescriptor;
//!
//! let generator = WrapperGenerator::new("build/generated", WrapperTemplate::default());
//! let path = generator.generate(&ScriptDescriptor::new("src/my-plugin.gradle.kts"))?;
//! # Ok::<(), plugscript_api::PluginScriptError>(())
//! ```

pub mod generator;
pub mod template;

pub use generator::WrapperGenerator;
pub use template::{
    trim_indent, WrapperTemplate, DEFAULT_CONTEXT_TYPE, DEFAULT_WRAPPER_EXTENSION,
    PLUGIN_CONTRACT_TYPE,
};
