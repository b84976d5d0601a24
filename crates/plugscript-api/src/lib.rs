//! Core API for precompiled script plugins
//!
//! This crate defines the error type, the value types shared between the
//! pipeline stages, and the traits through which the pipeline talks to its
//! host build system.
//!
//! # Architecture
//!
//! The host build system is never called directly. Every interaction goes
//! through one of the collaborator traits in [`host`]:
//! - script discovery ([`ScriptSource`])
//! - task-graph wiring ([`TaskGraph`])
//! - compiler invocation ([`Toolchain`])
//! - plugin-descriptor registration ([`PluginDescriptorStore`])
//! - implicit imports ([`ImplicitImports`])

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod host;

// Re-exports
pub use host::{ImplicitImports, PluginDescriptorStore, ScriptSource, TaskGraph, Toolchain};

// ============================================================================
// Error Types
// ============================================================================

/// Result type for script plugin operations
pub type PluginResult<T> = Result<T, PluginScriptError>;

/// Errors that can occur while discovering, generating or registering script plugins
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PluginScriptError {
    /// File system failure, with the path that was being accessed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two scripts resolved to the same plugin id
    #[error("Duplicate plugin id '{id}' (already registered for '{existing_class}')")]
    DuplicatePluginId { id: String, existing_class: String },

    /// A script file name does not convert to a usable type name
    #[error("Script '{}' yields invalid implementation class name '{name}'", file.display())]
    InvalidClassName { file: PathBuf, name: String },

    /// A task anchor was not present in the task graph
    #[error("Unknown task: {task}")]
    UnknownTask { task: String },

    /// A plugin id that cannot be used as a descriptor file name
    #[error("Invalid plugin id '{id}'")]
    InvalidPluginId { id: String },

    /// A pipeline phase was invoked out of order
    #[error("Phase error: {message}")]
    Phase { message: String },

    /// The toolchain reported a failure
    #[error("Compilation failed: {message}")]
    Compilation { message: String },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PluginScriptError {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a duplicate plugin id error
    pub fn duplicate_plugin_id(id: impl Into<String>, existing_class: impl Into<String>) -> Self {
        Self::DuplicatePluginId {
            id: id.into(),
            existing_class: existing_class.into(),
        }
    }

    /// Create an invalid class name error
    pub fn invalid_class_name(file: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self::InvalidClassName {
            file: file.into(),
            name: name.into(),
        }
    }

    /// Create an unknown task error
    pub fn unknown_task(task: impl Into<String>) -> Self {
        Self::UnknownTask { task: task.into() }
    }

    /// Create an invalid plugin id error
    pub fn invalid_plugin_id(id: impl Into<String>) -> Self {
        Self::InvalidPluginId { id: id.into() }
    }

    /// Create a phase ordering error
    pub fn phase(message: impl Into<String>) -> Self {
        Self::Phase {
            message: message.into(),
        }
    }

    /// Create a compilation error
    pub fn compilation(message: impl Into<String>) -> Self {
        Self::Compilation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// ============================================================================
// Core Data Types
// ============================================================================

/// The (id, implementation class) pair published for each script plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    /// Plugin id consumers apply the plugin by
    pub id: String,
    /// Simple name of the generated wrapper class
    pub implementation_class: String,
}

impl PluginDescriptor {
    pub fn new(id: impl Into<String>, implementation_class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            implementation_class: implementation_class.into(),
        }
    }
}

/// Key under which implicit imports are passed in the resolver environment
pub const IMPLICIT_IMPORTS_KEY: &str = "implicitImports";

/// Extra compiler arguments computed when configuration is finalized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerArguments {
    /// Fully-qualified script template types, in declaration order
    pub script_templates: Vec<String>,
    /// Import statements available in every script
    pub implicit_imports: Vec<String>,
}

impl CompilerArguments {
    /// The resolver environment entry carrying the colon-joined implicit imports
    pub fn resolver_environment(&self) -> String {
        format!(
            "{}=\"{}\"",
            IMPLICIT_IMPORTS_KEY,
            self.implicit_imports.join(":")
        )
    }

    /// Render as command-line arguments for the toolchain
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "-script-templates".to_string(),
            self.script_templates.join(","),
            format!("-Xscript-resolver-environment={}", self.resolver_environment()),
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compiler_arguments_rendering() {
        let args = CompilerArguments {
            script_templates: vec!["a.InitScript".into(), "a.BuildScript".into()],
            implicit_imports: vec!["org.acme.*".into(), "org.acme.dsl.*".into()],
        };

        assert_eq!(
            args.to_args(),
            vec![
                "-script-templates".to_string(),
                "a.InitScript,a.BuildScript".to_string(),
                "-Xscript-resolver-environment=implicitImports=\"org.acme.*:org.acme.dsl.*\""
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_resolver_environment_without_imports() {
        let args = CompilerArguments::default();
        assert_eq!(args.resolver_environment(), "implicitImports=\"\"");
    }

    #[test]
    fn test_error_messages() {
        let err = PluginScriptError::duplicate_plugin_id("org.acme.foo", "Foo");
        assert_eq!(
            err.to_string(),
            "Duplicate plugin id 'org.acme.foo' (already registered for 'Foo')"
        );

        let err = PluginScriptError::io(
            "/tmp/out",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("I/O error at /tmp/out"));
    }
}
