//! Collaborator traits implemented by the host build system
//!
//! The pipeline only depends on these traits. Concrete implementations live
//! in the host (or, for tests and the CLI, in `plugscript-pipeline`).

use crate::PluginResult;
use std::path::{Path, PathBuf};

/// Locates script files under a source root
pub trait ScriptSource {
    /// Return every file under `root` whose name matches `pattern`
    fn enumerate(&self, root: &Path, pattern: &str) -> PluginResult<Vec<PathBuf>>;
}

/// Build-graph wiring
pub trait TaskGraph {
    /// Declare the files a task reads
    fn declare_task_inputs(&mut self, task: &str, files: &[PathBuf]);

    /// Declare the directory a task writes
    fn declare_task_outputs(&mut self, task: &str, dir: &Path);

    /// Schedule `task` so that it runs immediately before `anchor`
    fn insert_task_before(&mut self, anchor: &str, task: &str) -> PluginResult<()>;

    /// Whether a task with this name exists in the graph
    fn contains_task(&self, task: &str) -> bool;
}

/// Plugin-metadata registration
pub trait PluginDescriptorStore {
    /// Register one plugin. Stores are expected to reject duplicate ids.
    fn register_plugin_descriptor(&mut self, id: &str, implementation_class: &str)
        -> PluginResult<()>;
}

/// The DSL compiler
pub trait Toolchain {
    /// Add a directory of sources consumed by compilation
    fn add_source_root(&mut self, dir: &Path);

    /// Append arguments to the compile task's argument list
    fn append_compiler_args(&mut self, args: &[String]);

    /// Compile `sources` with `extra_args`
    fn compile(&mut self, sources: &[PathBuf], extra_args: &[String]) -> PluginResult<()>;
}

/// Host-provided list of imports available inside every script
pub trait ImplicitImports {
    fn implicit_imports(&self) -> Vec<String>;
}
