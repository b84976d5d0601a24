//! Toolchain invoking an external compiler process

use plugscript_api::{PluginResult, PluginScriptError, Toolchain};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// [`Toolchain`] that accumulates source roots and arguments and, when a
/// compiler command is configured, runs it as a subprocess
///
/// The compiler is invoked as `<command> <compiler args> <extra args> <sources>`.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolchain {
    command: Option<String>,
    source_roots: Vec<PathBuf>,
    compiler_args: Vec<String>,
}

impl ProcessToolchain {
    pub fn new(command: Option<String>) -> Self {
        Self {
            command,
            ..Self::default()
        }
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn source_roots(&self) -> &[PathBuf] {
        &self.source_roots
    }

    pub fn compiler_args(&self) -> &[String] {
        &self.compiler_args
    }
}

impl Toolchain for ProcessToolchain {
    fn add_source_root(&mut self, dir: &Path) {
        if !self.source_roots.iter().any(|root| root == dir) {
            self.source_roots.push(dir.to_path_buf());
        }
    }

    fn append_compiler_args(&mut self, args: &[String]) {
        self.compiler_args.extend_from_slice(args);
    }

    fn compile(&mut self, sources: &[PathBuf], extra_args: &[String]) -> PluginResult<()> {
        let Some(command) = self.command.as_deref() else {
            warn!(
                sources = sources.len(),
                "No compiler command configured, skipping compilation"
            );
            return Ok(());
        };

        debug!(
            command,
            args = ?self.compiler_args,
            sources = sources.len(),
            "Spawning compiler"
        );

        let output = Command::new(command)
            .args(&self.compiler_args)
            .args(extra_args)
            .args(sources)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| PluginScriptError::io(command, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(command, stderr = %stderr, "Compiler failed");
            return Err(PluginScriptError::compilation(format!(
                "{} exited with {}: {}",
                command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
