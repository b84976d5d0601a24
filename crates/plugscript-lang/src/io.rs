//! File system access for script discovery
//!
//! Standardizes error handling so every failure carries the path involved.

use glob::Pattern;
use plugscript_api::{PluginResult, PluginScriptError, ScriptSource};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Read a script source file
pub fn read_source(path: &Path) -> PluginResult<String> {
    std::fs::read_to_string(path).map_err(|e| PluginScriptError::io(path, e))
}

/// Find files under `root` whose file name matches the glob `pattern`
///
/// A missing root yields no files. Results are sorted so that discovery order
/// is stable across runs.
pub fn find_script_files(root: &Path, pattern: &str) -> PluginResult<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|e| {
        PluginScriptError::config(format!("Invalid script pattern '{}': {}", pattern, e))
    })?;

    if !root.exists() {
        debug!(root = %root.display(), "Script source root does not exist");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("file system loop detected"));
            PluginScriptError::io(path, source)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "Skipping file with non-UTF-8 name");
            continue;
        };

        if matcher.matches(name) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(root = %root.display(), pattern, count = files.len(), "Discovered script files");
    Ok(files)
}

/// [`ScriptSource`] backed by the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsScriptSource;

impl ScriptSource for FsScriptSource {
    fn enumerate(&self, root: &Path, pattern: &str) -> PluginResult<Vec<PathBuf>> {
        find_script_files(root, pattern)
    }
}
