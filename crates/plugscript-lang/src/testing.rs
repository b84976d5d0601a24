//! Test utilities for script plugin fixtures

use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory with source files
///
/// # Example
///
/// ```rust
/// use plugscript_lang::testing::create_temp_project;
///
/// let dir = create_temp_project(&[
///     ("src/main/kotlin/my-plugin.gradle.kts", "package org.acme\n"),
/// ])
/// .unwrap();
/// assert!(dir.path().join("src/main/kotlin/my-plugin.gradle.kts").exists());
/// ```
pub fn create_temp_project(files: &[(&str, &str)]) -> std::io::Result<TempDir> {
    let dir = TempDir::new()?;
    write_project_files(dir.path(), files)?;
    Ok(dir)
}

/// Write `files` (relative path, content) below `root`, creating parent directories
pub fn write_project_files(root: &Path, files: &[(&str, &str)]) -> std::io::Result<()> {
    for (path, content) in files {
        let file_path = root.join(path);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&file_path, content)?;
    }

    Ok(())
}
