//! Where scripts live, where wrappers go, and which tasks are wired

use plugscript_codegen::DEFAULT_WRAPPER_EXTENSION;
use plugscript_lang::{DEFAULT_NAMESPACE_KEYWORDS, DEFAULT_SCRIPT_SUFFIX};
use std::path::{Path, PathBuf};

/// Default root scanned for scripts
pub const DEFAULT_SOURCE_ROOT: &str = "src/main/kotlin";

/// Default glob matching script file names
pub const DEFAULT_SCRIPT_PATTERN: &str = "*.gradle.kts";

/// Default directory receiving generated wrappers
pub const DEFAULT_GENERATED_SOURCES_DIR: &str = "build/generated-sources/kotlin-dsl-plugins/kotlin";

/// Task names used when wiring the pipeline into the task graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNames {
    /// Task writing the wrapper sources (owned by the pipeline)
    pub generate: String,
    /// Task registering plugin descriptors (owned by the pipeline)
    pub declare: String,
    /// Host compile task; generation runs right before it
    pub compile: String,
    /// Host descriptor-publishing task; declaration runs right before it
    pub publish: String,
}

impl Default for TaskNames {
    fn default() -> Self {
        Self {
            generate: "generateScriptPluginAdapters".to_string(),
            declare: "declareScriptPlugins".to_string(),
            compile: "compileKotlin".to_string(),
            publish: "pluginDescriptors".to_string(),
        }
    }
}

/// Project layout of a script plugin build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLayout {
    pub source_root: PathBuf,
    pub script_pattern: String,
    /// Stripped from file names to form plugin ids
    pub script_suffix: String,
    /// Keywords that may introduce a script's namespace declaration
    pub namespace_keywords: Vec<String>,
    pub generated_sources_dir: PathBuf,
    /// Extension of generated wrapper files, without the dot
    pub wrapper_extension: String,
    pub tasks: TaskNames,
}

impl Default for ScriptLayout {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            script_pattern: DEFAULT_SCRIPT_PATTERN.to_string(),
            script_suffix: DEFAULT_SCRIPT_SUFFIX.to_string(),
            namespace_keywords: DEFAULT_NAMESPACE_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
            generated_sources_dir: PathBuf::from(DEFAULT_GENERATED_SOURCES_DIR),
            wrapper_extension: DEFAULT_WRAPPER_EXTENSION.to_string(),
            tasks: TaskNames::default(),
        }
    }
}

impl ScriptLayout {
    /// Resolve relative directories against `project_dir`
    pub fn relative_to(mut self, project_dir: &Path) -> Self {
        self.source_root = project_dir.join(&self.source_root);
        self.generated_sources_dir = project_dir.join(&self.generated_sources_dir);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_project() {
        let layout = ScriptLayout::default().relative_to(Path::new("/work/build-logic"));
        assert_eq!(
            layout.source_root,
            PathBuf::from("/work/build-logic/src/main/kotlin")
        );
        assert!(layout
            .generated_sources_dir
            .starts_with("/work/build-logic/build"));
    }

    #[test]
    fn test_absolute_dirs_are_kept() {
        let layout = ScriptLayout {
            source_root: PathBuf::from("/elsewhere/scripts"),
            ..ScriptLayout::default()
        }
        .relative_to(Path::new("/work"));
        assert_eq!(layout.source_root, PathBuf::from("/elsewhere/scripts"));
    }
}
