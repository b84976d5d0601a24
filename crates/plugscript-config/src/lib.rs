//! Configuration management for plugscript
//!
//! Settings are layered, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `plugscript.toml` or `.plugscript/config.toml` in the project directory
//! 3. Environment variables such as `PLUGSCRIPT__LAYOUT__SCRIPT_PATTERN`

pub mod logging;

use plugscript_api::{PluginResult, PluginScriptError};
use plugscript_codegen::DEFAULT_CONTEXT_TYPE;
use plugscript_pipeline::{
    HostServices, ScriptLayout, StaticImplicitImports, TaskNames, DEFAULT_SCRIPT_TEMPLATES,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config files looked up in the project directory, first match wins
pub const CONFIG_FILES: [&str; 2] = ["plugscript.toml", ".plugscript/config.toml"];

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "PLUGSCRIPT__";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Where scripts are found and wrappers written
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Values the build host would normally supply
    #[serde(default)]
    pub host: HostConfig,
    /// Task names used when wiring the pipeline
    #[serde(default)]
    pub tasks: TaskConfig,
    /// External compiler and descriptor output
    #[serde(default)]
    pub toolchain: ToolchainConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Script and wrapper locations, relative to the project directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub source_root: PathBuf,
    pub script_pattern: String,
    pub script_suffix: String,
    /// Keywords that may introduce a namespace declaration
    pub namespace_keywords: Vec<String>,
    pub generated_sources_dir: PathBuf,
    pub wrapper_extension: String,
}

/// Host-provided values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    /// Type compiled scripts are constructed with
    pub project_context_type: String,
    pub script_templates: Vec<String>,
    /// Imports made available to every script without an import statement
    pub implicit_imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    pub generate: String,
    pub declare: String,
    pub compile: String,
    pub publish: String,
}

/// Toolchain configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolchainConfig {
    /// Compiler executable; compilation is skipped when unset
    pub command: Option<String>,
    /// Directory receiving published `<id>.properties` descriptors
    pub descriptors_dir: PathBuf,
}

/// Log output format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format for development
    #[default]
    Pretty,
    /// Structured JSON format for tooling
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let layout = ScriptLayout::default();
        Self {
            source_root: layout.source_root,
            script_pattern: layout.script_pattern,
            script_suffix: layout.script_suffix,
            namespace_keywords: layout.namespace_keywords,
            generated_sources_dir: layout.generated_sources_dir,
            wrapper_extension: layout.wrapper_extension,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            project_context_type: DEFAULT_CONTEXT_TYPE.to_string(),
            script_templates: DEFAULT_SCRIPT_TEMPLATES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            implicit_imports: vec![
                "org.gradle.api.*".to_string(),
                "org.gradle.api.tasks.*".to_string(),
                "org.gradle.kotlin.dsl.*".to_string(),
            ],
        }
    }
}

impl Default for TaskConfig {
    fn default() -> Self {
        let tasks = TaskNames::default();
        Self {
            generate: tasks.generate,
            declare: tasks.declare,
            compile: tasks.compile,
            publish: tasks.publish,
        }
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            command: None,
            descriptors_dir: PathBuf::from("build/pluginDescriptors"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load configuration for the project at `project_dir`
    pub fn load(project_dir: &Path) -> PluginResult<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Toml},
            Figment,
        };

        // Start with full defaults by serializing the Default implementation
        let default_value = serde_json::to_value(AppConfig::default()).map_err(|e| {
            PluginScriptError::config(format!("Failed to serialize default config: {}", e))
        })?;
        let mut figment = Figment::from(Serialized::defaults(default_value));

        for file in CONFIG_FILES {
            let path = project_dir.join(file);
            if path.exists() {
                tracing::info!(path = %path.display(), "Loading TOML configuration");
                figment = figment.merge(Toml::file(path));
                break;
            }
        }

        let figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .map(|key| camel_case_key(key.as_str()).into())
                .lowercase(false),
        );

        let config: AppConfig = figment
            .extract()
            .map_err(|e| PluginScriptError::config(format!("Failed to load configuration: {}", e)))?;

        config.validate()?;

        tracing::debug!(
            source_root = %config.layout.source_root.display(),
            pattern = %config.layout.script_pattern,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> PluginResult<()> {
        if self.layout.script_pattern.is_empty() {
            return Err(PluginScriptError::config("Script pattern cannot be empty"));
        }

        if self.layout.script_suffix.is_empty() {
            return Err(PluginScriptError::config("Script suffix cannot be empty"));
        }

        if self.layout.namespace_keywords.is_empty()
            || self.layout.namespace_keywords.iter().any(String::is_empty)
        {
            return Err(PluginScriptError::config(
                "Namespace keywords must be a non-empty list of non-empty words",
            ));
        }

        if self.layout.wrapper_extension.is_empty() {
            return Err(PluginScriptError::config(
                "Wrapper extension cannot be empty",
            ));
        }

        let tasks = [
            ("generate", &self.tasks.generate),
            ("declare", &self.tasks.declare),
            ("compile", &self.tasks.compile),
            ("publish", &self.tasks.publish),
        ];
        for (role, name) in tasks {
            if name.is_empty() {
                return Err(PluginScriptError::config(format!(
                    "Task name for '{}' cannot be empty",
                    role
                )));
            }
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(PluginScriptError::config(format!(
                "Invalid log level '{}', must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    /// Pipeline layout with directories resolved against `project_dir`
    pub fn script_layout(&self, project_dir: &Path) -> ScriptLayout {
        ScriptLayout {
            source_root: self.layout.source_root.clone(),
            script_pattern: self.layout.script_pattern.clone(),
            script_suffix: self.layout.script_suffix.clone(),
            namespace_keywords: self.layout.namespace_keywords.clone(),
            generated_sources_dir: self.layout.generated_sources_dir.clone(),
            wrapper_extension: self.layout.wrapper_extension.clone(),
            tasks: TaskNames {
                generate: self.tasks.generate.clone(),
                declare: self.tasks.declare.clone(),
                compile: self.tasks.compile.clone(),
                publish: self.tasks.publish.clone(),
            },
        }
        .relative_to(project_dir)
    }

    /// Host services backed by the configured values
    pub fn host_services(&self) -> HostServices {
        HostServices::new(StaticImplicitImports(self.host.implicit_imports.clone()))
            .with_project_context_type(self.host.project_context_type.clone())
            .with_script_templates(self.host.script_templates.clone())
    }

    /// Descriptor output directory resolved against `project_dir`
    pub fn descriptors_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.toolchain.descriptors_dir)
    }
}

/// `LAYOUT.SCRIPT_PATTERN` -> `layout.scriptPattern`
fn camel_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.to_ascii_lowercase().chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugscript_api::ImplicitImports;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_pipeline_defaults() {
        let config = AppConfig::default();
        let layout = config.script_layout(Path::new("/project"));

        assert_eq!(
            layout,
            ScriptLayout::default().relative_to(Path::new("/project"))
        );
        assert_eq!(config.host.script_templates.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_camel_case_key() {
        assert_eq!(camel_case_key("LAYOUT.SCRIPT_PATTERN"), "layout.scriptPattern");
        assert_eq!(camel_case_key("logging.level"), "logging.level");
        assert_eq!(
            camel_case_key("host.project_context_type"),
            "host.projectContextType"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level 'verbose'"));

        let mut config = AppConfig::default();
        config.layout.script_pattern.clear();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.layout.namespace_keywords = vec![String::new()];
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.tasks.compile.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'compile'"));
    }

    #[test]
    fn test_host_services_from_config() {
        let mut config = AppConfig::default();
        config.host.project_context_type = "org.acme.Settings".to_string();
        config.host.implicit_imports = vec!["org.acme.*".to_string()];

        let services = config.host_services();

        assert_eq!(services.project_context_type, "org.acme.Settings");
        assert_eq!(
            services.implicit_imports.implicit_imports(),
            vec!["org.acme.*".to_string()]
        );
    }
}
