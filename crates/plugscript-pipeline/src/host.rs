//! Host-provided services handed to the pipeline

use plugscript_api::ImplicitImports;
use plugscript_codegen::DEFAULT_CONTEXT_TYPE;

/// Script templates telling the toolchain how to compile init, settings and
/// plain scripts
pub const DEFAULT_SCRIPT_TEMPLATES: [&str; 3] = [
    "org.gradle.kotlin.dsl.KotlinInitScript",
    "org.gradle.kotlin.dsl.KotlinSettingsScript",
    "org.gradle.kotlin.dsl.KotlinBuildScript",
];

/// Services the pipeline needs from its host, passed in explicitly
pub struct HostServices {
    pub implicit_imports: Box<dyn ImplicitImports>,
    /// Type of the value compiled scripts are constructed with
    pub project_context_type: String,
    pub script_templates: Vec<String>,
}

impl HostServices {
    pub fn new(implicit_imports: impl ImplicitImports + 'static) -> Self {
        Self {
            implicit_imports: Box::new(implicit_imports),
            project_context_type: DEFAULT_CONTEXT_TYPE.to_string(),
            script_templates: DEFAULT_SCRIPT_TEMPLATES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }

    pub fn with_project_context_type(mut self, context_type: impl Into<String>) -> Self {
        self.project_context_type = context_type.into();
        self
    }

    pub fn with_script_templates(mut self, templates: Vec<String>) -> Self {
        self.script_templates = templates;
        self
    }
}

/// Implicit imports from a fixed list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticImplicitImports(pub Vec<String>);

impl ImplicitImports for StaticImplicitImports {
    fn implicit_imports(&self) -> Vec<String> {
        self.0.clone()
    }
}
