//! Writes wrapper sources for script descriptors

use crate::template::WrapperTemplate;
use plugscript_api::{PluginResult, PluginScriptError};
use plugscript_lang::ScriptDescriptor;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Generates one wrapper source file per script into an output directory
#[derive(Debug, Clone)]
pub struct WrapperGenerator {
    output_dir: PathBuf,
    template: WrapperTemplate,
}

impl WrapperGenerator {
    pub fn new(output_dir: impl Into<PathBuf>, template: WrapperTemplate) -> Self {
        Self {
            output_dir: output_dir.into(),
            template,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn template(&self) -> &WrapperTemplate {
        &self.template
    }

    /// Where the wrapper for `script` is written
    pub fn wrapper_path(&self, script: &ScriptDescriptor) -> PathBuf {
        self.output_dir
            .join(self.template.file_name(script.implementation_class_name()))
    }

    /// Write the wrapper for `script`, replacing any previous file
    ///
    /// Output depends only on the descriptor, so regenerating is byte-identical.
    #[instrument(skip(self, script), fields(script = %script.file_name()))]
    pub fn generate(&self, script: &ScriptDescriptor) -> PluginResult<PathBuf> {
        let source = self.template.render(
            script.implementation_class_name(),
            script.compiled_script_type_name()?,
        );

        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| PluginScriptError::io(&self.output_dir, e))?;

        let path = self.wrapper_path(script);
        std::fs::write(&path, source).map_err(|e| PluginScriptError::io(&path, e))?;

        debug!(path = %path.display(), "Generated script plugin wrapper");
        Ok(path)
    }

    /// Remove the output directory and everything in it
    ///
    /// A missing directory is not an error. Nothing is created here.
    pub fn clean_output_dir(&self) -> PluginResult<()> {
        if !self.output_dir.exists() {
            return Ok(());
        }

        std::fs::remove_dir_all(&self.output_dir)
            .map_err(|e| PluginScriptError::io(&self.output_dir, e))?;
        debug!(dir = %self.output_dir.display(), "Cleared generated wrappers");
        Ok(())
    }

    /// Generate wrappers for all `scripts`, stopping at the first failure
    pub fn generate_all(&self, scripts: &[ScriptDescriptor]) -> PluginResult<Vec<PathBuf>> {
        scripts.iter().map(|script| self.generate(script)).collect()
    }
}
