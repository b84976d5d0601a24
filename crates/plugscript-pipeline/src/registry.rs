//! Plugin descriptor registration and publishing

use plugscript_api::{PluginDescriptor, PluginDescriptorStore, PluginResult, PluginScriptError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Key written to published descriptor files
pub const IMPLEMENTATION_CLASS_KEY: &str = "implementation-class";

/// In-memory descriptor store that rejects duplicate ids
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
    plugins: Vec<PluginDescriptor>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered descriptors, in registration order
    pub fn plugins(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    pub fn get(&self, id: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|plugin| plugin.id == id)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Write one `<id>.properties` file per plugin into `dir`
    ///
    /// Every id must be usable as a single file name inside `dir`; nothing is
    /// written if any id is not.
    pub fn publish(&self, dir: &Path) -> PluginResult<Vec<PathBuf>> {
        if self.plugins.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(plugin) = self.plugins.iter().find(|p| !is_file_name_safe(&p.id)) {
            return Err(PluginScriptError::invalid_plugin_id(plugin.id.as_str()));
        }

        std::fs::create_dir_all(dir).map_err(|e| PluginScriptError::io(dir, e))?;

        let mut written = Vec::with_capacity(self.plugins.len());
        for plugin in &self.plugins {
            let path = dir.join(format!("{}.properties", plugin.id));
            let content = format!(
                "{}={}\n",
                IMPLEMENTATION_CLASS_KEY, plugin.implementation_class
            );
            std::fs::write(&path, content).map_err(|e| PluginScriptError::io(&path, e))?;
            written.push(path);
        }

        info!(count = written.len(), dir = %dir.display(), "Published plugin descriptors");
        Ok(written)
    }
}

fn is_file_name_safe(id: &str) -> bool {
    !matches!(id, "" | "." | "..") && !id.contains(['/', '\\'])
}

impl PluginDescriptorStore for DescriptorRegistry {
    fn register_plugin_descriptor(
        &mut self,
        id: &str,
        implementation_class: &str,
    ) -> PluginResult<()> {
        if let Some(existing) = self.get(id) {
            return Err(PluginScriptError::duplicate_plugin_id(
                id,
                existing.implementation_class.clone(),
            ));
        }

        debug!(id, class = implementation_class, "Registered plugin descriptor");
        self.plugins
            .push(PluginDescriptor::new(id, implementation_class));
        Ok(())
    }
}
