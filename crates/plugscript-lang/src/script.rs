//! Script descriptors
//!
//! One [`ScriptDescriptor`] per discovered script file. Every value is a pure
//! function of the file's path and contents, so each is computed on first
//! access and cached for the rest of the pass.

use crate::io::read_source;
use crate::namespace::{namespace_of, DEFAULT_NAMESPACE_KEYWORDS};
use crate::naming::{
    implementation_class_name, script_class_name_for_file, strip_script_suffix,
    DEFAULT_SCRIPT_SUFFIX,
};
use once_cell::sync::OnceCell;
use plugscript_api::{PluginDescriptor, PluginResult};
use std::path::{Path, PathBuf};

/// Identifiers derived from one script file
#[derive(Debug)]
pub struct ScriptDescriptor {
    source_file: PathBuf,
    file_name: String,
    file_name_without_script_extension: String,
    namespace_keywords: Vec<String>,
    /// In-memory contents scanned instead of the file, if given
    source_text: Option<String>,
    namespace: OnceCell<Option<String>>,
    id: OnceCell<String>,
    implementation_class_name: OnceCell<String>,
    compiled_script_type_name: OnceCell<String>,
}

impl ScriptDescriptor {
    /// Descriptor for a script using the default suffix
    pub fn new(source_file: impl Into<PathBuf>) -> Self {
        Self::with_suffix(source_file, DEFAULT_SCRIPT_SUFFIX)
    }

    /// Descriptor for a script whose plugin name is its file name minus `suffix`
    pub fn with_suffix(source_file: impl Into<PathBuf>, suffix: &str) -> Self {
        let source_file = source_file.into();
        let file_name = source_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name_without_script_extension =
            strip_script_suffix(&file_name, suffix).to_string();

        Self {
            source_file,
            file_name,
            file_name_without_script_extension,
            namespace_keywords: DEFAULT_NAMESPACE_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
            source_text: None,
            namespace: OnceCell::new(),
            id: OnceCell::new(),
            implementation_class_name: OnceCell::new(),
            compiled_script_type_name: OnceCell::new(),
        }
    }

    /// Descriptor whose namespace is scanned from `source` instead of the file
    pub fn from_source(
        source_file: impl Into<PathBuf>,
        suffix: &str,
        source: impl Into<String>,
    ) -> Self {
        let mut descriptor = Self::with_suffix(source_file, suffix);
        descriptor.source_text = Some(source.into());
        descriptor
    }

    /// Recognize a namespace declaration introduced by any of `keywords`
    pub fn with_namespace_keywords<K: AsRef<str>>(mut self, keywords: &[K]) -> Self {
        self.namespace_keywords = keywords
            .iter()
            .map(|keyword| keyword.as_ref().to_string())
            .collect();
        self.namespace = OnceCell::new();
        self.id = OnceCell::new();
        self.compiled_script_type_name = OnceCell::new();
        self
    }

    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_name_without_script_extension(&self) -> &str {
        &self.file_name_without_script_extension
    }

    pub fn namespace_keywords(&self) -> &[String] {
        &self.namespace_keywords
    }

    /// Declared namespace; reads the script on first call
    pub fn namespace(&self) -> PluginResult<Option<&str>> {
        self.namespace
            .get_or_try_init(|| match &self.source_text {
                Some(text) => Ok(namespace_of(text, &self.namespace_keywords)),
                None => {
                    let source = read_source(&self.source_file)?;
                    Ok(namespace_of(&source, &self.namespace_keywords))
                }
            })
            .map(Option::as_deref)
    }

    /// Plugin id: `namespace.name`, or just `name` without a namespace
    pub fn id(&self) -> PluginResult<&str> {
        self.id
            .get_or_try_init(|| self.namespace_prefixed(&self.file_name_without_script_extension))
            .map(String::as_str)
    }

    /// Simple name of the generated wrapper type
    pub fn implementation_class_name(&self) -> &str {
        self.implementation_class_name
            .get_or_init(|| implementation_class_name(&self.file_name_without_script_extension))
    }

    /// Qualified name of the class compiled from the script
    pub fn compiled_script_type_name(&self) -> PluginResult<&str> {
        self.compiled_script_type_name
            .get_or_try_init(|| self.namespace_prefixed(&script_class_name_for_file(&self.file_name)))
            .map(String::as_str)
    }

    /// The (id, implementation class) pair to register
    pub fn plugin_descriptor(&self) -> PluginResult<PluginDescriptor> {
        Ok(PluginDescriptor::new(
            self.id()?,
            self.implementation_class_name(),
        ))
    }

    fn namespace_prefixed(&self, name: &str) -> PluginResult<String> {
        Ok(match self.namespace()? {
            Some(namespace) => format!("{}.{}", namespace, name),
            None => name.to_string(),
        })
    }
}
