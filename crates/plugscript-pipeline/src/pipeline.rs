//! Pipeline orchestrator wiring script plugins into a build

use crate::host::HostServices;
use crate::layout::ScriptLayout;
use once_cell::sync::OnceCell;
use plugscript_api::{
    CompilerArguments, PluginDescriptor, PluginDescriptorStore, PluginResult, PluginScriptError,
    ScriptSource, TaskGraph, Toolchain,
};
use plugscript_codegen::{WrapperGenerator, WrapperTemplate};
use plugscript_lang::{is_valid_qualified_name, is_valid_type_identifier, ScriptDescriptor};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Configured,
    Finalized,
}

/// Turns every discovered script into a generated, registered plugin
///
/// Use runs in two explicit phases. [`configure`](Self::configure) discovers
/// scripts and wires tasks into the host graph; once the host's configuration
/// has settled, [`finalize`](Self::finalize) computes the compiler arguments.
/// The host then runs the scheduled tasks, calling
/// [`execute`](Self::execute) for the two tasks the pipeline owns.
pub struct ScriptPluginPipeline {
    layout: ScriptLayout,
    source: Box<dyn ScriptSource>,
    host: HostServices,
    generator: WrapperGenerator,
    scripts: OnceCell<Vec<ScriptDescriptor>>,
    phase: Phase,
    compiler_arguments: Option<CompilerArguments>,
}

impl ScriptPluginPipeline {
    pub fn new(layout: ScriptLayout, source: Box<dyn ScriptSource>, host: HostServices) -> Self {
        let template = WrapperTemplate::new(
            host.project_context_type.clone(),
            layout.wrapper_extension.clone(),
        );
        let generator = WrapperGenerator::new(layout.generated_sources_dir.clone(), template);

        Self {
            layout,
            source,
            host,
            generator,
            scripts: OnceCell::new(),
            phase: Phase::Created,
            compiler_arguments: None,
        }
    }

    pub fn layout(&self) -> &ScriptLayout {
        &self.layout
    }

    /// Descriptors for all discovered scripts, discovered on first call
    pub fn scripts(&self) -> PluginResult<&[ScriptDescriptor]> {
        self.scripts
            .get_or_try_init(|| {
                let files = self
                    .source
                    .enumerate(&self.layout.source_root, &self.layout.script_pattern)?;

                info!(
                    root = %self.layout.source_root.display(),
                    count = files.len(),
                    "Discovered script plugins"
                );

                Ok(files
                    .into_iter()
                    .map(|file| {
                        ScriptDescriptor::with_suffix(file, &self.layout.script_suffix)
                            .with_namespace_keywords(&self.layout.namespace_keywords)
                    })
                    .collect())
            })
            .map(Vec::as_slice)
    }

    /// Configuration phase: wire generation and declaration into the task graph
    #[instrument(skip_all)]
    pub fn configure(
        &mut self,
        graph: &mut dyn TaskGraph,
        toolchain: &mut dyn Toolchain,
    ) -> PluginResult<()> {
        if self.phase != Phase::Created {
            return Err(PluginScriptError::phase("pipeline is already configured"));
        }

        let scripts = self.scripts()?;
        for script in scripts {
            let class = script.implementation_class_name();
            if !is_valid_type_identifier(class) {
                return Err(PluginScriptError::invalid_class_name(
                    script.source_file(),
                    class,
                ));
            }
        }

        let inputs: Vec<PathBuf> = scripts
            .iter()
            .map(|script| script.source_file().to_path_buf())
            .collect();
        let tasks = &self.layout.tasks;
        for anchor in [&tasks.compile, &tasks.publish] {
            if !graph.contains_task(anchor) {
                return Err(PluginScriptError::unknown_task(anchor.as_str()));
            }
        }

        graph.declare_task_inputs(&tasks.generate, &inputs);
        graph.declare_task_outputs(&tasks.generate, &self.layout.generated_sources_dir);
        graph.insert_task_before(&tasks.compile, &tasks.generate)?;

        graph.declare_task_inputs(&tasks.declare, &inputs);
        graph.insert_task_before(&tasks.publish, &tasks.declare)?;

        toolchain.add_source_root(&self.layout.generated_sources_dir);

        debug!(scripts = inputs.len(), "Script plugin tasks wired");
        self.phase = Phase::Configured;
        Ok(())
    }

    /// Finalize phase: append script templates and implicit imports to the
    /// compile task
    ///
    /// Must run after [`configure`](Self::configure), once all configuration
    /// contributions are known. Implicit imports are queried here, not earlier.
    #[instrument(skip_all)]
    pub fn finalize(&mut self, toolchain: &mut dyn Toolchain) -> PluginResult<CompilerArguments> {
        match self.phase {
            Phase::Created => {
                return Err(PluginScriptError::phase(
                    "configure must run before finalize",
                ))
            }
            Phase::Finalized => return Err(PluginScriptError::phase("pipeline is already finalized")),
            Phase::Configured => {}
        }

        let arguments = CompilerArguments {
            script_templates: self.host.script_templates.clone(),
            implicit_imports: self.host.implicit_imports.implicit_imports(),
        };
        toolchain.append_compiler_args(&arguments.to_args());

        debug!(
            templates = arguments.script_templates.len(),
            imports = arguments.implicit_imports.len(),
            "Compiler arguments finalized"
        );
        self.compiler_arguments = Some(arguments.clone());
        self.phase = Phase::Finalized;
        Ok(arguments)
    }

    /// Arguments computed by [`finalize`](Self::finalize), if it has run
    pub fn compiler_arguments(&self) -> Option<&CompilerArguments> {
        self.compiler_arguments.as_ref()
    }

    /// Generation task action: write one wrapper per script
    ///
    /// The output directory is cleared first, so wrappers of renamed or
    /// removed scripts do not outlive them.
    #[instrument(skip(self))]
    pub fn generate_wrappers(&self) -> PluginResult<Vec<PathBuf>> {
        let scripts = self.scripts()?;
        self.generator.clean_output_dir()?;
        let mut written = Vec::with_capacity(scripts.len());

        for script in scripts {
            let compiled_type = script.compiled_script_type_name()?;
            if !is_valid_qualified_name(compiled_type) {
                warn!(
                    script = %script.source_file().display(),
                    compiled_type,
                    "Compiled script type is not a valid qualified name"
                );
            }
            written.push(self.generator.generate(script)?);
        }

        info!(count = written.len(), "Generated script plugin wrappers");
        Ok(written)
    }

    /// Declaration task action: register every (id, class) pair with `store`
    ///
    /// Duplicate ids are not checked here; the store's rejection propagates.
    #[instrument(skip_all)]
    pub fn declare_plugins(&self, store: &mut dyn PluginDescriptorStore) -> PluginResult<usize> {
        let scripts = self.scripts()?;

        for script in scripts {
            let id = script.id()?;
            let class = script.implementation_class_name();
            store.register_plugin_descriptor(id, class)?;
            debug!(id, class, "Declared script plugin");
        }

        info!(count = scripts.len(), "Declared script plugins");
        Ok(scripts.len())
    }

    /// Run a task owned by the pipeline
    ///
    /// Returns `Ok(false)` when `task` belongs to the host.
    pub fn execute(&self, task: &str, store: &mut dyn PluginDescriptorStore) -> PluginResult<bool> {
        let tasks = &self.layout.tasks;
        if task == tasks.generate {
            self.generate_wrappers()?;
        } else if task == tasks.declare {
            self.declare_plugins(store)?;
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// (id, class) pair of every script
    pub fn plugin_descriptors(&self) -> PluginResult<Vec<PluginDescriptor>> {
        self.scripts()?
            .iter()
            .map(ScriptDescriptor::plugin_descriptor)
            .collect()
    }

    /// Paths the generation task writes
    pub fn wrapper_paths(&self) -> PluginResult<Vec<PathBuf>> {
        Ok(self
            .scripts()?
            .iter()
            .map(|script| self.generator.wrapper_path(script))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticImplicitImports;
    use crate::registry::DescriptorRegistry;
    use crate::task_plan::TaskPlan;
    use crate::toolchain::ProcessToolchain;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    struct FixedScripts(Vec<PathBuf>);

    impl ScriptSource for FixedScripts {
        fn enumerate(&self, _root: &Path, _pattern: &str) -> PluginResult<Vec<PathBuf>> {
            Ok(self.0.clone())
        }
    }

    fn pipeline(files: &[&str]) -> ScriptPluginPipeline {
        let files = files.iter().map(PathBuf::from).collect();
        ScriptPluginPipeline::new(
            ScriptLayout::default(),
            Box::new(FixedScripts(files)),
            HostServices::new(StaticImplicitImports(vec!["org.acme.*".to_string()])),
        )
    }

    fn host_plan() -> TaskPlan {
        TaskPlan::with_tasks(["compileKotlin", "pluginDescriptors"])
    }

    #[test]
    fn test_configure_wires_tasks() {
        let mut pipeline = pipeline(&["src/main/kotlin/a.gradle.kts"]);
        let mut plan = host_plan();
        let mut toolchain = ProcessToolchain::default();

        pipeline.configure(&mut plan, &mut toolchain).unwrap();

        assert_eq!(
            plan.order(),
            vec![
                "generateScriptPluginAdapters",
                "compileKotlin",
                "declareScriptPlugins",
                "pluginDescriptors",
            ]
        );
        let generate = plan.task("generateScriptPluginAdapters").unwrap();
        assert_eq!(generate.inputs, vec![PathBuf::from("src/main/kotlin/a.gradle.kts")]);
        assert_eq!(
            generate.outputs,
            vec![PathBuf::from(crate::layout::DEFAULT_GENERATED_SOURCES_DIR)]
        );
        assert_eq!(
            toolchain.source_roots(),
            &[PathBuf::from(crate::layout::DEFAULT_GENERATED_SOURCES_DIR)]
        );
        // Nothing is appended before finalize
        assert!(toolchain.compiler_args().is_empty());
    }

    #[test]
    fn test_configure_requires_host_tasks() {
        let mut pipeline = pipeline(&[]);
        let err = pipeline
            .configure(&mut TaskPlan::new(), &mut ProcessToolchain::default())
            .unwrap_err();
        assert!(matches!(err, PluginScriptError::UnknownTask { .. }));
    }

    #[test]
    fn test_invalid_class_name_rejected() {
        let mut pipeline = pipeline(&["1st-plugin.gradle.kts"]);
        let err = pipeline
            .configure(&mut host_plan(), &mut ProcessToolchain::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PluginScriptError::InvalidClassName { ref name, .. } if name == "1stPlugin"
        ));
    }

    #[test]
    fn test_double_hyphen_class_name_rejected() {
        let mut pipeline = pipeline(&["my--plugin.gradle.kts"]);
        let err = pipeline
            .configure(&mut host_plan(), &mut ProcessToolchain::default())
            .unwrap_err();
        assert!(err.to_string().contains("'My-Plugin'"));
    }

    #[test]
    fn test_phase_order_enforced() {
        let mut pipeline = pipeline(&[]);
        let mut toolchain = ProcessToolchain::default();

        assert!(matches!(
            pipeline.finalize(&mut toolchain),
            Err(PluginScriptError::Phase { .. })
        ));

        pipeline.configure(&mut host_plan(), &mut toolchain).unwrap();
        assert!(matches!(
            pipeline.configure(&mut host_plan(), &mut toolchain),
            Err(PluginScriptError::Phase { .. })
        ));

        pipeline.finalize(&mut toolchain).unwrap();
        assert!(matches!(
            pipeline.finalize(&mut toolchain),
            Err(PluginScriptError::Phase { .. })
        ));
    }

    #[test]
    fn test_finalize_appends_arguments() {
        let mut pipeline = pipeline(&[]);
        let mut toolchain = ProcessToolchain::default();
        pipeline.configure(&mut host_plan(), &mut toolchain).unwrap();

        let arguments = pipeline.finalize(&mut toolchain).unwrap();

        assert_eq!(arguments.implicit_imports, vec!["org.acme.*".to_string()]);
        assert_eq!(toolchain.compiler_args(), arguments.to_args().as_slice());
        assert_eq!(pipeline.compiler_arguments(), Some(&arguments));
    }

    #[test]
    fn test_execute_dispatch() {
        let pipeline = pipeline(&[]);
        let mut registry = DescriptorRegistry::new();

        assert!(pipeline.execute("declareScriptPlugins", &mut registry).unwrap());
        assert!(pipeline
            .execute("generateScriptPluginAdapters", &mut registry)
            .unwrap());
        assert!(!pipeline.execute("compileKotlin", &mut registry).unwrap());
    }
}
