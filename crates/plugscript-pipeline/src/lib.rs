//! Build pipeline for precompiled script plugins
//!
//! Wires script discovery, wrapper generation and plugin registration into a
//! host build:
//!
//! 1. Scripts under the source root become [`ScriptDescriptor`]s.
//! 2. A generation task writing one wrapper per script is scheduled right
//!    before compilation, and the generated directory becomes a source root.
//! 3. A declaration task registering `(id, class)` pairs is scheduled right
//!    before descriptor publishing.
//! 4. After configuration settles, script templates and implicit imports are
//!    appended to the compiler arguments.
//!
//! [`ScriptDescriptor`]: plugscript_lang::ScriptDescriptor
//!
//! # Example
//!
//! ```rust,no_run
//! use plugscript_lang::FsScriptSource;
//! use plugscript_pipeline::{
//!     DescriptorRegistry, HostServices, ProcessToolchain, ScriptLayout, ScriptPluginPipeline,
//!     StaticImplicitImports, TaskPlan,
//! };
//!
//! let mut pipeline = ScriptPluginPipeline::new(
//!     ScriptLayout::default(),
//!     Box::new(FsScriptSource),
//!     HostServices::new(StaticImplicitImports(vec!["org.gradle.api.*".into()])),
//! );
//! let mut plan = TaskPlan::with_tasks(["compileKotlin", "pluginDescriptors"]);
//! let mut toolchain = ProcessToolchain::default();
//! let mut registry = DescriptorRegistry::new();
//!
//! pipeline.configure(&mut plan, &mut toolchain)?;
//! pipeline.finalize(&mut toolchain)?;
//! for task in plan.order() {
//!     pipeline.execute(task, &mut registry)?;
//! }
//! # Ok::<(), plugscript_api::PluginScriptError>(())
//! ```

pub mod host;
pub mod layout;
pub mod pipeline;
pub mod registry;
pub mod task_plan;
pub mod toolchain;

pub use host::{HostServices, StaticImplicitImports, DEFAULT_SCRIPT_TEMPLATES};
pub use layout::{
    ScriptLayout, TaskNames, DEFAULT_GENERATED_SOURCES_DIR, DEFAULT_SCRIPT_PATTERN,
    DEFAULT_SOURCE_ROOT,
};
pub use pipeline::ScriptPluginPipeline;
pub use registry::{DescriptorRegistry, IMPLEMENTATION_CLASS_KEY};
pub use task_plan::{TaskNode, TaskPlan};
pub use toolchain::ProcessToolchain;
