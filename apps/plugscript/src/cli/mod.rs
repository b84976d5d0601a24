//! CLI command handling for plugscript

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plugscript_api::Toolchain;
use plugscript_config::{logging, AppConfig};
use plugscript_lang::FsScriptSource;
use plugscript_pipeline::{
    DescriptorRegistry, ProcessToolchain, ScriptPluginPipeline, TaskPlan,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// The main CLI struct.
#[derive(Parser)]
#[command(name = "plugscript")]
#[command(about = "Turn build script files into precompiled, id-addressable plugins")]
#[command(version)]
pub struct Cli {
    /// Project directory holding the scripts and `plugscript.toml`
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// The available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List discovered script plugins with their ids and classes
    List {
        /// Output format
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },
    /// Generate wrappers, declare plugins and publish their descriptors
    Generate {
        /// Where `<id>.properties` files are written (defaults to the configured directory)
        #[arg(long)]
        descriptors_dir: Option<PathBuf>,

        /// Also run the configured compiler over scripts and wrappers
        #[arg(long)]
        compile: bool,
    },
    /// Print the compiler arguments scripts are compiled with
    Args,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.project_dir).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            cli.project_dir.display()
        )
    })?;
    logging::initialize(&config);

    match cli.command {
        Commands::List { format } => handle_list(&config, &cli.project_dir, &format),
        Commands::Generate {
            descriptors_dir,
            compile,
        } => {
            let descriptors_dir = descriptors_dir
                .map(|dir| cli.project_dir.join(dir))
                .unwrap_or_else(|| config.descriptors_dir(&cli.project_dir));
            handle_generate(&config, &cli.project_dir, &descriptors_dir, compile)
        }
        Commands::Args => handle_args(&config, &cli.project_dir),
    }
}

fn build_pipeline(config: &AppConfig, project_dir: &Path) -> ScriptPluginPipeline {
    ScriptPluginPipeline::new(
        config.script_layout(project_dir),
        Box::new(FsScriptSource),
        config.host_services(),
    )
}

/// Host tasks the pipeline hooks into
fn host_plan(config: &AppConfig) -> TaskPlan {
    TaskPlan::with_tasks([config.tasks.compile.as_str(), config.tasks.publish.as_str()])
}

fn handle_list(config: &AppConfig, project_dir: &Path, format: &str) -> Result<()> {
    let pipeline = build_pipeline(config, project_dir);
    let entries = render::script_entries(&pipeline, project_dir)?;

    let output = match format {
        "json" => serde_json::to_string_pretty(&entries)?,
        _ => render::table(&entries),
    };
    println!("{}", output);
    Ok(())
}

fn handle_generate(
    config: &AppConfig,
    project_dir: &Path,
    descriptors_dir: &Path,
    compile: bool,
) -> Result<()> {
    let mut pipeline = build_pipeline(config, project_dir);
    let mut plan = host_plan(config);
    let mut toolchain = ProcessToolchain::new(config.toolchain.command.clone());
    let mut registry = DescriptorRegistry::new();

    pipeline
        .configure(&mut plan, &mut toolchain)
        .context("Failed to configure script plugins")?;
    pipeline.finalize(&mut toolchain)?;

    for task in plan.order() {
        let _span = logging::task_span(task).entered();

        if pipeline
            .execute(task, &mut registry)
            .with_context(|| format!("Task '{}' failed", task))?
        {
            continue;
        }

        if task == config.tasks.compile {
            if compile {
                let mut sources: Vec<PathBuf> = pipeline
                    .scripts()?
                    .iter()
                    .map(|script| script.source_file().to_path_buf())
                    .collect();
                sources.extend(pipeline.wrapper_paths()?);
                toolchain
                    .compile(&sources, &[])
                    .with_context(|| format!("Task '{}' failed", task))?;
            }
        } else if task == config.tasks.publish {
            registry
                .publish(descriptors_dir)
                .with_context(|| format!("Task '{}' failed", task))?;
        }
    }

    info!(plugins = registry.len(), "Script plugins generated");
    println!(
        "Generated {} script plugin(s) into {}",
        registry.len(),
        config.script_layout(project_dir).generated_sources_dir.display()
    );
    for plugin in registry.plugins() {
        println!("  {} -> {}", plugin.id, plugin.implementation_class);
    }
    Ok(())
}

fn handle_args(config: &AppConfig, project_dir: &Path) -> Result<()> {
    let mut pipeline = build_pipeline(config, project_dir);
    let mut toolchain = ProcessToolchain::default();

    pipeline.configure(&mut host_plan(config), &mut toolchain)?;
    let arguments = pipeline.finalize(&mut toolchain)?;

    for arg in arguments.to_args() {
        println!("{}", arg);
    }
    Ok(())
}
