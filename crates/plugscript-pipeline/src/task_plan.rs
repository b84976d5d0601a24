//! Ordered in-memory task graph

use plugscript_api::{PluginResult, PluginScriptError, TaskGraph};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Declared inputs and outputs of one task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskNode {
    pub inputs: Vec<PathBuf>,
    pub outputs: Vec<PathBuf>,
}

/// A linear task schedule
///
/// Tasks may have inputs/outputs declared before they are scheduled; only
/// scheduled tasks appear in [`TaskPlan::order`].
#[derive(Debug, Clone, Default)]
pub struct TaskPlan {
    order: Vec<String>,
    nodes: BTreeMap<String, TaskNode>,
}

impl TaskPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan with `names` scheduled in sequence
    pub fn with_tasks<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut plan = Self::new();
        for name in names {
            plan.push(name);
        }
        plan
    }

    /// Schedule `name` last
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.order.retain(|existing| *existing != name);
        self.nodes.entry(name.clone()).or_default();
        self.order.push(name);
    }

    /// Scheduled task names, in execution order
    pub fn order(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|task| task == name)
    }

    pub fn task(&self, name: &str) -> Option<&TaskNode> {
        self.nodes.get(name)
    }
}

impl TaskGraph for TaskPlan {
    fn declare_task_inputs(&mut self, task: &str, files: &[PathBuf]) {
        self.nodes
            .entry(task.to_string())
            .or_default()
            .inputs
            .extend_from_slice(files);
    }

    fn declare_task_outputs(&mut self, task: &str, dir: &Path) {
        self.nodes
            .entry(task.to_string())
            .or_default()
            .outputs
            .push(dir.to_path_buf());
    }

    fn insert_task_before(&mut self, anchor: &str, task: &str) -> PluginResult<()> {
        if !self.contains_task(anchor) {
            return Err(PluginScriptError::unknown_task(anchor));
        }

        self.order.retain(|existing| existing != task);
        let index = self.position(anchor).unwrap_or(self.order.len());
        self.order.insert(index, task.to_string());
        self.nodes.entry(task.to_string()).or_default();

        debug!(task, anchor, "Scheduled task");
        Ok(())
    }

    /// Only scheduled tasks count; declared-only nodes cannot anchor anything
    fn contains_task(&self, task: &str) -> bool {
        self.position(task).is_some()
    }
}
