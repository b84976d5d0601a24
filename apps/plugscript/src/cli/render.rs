//! Output formatting for `plugscript list`

use anyhow::Result;
use plugscript_pipeline::ScriptPluginPipeline;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptEntry {
    pub id: String,
    pub implementation_class: String,
    pub compiled_type: String,
    /// Script path relative to the project directory
    pub source: String,
}

pub fn script_entries(
    pipeline: &ScriptPluginPipeline,
    project_dir: &Path,
) -> Result<Vec<ScriptEntry>> {
    pipeline
        .scripts()?
        .iter()
        .map(|script| -> Result<ScriptEntry> {
            let source = script
                .source_file()
                .strip_prefix(project_dir)
                .unwrap_or(script.source_file());
            Ok(ScriptEntry {
                id: script.id()?.to_string(),
                implementation_class: script.implementation_class_name().to_string(),
                compiled_type: script.compiled_script_type_name()?.to_string(),
                source: source.display().to_string(),
            })
        })
        .collect()
}

pub fn table(entries: &[ScriptEntry]) -> String {
    if entries.is_empty() {
        return "No script plugins found.".to_string();
    }

    let headers = ["ID", "CLASS", "COMPILED TYPE", "SOURCE"];
    let rows: Vec<[&str; 4]> = entries
        .iter()
        .map(|e| {
            [
                e.id.as_str(),
                e.implementation_class.as_str(),
                e.compiled_type.as_str(),
                e.source.as_str(),
            ]
        })
        .collect();

    // Padding in `format!` counts chars, so widths must too
    let mut widths = headers.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(&headers)];
    lines.extend(rows.iter().map(format_row));
    lines.join("\n")
}
