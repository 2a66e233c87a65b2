pub mod human;
pub mod json;
pub mod md;

use crate::error::{EvalError, Result};
use crate::types::config::ReportConfig;
use crate::types::report::EvaluationReport;
use crate::types::scoring::TextAnalysis;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

#[derive(Debug, Clone, Serialize)]
pub struct StaticEntry {
    pub path: String,
    pub snippets: usize,
    pub analysis: TextAnalysis,
}

pub fn render(reports: &[EvaluationReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(human::to_text)
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => json::to_json(reports).map_err(EvalError::Json),
        OutputFormat::Md => Ok(md::to_markdown(reports)),
    }
}

pub fn render_static(entries: &[StaticEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(human::static_to_text(entries)),
        OutputFormat::Json => serde_json::to_string_pretty(entries).map_err(EvalError::Json),
        OutputFormat::Md => Ok(md::static_to_markdown(entries)),
    }
}

/// Persists reports under the configured folder: the merged machine-readable
/// results file always, and one human-readable text file per library when
/// requested. Nothing is written without a folder.
pub fn write_reports(
    reports: &[EvaluationReport],
    settings: &ReportConfig,
    compare: bool,
) -> Result<Vec<PathBuf>> {
    let Some(folder) = &settings.folder_path else {
        return Ok(Vec::new());
    };
    fs::create_dir_all(folder)?;

    let mut written = Vec::new();
    for report in reports {
        if settings.human_readable {
            let path = folder.join(human::file_name(&report.library, compare));
            fs::write(&path, human::to_text(report))?;
            written.push(path);
        }
        let path = json::merge_into_results(folder, report, compare)?;
        if !written.contains(&path) {
            written.push(path);
        }
    }
    info!(files = written.len(), folder = %folder.display(), "wrote reports");
    Ok(written)
}
