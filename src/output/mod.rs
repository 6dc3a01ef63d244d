use crate::error::OutputError;
use crate::report::{Markdown, Report};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Persisted form of a run's report, read back by the review host.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportDocument {
    pub generated: String,
    pub base_dir: String,
    pub warnings: Vec<String>,
    pub markdowns: Vec<Markdown>,
    pub messages: Vec<String>,
}

/// Write report.json and report.md into the report directory.
pub fn write_report(report_dir: &Path, base_dir: &str, report: &Report) -> Result<(), OutputError> {
    // Ensure directory exists (an empty report is still written)
    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let document = ReportDocument {
        generated: Utc::now().to_rfc3339(),
        base_dir: base_dir.to_string(),
        warnings: report.warnings.clone(),
        markdowns: report.markdowns.clone(),
        messages: report.messages.clone(),
    };

    let json_path = report_dir.join("report.json");
    let json = serde_json::to_string_pretty(&document)?;
    fs::write(&json_path, json).map_err(OutputError::WriteReport)?;

    let md_path = report_dir.join("report.md");
    fs::write(&md_path, build_markdown(report)).map_err(OutputError::WriteReport)?;

    Ok(())
}

fn build_markdown(report: &Report) -> String {
    if report.is_empty() {
        return "*No issues*\n".to_string();
    }

    let mut md = String::new();

    for block in &report.markdowns {
        md.push_str(&block.message);
        if !block.message.ends_with('\n') {
            md.push('\n');
        }
        md.push('\n');
    }

    for warning in &report.warnings {
        md.push_str(&format!("> ⚠️ {}\n", warning));
    }

    if !report.messages.is_empty() {
        md.push_str("## Inline comments\n\n");
        for message in &report.messages {
            md.push_str(&format!("- {}\n", message));
        }
    }

    md
}
