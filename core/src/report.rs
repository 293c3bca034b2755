//! # Report Renderer
//!
//! Persists a record collection as a flat report file. The output format is
//! chosen by file extension: `.html` gets a fixed listing template,
//! everything else (including `.json` and unrecognized extensions) gets a
//! pretty-printed JSON object `{"networks": [...]}`.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wavescan_common::network::record::NetworkRecord;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Html,
}

impl ReportFormat {
    /// A path ending in `.html` (case-sensitive) selects the HTML
    /// template; any other extension falls back to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("html") => Self::Html,
            _ => Self::Json,
        }
    }
}

#[derive(Serialize)]
struct ReportBody<'a> {
    networks: &'a [NetworkRecord],
}

/// Writes the report and returns the path it was written to. Total over
/// any record slice, the empty one included.
pub fn write_report(records: &[NetworkRecord], path: &Path) -> Result<PathBuf, ReportError> {
    let text = match ReportFormat::from_path(path) {
        ReportFormat::Json => render_json(records)?,
        ReportFormat::Html => render_html(records),
    };
    fs::write(path, text)?;
    Ok(path.to_path_buf())
}

fn render_json(records: &[NetworkRecord]) -> Result<String, ReportError> {
    let body = ReportBody { networks: records };
    Ok(serde_json::to_string_pretty(&body)?)
}

fn render_html(records: &[NetworkRecord]) -> String {
    let items: String = records
        .iter()
        .map(|n| {
            format!(
                "    <li><strong>{}</strong> — Security: {} — Signal: {}</li>\n",
                n.ssid, n.security, n.signal
            )
        })
        .collect();

    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>WiFi Assessment Report</title></head>
<body>
  <h1>WiFi Assessment Report</h1>
  <ul>
{items}  </ul>
</body>
</html>
"#
    )
}
