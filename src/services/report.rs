use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::BiasMatrix;
use crate::models::DrawSummary;

/// Errors that can occur writing reports
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io)?;
    }
    fs::write(path, contents).map_err(io)
}

/// Write the bias matrix as CSV
pub fn write_bias_report(path: &Path, matrix: &BiasMatrix) -> Result<(), ReportError> {
    write_file(path, &matrix.to_csv())?;
    tracing::info!("Wrote bias report over {} runs to {}", matrix.runs(), path.display());
    Ok(())
}

/// Write the run summary as pretty JSON
pub fn write_summary(path: &Path, summary: &DrawSummary) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(summary)?;
    write_file(path, &json)?;
    tracing::debug!("Wrote run summary to {}", path.display());
    Ok(())
}
