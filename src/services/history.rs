use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::{AssignmentSet, PriorAssignment};

/// Errors that can occur reading or writing assignment files
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line}: {content:?}")]
    Malformed { line: usize, content: String },
}

impl HistoryError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        HistoryError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Render assignments as `giver -> receiver` lines
pub fn format_assignments(assignments: &AssignmentSet) -> String {
    assignments
        .iter()
        .map(|a| format!("{}\n", a))
        .collect()
}

/// Write assignments to `path`, one `giver -> receiver` line each
pub fn write_assignments(path: &Path, assignments: &AssignmentSet) -> Result<(), HistoryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| HistoryError::io(parent, e))?;
    }

    fs::write(path, format_assignments(assignments)).map_err(|e| HistoryError::io(path, e))?;

    tracing::info!("Wrote {} assignments to {}", assignments.len(), path.display());
    Ok(())
}

/// Parse a previous year's assignment file
///
/// Each line is `giver -> receiver`. Lines without an arrow are read as three
/// whitespace-separated tokens with the middle one ignored. Blank lines and
/// lines starting with `#` are skipped.
pub fn parse_history(text: &str) -> Result<Vec<PriorAssignment>, HistoryError> {
    let mut pairs = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = match line.split_once("->") {
            Some((giver, receiver)) => Some((giver.trim(), receiver.trim())),
            None => match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                [giver, _, receiver] => Some((*giver, *receiver)),
                _ => None,
            },
        };

        match parsed {
            Some((giver, receiver)) if !giver.is_empty() && !receiver.is_empty() => {
                pairs.push(PriorAssignment::new(giver, receiver))
            }
            _ => {
                return Err(HistoryError::Malformed {
                    line: idx + 1,
                    content: raw.to_string(),
                })
            }
        }
    }

    Ok(pairs)
}

/// Read and parse a previous year's assignment file
pub fn load_history(path: &Path) -> Result<Vec<PriorAssignment>, HistoryError> {
    let text = fs::read_to_string(path).map_err(|e| HistoryError::io(path, e))?;
    let pairs = parse_history(&text)?;

    tracing::info!("Loaded {} prior assignments from {}", pairs.len(), path.display());
    Ok(pairs)
}
