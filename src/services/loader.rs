use std::fs;
use std::path::Path;

use crate::core::{Roster, RosterError};
use crate::models::RosterFile;
use crate::services::history::load_history;

/// Parse roster TOML text
pub fn parse_roster(text: &str) -> Result<RosterFile, RosterError> {
    Ok(toml::from_str(text)?)
}

/// Load the roster file and, if given, last year's assignment file
pub fn load_roster(path: &Path, history_path: Option<&Path>) -> Result<Roster, RosterError> {
    let text = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file = parse_roster(&text)?;

    let prior = match history_path {
        Some(p) => load_history(p)?,
        None => Vec::new(),
    };

    let roster = Roster::from_file(file, prior)?;

    tracing::info!(
        "Loaded roster from {}: {} participants, {} couples, {} unacquainted rules, {} prior pairs",
        path.display(),
        roster.len(),
        roster.constraints().couples().len(),
        roster.constraints().unacquainted().len(),
        roster.constraints().history().count()
    );

    Ok(roster)
}
