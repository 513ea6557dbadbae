// Command exports
pub mod bias;
pub mod draw;

use thiserror::Error;

use crate::cli::Command;
use crate::config::Settings;
use crate::core::{EngineError, RosterError};
use crate::services::{HistoryError, NotifyError, ReportError};

/// Anything that can stop a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Persistence error: {0}")]
    History(#[from] HistoryError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Dispatch a parsed command
pub fn execute(command: &Command, settings: &Settings) -> Result<(), CommandError> {
    match command {
        Command::Draw(args) => draw::run(settings, args.dry_run).map(|_| ()),
        Command::Bias(_) => bias::run(settings).map(|_| ()),
    }
}
