use crate::commands::CommandError;
use crate::config::Settings;
use crate::core::{BiasMatrix, Engine};
use crate::services::{load_roster, write_bias_report};

/// Bias command: draw `bias.runs` times and write the pair counts as CSV
///
/// One engine serves every run, so the RNG is seeded once for the whole batch.
pub fn run(settings: &Settings) -> Result<BiasMatrix, CommandError> {
    let roster = load_roster(&settings.roster.path, settings.roster.history_path.as_deref())?;

    tracing::info!(
        "Measuring bias over {} runs for {} participants",
        settings.bias.runs,
        roster.len()
    );

    let mut engine = Engine::new(settings.engine.options());
    let matrix = BiasMatrix::collect(&mut engine, &roster, settings.bias.runs)?;

    write_bias_report(&settings.bias.report_path, &matrix)?;

    Ok(matrix)
}
