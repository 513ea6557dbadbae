use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Settings;

#[derive(Debug, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw secret santa gift assignments")]
pub struct Cli {
    #[arg(long, help = "Config file (default: config/default.toml and config/local.toml)")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Roster file")]
    pub roster: Option<PathBuf>,
    #[arg(long, help = "Previous year's assignment file")]
    pub history: Option<PathBuf>,
    #[arg(long, help = "Fixed RNG seed for a reproducible draw")]
    pub seed: Option<u64>,
    #[arg(long, help = "Passes to try before giving up, 0 for no limit")]
    pub max_attempts: Option<u64>,
    #[arg(long, help = "Verbose output", default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw assignments, write them out and notify the givers
    Draw(DrawArgs),
    /// Draw many times and report how often each pair came up
    Bias(BiasArgs),
}

#[derive(Debug, Args)]
pub struct DrawArgs {
    #[arg(long, help = "Assignment output file")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Notify givers through the outbox")]
    pub notify: bool,
    #[arg(long, help = "Log who would be notified instead of writing messages")]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct BiasArgs {
    #[arg(long, help = "Number of draws")]
    pub runs: Option<u64>,
    #[arg(long, help = "CSV report file")]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Fold command-line overrides into loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(path) = &self.roster {
            settings.roster.path = path.clone();
        }
        if let Some(path) = &self.history {
            settings.roster.history_path = Some(path.clone());
        }
        if let Some(seed) = self.seed {
            settings.engine.seed = Some(seed);
        }
        if let Some(max) = self.max_attempts {
            settings.engine.max_attempts = max;
        }
        if self.verbose {
            settings.logging.level = "debug".to_string();
        }

        match &self.command {
            Command::Draw(args) => {
                if let Some(path) = &args.output {
                    settings.output.assignments_path = path.clone();
                }
                if args.notify {
                    settings.notification.enabled = true;
                }
            }
            Command::Bias(args) => {
                if let Some(runs) = args.runs {
                    settings.bias.runs = runs;
                }
                if let Some(path) = &args.report {
                    settings.bias.report_path = path.clone();
                }
            }
        }
    }
}
