use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::{EngineOptions, ReceiverPolicy, DEFAULT_MAX_ATTEMPTS};
use crate::services::DEFAULT_TEMPLATE;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub roster: RosterSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub notification: NotificationSettings,
    #[serde(default)]
    pub bias: BiasSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterSettings {
    #[serde(default = "default_roster_path")]
    pub path: PathBuf,
    /// Last year's `giver -> receiver` file
    pub history_path: Option<PathBuf>,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            path: default_roster_path(),
            history_path: None,
        }
    }
}

fn default_roster_path() -> PathBuf { PathBuf::from("roster.toml") }

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Zero means retry forever
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u64,
    pub seed: Option<u64>,
    #[serde(default)]
    pub receiver_policy: ReceiverPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            seed: None,
            receiver_policy: ReceiverPolicy::default(),
        }
    }
}

impl EngineSettings {
    pub fn options(&self) -> EngineOptions {
        EngineOptions {
            max_attempts: (self.max_attempts > 0).then_some(self.max_attempts),
            receiver_policy: self.receiver_policy,
            seed: self.seed,
        }
    }
}

fn default_max_attempts() -> u64 { DEFAULT_MAX_ATTEMPTS }

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_assignments_path")]
    pub assignments_path: PathBuf,
    pub summary_path: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            assignments_path: default_assignments_path(),
            summary_path: None,
        }
    }
}

fn default_assignments_path() -> PathBuf { PathBuf::from("assignments.txt") }

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_outbox_dir")]
    pub outbox_dir: PathBuf,
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Message body with `{giver}` and `{receiver}` placeholders
    #[serde(default = "default_template")]
    pub template: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            outbox_dir: default_outbox_dir(),
            sender: default_sender(),
            subject: default_subject(),
            template: default_template(),
        }
    }
}

fn default_outbox_dir() -> PathBuf { PathBuf::from("outbox") }
fn default_sender() -> String { "santa@localhost".to_string() }
fn default_subject() -> String { "Secret Santa".to_string() }
fn default_template() -> String { DEFAULT_TEMPLATE.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct BiasSettings {
    #[serde(default = "default_bias_runs")]
    pub runs: u64,
    #[serde(default = "default_bias_report_path")]
    pub report_path: PathBuf,
}

impl Default for BiasSettings {
    fn default() -> Self {
        Self {
            runs: default_bias_runs(),
            report_path: default_bias_report_path(),
        }
    }
}

fn default_bias_runs() -> u64 { 100 }
fn default_bias_report_path() -> PathBuf { PathBuf::from("bias.csv") }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SANTA__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SANTA__ENGINE__MAX_ATTEMPTS -> engine.max_attempts
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SANTA")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
