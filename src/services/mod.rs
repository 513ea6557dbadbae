// Service exports
pub mod history;
pub mod loader;
pub mod notifier;
pub mod report;

pub use history::{format_assignments, load_history, parse_history, write_assignments, HistoryError};
pub use loader::{load_roster, parse_roster};
pub use notifier::{notify_all, DryRunNotifier, Message, MessageTemplate, Notifier, NotifyError, OutboxNotifier, DEFAULT_TEMPLATE};
pub use report::{write_bias_report, write_summary, ReportError};
