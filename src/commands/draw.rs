use crate::commands::CommandError;
use crate::config::Settings;
use crate::core::Engine;
use crate::models::DrawSummary;
use crate::services::{
    load_roster, notify_all, write_assignments, write_summary, DryRunNotifier, MessageTemplate,
    Notifier, OutboxNotifier,
};

/// Draw command
///
/// 1. Load the roster and last year's pairs
/// 2. Run the engine until a valid draw comes out
/// 3. Write `giver -> receiver` lines
/// 4. Notify each giver, if enabled
/// 5. Write the run summary, if configured
pub fn run(settings: &Settings, dry_run: bool) -> Result<DrawSummary, CommandError> {
    let roster = load_roster(&settings.roster.path, settings.roster.history_path.as_deref())?;

    let options = settings.engine.options();
    tracing::info!(
        "Drawing for {} participants (max attempts: {:?}, policy: {:?})",
        roster.len(),
        options.max_attempts,
        options.receiver_policy
    );

    let mut engine = Engine::new(options);
    let draw = engine.run(&roster)?;

    tracing::info!(
        "Draw complete after {} attempt(s) ({} stalled, {} rejected)",
        draw.stats.attempts,
        draw.stats.stalled,
        draw.stats.rejected
    );

    write_assignments(&settings.output.assignments_path, &draw.assignments)?;

    let notified = if settings.notification.enabled || dry_run {
        let template = MessageTemplate::new(
            settings.notification.sender.clone(),
            settings.notification.subject.clone(),
            settings.notification.template.clone(),
        )?;

        let mut notifier: Box<dyn Notifier> = if dry_run {
            Box::new(DryRunNotifier::new())
        } else {
            Box::new(OutboxNotifier::new(&settings.notification.outbox_dir)?)
        };

        let sent = notify_all(notifier.as_mut(), &draw.assignments, &template)?;
        tracing::info!("Notified {} givers", sent);
        sent
    } else {
        tracing::debug!("Notifications disabled");
        0
    };

    let summary = DrawSummary {
        participants: roster.len(),
        assignments: draw.assignments.len(),
        stats: draw.stats,
        notified,
        seed: options.seed,
        drawn_at: chrono::Utc::now(),
    };

    if let Some(path) = &settings.output.summary_path {
        write_summary(path, &summary)?;
    }

    Ok(summary)
}
