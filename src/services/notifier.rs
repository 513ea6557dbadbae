use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Assignment, AssignmentSet};

/// Default message body. `{giver}` and `{receiver}` are substituted per pair.
pub const DEFAULT_TEMPLATE: &str = "\
Ho, Ho, Ho !

Hello {giver},

You have been cordially invited to the gift exchange, when we shall put gifts \
under the tree and open them after having stuffed ourselves with good food.

You are giving a gift to {receiver}.

Happy shopping !

The Secret Santa Gift Assignment Bot.
";

/// Errors that can occur dispatching notifications
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Template is missing the {0} placeholder")]
    Template(&'static str),
}

/// Subject and body shared by every message of one draw
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

impl MessageTemplate {
    /// Build a template, checking that it names the receiver
    pub fn new(
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let body = body.into();
        if !body.contains("{receiver}") {
            return Err(NotifyError::Template("{receiver}"));
        }

        Ok(Self {
            sender: sender.into(),
            subject: subject.into(),
            body,
        })
    }

    pub fn render(&self, assignment: &Assignment) -> Message {
        Message {
            from: self.sender.clone(),
            to: assignment.giver.email.clone(),
            to_name: assignment.giver.name.clone(),
            subject: self.subject.clone(),
            body: self
                .body
                .replace("{giver}", &assignment.giver.name)
                .replace("{receiver}", &assignment.receiver.name),
        }
    }
}

/// One message for one giver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub to_name: String,
    pub subject: String,
    pub body: String,
}

/// Something that can deliver a message to a giver
pub trait Notifier {
    fn send(&mut self, message: &Message) -> Result<(), NotifyError>;
}

/// Writes each message as an RFC 5322 style file, one per giver
///
/// Actual delivery is left to whatever picks the files up. Givers whose
/// names sanitize to the same stem get numbered files (`Mary_Ann-2.eml`).
#[derive(Debug, Clone)]
pub struct OutboxNotifier {
    dir: PathBuf,
    used: HashSet<String>,
}

impl OutboxNotifier {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, NotifyError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| NotifyError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(Self {
            dir,
            used: HashSet::new(),
        })
    }

    /// Claim a file name for `message` not yet handed out by this notifier
    fn file_name(&mut self, message: &Message) -> String {
        let stem: String = message
            .to_name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();

        let mut name = format!("{}.eml", stem);
        let mut n = 1;
        while !self.used.insert(name.clone()) {
            n += 1;
            name = format!("{}-{}.eml", stem, n);
        }
        name
    }
}

impl Notifier for OutboxNotifier {
    fn send(&mut self, message: &Message) -> Result<(), NotifyError> {
        let name = self.file_name(message);
        let path = self.dir.join(name);
        let contents = format!(
            "From: {}\nTo: {}\nSubject: {}\nDate: {}\n\n{}",
            message.from,
            message.to,
            message.subject,
            chrono::Utc::now().to_rfc2822(),
            message.body
        );

        fs::write(&path, contents).map_err(|source| NotifyError::Io {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!("Queued message for {} <{}>", message.to_name, message.to);
        Ok(())
    }
}

/// Logs who would be notified and keeps the messages in memory
///
/// The log line names the giver only, never the receiver.
#[derive(Debug, Clone, Default)]
pub struct DryRunNotifier {
    sent: Vec<Message>,
}

impl DryRunNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> &[Message] {
        &self.sent
    }
}

impl Notifier for DryRunNotifier {
    fn send(&mut self, message: &Message) -> Result<(), NotifyError> {
        tracing::warn!("Dry run: not sending message to {} <{}>", message.to_name, message.to);
        self.sent.push(message.clone());
        Ok(())
    }
}

/// Send one message per assignment to the giver, returning how many went out
pub fn notify_all<N: Notifier + ?Sized>(
    notifier: &mut N,
    assignments: &AssignmentSet,
    template: &MessageTemplate,
) -> Result<usize, NotifyError> {
    let mut sent = 0;
    for assignment in assignments {
        notifier.send(&template.render(assignment))?;
        sent += 1;
    }
    Ok(sent)
}
