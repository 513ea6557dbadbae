use serde::{Deserialize, Serialize};
use validator::Validate;

/// One `[[participants]]` entry of a roster file
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParticipantEntry {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// One `[[unacquainted]]` entry of a roster file
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UnacquaintedEntry {
    #[validate(length(min = 1))]
    pub left: Vec<String>,
    #[validate(length(min = 1))]
    pub right: Vec<String>,
}

/// On-disk roster as written by whoever organises the exchange
///
/// ```toml
/// [[participants]]
/// name = "Alice"
/// email = "alice@example.com"
///
/// couples = [["Alice", "Bob"]]
///
/// [[unacquainted]]
/// left = ["Alice"]
/// right = ["Dave"]
///
/// history = [["Alice", "Carol"]]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RosterFile {
    #[validate(nested)]
    #[serde(default)]
    pub participants: Vec<ParticipantEntry>,
    #[serde(default)]
    pub couples: Vec<(String, String)>,
    #[validate(nested)]
    #[serde(default)]
    pub unacquainted: Vec<UnacquaintedEntry>,
    /// Prior-year pairs given inline, merged with any history file
    #[serde(default)]
    pub history: Vec<(String, String)>,
}
