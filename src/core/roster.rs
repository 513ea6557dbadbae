use std::collections::HashSet;

use thiserror::Error;
use validator::Validate;

use crate::core::constraints::ConstraintSet;
use crate::models::{Couple, Participant, PriorAssignment, RosterFile, UnacquaintedRule};

/// Errors raised while turning a roster file into engine input
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(String),

    #[error("Unknown participant {name} referenced by {rule}")]
    UnknownParticipant { name: String, rule: &'static str },

    #[error("History error: {0}")]
    History(#[from] crate::services::history::HistoryError),
}

/// Participants plus the rules that bind them, fixed for one run
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
    constraints: ConstraintSet,
}

impl Roster {
    pub fn new(participants: Vec<Participant>, constraints: ConstraintSet) -> Self {
        Self {
            participants,
            constraints,
        }
    }

    /// Build a roster from a parsed roster file
    ///
    /// `prior` holds last year's pairs loaded from elsewhere; they are merged
    /// with any inline `history`. Couples and unacquainted rules must only name
    /// known participants. Prior pairs naming someone absent this year are
    /// dropped, since the group changes from year to year.
    pub fn from_file(file: RosterFile, prior: Vec<PriorAssignment>) -> Result<Self, RosterError> {
        file.validate()?;

        let mut names = HashSet::with_capacity(file.participants.len());
        for entry in &file.participants {
            if !names.insert(entry.name.clone()) {
                return Err(RosterError::DuplicateParticipant(entry.name.clone()));
            }
        }

        let known = |name: &str, rule: &'static str| -> Result<(), RosterError> {
            if names.contains(name) {
                Ok(())
            } else {
                Err(RosterError::UnknownParticipant {
                    name: name.to_string(),
                    rule,
                })
            }
        };

        let mut constraints = ConstraintSet::new();

        for (a, b) in file.couples {
            known(&a, "couples")?;
            known(&b, "couples")?;
            constraints.add_couple(Couple::new(a, b));
        }

        for entry in file.unacquainted {
            for name in entry.left.iter().chain(entry.right.iter()) {
                known(name, "unacquainted")?;
            }
            constraints.add_unacquainted(UnacquaintedRule::new(entry.left, entry.right));
        }

        let inline = file
            .history
            .into_iter()
            .map(|(giver, receiver)| PriorAssignment::new(giver, receiver));

        for pair in inline.chain(prior) {
            if names.contains(&pair.giver) && names.contains(&pair.receiver) {
                constraints.add_history(pair);
            } else {
                tracing::warn!(
                    "Skipping prior pair {} -> {}: not in this year's roster",
                    pair.giver,
                    pair.receiver
                );
            }
        }

        let participants = file
            .participants
            .into_iter()
            .map(|entry| Participant::new(entry.name, entry.email))
            .collect();

        Ok(Self {
            participants,
            constraints,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// First participant who could never give to, or never receive from, anybody
    pub fn first_isolated(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| {
            let gives = self
                .participants
                .iter()
                .any(|other| self.constraints.is_admissible(p, other));
            let receives = self
                .participants
                .iter()
                .any(|other| self.constraints.is_admissible(other, p));
            !(gives && receives)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParticipantEntry, UnacquaintedEntry};

    fn entry(name: &str) -> ParticipantEntry {
        ParticipantEntry {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn create_test_file() -> RosterFile {
        RosterFile {
            participants: vec![entry("Alice"), entry("Bob"), entry("Carol"), entry("Dave")],
            couples: vec![("Alice".to_string(), "Bob".to_string())],
            unacquainted: vec![UnacquaintedEntry {
                left: vec!["Carol".to_string()],
                right: vec!["Dave".to_string()],
            }],
            history: vec![("Alice".to_string(), "Carol".to_string())],
        }
    }

    #[test]
    fn test_from_file_builds_constraints() {
        let roster = Roster::from_file(create_test_file(), vec![]).unwrap();

        assert_eq!(roster.len(), 4);
        assert_eq!(roster.constraints().couples().len(), 1);
        assert_eq!(roster.constraints().unacquainted().len(), 1);
        assert_eq!(roster.constraints().history().count(), 1);

        let alice = roster.find("Alice").unwrap();
        let carol = roster.find("Carol").unwrap();
        assert!(!roster.constraints().is_admissible(alice, carol));
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let mut file = create_test_file();
        file.participants.push(entry("Alice"));

        let err = Roster::from_file(file, vec![]).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateParticipant(name) if name == "Alice"));
    }

    #[test]
    fn test_unknown_couple_member_rejected() {
        let mut file = create_test_file();
        file.couples.push(("Carol".to_string(), "Zed".to_string()));

        let err = Roster::from_file(file, vec![]).unwrap_err();
        assert!(matches!(
            err,
            RosterError::UnknownParticipant { ref name, rule: "couples" } if name == "Zed"
        ));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut file = create_test_file();
        file.participants[0].email = "not-an-address".to_string();

        assert!(matches!(
            Roster::from_file(file, vec![]),
            Err(RosterError::Validation(_))
        ));
    }

    #[test]
    fn test_prior_pairs_for_absent_people_dropped() {
        let prior = vec![
            PriorAssignment::new("Bob", "Dave"),
            PriorAssignment::new("Bob", "Eleanor"),
        ];

        let roster = Roster::from_file(create_test_file(), prior).unwrap();

        // inline Alice -> Carol plus Bob -> Dave
        assert_eq!(roster.constraints().history().count(), 2);
    }

    #[test]
    fn test_first_isolated() {
        let roster = Roster::from_file(create_test_file(), vec![]).unwrap();
        assert!(roster.first_isolated().is_none());

        let solo = Roster::new(vec![Participant::new("Solo", "solo@example.com")], ConstraintSet::new());
        assert_eq!(solo.first_isolated().map(|p| p.name.as_str()), Some("Solo"));
    }
}
