use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{AssignmentSet, Participant};

/// How strictly receivers are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverPolicy {
    /// Every participant gives once and receives once
    #[default]
    Unique,
    /// Only the giver count and reciprocal pairs are checked
    GiversOnly,
}

/// Why an assignment set was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    WrongSize { expected: usize, actual: usize },
    Reciprocal { a: String, b: String },
    DuplicateGiver(String),
    DuplicateReceiver(String),
    UnknownParticipant(String),
}

/// Check a complete assignment set, reporting the first problem found
pub fn validate(
    assignments: &AssignmentSet,
    participants: &[Participant],
    policy: ReceiverPolicy,
) -> Result<(), Violation> {
    if assignments.len() != participants.len() {
        return Err(Violation::WrongSize {
            expected: participants.len(),
            actual: assignments.len(),
        });
    }

    // Direct exchanges: (A, B) together with (B, A)
    let directed: HashSet<(&Participant, &Participant)> = assignments
        .iter()
        .map(|a| (&a.giver, &a.receiver))
        .collect();
    if let Some(a) = assignments
        .iter()
        .find(|a| directed.contains(&(&a.receiver, &a.giver)))
    {
        return Err(Violation::Reciprocal {
            a: a.giver.name.clone(),
            b: a.receiver.name.clone(),
        });
    }

    if policy == ReceiverPolicy::GiversOnly {
        return Ok(());
    }

    let known: HashSet<&Participant> = participants.iter().collect();
    let mut givers = HashSet::with_capacity(participants.len());
    let mut receivers = HashSet::with_capacity(participants.len());

    for a in assignments {
        for p in [&a.giver, &a.receiver] {
            if !known.contains(p) {
                return Err(Violation::UnknownParticipant(p.name.clone()));
            }
        }
        if !givers.insert(&a.giver) {
            return Err(Violation::DuplicateGiver(a.giver.name.clone()));
        }
        if !receivers.insert(&a.receiver) {
            return Err(Violation::DuplicateReceiver(a.receiver.name.clone()));
        }
    }

    Ok(())
}

/// Boolean form of [`validate`]
#[inline]
pub fn is_valid(
    assignments: &AssignmentSet,
    participants: &[Participant],
    policy: ReceiverPolicy,
) -> bool {
    validate(assignments, participants, policy).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    fn people(names: &[&str]) -> Vec<Participant> {
        names
            .iter()
            .map(|n| Participant::new(*n, format!("{}@example.com", n.to_lowercase())))
            .collect()
    }

    fn set_of(roster: &[Participant], pairs: &[(usize, usize)]) -> AssignmentSet {
        pairs
            .iter()
            .map(|&(g, r)| Assignment::new(roster[g].clone(), roster[r].clone()))
            .collect()
    }

    #[test]
    fn test_valid_cycle() {
        let roster = people(&["A", "B", "C", "D"]);
        // A -> C, B -> D, C -> B, D -> A
        let set = set_of(&roster, &[(0, 2), (1, 3), (2, 1), (3, 0)]);

        assert!(is_valid(&set, &roster, ReceiverPolicy::Unique));
        assert!(is_valid(&set, &roster, ReceiverPolicy::GiversOnly));
    }

    #[test]
    fn test_reciprocal_pairs_rejected() {
        let roster = people(&["A", "B", "C", "D"]);
        let set = set_of(&roster, &[(0, 1), (1, 0), (2, 3), (3, 2)]);

        assert!(matches!(
            validate(&set, &roster, ReceiverPolicy::GiversOnly),
            Err(Violation::Reciprocal { .. })
        ));
    }

    #[test]
    fn test_incomplete_set_rejected() {
        let roster = people(&["A", "B", "C"]);
        let set = set_of(&roster, &[(0, 1), (1, 2)]);

        assert_eq!(
            validate(&set, &roster, ReceiverPolicy::Unique),
            Err(Violation::WrongSize { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn test_double_receiver_depends_on_policy() {
        let roster = people(&["A", "B", "C", "D"]);
        // C receives twice, A never receives
        let set = set_of(&roster, &[(0, 2), (1, 2), (2, 3), (3, 1)]);

        assert!(is_valid(&set, &roster, ReceiverPolicy::GiversOnly));
        assert_eq!(
            validate(&set, &roster, ReceiverPolicy::Unique),
            Err(Violation::DuplicateReceiver("C".to_string()))
        );
    }

    #[test]
    fn test_stranger_rejected() {
        let roster = people(&["A", "B", "C"]);
        let stranger = Participant::new("Z", "z@example.com");
        let mut pairs = set_of(&roster, &[(0, 1), (1, 2)]).into_iter().collect::<Vec<_>>();
        pairs.push(Assignment::new(roster[2].clone(), stranger));

        assert_eq!(
            validate(&pairs.into(), &roster, ReceiverPolicy::Unique),
            Err(Violation::UnknownParticipant("Z".to_string()))
        );
    }

    #[test]
    fn test_double_giver_rejected() {
        let roster = people(&["A", "B", "C", "D"]);
        // A gives twice, B never gives
        let set = set_of(&roster, &[(0, 1), (0, 2), (2, 3), (3, 0)]);

        assert!(is_valid(&set, &roster, ReceiverPolicy::GiversOnly));
        assert_eq!(
            validate(&set, &roster, ReceiverPolicy::Unique),
            Err(Violation::DuplicateGiver("A".to_string()))
        );
    }
}
