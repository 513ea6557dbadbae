use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A member of the gift exchange
///
/// Identity is the `(name, email)` pair. Constraint rules refer to
/// participants by name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Two people who never draw each other, in either direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple(pub String, pub String);

impl Couple {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self(a.into(), b.into())
    }

    /// True when both names are the two members of this couple
    #[inline]
    pub fn covers(&self, a: &str, b: &str) -> bool {
        (self.0 == a && self.1 == b) || (self.0 == b && self.1 == a)
    }
}

/// Two groups of people who don't know each other
///
/// Nobody in `left` draws anybody in `right`, and nobody in `right`
/// draws anybody in `left`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnacquaintedRule {
    pub left: BTreeSet<String>,
    pub right: BTreeSet<String>,
}

impl UnacquaintedRule {
    pub fn new<L, R, S>(left: L, right: R) -> Self
    where
        L: IntoIterator<Item = S>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            left: left.into_iter().map(Into::into).collect(),
            right: right.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn forbids(&self, giver: &str, receiver: &str) -> bool {
        (self.left.contains(giver) && self.right.contains(receiver))
            || (self.right.contains(giver) && self.left.contains(receiver))
    }
}

/// A directed (giver, receiver) pair from a previous exchange
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriorAssignment {
    pub giver: String,
    pub receiver: String,
}

impl PriorAssignment {
    pub fn new(giver: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            giver: giver.into(),
            receiver: receiver.into(),
        }
    }
}

/// One giver drawing one receiver
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: Participant,
    pub receiver: Participant,
}

impl Assignment {
    pub fn new(giver: Participant, receiver: Participant) -> Self {
        Self { giver, receiver }
    }

    pub fn reverse(&self) -> Self {
        Self {
            giver: self.receiver.clone(),
            receiver: self.giver.clone(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.giver.name, self.receiver.name)
    }
}

/// The output of one complete pass, in the order the givers were drawn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSet {
    assignments: Vec<Assignment>,
}

impl AssignmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assignments: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    /// Receiver drawn by the named giver, if any
    pub fn receiver_of(&self, giver: &str) -> Option<&Participant> {
        self.assignments
            .iter()
            .find(|a| a.giver.name == giver)
            .map(|a| &a.receiver)
    }

    /// True when some pair of assignments swaps the same two people
    pub fn has_reciprocal_pair(&self) -> bool {
        let directed: HashSet<(&str, &str)> = self
            .assignments
            .iter()
            .map(|a| (a.giver.name.as_str(), a.receiver.name.as_str()))
            .collect();

        self.assignments
            .iter()
            .any(|a| directed.contains(&(a.receiver.name.as_str(), a.giver.name.as_str())))
    }
}

impl From<Vec<Assignment>> for AssignmentSet {
    fn from(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }
}

impl FromIterator<Assignment> for AssignmentSet {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AssignmentSet {
    type Item = Assignment;
    type IntoIter = std::vec::IntoIter<Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.into_iter()
    }
}

impl<'a> IntoIterator for &'a AssignmentSet {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Participant {
        Participant::new(name, format!("{}@example.com", name.to_lowercase()))
    }

    #[test]
    fn test_participant_equality_uses_name_and_email() {
        let a = Participant::new("Alice", "alice@example.com");
        let b = Participant::new("Alice", "alice@example.com");
        let c = Participant::new("Alice", "alice@work.example.com");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_participant_display() {
        let a = Participant::new("Alice", "alice@example.com");
        assert_eq!(a.to_string(), "Alice <alice@example.com>");
    }

    #[test]
    fn test_couple_is_unordered() {
        let couple = Couple::new("Alice", "Bob");

        assert!(couple.covers("Alice", "Bob"));
        assert!(couple.covers("Bob", "Alice"));
        assert!(!couple.covers("Alice", "Carol"));
        assert!(!couple.covers("Alice", "Alice"));
    }

    #[test]
    fn test_unacquainted_rule_is_symmetric() {
        let rule = UnacquaintedRule::new(["Marco", "Grace"], ["Adam", "Jess"]);

        assert!(rule.forbids("Marco", "Adam"));
        assert!(rule.forbids("Jess", "Grace"));
        assert!(!rule.forbids("Marco", "Grace"));
        assert!(!rule.forbids("Adam", "Jess"));
    }

    #[test]
    fn test_assignment_reverse_and_display() {
        let pair = Assignment::new(person("Alice"), person("Bob"));

        assert_eq!(pair.to_string(), "Alice -> Bob");
        assert_eq!(pair.reverse().to_string(), "Bob -> Alice");
        assert_eq!(pair.reverse().reverse(), pair);
    }

    #[test]
    fn test_reciprocal_pair_detection() {
        let cycle: AssignmentSet = vec![
            Assignment::new(person("A"), person("B")),
            Assignment::new(person("B"), person("C")),
            Assignment::new(person("C"), person("A")),
        ]
        .into();
        assert!(!cycle.has_reciprocal_pair());

        let swapped: AssignmentSet = vec![
            Assignment::new(person("A"), person("B")),
            Assignment::new(person("B"), person("A")),
        ]
        .into();
        assert!(swapped.has_reciprocal_pair());
    }

    #[test]
    fn test_receiver_of() {
        let set: AssignmentSet = vec![Assignment::new(person("A"), person("B"))].into();

        assert_eq!(set.receiver_of("A").map(|p| p.name.as_str()), Some("B"));
        assert!(set.receiver_of("B").is_none());
    }
}
