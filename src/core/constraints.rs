use std::collections::HashSet;

use crate::models::{Couple, Participant, PriorAssignment, UnacquaintedRule};

/// The three exclusion rule families applied to every (giver, receiver) pair
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    couples: Vec<Couple>,
    unacquainted: Vec<UnacquaintedRule>,
    history: HashSet<PriorAssignment>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_couple(mut self, couple: Couple) -> Self {
        self.couples.push(couple);
        self
    }

    pub fn with_unacquainted(mut self, rule: UnacquaintedRule) -> Self {
        self.unacquainted.push(rule);
        self
    }

    pub fn with_history(mut self, prior: PriorAssignment) -> Self {
        self.history.insert(prior);
        self
    }

    pub fn add_couple(&mut self, couple: Couple) {
        self.couples.push(couple);
    }

    pub fn add_unacquainted(&mut self, rule: UnacquaintedRule) {
        self.unacquainted.push(rule);
    }

    pub fn add_history(&mut self, prior: PriorAssignment) {
        self.history.insert(prior);
    }

    pub fn couples(&self) -> &[Couple] {
        &self.couples
    }

    pub fn unacquainted(&self) -> &[UnacquaintedRule] {
        &self.unacquainted
    }

    pub fn history(&self) -> impl Iterator<Item = &PriorAssignment> {
        self.history.iter()
    }

    /// Check whether `giver` may draw `receiver`
    ///
    /// Rules are evaluated in order: self-gifting, couples, unacquainted
    /// groups (both directions), then last year's pairs (same direction only).
    #[inline]
    pub fn is_admissible(&self, giver: &Participant, receiver: &Participant) -> bool {
        if giver == receiver {
            return false;
        }

        let (g, r) = (giver.name.as_str(), receiver.name.as_str());

        if self.couples.iter().any(|couple| couple.covers(g, r)) {
            return false;
        }

        if self.unacquainted.iter().any(|rule| rule.forbids(g, r)) {
            return false;
        }

        // Lookup without allocating a PriorAssignment per call
        if self
            .history
            .iter()
            .any(|prior| prior.giver == g && prior.receiver == r)
        {
            return false;
        }

        true
    }

    /// Every admissible receiver for `giver` among `candidates`
    pub fn admissible_receivers<'a>(
        &'a self,
        giver: &'a Participant,
        candidates: &'a [Participant],
    ) -> impl Iterator<Item = &'a Participant> + 'a {
        candidates
            .iter()
            .filter(move |receiver| self.is_admissible(giver, receiver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Participant {
        Participant::new(name, format!("{}@example.com", name.to_lowercase()))
    }

    fn create_test_constraints() -> ConstraintSet {
        ConstraintSet::new()
            .with_couple(Couple::new("Franky", "Penny"))
            .with_unacquainted(UnacquaintedRule::new(["Marco", "Grace"], ["Adam", "Katie"]))
            .with_history(PriorAssignment::new("Emma", "Ryan"))
    }

    #[test]
    fn test_self_gifting_rejected() {
        let constraints = ConstraintSet::new();
        let alice = person("Alice");

        assert!(!constraints.is_admissible(&alice, &alice));
    }

    #[test]
    fn test_same_name_different_email_is_distinct() {
        let constraints = ConstraintSet::new();
        let home = Participant::new("Alice", "alice@home.example.com");
        let work = Participant::new("Alice", "alice@work.example.com");

        assert!(constraints.is_admissible(&home, &work));
    }

    #[test]
    fn test_couple_rejected_both_directions() {
        let constraints = create_test_constraints();

        assert!(!constraints.is_admissible(&person("Franky"), &person("Penny")));
        assert!(!constraints.is_admissible(&person("Penny"), &person("Franky")));
        assert!(constraints.is_admissible(&person("Franky"), &person("Emma")));
    }

    #[test]
    fn test_unacquainted_rejected_both_directions() {
        let constraints = create_test_constraints();

        assert!(!constraints.is_admissible(&person("Grace"), &person("Adam")));
        assert!(!constraints.is_admissible(&person("Katie"), &person("Marco")));
        // Same side of the rule is fine
        assert!(constraints.is_admissible(&person("Grace"), &person("Marco")));
        assert!(constraints.is_admissible(&person("Adam"), &person("Katie")));
    }

    #[test]
    fn test_history_is_direction_sensitive() {
        let constraints = create_test_constraints();

        assert!(!constraints.is_admissible(&person("Emma"), &person("Ryan")));
        assert!(constraints.is_admissible(&person("Ryan"), &person("Emma")));
    }

    #[test]
    fn test_admissible_receivers() {
        let constraints = create_test_constraints();
        let candidates = vec![person("Franky"), person("Penny"), person("Emma")];
        let giver = person("Franky");

        let names: Vec<&str> = constraints
            .admissible_receivers(&giver, &candidates)
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(names, vec!["Emma"]);
    }
}
