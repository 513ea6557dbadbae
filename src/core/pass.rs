use rand::Rng;

use crate::core::constraints::ConstraintSet;
use crate::core::selector::select_receiver;
use crate::models::{Assignment, AssignmentSet, Participant};

/// How a single pass over the roster ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// Every giver got a receiver
    Complete(AssignmentSet),
    /// `giver` had nobody admissible left in the pool; the partial result is gone
    Stalled { giver: Participant },
}

impl PassOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, PassOutcome::Complete(_))
    }
}

/// Try once to give every participant a receiver
///
/// Givers are taken in random order. Each draws from the shared pool of
/// unclaimed receivers, so later givers choose from fewer people. The pool and
/// the partial result live only for this call.
pub fn run_pass<R: Rng>(
    participants: &[Participant],
    constraints: &ConstraintSet,
    rng: &mut R,
) -> PassOutcome {
    let mut pool: Vec<&Participant> = participants.iter().collect();
    let mut givers: Vec<&Participant> = participants.iter().collect();
    let mut drawn = AssignmentSet::with_capacity(participants.len());

    while !givers.is_empty() {
        let idx = rng.random_range(0..givers.len());
        let giver = givers[idx];

        match select_receiver(giver, &mut pool, constraints, rng) {
            Some(receiver) => {
                givers.swap_remove(idx);
                drawn.push(Assignment::new(giver.clone(), receiver.clone()));
            }
            None => {
                return PassOutcome::Stalled {
                    giver: giver.clone(),
                };
            }
        }
    }

    PassOutcome::Complete(drawn)
}
