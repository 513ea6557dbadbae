use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

use crate::core::pass::{run_pass, PassOutcome};
use crate::core::roster::Roster;
use crate::core::validator::{validate, ReceiverPolicy, Violation};
use crate::models::{AssignmentSet, RunStats};

/// Default number of passes before giving up
pub const DEFAULT_MAX_ATTEMPTS: u64 = 100_000;

/// Errors surfaced by the engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Constraints cannot be satisfied: {reason}")]
    Unsatisfiable { reason: String },

    #[error("No valid assignment after {stats}")]
    Infeasible { stats: RunStats },
}

/// Result of one pass plus validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Success(AssignmentSet),
    Stalled,
    Rejected(Violation),
}

/// A successful draw
#[derive(Debug, Clone)]
pub struct Draw {
    pub assignments: AssignmentSet,
    pub stats: RunStats,
}

/// Engine tuning knobs
#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// `None` keeps retrying forever
    pub max_attempts: Option<u64>,
    pub receiver_policy: ReceiverPolicy,
    /// Fixed seed for reproducible draws; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            receiver_policy: ReceiverPolicy::default(),
            seed: None,
        }
    }
}

/// Generate-and-test driver
///
/// Runs whole passes over the roster and throws each one away when it stalls
/// or fails validation, until one is accepted or the attempt budget runs out.
/// No backtracking happens inside a pass.
///
/// The RNG is seeded once when the engine is built, so repeated runs on the
/// same engine continue one random stream.
#[derive(Debug, Clone)]
pub struct Engine {
    options: EngineOptions,
    rng: StdRng,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { options, rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineOptions {
            seed: Some(seed),
            ..EngineOptions::default()
        })
    }

    /// One pass followed by validation
    pub fn attempt(&mut self, roster: &Roster) -> Attempt {
        match run_pass(roster.participants(), roster.constraints(), &mut self.rng) {
            PassOutcome::Stalled { giver } => {
                tracing::trace!("Pass stalled at {}", giver.name);
                Attempt::Stalled
            }
            PassOutcome::Complete(assignments) => {
                match validate(&assignments, roster.participants(), self.options.receiver_policy) {
                    Ok(()) => Attempt::Success(assignments),
                    Err(violation) => {
                        tracing::trace!("Pass rejected: {:?}", violation);
                        Attempt::Rejected(violation)
                    }
                }
            }
        }
    }

    /// Draw a valid assignment for the whole roster
    pub fn run(&mut self, roster: &Roster) -> Result<Draw, EngineError> {
        check_feasible(roster)?;

        let mut stats = RunStats::default();

        loop {
            if let Some(max) = self.options.max_attempts {
                if stats.attempts >= max {
                    tracing::warn!("Giving up after {}", stats);
                    return Err(EngineError::Infeasible { stats });
                }
            }

            stats.attempts += 1;

            match self.attempt(roster) {
                Attempt::Success(assignments) => {
                    tracing::debug!(
                        "Draw accepted on attempt {} ({} stalled, {} rejected)",
                        stats.attempts,
                        stats.stalled,
                        stats.rejected
                    );
                    return Ok(Draw { assignments, stats });
                }
                Attempt::Stalled => stats.stalled += 1,
                Attempt::Rejected(_) => stats.rejected += 1,
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

/// Reject rosters no amount of retrying can satisfy
fn check_feasible(roster: &Roster) -> Result<(), EngineError> {
    match roster.len() {
        0 => return Err(EngineError::EmptyRoster),
        1 => {
            return Err(EngineError::Unsatisfiable {
                reason: "a single participant can only draw themselves".to_string(),
            })
        }
        2 => {
            return Err(EngineError::Unsatisfiable {
                reason: "two participants can only swap gifts with each other".to_string(),
            })
        }
        _ => {}
    }

    if let Some(p) = roster.first_isolated() {
        return Err(EngineError::Unsatisfiable {
            reason: format!("{} has no admissible partner", p.name),
        });
    }

    Ok(())
}
