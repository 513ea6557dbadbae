// Model exports
pub mod domain;
pub mod roster;
pub mod summary;

pub use domain::{Assignment, AssignmentSet, Couple, Participant, PriorAssignment, UnacquaintedRule};
pub use roster::{ParticipantEntry, RosterFile, UnacquaintedEntry};
pub use summary::{DrawSummary, RunStats};
