//! Secret Santa - constrained random gift-exchange assignment
//!
//! This library draws a giver -> receiver assignment for a group, honouring
//! couple, unacquainted and prior-year exclusions, with no self-gifting and no
//! two people drawing each other. Drawing is generate-and-test: whole random
//! passes are attempted and thrown away until one passes validation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ConstraintSet, Draw, Engine, EngineError, EngineOptions, ReceiverPolicy, Roster};
pub use crate::models::{Assignment, AssignmentSet, Couple, Participant, PriorAssignment, UnacquaintedRule};
