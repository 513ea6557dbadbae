// Core algorithm exports
pub mod bias;
pub mod constraints;
pub mod engine;
pub mod pass;
pub mod roster;
pub mod selector;
pub mod validator;

pub use bias::BiasMatrix;
pub use constraints::ConstraintSet;
pub use engine::{Attempt, Draw, Engine, EngineError, EngineOptions, DEFAULT_MAX_ATTEMPTS};
pub use pass::{run_pass, PassOutcome};
pub use roster::{Roster, RosterError};
pub use selector::select_receiver;
pub use validator::{is_valid, validate, ReceiverPolicy, Violation};
