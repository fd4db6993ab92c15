//! Match flow: state, round resolution, and the controller.
//!
//! - `MatchState`: the caller-owned value describing one match
//! - `RoundEngine`: resolves a single round
//! - `MatchController`: phase transitions and termination

pub mod state;
pub mod round;
pub mod controller;

pub use state::{CardSlot, EndReason, MatchResult, MatchState, MatchSummary, Phase};
pub use round::{OutcomeKind, RoundEngine, RoundOutcome, AI_EXHAUSTED_MESSAGE};
pub use controller::MatchController;
