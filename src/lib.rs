//! # ecard
//!
//! Round-resolution engine for the Emperor/Citizen/Slave card game, played
//! by a human against a simple randomized AI.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A match is a `MatchState` value owned by the caller.
//!    Every operation is a synchronous transition on it; there is no global
//!    or hidden session state.
//!
//! 2. **Closed Types**: Cards and sides are enums. Strings from the
//!    presentation layer are parsed at the boundary and rejected if unknown.
//!
//! 3. **Injectable Randomness**: AI policies receive a seeded `MatchRng`, so
//!    matches are reproducible in tests.
//!
//! ## Modules
//!
//! - `core`: Cards, sides, hands, RNG, configuration, errors
//! - `rules`: The cyclic dominance table
//! - `ai`: Card-selection policies for the computer side
//! - `game`: Match state, round resolution, and the match controller
//! - `session`: Isolated matches for multi-session hosts
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod ai;
pub mod game;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CardType, Hand, MatchAction, MatchConfig, MatchError, MatchRng, Side, HAND_SIZE};

pub use crate::rules::{Outcome, RuleTable};

pub use crate::ai::{AiPolicy, UniformPolicy, WeightedPolicy};

pub use crate::game::{
    CardSlot, EndReason, MatchController, MatchResult, MatchState, MatchSummary, OutcomeKind,
    Phase, RoundEngine, RoundOutcome,
};

pub use crate::session::{Session, SessionId, SessionRegistry};
