//! Core types: cards, sides, hands, RNG, configuration, errors.

pub mod card;
pub mod hand;
pub mod rng;
pub mod config;
pub mod error;

pub use card::{CardType, Side};
pub use hand::{Hand, HAND_SIZE};
pub use rng::MatchRng;
pub use config::MatchConfig;
pub use error::{MatchAction, MatchError};
