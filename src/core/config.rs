//! Match configuration.

use serde::{Deserialize, Serialize};

use super::error::MatchError;
use super::hand::HAND_SIZE;

/// Termination rules and RNG seed for a match.
///
/// Whether a match is "first decisive round wins" or "best of N" is a
/// configuration choice: set `winning_score` and `max_rounds` accordingly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Score at which a side wins the match immediately.
    pub winning_score: u32,

    /// Resolved rounds after which the match ends regardless of score.
    /// Cannot exceed the starting hand size.
    pub max_rounds: u32,

    /// Seed for the AI's random source.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            winning_score: 1,
            max_rounds: u32::from(HAND_SIZE),
            seed: 42,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the configuration can produce a finite, playable match.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.winning_score == 0 {
            return Err(MatchError::InvalidConfig {
                reason: "winning_score must be at least 1".to_string(),
            });
        }
        if self.max_rounds == 0 {
            return Err(MatchError::InvalidConfig {
                reason: "max_rounds must be at least 1".to_string(),
            });
        }
        if self.max_rounds > u32::from(HAND_SIZE) {
            return Err(MatchError::InvalidConfig {
                reason: format!(
                    "max_rounds {} exceeds the {HAND_SIZE} cards in a hand",
                    self.max_rounds
                ),
            });
        }
        Ok(())
    }
}
