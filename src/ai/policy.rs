//! AI card-selection policies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardType, Hand, MatchError, MatchRng, Side};

/// Policy for choosing the AI's card each round.
///
/// Every input to the decision is a parameter; policies hold no match
/// state of their own.
pub trait AiPolicy: Send + Sync {
    /// Choose a card with a positive count in `hand`.
    ///
    /// Returns `MatchError::AiExhausted` if `hand` has nothing left.
    fn choose_card(
        &self,
        hand: &Hand,
        opponent_side: Side,
        rng: &mut MatchRng,
    ) -> Result<CardType, MatchError>;
}

/// Weighted random selection favoring Citizens.
///
/// Each remaining Citizen adds `citizen_weight` tickets to the pool and
/// each remaining copy of any other card adds `other_weight`. A ticket is
/// then drawn uniformly, so the power card stays possible every round but
/// is usually held back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedPolicy {
    pub citizen_weight: u32,
    pub other_weight: u32,
}

impl Default for WeightedPolicy {
    fn default() -> Self {
        Self {
            citizen_weight: 3,
            other_weight: 1,
        }
    }
}

impl WeightedPolicy {
    #[must_use]
    pub fn new(citizen_weight: u32, other_weight: u32) -> Self {
        Self {
            citizen_weight,
            other_weight,
        }
    }

    /// Ticket count per card in display order.
    ///
    /// Computed in `u64`, so any `u32` weight times any card count fits.
    #[must_use]
    pub fn weights(&self, hand: &Hand) -> [u64; 3] {
        CardType::ALL.map(|card| {
            let per_copy = match card {
                CardType::Citizen => self.citizen_weight,
                CardType::Emperor | CardType::Slave => self.other_weight,
            };
            u64::from(per_copy) * u64::from(hand.count(card))
        })
    }

    /// Probability of each card being chosen, in display order.
    #[must_use]
    pub fn probabilities(&self, hand: &Hand) -> [f64; 3] {
        let weights = self.weights(hand);
        let total: u64 = weights.iter().sum();
        if total == 0 {
            return [0.0; 3];
        }
        weights.map(|w| w as f64 / total as f64)
    }
}

impl AiPolicy for WeightedPolicy {
    fn choose_card(
        &self,
        hand: &Hand,
        opponent_side: Side,
        rng: &mut MatchRng,
    ) -> Result<CardType, MatchError> {
        if hand.is_exhausted() {
            return Err(MatchError::AiExhausted);
        }

        match rng.choose_weighted(&self.weights(hand)) {
            Some(idx) => Ok(CardType::ALL[idx]),
            // Zero weights configured: fall back to any remaining card.
            None => UniformPolicy.choose_card(hand, opponent_side, rng),
        }
    }
}

/// Uniform random selection among remaining copies.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl AiPolicy for UniformPolicy {
    fn choose_card(
        &self,
        hand: &Hand,
        _opponent_side: Side,
        rng: &mut MatchRng,
    ) -> Result<CardType, MatchError> {
        let pool: SmallVec<[CardType; 5]> = hand
            .iter()
            .flat_map(|(card, count)| std::iter::repeat(card).take(usize::from(count)))
            .collect();

        rng.gen_index(pool.len())
            .map(|idx| pool[idx])
            .ok_or(MatchError::AiExhausted)
    }
}
