//! Per-side card counts.
//!
//! A `Hand` only changes by playing one card at a time. Playing a card
//! with no copies left is rejected and leaves the hand untouched, so
//! counts can never go negative.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{CardType, Side};
use super::error::MatchError;

/// Number of cards each side starts with.
pub const HAND_SIZE: u8 = 5;

/// Citizens in every starting hand.
const STARTING_CITIZENS: u8 = 4;

/// Remaining cards of one side, by type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    counts: [u8; 3],
    played: u32,
}

impl Hand {
    /// A hand with no cards (before a side is chosen).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counts: [0; 3],
            played: 0,
        }
    }

    /// The fixed starting hand for `side`.
    ///
    /// ```
    /// use ecard::core::{CardType, Hand, Side};
    ///
    /// let hand = Hand::starting(Side::EmperorSide);
    /// assert_eq!(hand.count(CardType::Emperor), 1);
    /// assert_eq!(hand.count(CardType::Citizen), 4);
    /// assert_eq!(hand.count(CardType::Slave), 0);
    /// ```
    #[must_use]
    pub fn starting(side: Side) -> Self {
        let mut counts = [0; 3];
        counts[CardType::Citizen.index()] = STARTING_CITIZENS;
        counts[side.power_card().index()] = 1;
        Self { counts, played: 0 }
    }

    /// Build a hand from explicit counts, in display order.
    #[must_use]
    pub const fn from_counts(emperor: u8, citizen: u8, slave: u8) -> Self {
        Self {
            counts: [emperor, citizen, slave],
            played: 0,
        }
    }

    #[must_use]
    pub fn count(&self, card: CardType) -> u8 {
        self.counts[card.index()]
    }

    #[must_use]
    pub fn is_playable(&self, card: CardType) -> bool {
        self.count(card) > 0
    }

    /// Cards with at least one copy left, in display order.
    #[must_use]
    pub fn available_cards(&self) -> SmallVec<[CardType; 3]> {
        CardType::ALL
            .into_iter()
            .filter(|&card| self.is_playable(card))
            .collect()
    }

    /// Remove one copy of `card`.
    pub fn play(&mut self, card: CardType) -> Result<(), MatchError> {
        let slot = &mut self.counts[card.index()];
        if *slot == 0 {
            return Err(MatchError::InvalidMove { card });
        }
        *slot -= 1;
        self.played = self.played.saturating_add(1);
        Ok(())
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Total copies left across all card types.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.counts.iter().map(|&count| u32::from(count)).sum()
    }

    /// Cards played from this hand so far. Never exceeds the hand's
    /// original total, at most 3 * 255.
    #[must_use]
    pub fn played(&self) -> u32 {
        self.played
    }

    /// `(card, count)` pairs in display order, including empty slots.
    pub fn iter(&self) -> impl Iterator<Item = (CardType, u8)> + '_ {
        CardType::ALL.into_iter().map(move |card| (card, self.count(card)))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (card, count) in self.iter().filter(|&(_, count)| count > 0) {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card} x {count}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_hands() {
        let emperor = Hand::starting(Side::EmperorSide);
        assert_eq!(emperor.remaining(), u32::from(HAND_SIZE));
        assert_eq!(emperor.available_cards().as_slice(), &[CardType::Emperor, CardType::Citizen]);

        let slave = Hand::starting(Side::SlaveSide);
        assert_eq!(slave.remaining(), u32::from(HAND_SIZE));
        assert_eq!(slave.available_cards().as_slice(), &[CardType::Citizen, CardType::Slave]);
    }

    #[test]
    fn test_play_decrements() {
        let mut hand = Hand::starting(Side::SlaveSide);
        hand.play(CardType::Slave).unwrap();

        assert_eq!(hand.count(CardType::Slave), 0);
        assert_eq!(hand.played(), 1);
        assert!(!hand.is_playable(CardType::Slave));
        assert_eq!(hand.available_cards().as_slice(), &[CardType::Citizen]);
    }

    #[test]
    fn test_play_empty_card_fails_and_leaves_hand() {
        let mut hand = Hand::starting(Side::EmperorSide);
        let before = hand.clone();

        let err = hand.play(CardType::Slave).unwrap_err();
        assert_eq!(err, MatchError::InvalidMove { card: CardType::Slave });
        assert_eq!(hand, before);
    }

    #[test]
    fn test_exhaustion() {
        let mut hand = Hand::starting(Side::EmperorSide);
        assert!(!hand.is_exhausted());

        hand.play(CardType::Emperor).unwrap();
        for _ in 0..4 {
            hand.play(CardType::Citizen).unwrap();
        }

        assert!(hand.is_exhausted());
        assert!(hand.available_cards().is_empty());
        assert_eq!(hand.played(), u32::from(HAND_SIZE));
        assert!(Hand::empty().is_exhausted());
    }

    #[test]
    fn test_large_custom_hand_totals() {
        let mut hand = Hand::from_counts(u8::MAX, u8::MAX, u8::MAX);
        assert_eq!(hand.remaining(), 3 * 255);

        while let Some(&card) = hand.available_cards().first() {
            hand.play(card).unwrap();
        }

        assert!(hand.is_exhausted());
        assert_eq!(hand.remaining(), 0);
        assert_eq!(hand.played(), 3 * 255);
    }

    #[test]
    fn test_display() {
        assert_eq!(Hand::starting(Side::EmperorSide).to_string(), "Emperor x 1 Citizen x 4");
        assert_eq!(Hand::empty().to_string(), "");
    }
}
