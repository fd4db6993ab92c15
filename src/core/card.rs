//! Card and side enumerations.
//!
//! Both are closed sets. Strings coming from the presentation layer are
//! parsed with `FromStr`; anything outside the set is rejected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::MatchError;
use super::hand::Hand;

/// One of the three card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Emperor,
    Citizen,
    Slave,
}

impl CardType {
    /// All cards in fixed display order.
    pub const ALL: [CardType; 3] = [CardType::Emperor, CardType::Citizen, CardType::Slave];

    /// Position in `ALL`, used to index per-card storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            CardType::Emperor => 0,
            CardType::Citizen => 1,
            CardType::Slave => 2,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardType::Emperor => "Emperor",
            CardType::Citizen => "Citizen",
            CardType::Slave => "Slave",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardType {
    type Err = MatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "emperor" => Ok(CardType::Emperor),
            "citizen" => Ok(CardType::Citizen),
            "slave" => Ok(CardType::Slave),
            _ => Err(MatchError::UnknownCard {
                value: value.to_string(),
            }),
        }
    }
}

/// One of the two roles a participant can take.
///
/// Each side starts with five cards: four Citizens plus its power card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    EmperorSide,
    SlaveSide,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::EmperorSide, Side::SlaveSide];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::EmperorSide => Side::SlaveSide,
            Side::SlaveSide => Side::EmperorSide,
        }
    }

    /// The side's unique card: Emperor or Slave.
    #[must_use]
    pub const fn power_card(self) -> CardType {
        match self {
            Side::EmperorSide => CardType::Emperor,
            Side::SlaveSide => CardType::Slave,
        }
    }

    /// Fixed starting hand for this side.
    #[must_use]
    pub fn starting_hand(self) -> Hand {
        Hand::starting(self)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Side::EmperorSide => "Emperor side",
            Side::SlaveSide => "Slave side",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = MatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "emperor" | "emperor_side" => Ok(Side::EmperorSide),
            "slave" | "slave_side" => Ok(Side::SlaveSide),
            _ => Err(MatchError::UnknownSide {
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_matches_index() {
        for (i, card) in CardType::ALL.iter().enumerate() {
            assert_eq!(card.index(), i);
        }
    }

    #[test]
    fn test_parse_card() {
        assert_eq!("Emperor".parse::<CardType>().unwrap(), CardType::Emperor);
        assert_eq!(" citizen ".parse::<CardType>().unwrap(), CardType::Citizen);
        assert_eq!("SLAVE".parse::<CardType>().unwrap(), CardType::Slave);

        let err = "king".parse::<CardType>().unwrap_err();
        assert_eq!(
            err,
            MatchError::UnknownCard {
                value: "king".to_string()
            }
        );
    }

    #[test]
    fn test_parse_side() {
        assert_eq!("emperor".parse::<Side>().unwrap(), Side::EmperorSide);
        assert_eq!("slave_side".parse::<Side>().unwrap(), Side::SlaveSide);
        assert!("citizen".parse::<Side>().is_err());
    }

    #[test]
    fn test_opponent_and_power_card() {
        assert_eq!(Side::EmperorSide.opponent(), Side::SlaveSide);
        assert_eq!(Side::SlaveSide.opponent(), Side::EmperorSide);
        assert_eq!(Side::EmperorSide.power_card(), CardType::Emperor);
        assert_eq!(Side::SlaveSide.power_card(), CardType::Slave);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&CardType::Citizen).unwrap(), "\"citizen\"");
        assert_eq!(serde_json::to_string(&Side::SlaveSide).unwrap(), "\"slave_side\"");
    }
}
