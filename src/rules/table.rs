//! Static win/lose/draw lookup between card types.

use serde::{Deserialize, Serialize};

use crate::core::CardType;

/// Result of one card against another, from the attacker's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same result seen from the defender's side.
    #[must_use]
    pub const fn invert(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

use Outcome::{Draw, Lose, Win};

/// Rows are the attacker, columns the defender, both in display order
/// (Emperor, Citizen, Slave).
const TABLE: [[Outcome; 3]; 3] = [
    [Draw, Win, Lose],
    [Lose, Draw, Win],
    [Win, Lose, Draw],
];

/// Cyclic dominance: Emperor beats Citizen, Citizen beats Slave, Slave
/// beats Emperor. Identical cards draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleTable;

impl RuleTable {
    /// Outcome of `attacker` played against `defender`.
    ///
    /// ```
    /// use ecard::core::CardType;
    /// use ecard::rules::{Outcome, RuleTable};
    ///
    /// assert_eq!(RuleTable::resolve(CardType::Slave, CardType::Emperor), Outcome::Win);
    /// ```
    #[must_use]
    pub const fn resolve(attacker: CardType, defender: CardType) -> Outcome {
        TABLE[attacker.index()][defender.index()]
    }

    /// The card that `card` beats.
    #[must_use]
    pub const fn beats(card: CardType) -> CardType {
        match card {
            CardType::Emperor => CardType::Citizen,
            CardType::Citizen => CardType::Slave,
            CardType::Slave => CardType::Emperor,
        }
    }
}
