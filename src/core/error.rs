//! Error type shared by every core operation.

use serde::{Deserialize, Serialize};

use super::card::CardType;
use crate::game::Phase;

/// Operation a caller attempted, reported in state-transition errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchAction {
    SelectSide,
    PlayRound,
    AdvanceRound,
}

impl std::fmt::Display for MatchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchAction::SelectSide => "select_side",
            MatchAction::PlayRound => "play_round",
            MatchAction::AdvanceRound => "advance_round",
        };
        f.write_str(name)
    }
}

/// Errors returned to the immediate caller of a core operation.
///
/// A failed operation never mutates the match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchError {
    /// The chosen card has no remaining copies.
    InvalidMove { card: CardType },
    /// The AI hand had nothing left to play.
    AiExhausted,
    /// The action is not permitted in the current phase.
    InvalidStateTransition { action: MatchAction, phase: Phase },
    UnknownCard { value: String },
    UnknownSide { value: String },
    InvalidConfig { reason: String },
    UnknownSession { id: u64 },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidMove { card } => {
                write!(f, "invalid move: no {card} card left in hand")
            }
            MatchError::AiExhausted => f.write_str("AI could not move: its hand is empty"),
            MatchError::InvalidStateTransition { action, phase } => {
                write!(f, "{action} is not allowed during {phase}")
            }
            MatchError::UnknownCard { value } => write!(f, "unknown card: {value:?}"),
            MatchError::UnknownSide { value } => write!(f, "unknown side: {value:?}"),
            MatchError::InvalidConfig { reason } => write!(f, "invalid match config: {reason}"),
            MatchError::UnknownSession { id } => write!(f, "unknown session {id}"),
        }
    }
}

impl std::error::Error for MatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MatchError::InvalidMove {
            card: CardType::Slave,
        };
        assert_eq!(err.to_string(), "invalid move: no Slave card left in hand");

        let err = MatchError::InvalidStateTransition {
            action: MatchAction::PlayRound,
            phase: Phase::SideSelection,
        };
        assert_eq!(err.to_string(), "play_round is not allowed during side selection");
    }

    #[test]
    fn test_serde_tagged() {
        let err = MatchError::InvalidMove {
            card: CardType::Emperor,
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"type":"InvalidMove","card":"emperor"}"#);

        let back: MatchError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
