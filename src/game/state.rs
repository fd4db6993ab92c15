//! Match state and the views handed to the presentation layer.
//!
//! ## MatchState
//!
//! The single value describing one session's match:
//! - Phase, sides, hands
//! - Scores and round counter
//! - Last round's cards and result message
//!
//! It is created fresh at side selection, mutated only by
//! `MatchController` operations, and replaced wholesale on restart.

use serde::{Deserialize, Serialize};

use crate::core::{CardType, Hand, Side};

/// Match lifecycle.
///
/// `SideSelection -> RoundInProgress -> RoundResult -> (RoundInProgress | MatchEnded)`,
/// and `MatchEnded -> SideSelection` only through restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    SideSelection,
    RoundInProgress,
    RoundResult,
    MatchEnded,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::MatchEnded)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::SideSelection => "side selection",
            Phase::RoundInProgress => "round in progress",
            Phase::RoundResult => "round result",
            Phase::MatchEnded => "match ended",
        };
        f.write_str(name)
    }
}

/// Why a match reached `MatchEnded`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A side reached the winning score.
    WinningScore,
    /// The round cap was reached.
    RoundLimit,
    /// The AI had no card to play.
    AiExhausted,
}

/// Final result of a match, named by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Winner(Side),
    Draw,
}

impl MatchResult {
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, MatchResult::Winner(s) if *s == side)
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: Phase,
    pub player_side: Option<Side>,
    pub ai_side: Option<Side>,
    pub player_hand: Hand,
    pub ai_hand: Hand,
    pub player_score: u32,
    pub ai_score: u32,
    /// Resolved rounds so far.
    pub round: u32,
    /// Result text of the most recent round.
    pub message: String,
    pub last_player_card: Option<CardType>,
    pub last_ai_card: Option<CardType>,
    pub end_reason: Option<EndReason>,
}

impl MatchState {
    /// Fresh state awaiting side selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State at the start of round one for a player on `side`.
    #[must_use]
    pub fn for_side(side: Side) -> Self {
        let ai_side = side.opponent();
        Self {
            phase: Phase::RoundInProgress,
            player_side: Some(side),
            ai_side: Some(ai_side),
            player_hand: Hand::starting(side),
            ai_hand: Hand::starting(ai_side),
            ..Self::default()
        }
    }

    /// Result by score comparison. `None` until the match has ended.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        if !self.phase.is_terminal() {
            return None;
        }
        let (player_side, ai_side) = (self.player_side?, self.ai_side?);
        Some(match self.player_score.cmp(&self.ai_score) {
            std::cmp::Ordering::Greater => MatchResult::Winner(player_side),
            std::cmp::Ordering::Less => MatchResult::Winner(ai_side),
            std::cmp::Ordering::Equal => MatchResult::Draw,
        })
    }
}

/// One entry of the fixed-order card row shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSlot {
    pub card: CardType,
    pub count: u8,
    pub playable: bool,
}

/// Snapshot for rendering the end of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub phase: Phase,
    pub player_side: Option<Side>,
    pub ai_side: Option<Side>,
    pub player_score: u32,
    pub ai_score: u32,
    pub rounds_played: u32,
    pub end_reason: Option<EndReason>,
    pub result: Option<MatchResult>,
}

impl MatchSummary {
    /// Winning side, or `None` for a draw or an unfinished match.
    #[must_use]
    pub fn winning_side(&self) -> Option<Side> {
        match self.result {
            Some(MatchResult::Winner(side)) => Some(side),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.result == Some(MatchResult::Draw)
    }
}

impl From<&MatchState> for MatchSummary {
    fn from(state: &MatchState) -> Self {
        Self {
            phase: state.phase,
            player_side: state.player_side,
            ai_side: state.ai_side,
            player_score: state.player_score,
            ai_score: state.ai_score,
            rounds_played: state.round,
            end_reason: state.end_reason,
            result: state.result(),
        }
    }
}
