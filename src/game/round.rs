//! Resolution of a single round.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ai::{AiPolicy, WeightedPolicy};
use crate::core::{CardType, MatchAction, MatchError, MatchRng, Side};
use crate::rules::{Outcome, RuleTable};

use super::state::{EndReason, MatchState};

/// Message recorded when the AI has nothing to play.
pub const AI_EXHAUSTED_MESSAGE: &str = "AI could not move: it has no cards left. The match is over.";

/// How a round ended, from the match's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    PlayerWin,
    AiWin,
    Draw,
    /// The AI could not play; nothing was scored.
    AiExhausted,
}

/// Record of one resolved round, returned to the caller for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player_card: CardType,
    /// `None` only when the AI could not move.
    pub ai_card: Option<CardType>,
    pub kind: OutcomeKind,
    pub winning_side: Option<Side>,
    pub message: String,
    pub player_score: u32,
    pub ai_score: u32,
    pub round: u32,
    /// Whether this round ended the match.
    pub match_over: bool,
}

/// Applies one round to a match: AI choice, hand updates, scoring.
///
/// Phase bookkeeping is left to `MatchController`.
#[derive(Clone, Debug)]
pub struct RoundEngine<P = WeightedPolicy> {
    policy: P,
    rng: MatchRng,
}

impl<P: AiPolicy> RoundEngine<P> {
    pub fn new(policy: P, rng: MatchRng) -> Self {
        Self { policy, rng }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Resolve a round with `player_card`.
    ///
    /// On error the state is left exactly as it was.
    pub fn play_round(
        &mut self,
        state: &mut MatchState,
        player_card: CardType,
    ) -> Result<RoundOutcome, MatchError> {
        let (Some(player_side), Some(ai_side)) = (state.player_side, state.ai_side) else {
            return Err(MatchError::InvalidStateTransition {
                action: MatchAction::PlayRound,
                phase: state.phase,
            });
        };

        if !state.player_hand.is_playable(player_card) {
            warn!(card = %player_card, "rejected play of a card with no copies left");
            return Err(MatchError::InvalidMove { card: player_card });
        }

        let ai_card = match self.policy.choose_card(&state.ai_hand, player_side, &mut self.rng) {
            Ok(card) => card,
            Err(MatchError::AiExhausted) => return Ok(Self::ai_exhausted(state, player_card)),
            Err(err) => return Err(err),
        };
        if !state.ai_hand.is_playable(ai_card) {
            warn!(card = %ai_card, "AI policy chose a card with no copies left");
            return Err(MatchError::InvalidMove { card: ai_card });
        }

        state.player_hand.play(player_card)?;
        state.ai_hand.play(ai_card)?;

        let outcome = RuleTable::resolve(player_card, ai_card);
        let (kind, winning_side) = match outcome {
            Outcome::Win => {
                state.player_score += 1;
                (OutcomeKind::PlayerWin, Some(player_side))
            }
            Outcome::Lose => {
                state.ai_score += 1;
                (OutcomeKind::AiWin, Some(ai_side))
            }
            Outcome::Draw => (OutcomeKind::Draw, None),
        };
        state.round += 1;

        let verdict = match winning_side {
            Some(side) => format!("{side} wins!"),
            None => "Draw!".to_string(),
        };
        state.message = format!("You played {player_card}, AI played {ai_card}. {verdict}");
        state.last_player_card = Some(player_card);
        state.last_ai_card = Some(ai_card);

        debug!(
            round = state.round,
            player_card = %player_card,
            ai_card = %ai_card,
            ?kind,
            player_score = state.player_score,
            ai_score = state.ai_score,
            "round resolved"
        );

        Ok(RoundOutcome {
            player_card,
            ai_card: Some(ai_card),
            kind,
            winning_side,
            message: state.message.clone(),
            player_score: state.player_score,
            ai_score: state.ai_score,
            round: state.round,
            match_over: false,
        })
    }

    /// Terminal outcome for an AI with an empty hand. Hands, scores and the
    /// round counter are left alone.
    fn ai_exhausted(state: &mut MatchState, player_card: CardType) -> RoundOutcome {
        warn!(round = state.round, "AI hand exhausted, ending match");

        state.message = AI_EXHAUSTED_MESSAGE.to_string();
        state.last_player_card = Some(player_card);
        state.last_ai_card = None;
        state.end_reason = Some(EndReason::AiExhausted);

        RoundOutcome {
            player_card,
            ai_card: None,
            kind: OutcomeKind::AiExhausted,
            winning_side: None,
            message: state.message.clone(),
            player_score: state.player_score,
            ai_score: state.ai_score,
            round: state.round,
            match_over: true,
        }
    }
}
