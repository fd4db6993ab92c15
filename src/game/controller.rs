//! Match sequencing and phase transitions.
//!
//! `MatchController` is the surface the presentation layer talks to. Each
//! operation is a synchronous transition on a caller-owned `MatchState`;
//! the controller keeps only configuration, the AI policy and its RNG.

use tracing::{debug, instrument};

use crate::ai::{AiPolicy, WeightedPolicy};
use crate::core::{CardType, MatchAction, MatchConfig, MatchError, MatchRng, Side};

use super::round::{OutcomeKind, RoundEngine, RoundOutcome};
use super::state::{CardSlot, EndReason, MatchState, MatchSummary, Phase};

/// Drives a match through its phases.
///
/// ```
/// use ecard::core::{CardType, MatchConfig, Side};
/// use ecard::game::{MatchController, Phase};
///
/// let mut controller = MatchController::new(MatchConfig::default()).unwrap();
/// let mut state = controller.restart();
///
/// controller.select_side(&mut state, Side::EmperorSide).unwrap();
/// let outcome = controller.play_round(&mut state, CardType::Citizen).unwrap();
///
/// assert_eq!(outcome.round, 1);
/// assert!(matches!(state.phase, Phase::RoundResult | Phase::MatchEnded));
/// ```
#[derive(Clone, Debug)]
pub struct MatchController<P = WeightedPolicy> {
    config: MatchConfig,
    engine: RoundEngine<P>,
}

impl MatchController<WeightedPolicy> {
    /// Controller with the default weighted AI, seeded from `config.seed`.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        Self::with_policy(config, WeightedPolicy::default())
    }
}

impl<P: AiPolicy> MatchController<P> {
    /// Controller with a custom AI policy, seeded from `config.seed`.
    pub fn with_policy(config: MatchConfig, policy: P) -> Result<Self, MatchError> {
        let rng = MatchRng::new(config.seed);
        Self::with_rng(config, policy, rng)
    }

    /// Controller with a custom policy and an explicit random source.
    pub fn with_rng(config: MatchConfig, policy: P, rng: MatchRng) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            config,
            engine: RoundEngine::new(policy, rng),
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        self.engine.policy()
    }

    /// Begin a match with the player on `side`.
    ///
    /// Deals both starting hands and zeroes scores and the round counter.
    #[instrument(level = "debug", skip(self, state))]
    pub fn select_side(&self, state: &mut MatchState, side: Side) -> Result<(), MatchError> {
        expect_phase(state, Phase::SideSelection, MatchAction::SelectSide)?;
        *state = MatchState::for_side(side);
        debug!(ai_side = %side.opponent(), "match started");
        Ok(())
    }

    /// Every card in display order, flagged by whether the player can play it.
    pub fn available_cards(&self, state: &MatchState) -> [CardSlot; 3] {
        CardType::ALL.map(|card| {
            let count = state.player_hand.count(card);
            CardSlot {
                card,
                count,
                playable: state.phase == Phase::RoundInProgress && count > 0,
            }
        })
    }

    /// Resolve the current round with the player's `card`.
    ///
    /// Moves the match to `RoundResult`, or straight to `MatchEnded` when a
    /// termination condition is met.
    #[instrument(level = "debug", skip(self, state), fields(round = state.round + 1))]
    pub fn play_round(
        &mut self,
        state: &mut MatchState,
        card: CardType,
    ) -> Result<RoundOutcome, MatchError> {
        expect_phase(state, Phase::RoundInProgress, MatchAction::PlayRound)?;

        let mut outcome = self.engine.play_round(state, card)?;

        let end_reason = if outcome.kind == OutcomeKind::AiExhausted {
            Some(EndReason::AiExhausted)
        } else {
            self.termination(state)
        };

        match end_reason {
            Some(reason) => {
                state.phase = Phase::MatchEnded;
                state.end_reason = Some(reason);
                outcome.match_over = true;
                debug!(?reason, result = ?state.result(), "match ended");
            }
            None => state.phase = Phase::RoundResult,
        }

        Ok(outcome)
    }

    /// Leave `RoundResult` for the next round.
    #[instrument(level = "debug", skip(self, state))]
    pub fn advance_round(&self, state: &mut MatchState) -> Result<(), MatchError> {
        expect_phase(state, Phase::RoundResult, MatchAction::AdvanceRound)?;
        state.phase = Phase::RoundInProgress;
        Ok(())
    }

    /// A fresh state awaiting side selection. Accepted from any phase; the
    /// old state is simply discarded by the caller.
    pub fn restart(&self) -> MatchState {
        debug!("match restarted");
        MatchState::new()
    }

    pub fn summary(&self, state: &MatchState) -> MatchSummary {
        MatchSummary::from(state)
    }

    fn termination(&self, state: &MatchState) -> Option<EndReason> {
        let threshold = self.config.winning_score;
        if state.player_score >= threshold || state.ai_score >= threshold {
            Some(EndReason::WinningScore)
        } else if state.round >= self.config.max_rounds {
            Some(EndReason::RoundLimit)
        } else {
            None
        }
    }
}

fn expect_phase(state: &MatchState, expected: Phase, action: MatchAction) -> Result<(), MatchError> {
    if state.phase != expected {
        return Err(MatchError::InvalidStateTransition {
            action,
            phase: state.phase,
        });
    }
    Ok(())
}
