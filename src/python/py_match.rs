//! Match bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{CardType, MatchConfig, MatchError, Side};
use crate::game::{MatchController, MatchState, MatchSummary, RoundOutcome};

fn to_py_err(err: MatchError) -> PyErr {
    match err {
        MatchError::InvalidStateTransition { .. } | MatchError::AiExhausted => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for one match: controller plus its state.
#[pyclass(name = "Match")]
pub struct PyMatch {
    controller: MatchController,
    state: MatchState,
}

#[pymethods]
impl PyMatch {
    /// Create a match awaiting side selection.
    ///
    /// # Arguments
    /// - winning_score: Score that ends the match immediately
    /// - max_rounds: Round cap (1-5)
    /// - seed: RNG seed for the AI
    #[new]
    #[pyo3(signature = (winning_score = 1, max_rounds = 5, seed = 42))]
    fn new(winning_score: u32, max_rounds: u32, seed: u64) -> PyResult<Self> {
        let config = MatchConfig::default()
            .with_winning_score(winning_score)
            .with_max_rounds(max_rounds)
            .with_seed(seed);
        let controller = MatchController::new(config).map_err(to_py_err)?;
        let state = controller.restart();
        Ok(Self { controller, state })
    }

    /// Choose "emperor" or "slave" and deal the hands.
    fn select_side(&mut self, side: &str) -> PyResult<()> {
        let side: Side = side.parse().map_err(to_py_err)?;
        self.controller
            .select_side(&mut self.state, side)
            .map_err(to_py_err)
    }

    /// `(card, count, playable)` for Emperor, Citizen, Slave in that order.
    fn available_cards(&self) -> Vec<(String, u8, bool)> {
        self.controller
            .available_cards(&self.state)
            .iter()
            .map(|slot| (slot.card.to_string(), slot.count, slot.playable))
            .collect()
    }

    /// Play a card and resolve the round.
    fn play_round(&mut self, card: &str) -> PyResult<PyRoundOutcome> {
        let card: CardType = card.parse().map_err(to_py_err)?;
        self.controller
            .play_round(&mut self.state, card)
            .map(PyRoundOutcome)
            .map_err(to_py_err)
    }

    /// Continue to the next round after viewing a result.
    fn advance_round(&mut self) -> PyResult<()> {
        self.controller
            .advance_round(&mut self.state)
            .map_err(to_py_err)
    }

    /// Discard the current match and return to side selection.
    fn restart(&mut self) {
        self.state = self.controller.restart();
    }

    fn summary(&self) -> PyMatchSummary {
        PyMatchSummary(self.controller.summary(&self.state))
    }

    #[getter]
    fn phase(&self) -> String {
        self.state.phase.to_string()
    }

    #[getter]
    fn round(&self) -> u32 {
        self.state.round
    }

    #[getter]
    fn message(&self) -> String {
        self.state.message.clone()
    }

    /// The player's remaining cards, e.g. "Emperor x 1 Citizen x 4".
    #[getter]
    fn hand(&self) -> String {
        self.state.player_hand.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Match(phase='{}', round={}, score={}-{})",
            self.state.phase, self.state.round, self.state.player_score, self.state.ai_score
        )
    }
}

/// Read-only view of a resolved round.
#[pyclass(name = "RoundOutcome")]
#[derive(Clone, Debug)]
pub struct PyRoundOutcome(pub RoundOutcome);

#[pymethods]
impl PyRoundOutcome {
    #[getter]
    fn player_card(&self) -> String {
        self.0.player_card.to_string()
    }

    #[getter]
    fn ai_card(&self) -> Option<String> {
        self.0.ai_card.map(|card| card.to_string())
    }

    #[getter]
    fn winning_side(&self) -> Option<String> {
        self.0.winning_side.map(|side| side.to_string())
    }

    #[getter]
    fn message(&self) -> String {
        self.0.message.clone()
    }

    #[getter]
    fn player_score(&self) -> u32 {
        self.0.player_score
    }

    #[getter]
    fn ai_score(&self) -> u32 {
        self.0.ai_score
    }

    #[getter]
    fn round(&self) -> u32 {
        self.0.round
    }

    #[getter]
    fn match_over(&self) -> bool {
        self.0.match_over
    }

    fn __repr__(&self) -> String {
        format!("RoundOutcome({:?}, round={})", self.0.kind, self.0.round)
    }
}

/// Read-only view of a match summary.
#[pyclass(name = "MatchSummary")]
#[derive(Clone, Debug)]
pub struct PyMatchSummary(pub MatchSummary);

#[pymethods]
impl PyMatchSummary {
    #[getter]
    fn phase(&self) -> String {
        self.0.phase.to_string()
    }

    #[getter]
    fn player_score(&self) -> u32 {
        self.0.player_score
    }

    #[getter]
    fn ai_score(&self) -> u32 {
        self.0.ai_score
    }

    /// Winning side name, or None for a draw or an unfinished match.
    #[getter]
    fn winning_side(&self) -> Option<String> {
        self.0.winning_side().map(|side| side.to_string())
    }

    #[getter]
    fn is_draw(&self) -> bool {
        self.0.is_draw()
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchSummary(phase='{}', score={}-{})",
            self.0.phase, self.0.player_score, self.0.ai_score
        )
    }
}
