//! Multi-session isolation tests.

use ecard::core::{CardType, MatchConfig, MatchError, Side};
use ecard::game::{MatchState, Phase};
use ecard::session::{SessionId, SessionRegistry};

/// Play a session to completion, always preferring Citizen.
fn finish(registry: &mut SessionRegistry, id: SessionId, side: Side) -> Vec<Option<CardType>> {
    registry
        .with_session(id, |controller, state| {
            controller.select_side(state, side)?;
            let mut ai_cards = Vec::new();
            while state.phase != Phase::MatchEnded {
                let card = if state.player_hand.is_playable(CardType::Citizen) {
                    CardType::Citizen
                } else {
                    state.player_hand.available_cards()[0]
                };
                ai_cards.push(controller.play_round(state, card)?.ai_card);
                if state.phase == Phase::RoundResult {
                    controller.advance_round(state)?;
                }
            }
            Ok(ai_cards)
        })
        .unwrap()
}

#[test]
fn test_many_sessions_progress_independently() {
    let mut registry = SessionRegistry::new(MatchConfig::default()).unwrap();
    let ids: Vec<SessionId> = (0..8).map(|_| registry.create().unwrap()).collect();

    // Advance only the even sessions
    for id in ids.iter().step_by(2) {
        finish(&mut registry, *id, Side::EmperorSide);
    }

    for (i, id) in ids.iter().enumerate() {
        let state = &registry.get(*id).unwrap().state;
        if i % 2 == 0 {
            assert_eq!(state.phase, Phase::MatchEnded);
        } else {
            assert_eq!(state, &MatchState::new());
        }
    }
}

#[test]
fn test_registry_is_deterministic_per_seed() {
    let run = || {
        let mut registry = SessionRegistry::new(MatchConfig::default().with_seed(77)).unwrap();
        let a = registry.create().unwrap();
        let b = registry.create().unwrap();
        (
            finish(&mut registry, a, Side::SlaveSide),
            finish(&mut registry, b, Side::EmperorSide),
        )
    };

    assert_eq!(run(), run());
}

#[test]
fn test_errors_stay_in_their_session() {
    let mut registry = SessionRegistry::new(MatchConfig::default()).unwrap();
    let a = registry.create().unwrap();
    let b = registry.create().unwrap();

    registry
        .with_session(b, |controller, state| controller.select_side(state, Side::SlaveSide))
        .unwrap();

    let err = registry
        .with_session(a, |controller, state| controller.play_round(state, CardType::Citizen))
        .unwrap_err();
    assert!(matches!(err, MatchError::InvalidStateTransition { .. }));

    assert_eq!(registry.get(b).unwrap().state.phase, Phase::RoundInProgress);
}

#[test]
fn test_invalid_config_rejected() {
    let result = SessionRegistry::new(MatchConfig::default().with_winning_score(0));
    assert!(result.is_err());
}

#[test]
fn test_removed_session_is_gone() {
    let mut registry = SessionRegistry::new(MatchConfig::default()).unwrap();
    let id = registry.create().unwrap();

    let state = registry.remove(id).unwrap();
    assert_eq!(state.phase, Phase::SideSelection);

    let err = registry
        .with_session(id, |controller, state| controller.advance_round(state))
        .unwrap_err();
    assert_eq!(err, MatchError::UnknownSession { id: id.raw() });
}
