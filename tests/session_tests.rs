//! Session integration tests: reset/step contract, counters and determinism.

use rust_draughts::core::{Color, RewardConfig, SessionConfig, SessionError, Square};
use rust_draughts::nn::PlaneEncoder;
use rust_draughts::session::{FirstLegal, GameSession, Scripted, Selection, StepOutcome};

/// Play until the episode ends, always choosing the first legal destination.
fn play_out(session: &mut GameSession) -> StepOutcome {
    loop {
        let target = session.observation().legal_destinations[0];
        let outcome = session.step(target).unwrap();
        if outcome.terminated || outcome.truncated {
            return outcome;
        }
    }
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_returns_white_to_move() {
    let mut session = GameSession::new(SessionConfig::default());
    let observation = session.reset(Some(1)).unwrap();

    assert_eq!(observation.to_move, Some(Color::White));
    assert_eq!(observation.state.shape, vec![4, 8, 8]);
    assert_eq!(observation.state.len(), 256);
    assert_eq!(
        observation.legal_mask().iter().filter(|&&v| v == 1).count(),
        observation.legal_destinations.len()
    );

    // Black's opening move is the only action so far.
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].color, Color::Black);
    assert_eq!(session.engine().pieces(Color::Black), 12);
    assert_eq!(session.engine().pieces(Color::White), 12);
}

#[test]
fn test_reset_with_king_planes() {
    let mut session =
        GameSession::new(SessionConfig::default()).with_encoder(PlaneEncoder::new().with_kings());
    let observation = session.reset(None).unwrap();

    assert_eq!(observation.state.shape, vec![6, 8, 8]);
    // No kings at the start of a game.
    assert!(observation.state.plane(4).unwrap().iter().all(|&v| v == 0.0));
    assert!(observation.state.plane(5).unwrap().iter().all(|&v| v == 0.0));
}

#[test]
fn test_step_outside_episode_fails() {
    let mut session = GameSession::new(SessionConfig::default());

    assert_eq!(
        session.step(Square::new(4, 1)).unwrap_err(),
        SessionError::EpisodeOver
    );
}

#[test]
fn test_out_of_range_selection() {
    assert_eq!(
        Selection::at(3, 9).unwrap_err(),
        SessionError::OutOfRange { row: 3, col: 9 }
    );
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_replays_same_game() {
    let run = |seed| {
        let mut session = GameSession::new(SessionConfig::default().with_seed(seed));
        session.reset(None).unwrap();
        let outcome = play_out(&mut session);
        (session.history().clone(), outcome.reward, outcome.winner)
    };

    assert_eq!(run(11), run(11));
}

#[test]
fn test_reset_seed_overrides_config_seed() {
    let mut a = GameSession::new(SessionConfig::default().with_seed(1));
    let mut b = GameSession::new(SessionConfig::default().with_seed(2));

    a.reset(Some(99)).unwrap();
    b.reset(Some(99)).unwrap();

    assert_eq!(a.history(), b.history());
    assert_eq!(a.rng_state(), b.rng_state());
}

#[test]
fn test_scripted_opponent() {
    let selector = Scripted::new([Square::new(3, 0), Square::new(3, 2)]);
    let mut session = GameSession::with_selector(SessionConfig::default(), Box::new(selector));

    session.reset(None).unwrap();
    assert_eq!(session.history()[0].action.destination(), Square::new(3, 0));

    // White plays far away from Black's next scripted move.
    session.step(Square::new(4, 7)).unwrap();
    assert_eq!(session.history()[2].action.destination(), Square::new(3, 2));
    assert_eq!(session.history()[2].color, Color::Black);
}

// =============================================================================
// Full episodes and counters
// =============================================================================

#[test]
fn test_episode_runs_to_completion() {
    let mut session = GameSession::new(SessionConfig::default().with_max_steps(Some(5000)));
    session.reset(Some(5)).unwrap();

    let outcome = play_out(&mut session);
    assert!(session.is_done());
    assert_eq!(outcome.terminated, !outcome.truncated);
    if outcome.truncated {
        return;
    }

    assert_eq!(outcome.observation.to_move, None);
    assert!(outcome.observation.legal_destinations.is_empty());

    let rewards = RewardConfig::default();
    let winner = outcome.winner.unwrap();
    if winner == Color::White {
        assert_eq!(outcome.reward, rewards.win);
    } else {
        assert_eq!(outcome.reward, rewards.loss);
    }
    assert_eq!(session.stats().wins(winner), 1);
    assert_eq!(session.stats().wins(winner.opponent()), 0);
}

#[test]
fn test_counters_across_episodes() {
    let mut session = GameSession::with_selector(
        SessionConfig::default().with_max_steps(Some(3)),
        Box::new(FirstLegal),
    );

    for _ in 0..3 {
        session.reset(None).unwrap();
        let outcome = play_out(&mut session);
        assert!(outcome.truncated || outcome.terminated);
        assert!(session.stats().steps <= 3);
    }

    let stats = session.stats();
    assert_eq!(stats.episodes, 3);
    assert!(stats.best_score.is_some());
    assert_eq!(session.step(Square::new(4, 1)).unwrap_err(), SessionError::EpisodeOver);
}

#[test]
fn test_snapshot_matches_engine() {
    let mut session = GameSession::new(SessionConfig::default());
    session.reset(Some(8)).unwrap();
    let snapshot = session.snapshot();

    assert_eq!(snapshot.cells.len(), 64);
    assert_eq!(snapshot.to_move, Some(Color::White));
    assert_eq!(snapshot.pieces[Color::White], 12);
    assert!(snapshot.last_paths[Color::Black].is_some());
    assert!(snapshot.last_paths[Color::White].is_none());
    assert_eq!(
        snapshot.legal_destinations,
        session.observation().legal_destinations
    );

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("last_paths"));
}

#[test]
fn test_self_play_with_selector() {
    let mut session = GameSession::new(SessionConfig::default().with_seed(21));
    session.reset(None).unwrap();

    let mut plies = 1;
    while !session.is_done() && plies < 400 {
        session.play_half_move().unwrap();
        plies += 1;
    }

    assert_eq!(session.history().len(), plies);
    for (ply, record) in session.history().iter().enumerate() {
        assert_eq!(record.ply as usize, ply);
        let expected = if ply % 2 == 0 { Color::Black } else { Color::White };
        assert_eq!(record.color, expected);
    }
}
