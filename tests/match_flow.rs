use std::sync::Arc;
use std::thread;

use draughts_engine::board::prelude::*;
use draughts_engine::{Match, MatchConfig, MatchRegistry, Phase, RegistryError};

#[test]
fn public_functions_cover_a_turn() {
    let board = initial_board();
    let moves = legal_moves(&board, Color::Light, None);
    assert_eq!(moves.len(), 7);

    let next = apply_move(&board, &moves[0]).unwrap();
    assert_eq!(evaluate_game_over(&next, Color::Dark), Outcome::Ongoing);
    assert_eq!(board, initial_board());
}

#[test]
fn random_game_reaches_a_result_or_keeps_going_legally() {
    let mut game = Match::default();
    // deterministic: always take the last listed move
    for _ in 0..400 {
        let moves = game.legal_moves();
        let Some(mv) = moves.as_slice().last().cloned() else {
            break;
        };
        let report = game.play_move(&mv).unwrap();
        assert_eq!(report.played, mv);
        if let Phase::ForcedContinuation(id) = report.phase {
            assert!(game.board().can_continue_capture(id));
        }
    }
    match game.phase() {
        Phase::GameOver(outcome) => {
            assert!(outcome.winner().is_some());
            assert!(game.legal_moves().is_empty());
        }
        Phase::AwaitingMove | Phase::ForcedContinuation(_) => {
            assert!(!game.legal_moves().is_empty());
        }
    }
}

#[test]
fn forged_capture_list_is_rejected() {
    let board = BoardBuilder::new()
        .man(Square(2, 2), Color::Dark)
        .man(Square(3, 3), Color::Light)
        .build();
    let mut game = Match::from_position(board, Color::Dark);
    // right squares, but claims to capture nothing
    let forged = Move::regular(Square(2, 2), Square(4, 4));
    assert_eq!(
        game.play_move(&forged),
        Err(MoveError::InvalidMove {
            from: Square(2, 2),
            to: Square(4, 4)
        })
    );
    assert_eq!(game.history().len(), 0);
}

#[test]
fn match_config_controls_first_mover() {
    let game = Match::new(MatchConfig {
        first_to_move: Color::Dark,
    });
    assert_eq!(game.turn(), Color::Dark);
    assert!(game
        .legal_moves()
        .iter()
        .all(|m| game.board().piece_at(m.from()).unwrap().color == Color::Dark));
}

#[test]
fn registry_runs_matches_in_parallel() {
    let registry = Arc::new(MatchRegistry::new());
    let ids: Vec<_> = (0..8)
        .map(|_| registry.create(MatchConfig::default()))
        .collect();

    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..20 {
                    let next = registry
                        .with_match(id, |game| game.legal_moves().first().cloned())
                        .unwrap();
                    let Some(mv) = next else { break };
                    registry.play(id, mv.from(), mv.to()).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // every match followed the same deterministic line
    let histories: Vec<Vec<Move>> = ids
        .iter()
        .map(|&id| {
            registry
                .with_match(id, |game| game.history().to_vec())
                .unwrap()
        })
        .collect();
    assert!(histories.windows(2).all(|w| w[0] == w[1]));

    registry.remove(ids[0]);
    assert!(matches!(
        registry.play(ids[0], Square(5, 1), Square(4, 2)),
        Err(RegistryError::UnknownMatch { .. })
    ));
}
