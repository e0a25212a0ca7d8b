//! Majority law: only the longest capture chains may be started.

use crate::board::{max_capture_chain, Board, BoardBuilder, Color, Move, PieceId, Square};

#[test]
fn longer_chain_beats_single_capture() {
    // a1 can take two pieces, b6 only one
    let board = BoardBuilder::new()
        .man(Square(0, 0), Color::Dark)
        .man(Square(1, 1), Color::Light)
        .man(Square(3, 3), Color::Light)
        .man(Square(5, 1), Color::Dark)
        .man(Square(6, 2), Color::Light)
        .build();

    let moves = board.legal_moves(Color::Dark, None);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0], Move::capture(Square(0, 0), Square(2, 2), Square(1, 1)));
    assert_eq!(max_capture_chain(&board, Color::Dark), 2);
}

#[test]
fn equal_chains_on_different_pieces_are_all_legal() {
    let board = BoardBuilder::new()
        .man(Square(0, 0), Color::Dark)
        .man(Square(1, 1), Color::Light)
        .man(Square(5, 1), Color::Dark)
        .man(Square(6, 2), Color::Light)
        .build();

    let moves = board.legal_moves(Color::Dark, None);
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&Move::capture(Square(0, 0), Square(2, 2), Square(1, 1))));
    assert!(moves.contains(&Move::capture(Square(5, 1), Square(7, 3), Square(6, 2))));
}

#[test]
fn branching_chain_keeps_longest_route() {
    // from c1: b2 alone, or d2 then f4 then f6
    let board = BoardBuilder::new()
        .man(Square(0, 2), Color::Dark)
        .man(Square(1, 1), Color::Light)
        .man(Square(1, 3), Color::Light)
        .man(Square(3, 5), Color::Light)
        .man(Square(5, 5), Color::Light)
        .build();

    let moves = board.legal_moves(Color::Dark, None);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to(), Square(2, 4));
    assert_eq!(max_capture_chain(&board, Color::Dark), 3);
}

#[test]
fn promotion_mid_chain_extends_the_chain() {
    // c3 takes b2 landing on a1, crowned, then flies over d4
    let board = BoardBuilder::new()
        .man(Square(2, 2), Color::Light)
        .man(Square(1, 1), Color::Dark)
        .man(Square(3, 3), Color::Dark)
        .man(Square(7, 7), Color::Dark)
        .build();

    let moves = board.legal_moves(Color::Light, None);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0], Move::capture(Square(2, 2), Square(0, 0), Square(1, 1)));
    assert_eq!(max_capture_chain(&board, Color::Light), 2);
}

#[test]
fn no_captures_means_zero_chain() {
    assert_eq!(max_capture_chain(&Board::new(), Color::Light), 0);
}

fn forced_position() -> (Board, PieceId) {
    // c3 is mid-chain and can take d4; f6 could take g7 if it were free
    let board = BoardBuilder::new()
        .man(Square(2, 2), Color::Dark)
        .man(Square(3, 3), Color::Light)
        .man(Square(5, 5), Color::Dark)
        .man(Square(6, 6), Color::Light)
        .build();
    let id = board.piece_at(Square(2, 2)).map(|p| p.id).unwrap();
    (board, id)
}

#[test]
fn forced_piece_is_the_only_one_that_moves() {
    let (board, id) = forced_position();
    assert_eq!(board.legal_moves(Color::Dark, None).len(), 2);

    let moves = board.legal_moves(Color::Dark, Some(id));
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0], Move::capture(Square(2, 2), Square(4, 4), Square(3, 3)));
}

#[test]
fn forced_piece_without_captures_has_no_moves() {
    let board = BoardBuilder::new()
        .man(Square(2, 2), Color::Dark)
        .man(Square(5, 5), Color::Dark)
        .man(Square(6, 6), Color::Light)
        .build();
    let id = board.piece_at(Square(2, 2)).map(|p| p.id).unwrap();

    // no regular moves either, the chain is over
    assert!(board.legal_moves(Color::Dark, Some(id)).is_empty());
    assert!(!board.can_continue_capture(id));
}

#[test]
fn forced_piece_of_other_color_yields_nothing() {
    let (board, _) = forced_position();
    let light = board.piece_at(Square(3, 3)).map(|p| p.id).unwrap();
    assert!(board.legal_moves(Color::Dark, Some(light)).is_empty());
    assert!(board.legal_moves(Color::Dark, Some(PieceId(99))).is_empty());
}
