//! Property-based tests using proptest.

use crate::board::{Board, BoardBuilder, Color, Move, MoveList, PieceId, Rank, Square};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random playout length, in jumps and moves
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Strategy for a sparse middlegame-like position with kings on both sides
fn position_strategy() -> impl Strategy<Value = Board> {
    let placement = (0..32usize, any::<bool>(), 0..4u8);
    prop::collection::vec(placement, 1..12).prop_map(|placements| {
        let mut builder = BoardBuilder::new();
        let mut counts = [0usize; 2];
        for (idx, light, rank_roll) in placements {
            let Some(square) = Square::dark_squares().nth(idx) else {
                continue;
            };
            let color = if light { Color::Light } else { Color::Dark };
            if counts[usize::from(light)] == 6 {
                continue;
            }
            counts[usize::from(light)] += 1;
            // a man cannot stand on its own promotion row
            let rank = if rank_roll == 0 || square.row() == color.promotion_row() {
                Rank::King
            } else {
                Rank::Man
            };
            builder = builder.piece(square, color, rank);
        }
        builder.build()
    })
}

/// One position reached during a playout, with the side and chain state to move.
struct Step {
    board: Board,
    color: Color,
    forced: Option<PieceId>,
    moves: MoveList,
}

/// Play random legal moves, continuing capture chains like a match would.
fn playout(seed: u64, plies: usize) -> Vec<Step> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut color = Color::Light;
    let mut forced = None;
    let mut steps = Vec::new();

    for _ in 0..plies {
        let moves = board.legal_moves(color, forced);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())].clone();
        steps.push(Step {
            board: board.clone(),
            color,
            forced,
            moves,
        });

        let next = board.apply_move(&mv).unwrap();
        forced = next
            .piece_at(mv.to())
            .map(|p| p.id)
            .filter(|&id| mv.is_capture() && next.can_continue_capture(id));
        if forced.is_none() {
            color = color.opponent();
        }
        board = next;
    }

    steps
}

/// Longest chain for the piece on `square`, without memoization.
fn naive_chain(board: &Board, square: Square) -> u32 {
    let Some(piece) = board.piece_at(square) else {
        return 0;
    };
    let mut jumps = MoveList::new();
    board.captures_for(&piece, &mut jumps);
    jumps
        .iter()
        .map(|jump| 1 + naive_chain(&board.apply_unchecked(jump), jump.to()))
        .max()
        .unwrap_or(0)
}

fn naive_max_chain(board: &Board, color: Color) -> u32 {
    board
        .pieces_of(color)
        .map(|p| naive_chain(board, p.square))
        .max()
        .unwrap_or(0)
}

fn assert_move_shape(board: &Board, color: Color, mv: &Move) -> Result<(), TestCaseError> {
    prop_assert_eq!(board.piece_at(mv.from()).map(|p| p.color), Some(color));
    prop_assert!(board.is_empty_square(mv.to()), "{} lands on a piece", mv);
    prop_assert!(mv.to().is_dark());
    for &captured in mv.captures() {
        prop_assert_eq!(
            board.piece_at(captured).map(|p| p.color),
            Some(color.opponent())
        );
    }
    Ok(())
}

proptest! {
    /// Property: hash is always consistent with recomputed hash
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), plies in move_count_strategy()) {
        for step in playout(seed, plies) {
            prop_assert_eq!(step.board.hash(), step.board.calculate_hash());
        }
    }

    /// Property: every legal move starts on an own piece and lands on an empty square
    #[test]
    fn prop_legal_move_shape(seed in seed_strategy(), plies in move_count_strategy()) {
        for step in playout(seed, plies) {
            for mv in &step.moves {
                assert_move_shape(&step.board, step.color, mv)?;
            }
        }
    }

    /// Property: captures, when available, are the only legal moves and all share the maximum
    #[test]
    fn prop_majority_law(seed in seed_strategy(), plies in move_count_strategy()) {
        for step in playout(seed, plies) {
            if step.forced.is_some() {
                continue;
            }
            let best = naive_max_chain(&step.board, step.color);
            if best == 0 {
                prop_assert!(step.moves.iter().all(|m| !m.is_capture()));
                continue;
            }
            for mv in &step.moves {
                prop_assert!(mv.is_capture());
                let next = step.board.apply_unchecked(mv);
                prop_assert_eq!(1 + naive_chain(&next, mv.to()), best);
            }
        }
    }

    /// Property: a forced continuation only ever moves the active piece
    #[test]
    fn prop_forced_moves_belong_to_active_piece(seed in seed_strategy(), plies in move_count_strategy()) {
        for step in playout(seed, plies) {
            let Some(id) = step.forced else { continue };
            let square = step.board.find_piece(id).map(|p| p.square);
            for mv in &step.moves {
                prop_assert!(mv.is_capture());
                prop_assert_eq!(Some(mv.from()), square);
            }
        }
    }

    /// Property: piece ids are never reused and kings never become men again
    #[test]
    fn prop_pieces_only_disappear_or_promote(seed in seed_strategy(), plies in move_count_strategy()) {
        let steps = playout(seed, plies);
        for pair in steps.windows(2) {
            let (before, after) = (&pair[0].board, &pair[1].board);
            for piece in after.pieces() {
                let old = before.find_piece(piece.id);
                prop_assert!(old.is_some(), "{} appeared from nowhere", piece.id);
                let old = old.unwrap();
                prop_assert_eq!(old.color, piece.color);
                prop_assert!(!(old.is_king() && !piece.is_king()));
            }
            prop_assert!(after.pieces().count() <= before.pieces().count());
        }
    }

    /// Property: memoized chain search agrees with plain recursion on random positions
    #[test]
    fn prop_memo_matches_naive(board in position_strategy()) {
        for color in Color::BOTH {
            prop_assert_eq!(
                crate::board::max_capture_chain(&board, color),
                naive_max_chain(&board, color)
            );
        }
    }

    /// Property: flying kings and men on random positions produce well-formed moves
    #[test]
    fn prop_random_position_moves(board in position_strategy()) {
        for color in Color::BOTH {
            for mv in &board.legal_moves(color, None) {
                assert_move_shape(&board, color, mv)?;
                prop_assert!(board.apply_move(mv).is_ok());
            }
        }
    }

    /// Property: layout round-trip preserves position
    #[test]
    fn prop_layout_roundtrip(seed in seed_strategy(), plies in move_count_strategy()) {
        if let Some(step) = playout(seed, plies).pop() {
            let layout = step.board.to_layout();
            let restored = Board::from_layout(&layout);
            prop_assert_eq!(restored.hash(), step.board.hash());
            prop_assert_eq!(restored.to_layout(), layout);
        }
    }
}
