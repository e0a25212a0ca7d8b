//! Majority law ("Lei da Maioria").
//!
//! Capturing is mandatory, and among all capture chains available to a side
//! only those taking the most pieces may be started. Each root jump is scored
//! as `1 + best continuation`, searching over immutable board snapshots with
//! the moved piece kept active. Sub-searches are memoized per analyzer on
//! (position hash, square of the capturing piece).

use std::collections::HashMap;

use super::super::{Board, Color, MoveList, PieceId, ScoredMove, Square};

pub(crate) struct CaptureAnalyzer {
    memo: HashMap<(u64, Square), u32>,
}

impl CaptureAnalyzer {
    pub(crate) fn new() -> Self {
        CaptureAnalyzer {
            memo: HashMap::new(),
        }
    }

    /// Most further captures the piece on `square` can chain from `board`.
    pub(crate) fn best_continuation(&mut self, board: &Board, square: Square) -> u32 {
        let key = (board.hash(), square);
        if let Some(&cached) = self.memo.get(&key) {
            return cached;
        }

        let Some(piece) = board.piece_at(square) else {
            return 0;
        };
        let mut jumps = MoveList::new();
        board.captures_for(&piece, &mut jumps);

        let mut best = 0;
        for jump in &jumps {
            let next = board.apply_unchecked(jump);
            best = best.max(1 + self.best_continuation(&next, jump.to()));
        }

        self.memo.insert(key, best);
        best
    }

    /// Every root capture of `color` (or of `forced` only) with its chain value.
    pub(crate) fn score_captures(
        &mut self,
        board: &Board,
        color: Color,
        forced: Option<PieceId>,
    ) -> Vec<ScoredMove> {
        let mut scored = Vec::new();
        for piece in board.pieces_of(color) {
            if forced.is_some_and(|id| id != piece.id) {
                continue;
            }
            let mut jumps = MoveList::new();
            board.captures_for(&piece, &mut jumps);
            for jump in jumps {
                let next = board.apply_unchecked(&jump);
                let total = 1 + self.best_continuation(&next, jump.to());
                scored.push(ScoredMove { mv: jump, total });
            }
        }
        scored
    }

    /// Root captures whose chain value equals the global maximum.
    ///
    /// Ties are kept across different pieces. Empty when no capture exists.
    pub(crate) fn maximal_captures(
        &mut self,
        board: &Board,
        color: Color,
        forced: Option<PieceId>,
    ) -> MoveList {
        let scored = self.score_captures(board, color, forced);
        let Some(max) = scored.iter().map(|s| s.total).max() else {
            return MoveList::new();
        };

        #[cfg(feature = "logging")]
        log::trace!(
            "{color}: {} root captures, keeping those taking {max}",
            scored.len()
        );

        scored
            .into_iter()
            .filter(|s| s.total == max)
            .map(|s| s.mv)
            .collect()
    }
}

/// Length of the longest capture chain available to `color`.
#[must_use]
pub fn max_capture_chain(board: &Board, color: Color) -> u32 {
    CaptureAnalyzer::new()
        .score_captures(board, color, None)
        .iter()
        .map(|s| s.total)
        .max()
        .unwrap_or(0)
}
