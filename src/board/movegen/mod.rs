mod captures;
mod majority;
mod regular;

pub(crate) use majority::CaptureAnalyzer;
pub use majority::max_capture_chain;

use super::{Board, Color, MoveList, PieceId};

impl Board {
    /// Legal moves for `color`, in row-major order of the moving pieces.
    ///
    /// When any capture exists only captures are returned, filtered to those
    /// starting a longest chain. With `forced` set (a capture chain is under
    /// way) only that piece's captures are considered and regular moves are
    /// never offered; an empty list then means the chain is complete.
    #[must_use]
    pub fn legal_moves(&self, color: Color, forced: Option<PieceId>) -> MoveList {
        if let Some(id) = forced {
            if !self.find_piece(id).is_some_and(|p| p.color == color) {
                #[cfg(feature = "logging")]
                log::warn!("forced piece {id} is not a {color} piece on this board");
                return MoveList::new();
            }
        }

        let captures = CaptureAnalyzer::new().maximal_captures(self, color, forced);
        if !captures.is_empty() || forced.is_some() {
            return captures;
        }

        let mut moves = MoveList::new();
        for piece in self.pieces_of(color) {
            self.regular_moves_for(&piece, &mut moves);
        }
        moves
    }

    /// True if `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.pieces_of(color).any(|piece| {
            let mut moves = MoveList::new();
            self.regular_moves_for(&piece, &mut moves);
            !moves.is_empty() || self.can_capture(&piece)
        })
    }

    /// True if the piece `id` can keep capturing from its current square.
    #[must_use]
    pub fn can_continue_capture(&self, id: PieceId) -> bool {
        self.find_piece(id)
            .is_some_and(|piece| self.can_capture(&piece))
    }
}

/// Legal moves for `color` on `board`; see [`Board::legal_moves`].
#[must_use]
pub fn legal_moves(board: &Board, color: Color, forced: Option<PieceId>) -> MoveList {
    board.legal_moves(color, forced)
}

