use super::error::ApplyError;
use super::{Board, Move, Rank};

impl Board {
    /// Play `mv` and return the resulting board. `self` is left untouched.
    ///
    /// The piece leaves `from`, every captured piece is removed and the piece
    /// lands on `to`. A man landing on its promotion row is crowned at once,
    /// even in the middle of a capture chain.
    ///
    /// Fails with an [`ApplyError`] if the move is structurally impossible on
    /// this board. Moves taken from [`Board::legal_moves`] never fail.
    pub fn apply_move(&self, mv: &Move) -> Result<Board, ApplyError> {
        let Some(piece) = self.piece_at(mv.from) else {
            return Err(violation(ApplyError::EmptyOrigin { square: mv.from }));
        };
        if !mv.to.is_on_board() || !mv.to.is_dark() {
            return Err(violation(ApplyError::InvalidDestination { square: mv.to }));
        }
        if self.piece_at(mv.to).is_some() {
            return Err(violation(ApplyError::OccupiedDestination { square: mv.to }));
        }
        for &captured in &mv.captures {
            if !self
                .piece_at(captured)
                .is_some_and(|p| p.color != piece.color)
            {
                return Err(violation(ApplyError::NothingToCapture { square: captured }));
            }
        }

        Ok(self.apply_unchecked(mv))
    }

    /// `apply_move` without the structural checks, for moves this crate generated.
    pub(crate) fn apply_unchecked(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        let Some(mut piece) = next.remove_piece(mv.from) else {
            return next;
        };
        for &captured in &mv.captures {
            next.remove_piece(captured);
        }

        piece.square = mv.to;
        if piece.rank == Rank::Man && mv.to.row() == piece.color.promotion_row() {
            piece.rank = Rank::King;
        }
        next.set_piece(piece);

        debug_assert_eq!(next.hash, next.calculate_hash());
        next
    }
}

fn violation(err: ApplyError) -> ApplyError {
    #[cfg(feature = "logging")]
    log::error!("{err}");
    err
}

/// Play `mv` on `board`; see [`Board::apply_move`].
pub fn apply_move(board: &Board, mv: &Move) -> Result<Board, ApplyError> {
    board.apply_move(mv)
}
