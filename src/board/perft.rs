use super::{Board, Color, PieceId};

impl Board {
    /// Count the distinct move sequences `depth` turns deep for `color`.
    ///
    /// A turn is a regular move or a complete capture chain, so every
    /// branching point inside a chain adds leaves of its own.
    #[must_use]
    pub fn perft(&self, color: Color, depth: usize) -> u64 {
        self.perft_turn(color, None, depth)
    }

    fn perft_turn(&self, color: Color, forced: Option<PieceId>, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for mv in self.legal_moves(color, forced) {
            let next = self.apply_unchecked(&mv);
            let continuing = if mv.is_capture() {
                next.piece_at(mv.to())
                    .map(|p| p.id)
                    .filter(|&id| next.can_continue_capture(id))
            } else {
                None
            };
            nodes += match continuing {
                Some(id) => next.perft_turn(color, Some(id), depth),
                None => next.perft_turn(color.opponent(), None, depth - 1),
            };
        }

        nodes
    }
}
