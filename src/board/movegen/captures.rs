use super::super::{Board, Move, MoveList, Piece, DIAGONALS};

impl Board {
    /// Single-jump captures for one piece.
    ///
    /// Men jump an adjacent opposing piece in any of the four directions,
    /// backward included. Kings fly: they may start the jump from any
    /// distance and land on any empty square beyond the captured piece, up to
    /// the next obstruction.
    pub(crate) fn captures_for(&self, piece: &Piece, out: &mut MoveList) {
        if piece.is_king() {
            self.king_captures(piece, out);
        } else {
            self.man_captures(piece, out);
        }
    }

    fn man_captures(&self, piece: &Piece, out: &mut MoveList) {
        let from = piece.square;
        for dir in DIAGONALS {
            let (Some(over), Some(to)) = (from.offset(dir, 1), from.offset(dir, 2)) else {
                continue;
            };
            let is_enemy = self
                .piece_at(over)
                .is_some_and(|p| p.color != piece.color);
            if is_enemy && self.is_empty_square(to) {
                out.push(Move::capture(from, to, over));
            }
        }
    }

    fn king_captures(&self, piece: &Piece, out: &mut MoveList) {
        let from = piece.square;
        for dir in DIAGONALS {
            let mut target = None;
            for sq in (1..8).map_while(|dist| from.offset(dir, dist)) {
                match (self.piece_at(sq), target) {
                    (None, None) => continue,
                    (None, Some(captured)) => out.push(Move::capture(from, sq, captured)),
                    (Some(p), None) if p.color != piece.color => target = Some(sq),
                    // own piece in front, or a second piece after the target
                    (Some(_), _) => break,
                }
            }
        }
    }

    /// True if `piece` has at least one capture available.
    pub(crate) fn can_capture(&self, piece: &Piece) -> bool {
        let mut scratch = MoveList::new();
        self.captures_for(piece, &mut scratch);
        !scratch.is_empty()
    }
}
