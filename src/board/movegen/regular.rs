use super::super::{Board, Move, MoveList, Piece, DIAGONALS};

impl Board {
    /// Non-capturing moves for one piece.
    ///
    /// Men step one square along either forward diagonal. Kings slide along
    /// all four diagonals until the first occupied square or the edge.
    pub(crate) fn regular_moves_for(&self, piece: &Piece, out: &mut MoveList) {
        let from = piece.square;
        if piece.is_king() {
            for dir in DIAGONALS {
                for to in (1..8).map_while(|dist| from.offset(dir, dist)) {
                    if !self.is_empty_square(to) {
                        break;
                    }
                    out.push(Move::regular(from, to));
                }
            }
        } else {
            let forward = piece.color.forward();
            for dc in [1, -1] {
                if let Some(to) = from.offset((forward, dc), 1) {
                    if self.is_empty_square(to) {
                        out.push(Move::regular(from, to));
                    }
                }
            }
        }
    }
}
