use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::zobrist::ZOBRIST;

use super::error::LayoutError;
use super::{Color, Piece, PieceId, Square};

/// Maximum number of pieces a side may have on the board.
pub const PIECES_PER_SIDE: usize = 12;

/// Immutable snapshot of an 8x8 draughts board.
///
/// Boards are never edited in place by the public API: `apply_move` always
/// returns a fresh snapshot, so a `Board` can be shared freely between
/// threads and match sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Grid", into = "Grid"))]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; 8]; 8], // [row][col]
    pub(crate) hash: u64,                      // Zobrist hash
}

/// Serialized shape of a board: an 8x8 matrix of nullable piece records.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Grid(pub [[Option<Piece>; 8]; 8]);

impl Board {
    /// The standard starting position: Dark men on rows 0-2, Light men on rows 5-7.
    ///
    /// Ids are handed out in row-major order, so Dark holds ids 0-11 and
    /// Light ids 12-23.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let mut next_id = 0u8;
        for square in Square::dark_squares() {
            let color = if Color::Dark.home_rows().contains(&square.row()) {
                Color::Dark
            } else if Color::Light.home_rows().contains(&square.row()) {
                Color::Light
            } else {
                continue;
            };
            board.set_piece(Piece::man(PieceId(next_id), color, square));
            next_id += 1;
        }
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
            hash: 0,
        }
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Piece on `sq`, or `None` for empty and off-board squares.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.cells[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        sq.is_on_board() && self.cells[sq.0][sq.1].is_none()
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    /// Pieces of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    #[must_use]
    pub fn count_kings(&self, color: Color) -> usize {
        self.pieces_of(color).filter(Piece::is_king).count()
    }

    #[must_use]
    pub fn find_piece(&self, id: PieceId) -> Option<Piece> {
        self.pieces().find(|p| p.id == id)
    }

    /// Copy of the cell matrix in its serialized shape.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        Grid(self.cells)
    }

    /// Build a board from a cell matrix, checking every board invariant.
    pub fn try_from_grid(grid: Grid) -> Result<Self, LayoutError> {
        let mut board = Board::empty();
        let mut ids = HashSet::new();
        let mut counts = [0usize; 2];

        for (row, cells) in grid.0.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let Some(piece) = cell else { continue };
                let square = Square(row, col);
                if piece.square != square {
                    return Err(LayoutError::SquareMismatch {
                        cell: square,
                        stored: piece.square,
                    });
                }
                if !square.is_dark() {
                    return Err(LayoutError::PieceOnLightSquare { square });
                }
                if !ids.insert(piece.id) {
                    return Err(LayoutError::DuplicateId { id: piece.id });
                }
                counts[piece.color.index()] += 1;
                if counts[piece.color.index()] > PIECES_PER_SIDE {
                    return Err(LayoutError::TooManyPieces {
                        color: piece.color,
                        count: counts[piece.color.index()],
                    });
                }
                board.set_piece(*piece);
            }
        }

        Ok(board)
    }

    pub(crate) fn set_piece(&mut self, piece: Piece) {
        let sq = piece.square;
        self.cells[sq.0][sq.1] = Some(piece);
        self.hash ^= ZOBRIST.piece(piece.color, piece.rank, sq);
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.cells[sq.0][sq.1].take()?;
        self.hash ^= ZOBRIST.piece(piece.color, piece.rank, sq);
        Some(piece)
    }

    /// Hash recomputed from scratch; equals `hash()` for every reachable board.
    #[must_use]
    pub(crate) fn calculate_hash(&self) -> u64 {
        self.pieces()
            .fold(0, |h, p| h ^ ZOBRIST.piece(p.color, p.rank, p.square))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl TryFrom<Grid> for Board {
    type Error = LayoutError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        Board::try_from_grid(grid)
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board.to_grid()
    }
}

/// The standard starting position.
#[must_use]
pub fn initial_board() -> Board {
    Board::new()
}
