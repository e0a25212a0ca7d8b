//! Fluent builder for constructing draughts positions.
//!
//! Allows creating positions piece by piece rather than parsing layouts.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Color, Square};
//!
//! let board = BoardBuilder::new()
//!     .man(Square(2, 2), Color::Dark)
//!     .man(Square(3, 3), Color::Light)
//!     .king(Square(7, 7), Color::Light)
//!     .build();
//! assert_eq!(board.count(Color::Light), 2);
//! ```

use super::error::LayoutError;
use super::{Board, Color, Grid, Piece, PieceId, Rank, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Rank)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            pieces: board
                .pieces()
                .map(|p| (p.square, p.color, p.rank))
                .collect(),
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, rank: Rank) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, rank));
        self
    }

    #[must_use]
    pub fn man(self, square: Square, color: Color) -> Self {
        self.piece(square, color, Rank::Man)
    }

    #[must_use]
    pub fn king(self, square: Square, color: Color) -> Self {
        self.piece(square, color, Rank::King)
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board, checking every board invariant.
    ///
    /// Ids are assigned in row-major order of the squares.
    pub fn try_build(mut self) -> Result<Board, LayoutError> {
        let mut grid = Grid([[None; 8]; 8]);
        self.pieces.sort_by_key(|(sq, _, _)| *sq);

        for (idx, (square, color, rank)) in self.pieces.into_iter().enumerate() {
            if !square.is_on_board() || !square.is_dark() {
                return Err(LayoutError::PieceOnLightSquare { square });
            }
            grid.0[square.0][square.1] = Some(Piece {
                id: PieceId(idx as u8),
                color,
                rank,
                square,
            });
        }

        Board::try_from_grid(grid)
    }

    /// Build the board.
    ///
    /// # Panics
    /// Panics if a piece stands on an unplayable square or a side has more
    /// than 12 pieces. Use `try_build` for fallible construction.
    #[must_use]
    pub fn build(self) -> Board {
        self.try_build().expect("Invalid board position")
    }
}
