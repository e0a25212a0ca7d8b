//! Text layouts for boards and move notation.
//!
//! A layout lists the eight rows top (row 7) first, separated by `/`.
//! `l`/`L` are Light man/king, `d`/`D` Dark man/king, and a digit stands for
//! that many empty squares, e.g. the starting position is
//! `1l1l1l1l/l1l1l1l1/1l1l1l1l/8/8/d1d1d1d1/1d1d1d1d/d1d1d1d1`.

use std::fmt;

use super::error::{LayoutError, MoveParseError};
use super::{Board, BoardBuilder, Color, Move, Piece, PieceId, Square};

impl Board {
    /// Parse a board from a layout string.
    ///
    /// Ids are assigned in row-major order from row 0, matching `Board::new`.
    pub fn try_from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut builder = BoardBuilder::new();
        for (idx, row_str) in rows.iter().enumerate() {
            let row = 7 - idx;
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                } else {
                    let (color, rank) =
                        Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(LayoutError::TooManyColumns { row, cols: col + 1 });
                    }
                    builder = builder.piece(Square(row, col), color, rank);
                    col += 1;
                }
            }
            if col > 8 {
                return Err(LayoutError::TooManyColumns { row, cols: col });
            }
            if col < 8 {
                return Err(LayoutError::TooFewColumns { row, cols: col });
            }
        }

        builder.try_build()
    }

    /// Parse a board from a layout string.
    ///
    /// # Panics
    /// Panics if the layout is invalid. Use `try_from_layout` for fallible parsing.
    #[must_use]
    pub fn from_layout(layout: &str) -> Self {
        Self::try_from_layout(layout).expect("Invalid board layout")
    }

    /// Convert the board to its layout string.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in (0..8).rev() {
            let mut out = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.cells[row][col] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }

    /// Resolve move notation (`c3-d4`, `c3xe5`) against the legal moves of `color`.
    pub fn parse_move(
        &self,
        notation: &str,
        color: Color,
        forced: Option<PieceId>,
    ) -> Result<Move, MoveParseError> {
        let (from, to, capture) = split_move_notation(notation)?;
        self.legal_moves(color, forced)
            .find(from, to)
            .filter(|m| m.is_capture() == capture)
            .cloned()
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

/// Split `c3-d4` / `c3xe5` into its squares and whether it claims a capture.
pub(crate) fn split_move_notation(
    notation: &str,
) -> Result<(Square, Square, bool), MoveParseError> {
    let notation = notation.trim();
    let (from, to, capture) = if let Some((a, b)) = notation.split_once('-') {
        (a, b, false)
    } else if let Some((a, b)) = notation.split_once('x') {
        (a, b, true)
    } else {
        return Err(MoveParseError::InvalidFormat {
            notation: notation.to_string(),
        });
    };
    let square = |s: &str| {
        s.parse::<Square>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: notation.to_string(),
            })
    };
    Ok((square(from)?, square(to)?, capture))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8 {
                let ch = match self.cells[row][col] {
                    Some(piece) => piece.to_char(),
                    None if Square(row, col).is_dark() => '.',
                    None => ' ',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
