//! Error types for board and move operations.

use std::fmt;

use super::{Color, PieceId, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Square is on the board but never playable
    LightSquare { square: Square },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::LightSquare { square } => {
                write!(f, "Square {square} is not a playable square")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board layouts that break the board invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout string does not have exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// A row describes more than 8 squares
    TooManyColumns { row: usize, cols: usize },
    /// A row describes fewer than 8 squares
    TooFewColumns { row: usize, cols: usize },
    /// A piece stands on an unplayable square
    PieceOnLightSquare { square: Square },
    /// More than 12 pieces of one color
    TooManyPieces { color: Color, count: usize },
    /// Two pieces share an id
    DuplicateId { id: PieceId },
    /// A piece's stored square differs from the cell holding it
    SquareMismatch { cell: Square, stored: Square },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have 8 rows, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::TooManyColumns { row, cols } => {
                write!(f, "Too many columns ({cols}) in row {row}")
            }
            LayoutError::TooFewColumns { row, cols } => {
                write!(f, "Too few columns ({cols}) in row {row}")
            }
            LayoutError::PieceOnLightSquare { square } => {
                write!(f, "Piece on unplayable square {square}")
            }
            LayoutError::TooManyPieces { color, count } => {
                write!(f, "{color} has {count} pieces, at most 12 allowed")
            }
            LayoutError::DuplicateId { id } => {
                write!(f, "Piece id {id} appears more than once")
            }
            LayoutError::SquareMismatch { cell, stored } => {
                write!(f, "Piece in cell {cell} claims to stand on {stored}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string is not `<square>-<square>` or `<square>x<square>`
    InvalidFormat { notation: String },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { notation } => {
                write!(f, "Move '{notation}' must look like c3-d4 or c3xe5")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Rejected move proposals. The board is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Not a member of the current legal move set
    InvalidMove { from: Square, to: Square },
    /// A piece other than the one completing a capture chain was moved
    IllegalContinuation { active: PieceId, attempted: Square },
    /// Acting color is not the side to move
    NotYourTurn { color: Color },
    /// The match already has a result
    GameOver,
    /// No pending draw offer from the opponent
    NoDrawOffer,
    /// A draw offer is already pending
    DrawAlreadyOffered { by: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMove { from, to } => {
                write!(f, "Move {from} to {to} is not legal")
            }
            MoveError::IllegalContinuation { active, attempted } => {
                write!(
                    f,
                    "Piece {active} must continue capturing, cannot move from {attempted}"
                )
            }
            MoveError::NotYourTurn { color } => write!(f, "It is not {color}'s turn"),
            MoveError::GameOver => write!(f, "The game is already over"),
            MoveError::NoDrawOffer => write!(f, "There is no draw offer to answer"),
            MoveError::DrawAlreadyOffered { by } => {
                write!(f, "{by} already has a draw offer pending")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Structural invariant violations raised by `Board::apply_move`.
///
/// Moves produced by `legal_moves` never trigger these; seeing one means the
/// caller built a move by hand against the wrong position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// No piece on the origin square
    EmptyOrigin { square: Square },
    /// Destination square already holds a piece
    OccupiedDestination { square: Square },
    /// Destination is off the board or on an unplayable square
    InvalidDestination { square: Square },
    /// Captured square does not hold an opposing piece
    NothingToCapture { square: Square },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::EmptyOrigin { square } => {
                write!(f, "Structural violation: origin {square} is empty")
            }
            ApplyError::OccupiedDestination { square } => {
                write!(f, "Structural violation: destination {square} is occupied")
            }
            ApplyError::InvalidDestination { square } => {
                write!(
                    f,
                    "Structural violation: destination ({}, {}) is not playable",
                    square.0, square.1
                )
            }
            ApplyError::NothingToCapture { square } => {
                write!(
                    f,
                    "Structural violation: no opposing piece to capture on {square}"
                )
            }
        }
    }
}

impl std::error::Error for ApplyError {}
