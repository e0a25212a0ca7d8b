//! Core draughts types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece`, `PieceId`, `Rank` and `Color`
//! - `Square` - (row, col) board coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceId, Rank};
pub use square::Square;

pub(crate) use moves::ScoredMove;
pub(crate) use square::DIAGONALS;
