//! Draughts board representation and rules.
//!
//! Implements Brazilian rules on the 8x8 board: men move forward and capture
//! in all four directions, kings fly, capturing is mandatory and the longest
//! capture chain must be taken (majority law).
//!
//! # Example
//! ```
//! use draughts_engine::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::Light, None);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod apply;
mod builder;
mod error;
mod layout;
mod movegen;
mod outcome;
mod perft;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{ApplyError, LayoutError, MoveError, MoveParseError, SquareError};
pub use state::{initial_board, Board, Grid, PIECES_PER_SIDE};
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, PieceId, Rank, Square};

// Public API - rule functions
pub use apply::apply_move;
pub use movegen::{legal_moves, max_capture_chain};
pub use outcome::{evaluate_game_over, Outcome};

pub(crate) use layout::split_move_notation;
pub(crate) use types::{ScoredMove, DIAGONALS};
