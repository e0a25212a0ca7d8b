//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use draughts_engine::board::prelude::*;
//! ```

pub use super::{
    apply_move, evaluate_game_over, initial_board, legal_moves, ApplyError, Board, BoardBuilder,
    Color, Move, MoveError, MoveList, Outcome, Piece, PieceId, Rank, Square,
};
