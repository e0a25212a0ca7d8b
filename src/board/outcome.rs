//! Terminal position detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Result of evaluating a position (or a whole match).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Play continues
    Ongoing,
    Winner(Color),
    /// Only reachable by agreement; the board never reports a draw on its own
    Draw,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Winner(color) => Some(color),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Winner(color) => write!(f, "{color} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

impl Board {
    /// Evaluate the position with `side_to_move` about to play.
    ///
    /// The side to move loses when it has no legal move (which includes
    /// having no pieces). A side with no pieces left loses regardless of
    /// whose turn it is.
    #[must_use]
    pub fn evaluate_game_over(&self, side_to_move: Color) -> Outcome {
        if !self.has_legal_moves(side_to_move) {
            return Outcome::Winner(side_to_move.opponent());
        }
        for color in Color::BOTH {
            if self.count(color) == 0 {
                return Outcome::Winner(color.opponent());
            }
        }
        Outcome::Ongoing
    }
}

/// Evaluate `board` with `side_to_move` about to play; see [`Board::evaluate_game_over`].
#[must_use]
pub fn evaluate_game_over(board: &Board, side_to_move: Color) -> Outcome {
    board.evaluate_game_over(side_to_move)
}
