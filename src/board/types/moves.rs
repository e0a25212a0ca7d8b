//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A single step: one slide, or one jump with the square it captures.
///
/// A capture chain is played as a sequence of these, one per jump, while the
/// match stays in its forced-continuation phase.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) captures: Vec<Square>,
}

impl Move {
    /// Create a non-capturing move
    #[inline]
    #[must_use]
    pub fn regular(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captures: Vec::new(),
        }
    }

    /// Create a single jump removing the piece on `captured`
    #[inline]
    #[must_use]
    pub fn capture(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            captures: vec![captured],
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Captured squares in jump order. Empty for regular moves.
    #[inline]
    #[must_use]
    pub fn captures(&self) -> &[Square] {
        &self.captures
    }

    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

/// Formats as `c3-d4` for regular moves and `c3xe5` for captures.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Ordered list of moves, in generation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Move> {
        self.moves.get(idx)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Find the move going from `from` to `to`, if any.
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<&Move> {
        self.moves.iter().find(|m| m.from == from && m.to == to)
    }

    /// Moves starting on `from`.
    pub fn from_square(&self, from: Square) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(move |m| m.from == from)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub type MoveListIntoIter = std::vec::IntoIter<Move>;

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.moves.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.moves.len()
        );
        &self.moves[idx]
    }
}

/// A root capture together with the total number of pieces its best chain takes.
#[derive(Clone, Debug)]
pub(crate) struct ScoredMove {
    pub mv: Move,
    pub total: u32,
}
