//! Piece, rank and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Side colors. Dark starts on rows 0-2, Light on rows 5-7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// Both colors in index order (Light=0, Dark=1)
    pub const BOTH: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a non-capturing man step (-1 for Light, +1 for Dark)
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> isize {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row on which a man of this color is crowned (0 for Light, 7 for Dark)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Rows occupied by this color in the starting position.
    #[inline]
    #[must_use]
    pub const fn home_rows(self) -> std::ops::RangeInclusive<usize> {
        match self {
            Color::Light => 5..=7,
            Color::Dark => 0..=2,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "Light"),
            Color::Dark => write!(f, "Dark"),
        }
    }
}

/// Rank of a piece. Promotion from `Man` to `King` is one-way.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    Man,
    King,
}

impl Rank {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Rank::Man => 0,
            Rank::King => 1,
        }
    }
}

/// Stable identity of a piece for the lifetime of a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PieceId(pub u8);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece together with the square it stands on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub rank: Rank,
    pub square: Square,
}

impl Piece {
    #[must_use]
    pub const fn man(id: PieceId, color: Color, square: Square) -> Self {
        Piece {
            id,
            color,
            rank: Rank::Man,
            square,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Layout character: `l`/`L` for Light man/king, `d`/`D` for Dark.
    #[must_use]
    pub const fn to_char(&self) -> char {
        match (self.color, self.rank) {
            (Color::Light, Rank::Man) => 'l',
            (Color::Light, Rank::King) => 'L',
            (Color::Dark, Rank::Man) => 'd',
            (Color::Dark, Rank::King) => 'D',
        }
    }

    /// Parse a layout character into color and rank.
    #[must_use]
    pub fn from_char(c: char) -> Option<(Color, Rank)> {
        match c {
            'l' => Some((Color::Light, Rank::Man)),
            'L' => Some((Color::Light, Rank::King)),
            'd' => Some((Color::Dark, Rank::Man)),
            'D' => Some((Color::Dark, Rank::King)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_points_at_promotion_row() {
        for color in Color::BOTH {
            let start = *color.home_rows().start() as isize;
            let toward = color.promotion_row() as isize - start;
            assert_eq!(toward.signum(), color.forward());
        }
    }

    #[test]
    fn test_char_round_trip() {
        for c in ['l', 'L', 'd', 'D'] {
            let (color, rank) = Piece::from_char(c).unwrap();
            let piece = Piece {
                id: PieceId(0),
                color,
                rank,
                square: Square(0, 0),
            };
            assert_eq!(piece.to_char(), c);
        }
        assert!(Piece::from_char('x').is_none());
    }
}
