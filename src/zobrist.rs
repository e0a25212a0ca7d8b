//! Zobrist hashing for draughts positions.
//!
//! Provides incrementally-updatable 64-bit position hashes. The capture
//! analyzer keys its memo table on them.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Rank, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][rank][square_index]
    piece_keys: [[[u64; 64]; 2]; 2],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 2]; 2];

        for color in &mut piece_keys {
            for rank in color.iter_mut() {
                for key in rank.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        ZobristKeys { piece_keys }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, rank: Rank, square: Square) -> u64 {
        self.piece_keys[color.index()][rank.index()][square.as_index()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
