//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-sequence counts from known positions
//! - `rules.rs` - Movement and capture rules
//! - `majority.rs` - Longest-chain filtering and forced continuation
//! - `apply.rs` - Applying moves and promotion
//! - `game_over.rs` - Terminal position detection
//! - `proptest.rs` - Property-based tests

mod majority;
mod proptest;
