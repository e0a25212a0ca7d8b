pub mod board;
pub mod console;
pub mod game;
pub mod registry;
mod zobrist;

pub use board::{Board, Color, Move, Outcome, Piece, PieceId, Rank, Square};
pub use game::{Match, MatchConfig, MoveReport, Phase};
pub use registry::{MatchId, MatchRegistry, RegistryError};
