//! Per-match state machine.
//!
//! A [`Match`] owns the authoritative board of one game together with the
//! side to move and the capture-chain state:
//!
//! ```text
//! AwaitingMove --capture, more available--> ForcedContinuation(piece)
//! ForcedContinuation(piece) --chain exhausted--> AwaitingMove (opponent)
//! AwaitingMove --regular move / single capture--> AwaitingMove (opponent)
//! any --no moves, no pieces, resignation, agreed draw--> GameOver
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, MoveError, MoveList, Outcome, PieceId, Square};

/// Where a match stands between moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    AwaitingMove,
    /// The piece must keep capturing before the turn passes
    ForcedContinuation(PieceId),
    GameOver(Outcome),
}

/// Match settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchConfig {
    pub first_to_move: Color,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            first_to_move: Color::Light,
        }
    }
}

/// What happened when a move was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub played: Move,
    pub promoted: bool,
    /// Phase after the move
    pub phase: Phase,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    board: Board,
    turn: Color,
    phase: Phase,
    draw_offer: Option<Color>,
    history: Vec<Move>,
}

impl Default for Match {
    fn default() -> Self {
        Match::new(MatchConfig::default())
    }
}

impl Match {
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Match::from_position(Board::new(), config.first_to_move)
    }

    /// Start from an arbitrary position. The game may already be decided.
    #[must_use]
    pub fn from_position(board: Board, turn: Color) -> Self {
        let outcome = board.evaluate_game_over(turn);
        let phase = if outcome.is_over() {
            Phase::GameOver(outcome)
        } else {
            Phase::AwaitingMove
        };
        Match {
            board,
            turn,
            phase,
            draw_offer: None,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves accepted so far, one entry per jump.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn draw_offer(&self) -> Option<Color> {
        self.draw_offer
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::GameOver(outcome) => outcome,
            _ => Outcome::Ongoing,
        }
    }

    /// Piece that must continue its capture chain, if any.
    #[must_use]
    pub fn forced_piece(&self) -> Option<PieceId> {
        match self.phase {
            Phase::ForcedContinuation(id) => Some(id),
            _ => None,
        }
    }

    /// Legal moves for the side to move; empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if let Phase::GameOver(_) = self.phase {
            return MoveList::new();
        }
        self.board.legal_moves(self.turn, self.forced_piece())
    }

    /// Play the legal move going from `from` to `to`.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveReport, MoveError> {
        let mv = self.resolve(from, to)?;
        Ok(self.commit(mv))
    }

    /// [`Match::play`] on behalf of `color`, rejected when it is not that side's turn.
    pub fn play_as(
        &mut self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Result<MoveReport, MoveError> {
        if let Phase::GameOver(_) = self.phase {
            return Err(MoveError::GameOver);
        }
        if color != self.turn {
            return Err(MoveError::NotYourTurn { color });
        }
        self.play(from, to)
    }

    /// Play `mv`, which must equal one of the current legal moves.
    pub fn play_move(&mut self, mv: &Move) -> Result<MoveReport, MoveError> {
        let resolved = self.resolve(mv.from(), mv.to())?;
        if resolved.captures() != mv.captures() {
            return Err(MoveError::InvalidMove {
                from: mv.from(),
                to: mv.to(),
            });
        }
        Ok(self.commit(resolved))
    }

    fn resolve(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        if let Phase::GameOver(_) = self.phase {
            return Err(MoveError::GameOver);
        }
        if let Some(active) = self.forced_piece() {
            if self.board.piece_at(from).map(|p| p.id) != Some(active) {
                return Err(MoveError::IllegalContinuation {
                    active,
                    attempted: from,
                });
            }
        }
        self.legal_moves()
            .find(from, to)
            .cloned()
            .ok_or(MoveError::InvalidMove { from, to })
    }

    fn commit(&mut self, mv: Move) -> MoveReport {
        let next = self.board.apply_unchecked(&mv);
        let before = self.board.piece_at(mv.from());
        let after = next.piece_at(mv.to());
        let promoted = before.map(|p| p.rank) != after.map(|p| p.rank);

        let continuing = after
            .filter(|p| mv.is_capture() && next.can_continue_capture(p.id))
            .map(|p| p.id);

        self.board = next;
        self.history.push(mv.clone());

        self.phase = match continuing {
            Some(id) => Phase::ForcedContinuation(id),
            None => {
                self.turn = self.turn.opponent();
                match self.board.evaluate_game_over(self.turn) {
                    Outcome::Ongoing => Phase::AwaitingMove,
                    outcome => Phase::GameOver(outcome),
                }
            }
        };

        #[cfg(feature = "logging")]
        {
            log::debug!("played {mv}, phase now {:?}", self.phase);
            if let Phase::GameOver(outcome) = self.phase {
                log::info!("game over: {outcome}");
            }
        }

        MoveReport {
            played: mv,
            promoted,
            phase: self.phase,
        }
    }

    /// `color` concedes; the opponent wins.
    pub fn resign(&mut self, color: Color) -> Result<Outcome, MoveError> {
        self.finish(Outcome::Winner(color.opponent()))
    }

    /// `color` proposes a draw. The offer stands until answered.
    pub fn offer_draw(&mut self, color: Color) -> Result<(), MoveError> {
        if let Phase::GameOver(_) = self.phase {
            return Err(MoveError::GameOver);
        }
        if let Some(by) = self.draw_offer {
            return Err(MoveError::DrawAlreadyOffered { by });
        }
        self.draw_offer = Some(color);
        Ok(())
    }

    /// `color` accepts the opponent's pending offer; the match ends drawn.
    pub fn accept_draw(&mut self, color: Color) -> Result<Outcome, MoveError> {
        if self.draw_offer != Some(color.opponent()) {
            return Err(MoveError::NoDrawOffer);
        }
        self.finish(Outcome::Draw)
    }

    /// `color` turns down the opponent's pending offer.
    pub fn decline_draw(&mut self, color: Color) -> Result<(), MoveError> {
        if self.draw_offer != Some(color.opponent()) {
            return Err(MoveError::NoDrawOffer);
        }
        self.draw_offer = None;
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Outcome, MoveError> {
        if let Phase::GameOver(_) = self.phase {
            return Err(MoveError::GameOver);
        }
        self.phase = Phase::GameOver(outcome);
        self.draw_offer = None;

        #[cfg(feature = "logging")]
        log::info!("game over: {outcome}");

        Ok(outcome)
    }
}
