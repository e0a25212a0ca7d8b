//! Line-oriented console driving a single match.
//!
//! ```text
//! new                          start over from the initial position
//! layout <rows> [light|dark]   load a position, Light to move by default
//! board                        print the board
//! moves                        list legal moves
//! play c3-d4 | c3xe5           play a move
//! resign                       side to move resigns
//! draw offer|accept|decline    draw negotiation
//! perft <depth>                count move sequences
//! quit
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::board::{split_move_notation, Board, Color, LayoutError, MoveError, MoveParseError};
use crate::game::{Match, MatchConfig, Phase};

pub mod command;

use command::{parse_console_command, ConsoleCommand, DrawAction};

#[derive(Debug, Clone)]
pub enum ConsoleError {
    Layout(LayoutError),
    UnknownColor { name: String },
    Notation(MoveParseError),
    Move(MoveError),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Layout(e) => write!(f, "Invalid layout: {e}"),
            ConsoleError::UnknownColor { name } => write!(f, "Unknown color '{name}'"),
            ConsoleError::Notation(e) => write!(f, "{e}"),
            ConsoleError::Move(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<LayoutError> for ConsoleError {
    fn from(e: LayoutError) -> Self {
        ConsoleError::Layout(e)
    }
}

impl From<MoveParseError> for ConsoleError {
    fn from(e: MoveParseError) -> Self {
        ConsoleError::Notation(e)
    }
}

impl From<MoveError> for ConsoleError {
    fn from(e: MoveError) -> Self {
        ConsoleError::Move(e)
    }
}

fn parse_color(name: &str) -> Result<Color, ConsoleError> {
    match name.to_ascii_lowercase().as_str() {
        "light" | "l" => Ok(Color::Light),
        "dark" | "d" => Ok(Color::Dark),
        _ => Err(ConsoleError::UnknownColor {
            name: name.to_string(),
        }),
    }
}

/// Result of processing one console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Ok(Option<String>),
    Quit,
    Unknown(String),
}

#[derive(Debug, Default)]
pub struct Console {
    game: Match,
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn process_command(&mut self, line: &str) -> CommandResult {
        let Some(cmd) = parse_console_command(line) else {
            return CommandResult::Ok(None);
        };

        let output = match cmd {
            ConsoleCommand::Quit => return CommandResult::Quit,
            ConsoleCommand::Unknown(text) => return CommandResult::Unknown(text),
            ConsoleCommand::New => {
                self.game = Match::new(MatchConfig::default());
                Ok(None)
            }
            ConsoleCommand::Layout(layout, turn) => self.load_layout(&layout, turn.as_deref()),
            ConsoleCommand::Board => Ok(Some(self.describe())),
            ConsoleCommand::Moves => Ok(Some(self.list_moves())),
            ConsoleCommand::Play(notation) => self.play(&notation),
            ConsoleCommand::Resign => {
                let turn = self.game.turn();
                self.game
                    .resign(turn)
                    .map(|outcome| Some(format!("result {outcome}")))
                    .map_err(ConsoleError::from)
            }
            ConsoleCommand::Draw(action) => self.draw(action),
            ConsoleCommand::Perft(depth) => Ok(Some(self.perft(depth))),
        };

        match output {
            Ok(text) => CommandResult::Ok(text),
            Err(e) => CommandResult::Ok(Some(format!("error {e}"))),
        }
    }

    fn load_layout(
        &mut self,
        layout: &str,
        turn: Option<&str>,
    ) -> Result<Option<String>, ConsoleError> {
        let turn = turn.map_or(Ok(Color::Light), parse_color)?;
        let board = Board::try_from_layout(layout)?;
        self.game = Match::from_position(board, turn);
        Ok(None)
    }

    fn describe(&self) -> String {
        let mut out = self.game.board().to_string();
        match self.game.phase() {
            Phase::AwaitingMove => out.push_str(&format!("turn {}", self.game.turn())),
            Phase::ForcedContinuation(id) => {
                out.push_str(&format!("turn {} continue {id}", self.game.turn()));
            }
            Phase::GameOver(outcome) => out.push_str(&format!("result {outcome}")),
        }
        out
    }

    fn list_moves(&self) -> String {
        let moves: Vec<String> = self
            .game
            .legal_moves()
            .iter()
            .map(ToString::to_string)
            .collect();
        format!("moves {}", moves.join(" "))
    }

    fn play(&mut self, notation: &str) -> Result<Option<String>, ConsoleError> {
        let (from, to, _) = split_move_notation(notation)?;
        let report = self.game.play(from, to)?;
        let mut line = format!("played {}", report.played);
        if report.promoted {
            line.push_str(" promoted");
        }
        match report.phase {
            Phase::ForcedContinuation(id) => line.push_str(&format!("; {id} must continue")),
            Phase::GameOver(outcome) => line.push_str(&format!("; result {outcome}")),
            Phase::AwaitingMove => {}
        }
        Ok(Some(line))
    }

    fn draw(&mut self, action: DrawAction) -> Result<Option<String>, ConsoleError> {
        // answered by whoever did not make the offer
        let responder = self
            .game
            .draw_offer()
            .map_or(self.game.turn(), Color::opponent);
        match action {
            DrawAction::Offer => {
                let by = self.game.turn();
                self.game.offer_draw(by)?;
                Ok(Some(format!("draw offered by {by}")))
            }
            DrawAction::Accept => {
                let outcome = self.game.accept_draw(responder)?;
                Ok(Some(format!("result {outcome}")))
            }
            DrawAction::Decline => {
                self.game.decline_draw(responder)?;
                Ok(Some("draw declined".to_string()))
            }
        }
    }

    fn perft(&self, depth: usize) -> String {
        let start = Instant::now();
        let nodes = self.game.board().perft(self.game.turn(), depth);
        format!(
            "perft depth {depth} nodes {nodes} time_ms {}",
            start.elapsed().as_millis()
        )
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.process_command(&line) {
                CommandResult::Ok(Some(text)) => writeln!(output, "{text}")?,
                CommandResult::Ok(None) => {}
                CommandResult::Unknown(text) => writeln!(output, "unknown command: {text}")?,
                CommandResult::Quit => break,
            }
            output.flush()?;
        }
        Ok(())
    }
}

/// Run the console on stdin/stdout.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new().run(stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Outcome;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        Console::new().run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_opening_moves_listed() {
        let out = run_script("moves\n");
        assert_eq!(out.trim(), "moves b6-c5 b6-a5 d6-e5 d6-c5 f6-g5 f6-e5 h6-g5");
    }

    #[test]
    fn test_play_and_quit() {
        let out = run_script("play b6-a5\nquit\nboard\n");
        assert_eq!(out.trim(), "played b6-a5");
    }

    #[test]
    fn test_illegal_move_reported() {
        let mut console = Console::new();
        let result = console.process_command("play b6-b5");
        assert!(matches!(result, CommandResult::Ok(Some(ref s)) if s.starts_with("error")));
        assert!(console.game().history().is_empty());
    }

    #[test]
    fn test_layout_and_capture_chain() {
        let mut console = Console::new();
        console.process_command("layout 8/8/8/8/3l4/8/1l6/d7 dark");
        assert_eq!(console.game().turn(), Color::Dark);
        let result = console.process_command("play a1xc3");
        assert!(matches!(result, CommandResult::Ok(Some(ref s)) if s.contains("must continue")));
        console.process_command("play c3xe5");
        assert_eq!(console.game().outcome(), Outcome::Winner(Color::Dark));
    }

    #[test]
    fn test_draw_negotiation() {
        let mut console = Console::new();
        console.process_command("draw offer");
        let result = console.process_command("draw accept");
        assert_eq!(result, CommandResult::Ok(Some("result draw".to_string())));
    }

    #[test]
    fn test_unknown_command() {
        let out = run_script("castle\n");
        assert_eq!(out.trim(), "unknown command: castle");
    }

    #[test]
    fn test_bad_color() {
        let mut console = Console::new();
        let result = console.process_command("layout 8/8/8/8/8/8/8/8 blue");
        assert_eq!(
            result,
            CommandResult::Ok(Some("error Unknown color 'blue'".to_string()))
        );
    }
}
