/// Answer to a pending draw offer, or a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawAction {
    Offer,
    Accept,
    Decline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    New,
    /// Layout string and optional side to move
    Layout(String, Option<String>),
    Board,
    Moves,
    Play(String),
    Resign,
    Draw(DrawAction),
    Perft(usize),
    Quit,
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let unknown = || ConsoleCommand::Unknown(trimmed.to_string());

    let cmd = match parts[0] {
        "new" => ConsoleCommand::New,
        "layout" => match parts.get(1) {
            Some(layout) => ConsoleCommand::Layout(
                (*layout).to_string(),
                parts.get(2).map(|s| (*s).to_string()),
            ),
            None => unknown(),
        },
        "board" | "d" => ConsoleCommand::Board,
        "moves" => ConsoleCommand::Moves,
        "play" => match parts.get(1) {
            Some(notation) => ConsoleCommand::Play((*notation).to_string()),
            None => unknown(),
        },
        "resign" => ConsoleCommand::Resign,
        "draw" => match parts.get(1).copied() {
            Some("offer") => ConsoleCommand::Draw(DrawAction::Offer),
            Some("accept") => ConsoleCommand::Draw(DrawAction::Accept),
            Some("decline") => ConsoleCommand::Draw(DrawAction::Decline),
            _ => unknown(),
        },
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            ConsoleCommand::Perft(depth)
        }
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => unknown(),
    };

    Some(cmd)
}
