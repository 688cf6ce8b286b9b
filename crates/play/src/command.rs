//! Commands typed at the game prompt

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A move in SAN or UCI
    Move(String),
    New,
    Fen(String),
    Flip,
    History,
    Help,
    Quit,
}

impl Command {
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "" => return None,
            "new" | "reset" => Command::New,
            "fen" | "position" => Command::Fen(rest.to_string()),
            "flip" => Command::Flip,
            "history" | "moves" => Command::History,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Move(line.to_string()),
        };
        Some(command)
    }
}

pub const HELP: &str = "\
Enter a move in SAN (Nf3, exd5, O-O, e8=Q) or UCI (g1f3).
Commands:
  new          start a new game
  fen <FEN>    set up a position
  flip         turn the board around
  history      show the moves played
  help         show this text
  quit         leave";
