//! UCI command handling, kept apart from stdin so it can be driven in tests.

use std::fmt;
use std::io::{self, Write};

use chess_core::{move_to_uci, set_position_from_uci, Color, Engine, GamePosition, Score};
use minimax_engine::eval::MATE_SCORE;
use minimax_engine::{MinimaxEngine, MAX_DEPTH, MIN_DEPTH};
use tracing::{debug, warn};

/// Score as reported in an `info` line, from the side to move's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciScore {
    Cp(i64),
    /// Moves until mate; negative when the side to move is the one mated
    Mate(i32),
}

impl UciScore {
    /// Converts a White-positive search score at nominal `depth`.
    ///
    /// Mate scores carry the depth left over at the mating leaf, which gives
    /// back the ply the mate lands on.
    pub fn from_search(score: Score, depth: u8, side: Color) -> Self {
        let relative = match side {
            Color::White => score,
            Color::Black => -score,
        };
        if relative.abs() < MATE_SCORE {
            return UciScore::Cp((relative * 100.0).round() as i64);
        }

        let unused = (relative.abs() - MATE_SCORE).round() as i32;
        let plies = (i32::from(depth) - unused).max(1);
        let moves = (plies + 1) / 2;
        if relative > 0.0 {
            UciScore::Mate(moves)
        } else {
            UciScore::Mate(-moves)
        }
    }
}

impl fmt::Display for UciScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciScore::Cp(cp) => write!(f, "cp {cp}"),
            UciScore::Mate(moves) => write!(f, "mate {moves}"),
        }
    }
}

pub struct UciSession {
    engine: MinimaxEngine,
    pos: GamePosition,
}

impl UciSession {
    pub fn new(engine: MinimaxEngine) -> Self {
        Self {
            engine,
            pos: GamePosition::startpos(),
        }
    }

    pub fn engine(&self) -> &MinimaxEngine {
        &self.engine
    }

    pub fn position(&self) -> &GamePosition {
        &self.pos
    }

    /// Handles one input line, writing any reply to `out`.
    ///
    /// Returns `false` once `quit` is received.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return Ok(true);
        };
        debug!(command = %line, "uci input");

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min {} max {}",
                    self.engine.config().depth,
                    MIN_DEPTH,
                    MAX_DEPTH
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(&parts),
            "ucinewgame" => {
                self.pos = GamePosition::startpos();
                self.engine.new_game();
            }
            "position" => {
                if let Err(e) = set_position_from_uci(&mut self.pos, &parts[1..]) {
                    warn!(error = %e, "position command rejected");
                }
            }
            "go" => self.go(&parts, out)?,
            "d" => writeln!(out, "{}", self.pos.fen())?,
            "quit" => return Ok(false),
            _ => {
                // ignore unknown commands
            }
        }
        out.flush()?;
        Ok(true)
    }

    fn set_option(&mut self, parts: &[&str]) {
        // Example: setoption name Depth value 4
        let name_at = parts.iter().position(|&x| x == "name");
        let value_at = parts.iter().position(|&x| x == "value");
        if let (Some(n), Some(v)) = (name_at, value_at) {
            if n + 1 < v && v + 1 < parts.len() {
                let name = parts[n + 1..v].join(" ");
                let value = parts[v + 1..].join(" ");
                if !self.engine.set_option(&name, &value) {
                    warn!(%name, %value, "unsupported option");
                }
            }
        }
    }

    fn go(&mut self, parts: &[&str], out: &mut impl Write) -> io::Result<()> {
        // Fixed depth search; clock arguments are ignored
        let depth = parts
            .iter()
            .position(|&x| x == "depth")
            .and_then(|i| parts.get(i + 1))
            .and_then(|d| d.parse::<u8>().ok())
            .unwrap_or(self.engine.config().depth);

        let side = self.pos.side_to_move();
        let result = self.engine.search_to_depth(&mut self.pos, depth);
        writeln!(
            out,
            "info depth {} score {} nodes {}",
            result.depth,
            UciScore::from_search(result.score, result.depth, side),
            result.nodes
        )?;
        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", move_to_uci(self.pos.board(), mv)),
            None => writeln!(out, "bestmove 0000"), // no moves
        }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
