//! Game session: the position, the move record and whose turn it is.
//!
//! Everything the front ends used to keep as loose globals (the game, the
//! move counter, the history text) lives here and is passed explicitly.

use tracing::{debug, info};

use crate::{
    error::SessionError,
    position::{GamePosition, Outcome},
    san::to_san,
    types::*,
    uci::parse_move,
    Engine,
};

/// Moves of the game in SAN, numbered from the position they started at.
#[derive(Debug, Clone)]
pub struct MoveHistory {
    first_number: u32,
    first_color: Color,
    moves: Vec<String>,
}

impl MoveHistory {
    pub fn starting_at(board: &Board) -> Self {
        Self {
            first_number: u32::from(board.fullmove_number()),
            first_color: board.side_to_move(),
            moves: Vec::new(),
        }
    }

    pub fn record(&mut self, san: String) {
        self.moves.push(san);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Running text of the game: `"1. e4 e5 - 2. Nf3 Nc6 -"`.
    ///
    /// White moves carry their move number; Black moves are closed with a
    /// dash. A record that starts with Black opens with `"N... move -"`.
    pub fn text(&self) -> String {
        let offset = match self.first_color {
            Color::White => 0,
            Color::Black => 1,
        };
        let mut parts = Vec::with_capacity(self.moves.len());
        for (i, san) in self.moves.iter().enumerate() {
            let ply = i + offset;
            let number = self.first_number as usize + ply / 2;
            if ply % 2 == 0 {
                parts.push(format!("{number}. {san}"));
            } else if i == 0 {
                parts.push(format!("{number}... {san} -"));
            } else {
                parts.push(format!("{san} -"));
            }
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    position: GamePosition,
    history: MoveHistory,
    human: Color,
}

impl GameSession {
    pub fn new(human: Color) -> Self {
        let position = GamePosition::startpos();
        let history = MoveHistory::starting_at(position.board());
        Self {
            position,
            history,
            human,
        }
    }

    pub fn position(&self) -> &GamePosition {
        &self.position
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn human(&self) -> Color {
        self.human
    }

    pub fn is_humans_turn(&self) -> bool {
        self.position.side_to_move() == self.human
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.position.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.position.is_terminal()
    }

    /// Plays a human move given in SAN or UCI and returns its SAN.
    ///
    /// Rejected moves leave the session unchanged.
    pub fn play_human(&mut self, text: &str) -> Result<String, SessionError> {
        if let Some(outcome) = self.position.outcome() {
            return Err(SessionError::GameOver(outcome));
        }
        if !self.is_humans_turn() {
            return Err(SessionError::NotYourTurn);
        }
        let mv = parse_move(self.position.board(), text)?;
        Ok(self.commit(mv))
    }

    /// Lets `engine` move for the side to move and returns the move's SAN.
    ///
    /// `None` means the game is over and nothing was played.
    pub fn play_engine(&mut self, engine: &mut dyn Engine) -> Option<String> {
        if let Some(outcome) = self.position.outcome() {
            info!(%outcome, "game over");
            return None;
        }
        let mv = engine.choose_move(&mut self.position)?;
        Some(self.commit(mv))
    }

    pub fn reset(&mut self) {
        self.load(GamePosition::startpos());
    }

    /// Replaces the game with the position in `fen`; the history restarts.
    pub fn set_position(&mut self, fen: &str) -> Result<(), SessionError> {
        let position = GamePosition::from_fen(fen)?;
        self.load(position);
        Ok(())
    }

    fn load(&mut self, position: GamePosition) {
        self.history = MoveHistory::starting_at(position.board());
        self.position = position;
        debug!(fen = %self.position.fen(), "session position loaded");
    }

    fn commit(&mut self, mv: Move) -> String {
        let san = to_san(self.position.board(), mv);
        self.position.apply(mv);
        self.history.record(san.clone());
        san
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
