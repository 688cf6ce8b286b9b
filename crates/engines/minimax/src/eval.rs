//! Material and center-control evaluation

use chess_core::{Color, GamePosition, Outcome, Piece, Score, Square};
use serde::Deserialize;

/// Stand-in for the king's unbounded worth; dwarfs all other material.
pub const KING_VALUE: Score = 1000.0;

/// Score of a delivered checkmate. Far above any reachable material balance.
pub const MATE_SCORE: Score = 100_000.0;

/// Bonus for occupying one of the four center squares.
pub const CENTER_BONUS: Score = 0.5;

pub const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(piece: Piece) -> Score {
    match piece {
        Piece::Pawn => 1.0,
        Piece::Knight => 3.0,
        Piece::Bishop => 3.0,
        Piece::Rook => 5.0,
        Piece::Queen => 9.0,
        Piece::King => KING_VALUE,
    }
}

/// Evaluates the position from White's perspective.
///
/// Material plus center occupancy, nothing else: checkmate and stalemate are
/// scored like any other position. See [`Evaluator`] for terminal-aware
/// scoring.
pub fn evaluate(pos: &GamePosition) -> Score {
    material(pos) + center_control(pos)
}

pub fn material(pos: &GamePosition) -> Score {
    let board = pos.board();
    let white = board.colors(Color::White);
    let black = board.colors(Color::Black);

    Piece::ALL
        .iter()
        .map(|&piece| {
            let pieces = board.pieces(piece);
            let balance = (pieces & white).len() as Score - (pieces & black).len() as Score;
            piece_value(piece) * balance
        })
        .sum()
}

pub fn center_control(pos: &GamePosition) -> Score {
    CENTER_SQUARES
        .iter()
        .map(|&sq| match pos.piece_at(sq) {
            Some((_, Color::White)) => CENTER_BONUS,
            Some((_, Color::Black)) => -CENTER_BONUS,
            None => 0.0,
        })
        .sum()
}

/// How finished games are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalScoring {
    /// Checkmate is worth [`MATE_SCORE`] to the winner; every draw is 0.
    #[default]
    Decisive,
    /// Finished games get the plain material + center score.
    Material,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    terminal: TerminalScoring,
}

impl Evaluator {
    pub fn new(terminal: TerminalScoring) -> Self {
        Self { terminal }
    }

    pub fn terminal_scoring(&self) -> TerminalScoring {
        self.terminal
    }

    pub fn evaluate(&self, pos: &GamePosition) -> Score {
        let outcome = match self.terminal {
            TerminalScoring::Decisive => pos.outcome(),
            TerminalScoring::Material => None,
        };
        self.score(pos, outcome)
    }

    /// Like [`Evaluator::evaluate`] with `outcome` already known, so callers
    /// that just checked for the end of the game do not generate moves again.
    pub fn score(&self, pos: &GamePosition, outcome: Option<Outcome>) -> Score {
        match (self.terminal, outcome) {
            (TerminalScoring::Decisive, Some(outcome)) => match outcome.winner() {
                Some(Color::White) => MATE_SCORE,
                Some(Color::Black) => -MATE_SCORE,
                None => 0.0,
            },
            _ => evaluate(pos),
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
