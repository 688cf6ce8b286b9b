//! Game position with an apply/undo ply stack.
//!
//! `cozy-chess` boards are copy-make: playing a move overwrites the board.
//! [`GamePosition`] keeps the board that existed before each applied move, so
//! `undo` restores the parent position exactly and nested apply/undo pairs
//! follow strict stack discipline to any depth.

use std::fmt;

use crate::error::RulesError;
use crate::types::*;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "checkmate, {} wins", color_name(*winner)),
            Outcome::Stalemate => write!(f, "draw by stalemate"),
            Outcome::FiftyMoveRule => write!(f, "draw by the fifty-move rule"),
            Outcome::InsufficientMaterial => write!(f, "draw by insufficient material"),
            Outcome::ThreefoldRepetition => write!(f, "draw by threefold repetition"),
        }
    }
}

#[derive(Clone, Debug)]
struct Ply {
    before: Board,
    mv: Move,
}

#[derive(Clone, Debug)]
pub struct GamePosition {
    board: Board,
    plies: Vec<Ply>,
}

impl Default for GamePosition {
    fn default() -> Self {
        Self::startpos()
    }
}

impl GamePosition {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            plies: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = fen
            .trim()
            .parse::<Board>()
            .map_err(|e| RulesError::InvalidFen {
                fen: fen.to_string(),
                reason: format!("{e:?}"),
            })?;
        Ok(Self::from_board(board))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Number of moves currently applied on top of the root position.
    pub fn ply_count(&self) -> usize {
        self.plies.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.plies.last().map(|p| p.mv)
    }

    /// Moves applied since the root position, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.plies.iter().map(|p| p.mv)
    }

    /// All legal moves for the side to move, in generator order.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board)
    }

    pub fn has_legal_moves(&self) -> bool {
        // The listener aborts generation on the first piece with moves
        self.board.generate_moves(|_| true)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Plays a move produced by [`GamePosition::legal_moves`].
    ///
    /// No legality check is made; use [`GamePosition::try_apply`] for moves
    /// that come from outside the generator.
    pub fn apply(&mut self, mv: Move) {
        let before = self.board.clone();
        self.board.play_unchecked(mv);
        self.plies.push(Ply { before, mv });
    }

    pub fn try_apply(&mut self, mv: Move) -> Result<(), RulesError> {
        if !self.is_legal(mv) {
            return Err(RulesError::IllegalMove {
                mv: mv.to_string(),
                fen: self.fen(),
            });
        }
        self.apply(mv);
        Ok(())
    }

    /// Reverts the most recent [`apply`](GamePosition::apply).
    ///
    /// Returns the move that was taken back, or `None` at the root.
    pub fn undo(&mut self) -> Option<Move> {
        let ply = self.plies.pop()?;
        self.board = ply.before;
        Some(ply.mv)
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        Some((self.board.piece_on(sq)?, self.board.color_on(sq)?))
    }

    /// Checkmate, stalemate, fifty-move rule, insufficient material or
    /// threefold repetition; `None` while the game goes on.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.has_legal_moves() {
            return Some(if self.in_check() {
                Outcome::Checkmate {
                    winner: opponent(self.side_to_move()),
                }
            } else {
                Outcome::Stalemate
            });
        }
        if self.is_fifty_move_draw() {
            return Some(Outcome::FiftyMoveRule);
        }
        if self.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        if self.is_threefold_repetition() {
            return Some(Outcome::ThreefoldRepetition);
        }
        None
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// Neither side can possibly deliver mate: bare kings, a single minor
    /// piece, or bishops that all stand on one square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let mut shades = bishops.into_iter().map(is_dark_square);
        match shades.next() {
            Some(first) => shades.all(|shade| shade == first),
            None => true,
        }
    }

    /// The current position has occurred at least three times on the ply
    /// stack (including the root).
    pub fn is_threefold_repetition(&self) -> bool {
        let key = self.board.hash();
        let earlier = self
            .plies
            .iter()
            .filter(|p| p.before.hash() == key)
            .count();
        earlier + 1 >= 3
    }
}

/// Appends every legal move of `board` to `moves`.
pub fn legal_moves_into(board: &Board, moves: &mut Vec<Move>) {
    board.generate_moves(|piece_moves| {
        moves.extend(piece_moves);
        false
    });
}

pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, &mut moves);
    moves
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
