//! Error types for rules and session operations

use thiserror::Error;

use crate::position::Outcome;

/// Errors raised while talking to the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The FEN string could not be parsed into a legal position
    #[error("Invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A well-formed move that is not legal in the position
    #[error("Illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    /// Text that matches no legal move in either SAN or UCI form
    #[error("Unrecognised move {text:?}")]
    UnknownMove { text: String },
}

/// Errors raised by [`crate::GameSession`] when a human move is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Game over: {0}")]
    GameOver(Outcome),

    #[error("It is not your turn")]
    NotYourTurn,

    #[error(transparent)]
    Rules(#[from] RulesError),
}
