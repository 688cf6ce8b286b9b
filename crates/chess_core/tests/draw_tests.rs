//! Tests for game-over detection
//!
//! This module tests all terminal conditions:
//! - Stalemate
//! - Fifty-move rule
//! - Threefold repetition
//! - Insufficient material

use chess_core::{Color, GamePosition, Outcome};

fn outcome_of(fen: &str) -> Option<Outcome> {
    GamePosition::from_fen(fen).unwrap().outcome()
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let pos = GamePosition::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    assert!(pos.legal_moves().is_empty(), "Stalemate position should have no legal moves");
    assert!(!pos.in_check(), "Stalemate means king is not in check");
    assert_eq!(pos.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    assert_eq!(
        outcome_of("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1"),
        Some(Outcome::Stalemate)
    );
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    assert_eq!(
        outcome_of("8/8/8/4k3/8/4K3/8/7R w - - 100 60"),
        Some(Outcome::FiftyMoveRule)
    );
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    assert_eq!(outcome_of("8/8/8/4k3/8/4K3/8/7R w - - 99 60"), None);
}

#[test]
fn test_checkmate_beats_fifty_move_rule() {
    // Back-rank mate delivered on the hundredth half-move
    assert_eq!(
        outcome_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 100 80"),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_bare_kings() {
    assert_eq!(
        outcome_of("8/8/8/4k3/8/4K3/8/8 w - - 0 1"),
        Some(Outcome::InsufficientMaterial)
    );
}

#[test]
fn test_single_minor_piece() {
    assert_eq!(
        outcome_of("8/8/8/4k3/8/4K3/8/6N1 w - - 0 1"),
        Some(Outcome::InsufficientMaterial)
    );
    assert_eq!(
        outcome_of("8/8/8/4k3/8/4K3/8/5b2 w - - 0 1"),
        Some(Outcome::InsufficientMaterial)
    );
}

#[test]
fn test_same_coloured_bishops() {
    // c1 and f4 are both dark squares
    assert_eq!(
        outcome_of("8/8/8/4k3/5b2/4K3/8/2B5 w - - 0 1"),
        Some(Outcome::InsufficientMaterial)
    );
}

#[test]
fn test_sufficient_material() {
    // Opposite-coloured bishops (c1 dark, f5 light)
    assert_eq!(outcome_of("8/8/8/4kb2/8/4K3/8/2B5 w - - 0 1"), None);
    // Two knights can still mate with help
    assert_eq!(outcome_of("8/8/8/4k3/8/4K3/8/1N4N1 w - - 0 1"), None);
    // Any pawn keeps the game going
    assert_eq!(outcome_of("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1"), None);
}

// =============================================================================
// Threefold Repetition Tests
// =============================================================================

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    let mut pos = GamePosition::startpos();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

    for uci in shuffle {
        pos.apply(uci.parse().unwrap());
    }
    assert!(!pos.is_threefold_repetition(), "Second occurrence is not yet a draw");

    for uci in shuffle {
        pos.apply(uci.parse().unwrap());
    }
    assert_eq!(pos.outcome(), Some(Outcome::ThreefoldRepetition));

    pos.undo();
    assert_eq!(pos.outcome(), None);
}
