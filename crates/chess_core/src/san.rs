//! Standard Algebraic Notation.

use crate::error::RulesError;
use crate::position::legal_moves;
use crate::types::*;

/// Castling is encoded by the generator as the king capturing its own rook.
pub(crate) fn is_castle(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::King)
        && board.color_on(mv.to) == Some(board.side_to_move())
}

/// Renders a legal move of `board` in SAN, including the `+`/`#` suffix.
pub fn to_san(board: &Board, mv: Move) -> String {
    let Some(piece) = board.piece_on(mv.from) else {
        return mv.to_string();
    };

    let mut san = String::new();
    if is_castle(board, mv) {
        let kingside = (mv.to.file() as usize) > (mv.from.file() as usize);
        san.push_str(if kingside { "O-O" } else { "O-O-O" });
    } else {
        let is_capture = board.color_on(mv.to).is_some()
            || (piece == Piece::Pawn && mv.from.file() != mv.to.file());

        if piece == Piece::Pawn {
            if is_capture {
                san.push_str(&mv.from.to_string()[..1]);
            }
        } else {
            san.push(piece_letter(piece));
            san.push_str(&disambiguation(board, piece, mv));
        }
        if is_capture {
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
        if let Some(promo) = mv.promotion {
            san.push('=');
            san.push(piece_letter(promo));
        }
    }

    let mut after = board.clone();
    after.play_unchecked(mv);
    if !after.checkers().is_empty() {
        let has_reply = after.generate_moves(|_| true);
        san.push(if has_reply { '+' } else { '#' });
    }
    san
}

/// File, rank or full square of the origin, whichever is the least that
/// tells apart other pieces of the same kind reaching the same square.
fn disambiguation(board: &Board, piece: Piece, mv: Move) -> String {
    let rivals: Vec<Square> = legal_moves(board)
        .into_iter()
        .filter(|m| m.to == mv.to && m.from != mv.from && board.piece_on(m.from) == Some(piece))
        .map(|m| m.from)
        .collect();
    if rivals.is_empty() {
        return String::new();
    }

    let origin = mv.from.to_string();
    let shares_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());
    if !shares_file {
        origin[..1].to_string()
    } else if !shares_rank {
        origin[1..].to_string()
    } else {
        origin
    }
}

fn normalize(text: &str) -> String {
    text.trim()
        .trim_end_matches(&['+', '#', '!', '?'][..])
        .replace('0', "O")
        .replace('=', "")
}

/// Finds the legal move whose SAN matches `text`.
///
/// Check markers and annotation glyphs are ignored and `0-0` is accepted for
/// castling. The `=` before a promotion piece is optional; leaving out the
/// piece altogether promotes to a queen.
pub fn parse_san(board: &Board, text: &str) -> Result<Move, RulesError> {
    let wanted = normalize(text);
    let candidates: Vec<(Move, String)> = legal_moves(board)
        .into_iter()
        .map(|mv| (mv, normalize(&to_san(board, mv))))
        .collect();

    candidates
        .iter()
        .find(|(_, san)| *san == wanted)
        .or_else(|| {
            candidates.iter().find(|(mv, san)| {
                mv.promotion == Some(Piece::Queen) && san.strip_suffix('Q') == Some(wanted.as_str())
            })
        })
        .map(|&(mv, _)| mv)
        .ok_or_else(|| RulesError::UnknownMove {
            text: text.to_string(),
        })
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
