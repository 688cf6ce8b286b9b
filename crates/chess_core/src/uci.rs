use crate::{
    error::RulesError,
    position::{legal_moves, GamePosition},
    san::{is_castle, parse_san},
    types::*,
};

/// Long algebraic (UCI) form of a legal move of `board`.
///
/// Castling is written as the king's two-square step (`e1g1`), not as the
/// king-takes-rook encoding the generator uses internally.
pub fn move_to_uci(board: &Board, mv: Move) -> String {
    if is_castle(board, mv) {
        let file = if (mv.to.file() as usize) > (mv.from.file() as usize) {
            File::G
        } else {
            File::C
        };
        let to = Square::new(file, mv.from.rank());
        return format!("{}{}", mv.from, to);
    }
    mv.to_string()
}

/// Finds the legal move written as `txt` in UCI form.
///
/// A promotion without its piece letter (`e7e8`) promotes to a queen.
pub fn parse_uci_move(board: &Board, txt: &str) -> Result<Move, RulesError> {
    // Matched against legal moves so castling resolves to the generator's encoding
    let wanted = txt.trim().to_ascii_lowercase();
    let moves = legal_moves(board);
    moves
        .iter()
        .copied()
        .find(|&mv| move_to_uci(board, mv) == wanted || mv.to_string() == wanted)
        .or_else(|| {
            moves.iter().copied().find(|mv| {
                mv.promotion == Some(Piece::Queen) && format!("{}{}", mv.from, mv.to) == wanted
            })
        })
        .ok_or_else(|| RulesError::UnknownMove {
            text: txt.to_string(),
        })
}

/// Accepts either UCI (`g1f3`) or SAN (`Nf3`).
pub fn parse_move(board: &Board, txt: &str) -> Result<Move, RulesError> {
    parse_uci_move(board, txt).or_else(|_| parse_san(board, txt))
}

/// Applies the arguments of a UCI `position` command.
///
/// Supports `startpos [moves ...]` and `fen <fields> [moves ...]`. On error
/// `pos` is left untouched.
pub fn set_position_from_uci(pos: &mut GamePosition, args: &[&str]) -> Result<(), RulesError> {
    let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
    let (setup, moves) = args.split_at(moves_at);

    let mut next = match setup.split_first() {
        Some((&"fen", fields)) => GamePosition::from_fen(&fields.join(" "))?,
        _ => GamePosition::startpos(),
    };

    for txt in moves.iter().skip(1) {
        let mv = parse_uci_move(next.board(), txt)?;
        next.apply(mv);
    }

    *pos = next;
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
