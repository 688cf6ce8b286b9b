//! Shared vocabulary types.
//!
//! Board representation and move generation come from `cozy-chess`; this
//! module re-exports the pieces of it the rest of the workspace talks in.

pub use cozy_chess::{Board, Color, File, Move, Piece, Square};

/// Signed evaluation. Positive favours White, negative favours Black.
pub type Score = f64;

/// The side that moves after `color`.
pub fn opponent(color: Color) -> Color {
    match color {
        Color::White => Color::Black,
        Color::Black => Color::White,
    }
}

/// Upper-case SAN letter for a piece (pawns included, for board rendering).
pub fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

/// FEN-style character: upper case for White, lower case for Black.
pub fn piece_char(piece: Piece, color: Color) -> char {
    let c = piece_letter(piece);
    match color {
        Color::White => c,
        Color::Black => c.to_ascii_lowercase(),
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// True for a1-coloured squares.
pub fn is_dark_square(sq: Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 0
}
