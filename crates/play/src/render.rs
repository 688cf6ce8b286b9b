//! Text rendering of the board

use chess_core::{piece_char, Board, Square};

/// Board as eight rows of `.`/piece letters with coordinates.
///
/// White's pieces are upper case. `flipped` puts rank 1 on top.
pub fn render_board(board: &Board, flipped: bool) -> String {
    let mut grid = [['.'; 8]; 8];
    for sq in Square::ALL {
        if let (Some(piece), Some(color)) = (board.piece_on(sq), board.color_on(sq)) {
            grid[sq.rank() as usize][sq.file() as usize] = piece_char(piece, color);
        }
    }

    let ranks: Vec<usize> = if flipped {
        (0..8).collect()
    } else {
        (0..8).rev().collect()
    };
    let files: Vec<usize> = if flipped {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut out = String::new();
    for &rank in &ranks {
        out.push_str(&format!("{} ", rank + 1));
        for &file in &files {
            out.push(' ');
            out.push(grid[rank][file]);
        }
        out.push('\n');
    }
    out.push_str("  ");
    for &file in &files {
        out.push(' ');
        out.push((b'a' + file as u8) as char);
    }
    out.push('\n');
    out
}
