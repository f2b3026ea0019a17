//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from a snapshot for debugging, tests,
//! and diagnostics in text environments. This is the whole rendering
//! contract of the core: a collaborator only ever needs the tile mapping and
//! each piece's kind and color to pick a glyph.

use crate::board::board::Board;
use crate::board::piece::{Color, PieceKind};
use crate::board::tile::Tile;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (1..=8).rev() {
        out.push(char::from(b'0' + rank as u8));
        out.push(' ');

        for file in 1..=8 {
            let tile = Tile::new(file, rank).expect("file and rank are in 1..=8");
            match board.piece_on(tile) {
                Some(piece) => out.push(glyph(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if file < 8 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn glyph(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board::board::Board;
    use crate::board::setup::starting_position;

    #[test]
    fn starting_position_renders_all_glyphs() {
        let text = render_board(&starting_position());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[2], "7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 7");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(text.matches('·').count(), 32);
    }

    #[test]
    fn an_empty_board_is_all_dots() {
        let text = render_board(&Board::empty());
        assert_eq!(text.matches('·').count(), 64);
    }
}
