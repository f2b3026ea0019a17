//! The standard starting position.
//!
//! Piece identifiers are handed out sequentially while the board is filled,
//! so every game starts with the same stable id assignment. Castling and
//! "has this piece moved" checks rely on these ids staying with their pieces
//! through every later snapshot.

use crate::board::board::Board;
use crate::board::piece::{Color, Piece, PieceId, PieceKind};
use crate::board::tile::Tile;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Returns a fully set up board with all 32 pieces on their home tiles.
pub fn starting_position() -> Board {
    let mut board = Board::empty();
    let mut next_id = 0u8;
    let mut place = |board: &mut Board, tile: Tile, kind: PieceKind, color: Color| {
        board.place(tile, Piece::new(kind, color, PieceId(next_id)));
        next_id += 1;
    };

    for (color, back_rank, pawn_rank) in [(Color::White, 1, 2), (Color::Black, 8, 7)] {
        for (offset, kind) in BACK_RANK.iter().enumerate() {
            let file = offset as i8 + 1;
            let tile = Tile::new(file, back_rank).expect("home tile is on the board");
            place(&mut board, tile, *kind, color);
        }
        for file in 1..=8 {
            let tile = Tile::new(file, pawn_rank).expect("pawn tile is on the board");
            place(&mut board, tile, PieceKind::Pawn, color);
        }
    }
    board
}
