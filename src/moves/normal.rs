//! The normal move: rook, knight, bishop, queen, and king relocations.
//!
//! Pawn moves are never normal moves (the shape predicate rejects pawns),
//! and castling has its own variant. The predicate here is also what the
//! check detector uses to test whether a piece attacks the king's tile.

use crate::board::board::Board;
use crate::board::tile::Tile;
use crate::moves::transition::{Move, MoveKind};

/// A normal move is legal iff a piece occupies `start`, its movement shape
/// connects the two tiles, every tile strictly between them is empty, and
/// `end` is empty or holds a piece of the opposite color.
pub fn is_valid(start: Tile, end: Tile, board: &Board) -> bool {
    let Some(piece) = board.piece_on(start) else {
        return false;
    };
    if !piece.reaches(start, end) {
        return false;
    }
    if Tile::path(start, end)
        .iter()
        .any(|tile| board.is_occupied(*tile))
    {
        return false;
    }
    match board.piece_on(end) {
        Some(occupant) => occupant.color == piece.color.opposite(),
        None => true,
    }
}

/// Builds the move if it is legal.
pub fn perform(start: Tile, end: Tile, board: &Board) -> Option<Move> {
    if is_valid(start, end, board) {
        Some(Move::single_piece(MoveKind::Normal, start, end, board))
    } else {
        None
    }
}
