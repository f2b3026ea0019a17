//! The three plain pawn variants: advance, capture, and leap.
//!
//! Pawn legality is direction-sensitive (white moves up the board, black
//! down) and capture-sensitive (straight moves need an empty destination,
//! diagonal moves need an enemy one), which is why it lives here instead of
//! in the geometric shape predicate. En passant is separate because it needs
//! the game history.

use crate::board::board::Board;
use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::tile::Tile;
use crate::moves::transition::{Move, MoveKind};

/// Rank a pawn of the given color starts the game on.
const fn home_rank(color: Color) -> i8 {
    match color {
        Color::White => 2,
        Color::Black => 7,
    }
}

fn pawn_on(board: &Board, start: Tile) -> Option<Piece> {
    board
        .piece_on(start)
        .filter(|piece| piece.kind == PieceKind::Pawn)
}

/// A single forward step onto an empty tile.
pub fn advance_is_valid(start: Tile, end: Tile, board: &Board) -> bool {
    if board.is_occupied(end) {
        return false;
    }
    let Some(pawn) = pawn_on(board, start) else {
        return false;
    };
    let dir = pawn.color.forward();
    let delta_rank = end.rank() - start.rank();
    let delta_file = end.file() - start.file();
    delta_rank * dir == 1 && delta_file == 0
}

pub fn perform_advance(start: Tile, end: Tile, board: &Board) -> Option<Move> {
    if advance_is_valid(start, end, board) {
        Some(Move::single_piece(MoveKind::PawnAdvance, start, end, board))
    } else {
        None
    }
}

/// A diagonal forward step onto an enemy piece.
pub fn capture_is_valid(start: Tile, end: Tile, board: &Board) -> bool {
    let Some(target) = board.piece_on(end) else {
        return false;
    };
    let Some(pawn) = pawn_on(board, start) else {
        return false;
    };
    let dir = pawn.color.forward();
    let delta_rank = end.rank() - start.rank();
    let delta_file = end.file() - start.file();
    delta_rank * dir == 1 && delta_file.abs() == 1 && target.color == pawn.color.opposite()
}

pub fn perform_capture(start: Tile, end: Tile, board: &Board) -> Option<Move> {
    if capture_is_valid(start, end, board) {
        Some(Move::single_piece(MoveKind::PawnCapture, start, end, board))
    } else {
        None
    }
}

/// The two-step opening move from the pawn's home rank.
///
/// Both the destination and the tile leaped over must be empty; a pawn
/// cannot jump a blocker.
pub fn leap_is_valid(start: Tile, end: Tile, board: &Board) -> bool {
    if board.is_occupied(end) {
        return false;
    }
    let Some(pawn) = pawn_on(board, start) else {
        return false;
    };
    let dir = pawn.color.forward();
    let delta_rank = end.rank() - start.rank();
    let delta_file = end.file() - start.file();
    if start.rank() != home_rank(pawn.color) || delta_rank * dir != 2 || delta_file != 0 {
        return false;
    }
    match start.offset(0, dir) {
        Some(between) => !board.is_occupied(between),
        None => false,
    }
}

pub fn perform_leap(start: Tile, end: Tile, board: &Board) -> Option<Move> {
    if leap_is_valid(start, end, board) {
        Some(Move::single_piece(MoveKind::PawnLeap, start, end, board))
    } else {
        None
    }
}
