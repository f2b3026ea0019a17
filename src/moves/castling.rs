//! Castling (the rochade): the one move that relocates two pieces.
//!
//! Legal only while both the king and the chosen rook are still unmoved on
//! their home tiles, every tile between them is empty, and none of the
//! king's start, pass-through, and destination tiles is attacked. The attack
//! test relocates the king onto each tile of its short journey and asks the
//! check detector, so pawn attacks on empty tiles are seen correctly.

use crate::board::piece::{Color, PieceKind};
use crate::board::tile::Tile;
use crate::game::history::History;
use crate::game::player::in_check;
use crate::moves::transition::{Move, MoveKind};

const KING_FILE: i8 = 5;

const fn home_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 8,
    }
}

/// For a king destination file, the rook's home file and the file the rook
/// ends up on: queenside `c` pairs with the `a`-rook landing on `d`,
/// kingside `g` with the `h`-rook landing on `f`.
const fn rook_files(end_file: i8) -> Option<(i8, i8)> {
    match end_file {
        3 => Some((1, 4)),
        7 => Some((8, 6)),
        _ => None,
    }
}

/// Legality predicate for a castling request with the king on `start`.
pub fn is_valid(start: Tile, end: Tile, history: &History) -> bool {
    let board = history.current_position();
    let Some(king) = board.piece_on(start) else {
        return false;
    };
    if king.kind != PieceKind::King {
        return false;
    }
    let home = home_rank(king.color);
    if start.rank() != home || end.rank() != home || start.file() != KING_FILE {
        return false;
    }
    let Some((rook_file, _)) = rook_files(end.file()) else {
        return false;
    };
    let Some(rook_tile) = Tile::new(rook_file, home) else {
        return false;
    };
    let Some(rook) = board.piece_on(rook_tile) else {
        return false;
    };
    if rook.kind != PieceKind::Rook || rook.color != king.color {
        return false;
    }
    if history.has_been_moved(king.id) || history.has_been_moved(rook.id) {
        return false;
    }
    if Tile::path(start, rook_tile)
        .iter()
        .any(|tile| board.is_occupied(*tile))
    {
        return false;
    }

    // No castling out of, through, or into check. The pass-through file sits
    // midway between the king's start and destination.
    let pass_file = (start.file() + end.file()) / 2;
    for file in [start.file(), pass_file, end.file()] {
        let Some(stop) = Tile::new(file, home) else {
            return false;
        };
        let mut scratch = board.clone();
        if stop != start {
            let king = scratch
                .lift(start)
                .expect("the king was found on the start tile above");
            scratch.place(stop, king);
        }
        if in_check(&scratch, king.color) {
            return false;
        }
    }
    true
}

/// Builds the move if it is legal: the king steps two files toward the rook
/// and the rook crosses over to the adjacent file.
pub fn perform(start: Tile, end: Tile, history: &History) -> Option<Move> {
    if !is_valid(start, end, history) {
        return None;
    }
    let initial = history.current_position().clone();
    let home = start.rank();
    let (rook_file, rook_target_file) = rook_files(end.file())?;
    let rook_tile = Tile::new(rook_file, home)?;
    let rook_target = Tile::new(rook_target_file, home)?;

    let mut result = initial.clone();
    let king = result.lift(start)?;
    result.place(end, king);
    let rook = result.lift(rook_tile)?;
    result.place(rook_target, rook);

    Some(Move::from_boards(
        MoveKind::Castling,
        start,
        end,
        initial,
        result,
        king,
        None,
    ))
}
