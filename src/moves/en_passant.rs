//! En passant: the capture of a pawn that just leaped past.
//!
//! Legal only when the immediately preceding move in the history was a pawn
//! leap. Validity is tested by relocating the leaped pawn one rank back on a
//! scratch copy of the board and asking whether a plain pawn capture onto
//! that tile would be legal. This is the one move where the captured piece
//! is not taken from the destination tile.

use crate::board::board::Board;
use crate::board::tile::Tile;
use crate::game::history::History;
use crate::moves::pawn;
use crate::moves::transition::{Move, MoveKind};

/// The last move's result with the leaped pawn pulled back one rank, as if
/// it had only advanced a single step.
fn board_with_pawn_pulled_back(last: &Move) -> Option<Board> {
    let dir = last.moved().color.forward();
    let behind = last.end().offset(0, -dir)?;
    let mut board = last.result().clone();
    let leaped = board.lift(last.end())?;
    board.place(behind, leaped);
    Some(board)
}

/// Legal iff the previous move was a pawn leap and a pawn capture onto the
/// tile behind the leaped pawn would be legal on the pulled-back board.
pub fn is_valid(start: Tile, end: Tile, history: &History) -> bool {
    let Some(last) = history.last() else {
        return false;
    };
    if last.kind() != MoveKind::PawnLeap {
        return false;
    }
    match board_with_pawn_pulled_back(last) {
        Some(board) => pawn::capture_is_valid(start, end, &board),
        None => false,
    }
}

/// Builds the move if it is legal. The capture record points at the leaped
/// pawn's actual tile, not the destination.
pub fn perform(start: Tile, end: Tile, history: &History) -> Option<Move> {
    if !is_valid(start, end, history) {
        return None;
    }
    let last = history.last()?;
    let initial = history.current_position().clone();
    let mut result = initial.clone();
    let captured_tile = last.end();
    let captured = result.lift(captured_tile)?;
    let moved = result.lift(start)?;
    result.place(end, moved);
    Some(Move::from_boards(
        MoveKind::EnPassant,
        start,
        end,
        initial,
        result,
        moved,
        Some((captured_tile, captured)),
    ))
}
