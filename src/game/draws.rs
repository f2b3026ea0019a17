//! The three draw-rule evaluators.
//!
//! Each is a pure predicate over the history (or the current board). The
//! game orchestrator runs them after every accepted move, in a fixed
//! priority order.

use crate::board::board::Board;
use crate::board::piece::{Color, PieceKind};
use crate::game::history::History;

/// Threefold repetition: with at least eight half-moves played, the current
/// occupancy equals the snapshots the game held four and eight plies ago.
pub fn is_threefold_repetition(history: &History) -> bool {
    if history.len() < 8 {
        return false;
    }
    let current = history.current_position();
    let before = history
        .get(history.len() - 4)
        .expect("index is within the history length")
        .initial();
    let before_before = history
        .get(history.len() - 8)
        .expect("index is within the history length")
        .initial();
    current == before && before == before_before
}

/// Fifty-move rule: the last hundred half-moves contained no capture and no
/// pawn move.
pub fn is_fifty_move_rule(history: &History) -> bool {
    if history.len() < 100 {
        return false;
    }
    history
        .moves()
        .iter()
        .rev()
        .take(100)
        .all(|mv| mv.captured().is_none() && mv.moved().kind != PieceKind::Pawn)
}

/// Insufficient material: at most four pieces remain and none of them could
/// ever deliver mate.
///
/// Any queen, rook, or pawn (promotable) is sufficient material. With
/// exactly four pieces the position is only dead when the two non-king
/// pieces are bishops of opposite colors standing on same-colored squares.
/// Three or fewer pieces without a heavy piece are always a draw.
pub fn is_insufficient_material(board: &Board) -> bool {
    if board.len() > 4 {
        return false;
    }
    let possibly_heavy = board.pieces().any(|(_, piece)| {
        matches!(
            piece.kind,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Pawn
        )
    });
    if possibly_heavy {
        return false;
    }
    if board.len() == 4 {
        let white_bishop = board
            .pieces_of(Color::White)
            .find(|(_, piece)| piece.kind == PieceKind::Bishop);
        let black_bishop = board
            .pieces_of(Color::Black)
            .find(|(_, piece)| piece.kind == PieceKind::Bishop);
        return match (white_bishop, black_bishop) {
            // Two bishops on same-colored squares can never meet.
            (Some((white_tile, _)), Some((black_tile, _))) => {
                white_tile.parity() == black_tile.parity()
            }
            _ => false,
        };
    }
    // Two kings, or two kings and one minor piece.
    true
}
