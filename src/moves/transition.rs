//! The validated transition between two board snapshots.
//!
//! A `Move` is only ever constructed by the variant factories in this module
//! tree, each of which runs its legality predicate first. The value records
//! both snapshots, the moved piece, and an optional capture. The capture
//! carries its own tile because en passant is the one move where the captured
//! piece does not sit on the destination tile.

use crate::board::board::Board;
use crate::board::piece::{Piece, PieceKind};
use crate::board::tile::Tile;

/// Which variant produced a move. En passant legality depends on the
/// previous move having been a pawn leap, so the tag is part of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    PawnAdvance,
    PawnCapture,
    PawnLeap,
    EnPassant,
    Castling,
}

/// A validated transition from an initial board to a result board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    kind: MoveKind,
    start: Tile,
    end: Tile,
    initial: Board,
    result: Board,
    moved: Piece,
    captured: Option<(Tile, Piece)>,
}

impl Move {
    /// Builds a move that relocates the single piece on `start` to `end`,
    /// capturing whatever sits on `end`. Callers must have validated the
    /// transition already.
    pub(crate) fn single_piece(kind: MoveKind, start: Tile, end: Tile, initial: &Board) -> Move {
        let mut result = initial.clone();
        let moved = result
            .lift(start)
            .expect("variant predicate checked that the start tile is occupied");
        let captured = result.lift(end).map(|piece| (end, piece));
        result.place(end, moved);
        Move {
            kind,
            start,
            end,
            initial: initial.clone(),
            result,
            moved,
            captured,
        }
    }

    /// Builds a move from explicitly constructed snapshots. Used by the two
    /// variants that do not fit the single-relocation pattern: en passant
    /// (capture tile differs from the destination) and castling (two pieces
    /// move).
    pub(crate) fn from_boards(
        kind: MoveKind,
        start: Tile,
        end: Tile,
        initial: Board,
        result: Board,
        moved: Piece,
        captured: Option<(Tile, Piece)>,
    ) -> Move {
        Move {
            kind,
            start,
            end,
            initial,
            result,
            moved,
            captured,
        }
    }

    /// Swaps the moved pawn on the result board for a piece of the chosen
    /// kind with the same color and identity.
    pub(crate) fn promote(&mut self, kind: PieceKind) {
        let promoted = self.moved.promoted_to(kind);
        self.result.place(self.end, promoted);
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub fn start(&self) -> Tile {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Tile {
        self.end
    }

    /// The board position before the move.
    #[inline]
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// The board position after the move.
    #[inline]
    pub fn result(&self) -> &Board {
        &self.result
    }

    /// The moved piece. For castling this is the king.
    #[inline]
    pub fn moved(&self) -> Piece {
        self.moved
    }

    /// The captured piece and the tile it was taken from, if any.
    #[inline]
    pub fn captured(&self) -> Option<(Tile, Piece)> {
        self.captured
    }
}
