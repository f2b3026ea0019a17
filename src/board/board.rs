//! The board snapshot: a mapping from tile to piece.
//!
//! A `Board` behaves like a map with at most one piece per tile, backed by a
//! 64-slot array. Snapshots are cheap to clone and compare; equality is over
//! the full occupancy mapping, which is what the history chaining invariant
//! and the threefold-repetition rule key on.
//!
//! Once a board has been published as the `initial` or `result` of a move it
//! is never mutated again. The mutating methods exist for game setup and for
//! move factories working on their private clones.

use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::tile::Tile;

/// An immutable-once-published snapshot of the piece placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Board {
        Board { squares: [None; 64] }
    }

    /// The piece on the given tile, if any.
    #[inline]
    pub fn piece_on(&self, tile: Tile) -> Option<Piece> {
        self.squares[tile.index()]
    }

    /// Whether any piece sits on the given tile.
    #[inline]
    pub fn is_occupied(&self, tile: Tile) -> bool {
        self.squares[tile.index()].is_some()
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(|slot| slot.is_none())
    }

    /// Puts a piece on a tile, returning any piece that was displaced.
    pub fn place(&mut self, tile: Tile, piece: Piece) -> Option<Piece> {
        self.squares[tile.index()].replace(piece)
    }

    /// Removes and returns the piece on a tile.
    pub fn lift(&mut self, tile: Tile) -> Option<Piece> {
        self.squares[tile.index()].take()
    }

    /// All occupied tiles with their pieces, in tile-index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Tile, Piece)> + '_ {
        Tile::all().filter_map(|tile| self.piece_on(tile).map(|piece| (tile, piece)))
    }

    /// All occupied tiles holding pieces of the given color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Tile, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// The tile of the given color's king. There should be exactly one on any
    /// reachable board; `None` on degenerate test setups.
    pub fn king_tile(&self, color: Color) -> Option<Tile> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(tile, _)| tile)
    }
}
