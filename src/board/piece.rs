//! Piece values: color, kind, stable identity, and movement geometry.
//!
//! `Piece::reaches` is the pure shape predicate of the legality core: it
//! answers whether the piece's movement pattern connects two tiles, ignoring
//! occupancy and path clearness. Pawns always answer `false` here; their
//! legality is direction- and capture-sensitive and lives entirely in the
//! dedicated pawn move variants.

use std::fmt;

use crate::board::tile::Tile;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Forward direction of this color's pawns: `+1` up the board for white,
    /// `-1` for black.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Stable per-piece identifier.
///
/// Assigned once at game setup and carried verbatim through every snapshot
/// and through promotion, so "has this specific piece ever moved" can be
/// answered by scanning the history, without relying on object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub u8);

/// An immutable piece value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub id: PieceId,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, id: PieceId) -> Piece {
        Piece { kind, color, id }
    }

    /// A copy of this piece with a new kind but the same color and identity.
    /// Promotion replaces the board entry with this value.
    pub const fn promoted_to(self, kind: PieceKind) -> Piece {
        Piece { kind, ..self }
    }

    /// The pure geometric shape test: can this piece's movement pattern
    /// connect `start` and `end` on an empty board? Occupancy, path
    /// clearness, and capture rules are checked by the move variants.
    ///
    /// Always `false` for pawns.
    pub fn reaches(self, start: Tile, end: Tile) -> bool {
        let delta_file = end.file() - start.file();
        let delta_rank = end.rank() - start.rank();
        match self.kind {
            PieceKind::Pawn => false,
            PieceKind::Rook => delta_file == 0 || delta_rank == 0,
            PieceKind::Bishop => delta_file.abs() == delta_rank.abs(),
            PieceKind::Queen => {
                delta_file == 0 || delta_rank == 0 || delta_file.abs() == delta_rank.abs()
            }
            PieceKind::King => delta_file.abs().max(delta_rank.abs()) <= 1,
            PieceKind::Knight => {
                matches!(
                    (delta_file.abs(), delta_rank.abs()),
                    (2, 1) | (1, 2)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Piece, PieceId, PieceKind};
    use crate::board::tile::Tile;

    fn tile(name: &str) -> Tile {
        Tile::from_algebraic(name).expect("test tile should parse")
    }

    fn piece(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::White, PieceId(0))
    }

    #[test]
    fn rook_reaches_along_ranks_and_files_only() {
        let rook = piece(PieceKind::Rook);
        assert!(rook.reaches(tile("a1"), tile("a8")));
        assert!(rook.reaches(tile("a1"), tile("h1")));
        assert!(!rook.reaches(tile("a1"), tile("b3")));
        assert!(!rook.reaches(tile("a1"), tile("c3")));
    }

    #[test]
    fn bishop_reaches_along_diagonals_only() {
        let bishop = piece(PieceKind::Bishop);
        assert!(bishop.reaches(tile("c1"), tile("h6")));
        assert!(bishop.reaches(tile("f8"), tile("a3")));
        assert!(!bishop.reaches(tile("c1"), tile("c4")));
    }

    #[test]
    fn queen_reaches_the_union_of_rook_and_bishop() {
        let queen = piece(PieceKind::Queen);
        assert!(queen.reaches(tile("d1"), tile("d7")));
        assert!(queen.reaches(tile("d1"), tile("h5")));
        assert!(!queen.reaches(tile("d1"), tile("e3")));
    }

    #[test]
    fn king_reaches_one_tile_in_any_direction() {
        let king = piece(PieceKind::King);
        assert!(king.reaches(tile("e1"), tile("d2")));
        assert!(king.reaches(tile("e1"), tile("e2")));
        assert!(!king.reaches(tile("e1"), tile("e3")));
        assert!(!king.reaches(tile("e1"), tile("g1")));
    }

    #[test]
    fn knight_reaches_its_eight_jump_shapes() {
        let knight = piece(PieceKind::Knight);
        assert!(knight.reaches(tile("b1"), tile("c3")));
        assert!(knight.reaches(tile("b1"), tile("a3")));
        assert!(knight.reaches(tile("b1"), tile("d2")));
        assert!(!knight.reaches(tile("b1"), tile("b3")));
        assert!(!knight.reaches(tile("b1"), tile("d3")));
    }

    #[test]
    fn pawn_shape_is_always_false_at_this_layer() {
        let pawn = piece(PieceKind::Pawn);
        assert!(!pawn.reaches(tile("e2"), tile("e3")));
        assert!(!pawn.reaches(tile("e2"), tile("e4")));
        assert!(!pawn.reaches(tile("e2"), tile("d3")));
    }

    #[test]
    fn promotion_keeps_color_and_identity() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black, PieceId(17));
        let queen = pawn.promoted_to(PieceKind::Queen);
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::Black);
        assert_eq!(queen.id, PieceId(17));
    }
}
