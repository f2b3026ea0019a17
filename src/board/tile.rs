//! Board coordinates and straight-line geometry.
//!
//! A `Tile` is one of the 64 squares of the board, addressed by file and rank
//! in `1..=8`. Tiles also expose a flat index (`0 == a1`, `63 == h8`) for the
//! array-backed board snapshot, algebraic parsing/printing, and the `path`
//! helper that lists the tiles strictly between two squares on a shared rank,
//! file, or diagonal.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;

/// One of the 64 board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    file: i8,
    rank: i8,
}

impl Tile {
    /// Constructs a tile from a file and rank, both in `1..=8`.
    pub fn new(file: i8, rank: i8) -> Option<Tile> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Tile { file, rank })
        } else {
            None
        }
    }

    /// Constructs a tile from a flat index where `0 == a1` and `63 == h8`.
    pub fn from_index(index: u8) -> Option<Tile> {
        if index < 64 {
            Some(Tile {
                file: (index % 8) as i8 + 1,
                rank: (index / 8) as i8 + 1,
            })
        } else {
            None
        }
    }

    /// Parses long algebraic coordinates, for example `"e4"`.
    pub fn from_algebraic(square: &str) -> Result<Tile, ChessError> {
        let bytes = square.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(square.to_owned()));
        }
        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(square.to_owned()));
        }
        Ok(Tile {
            file: (file - b'a') as i8 + 1,
            rank: (rank - b'1') as i8 + 1,
        })
    }

    /// The file in `1..=8` (`1 == a`).
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// The rank in `1..=8`.
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Flat index where `0 == a1` and `63 == h8`.
    #[inline]
    pub const fn index(self) -> usize {
        ((self.rank - 1) * 8 + (self.file - 1)) as usize
    }

    /// The oddness of file+rank. Two tiles share a square color exactly when
    /// their parities are equal; the same-colored-bishop draw rule keys off
    /// this.
    #[inline]
    pub const fn parity(self) -> bool {
        (self.file + self.rank) % 2 == 1
    }

    /// The tile shifted by the given file/rank deltas, or `None` when the
    /// shift leaves the board.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Tile> {
        Tile::new(self.file + d_file, self.rank + d_rank)
    }

    /// All 64 tiles in index order (`a1, b1, .. h8`).
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..64).map(|index| Tile::from_index(index).expect("index is in 0..64"))
    }

    /// The ordered tiles strictly between `start` and `end`.
    ///
    /// Defined only when the two tiles share a rank, file, or diagonal; any
    /// other pair (including `start == end`) yields an empty path. The
    /// endpoints themselves are never included.
    pub fn path(start: Tile, end: Tile) -> Vec<Tile> {
        let delta_file = end.file - start.file;
        let delta_rank = end.rank - start.rank;
        let is_line =
            delta_file.abs() == delta_rank.abs() || delta_file == 0 || delta_rank == 0;
        if !is_line {
            return Vec::new();
        }
        let length = delta_file.abs().max(delta_rank.abs());
        let dir_file = delta_file.signum();
        let dir_rank = delta_rank.signum();
        let mut path = Vec::new();
        for step in 1..length {
            let tile = Tile::new(start.file + step * dir_file, start.rank + step * dir_rank)
                .expect("interpolated tile lies between two on-board tiles");
            path.push(tile);
        }
        path
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = char::from(b'a' + (self.file - 1) as u8);
        let rank_char = char::from(b'1' + (self.rank - 1) as u8);
        write!(f, "{file_char}{rank_char}")
    }
}

impl FromStr for Tile {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tile::from_algebraic(s)
    }
}
