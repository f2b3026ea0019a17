//! Per-color move acceptance and the check / checkmate / stalemate queries.
//!
//! A `Player` is a stateless value keyed by color; everything it needs is
//! read from the history it is handed. Move acceptance layers the self-check
//! rule on top of the resolver: a transition that leaves the mover's own
//! king attacked is rejected no matter which variant produced it.

use log::debug;

use crate::board::board::Board;
use crate::board::piece::Color;
use crate::board::tile::Tile;
use crate::errors::ChessError;
use crate::game::history::History;
use crate::moves::transition::Move;
use crate::moves::{normal, pawn, resolver};

/// Returns `true` if the given color's king can be captured on the next
/// move on this board.
///
/// Only two attack shapes can ever capture a king: the normal move and the
/// pawn capture. Leaps, en passant, and castling cannot reach a king by
/// construction. A board without the king (test setups) reports not-in-check.
pub fn in_check(board: &Board, color: Color) -> bool {
    let Some(king_tile) = board.king_tile(color) else {
        return false;
    };
    board
        .pieces_of(color.opposite())
        .any(|(enemy_tile, _)| {
            normal::is_valid(enemy_tile, king_tile, board)
                || pawn::capture_is_valid(enemy_tile, king_tile, board)
        })
}

/// One side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    color: Color,
}

impl Player {
    pub const fn new(color: Color) -> Player {
        Player { color }
    }

    pub const fn white() -> Player {
        Player::new(Color::White)
    }

    pub const fn black() -> Player {
        Player::new(Color::Black)
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Resolves and fully validates a move request, reporting the precise
    /// rule violation on failure. The history is not modified.
    pub fn try_move(self, start: Tile, end: Tile, history: &History) -> Result<Move, ChessError> {
        let board = history.current_position();
        let piece = board
            .piece_on(start)
            .ok_or(ChessError::NoPieceOnTile(start))?;
        if piece.color != self.color {
            return Err(ChessError::OpponentPiece(start));
        }
        let mv = resolver::resolve(start, end, history)
            .ok_or(ChessError::NoLegalTransition { start, end })?;
        if in_check(mv.result(), self.color) {
            return Err(ChessError::SelfCheck);
        }
        Ok(mv)
    }

    /// Whether the player could legally move from `start` to `end`.
    pub fn is_valid(self, start: Tile, end: Tile, history: &History) -> bool {
        self.try_move(start, end, history).is_ok()
    }

    /// Whether this player's king is attacked in the current position.
    pub fn in_check(self, history: &History) -> bool {
        in_check(history.current_position(), self.color)
    }

    /// No legal move exists at all: every own piece tile crossed with all 64
    /// destinations fails validation.
    fn is_mate(self, history: &History) -> bool {
        let board = history.current_position();
        for (start, _) in board.pieces_of(self.color) {
            for end in Tile::all() {
                if self.is_valid(start, end, history) {
                    return false;
                }
            }
        }
        true
    }

    /// In check with no legal move.
    pub fn is_checkmate(self, history: &History) -> bool {
        let mate = self.in_check(history) && self.is_mate(history);
        if mate {
            debug!("{} is checkmated", self.color);
        }
        mate
    }

    /// Not in check, but still no legal move.
    pub fn is_stalemate(self, history: &History) -> bool {
        !self.in_check(history) && self.is_mate(history)
    }
}

#[cfg(test)]
mod tests {
    use super::{in_check, Player};
    use crate::board::board::Board;
    use crate::board::piece::{Color, Piece, PieceId, PieceKind};
    use crate::board::setup::starting_position;
    use crate::board::tile::Tile;
    use crate::errors::ChessError;
    use crate::game::history::History;

    fn tile(name: &str) -> Tile {
        Tile::from_algebraic(name).expect("test tile should parse")
    }

    fn put(board: &mut Board, name: &str, kind: PieceKind, color: Color, id: u8) {
        board.place(tile(name), Piece::new(kind, color, PieceId(id)));
    }

    #[test]
    fn rook_and_pawn_attacks_give_check() {
        let mut board = Board::empty();
        put(&mut board, "e1", PieceKind::King, Color::White, 0);
        put(&mut board, "e8", PieceKind::Rook, Color::Black, 1);
        assert!(in_check(&board, Color::White));

        let mut pawn_board = Board::empty();
        put(&mut pawn_board, "e1", PieceKind::King, Color::White, 0);
        put(&mut pawn_board, "d2", PieceKind::Pawn, Color::Black, 1);
        assert!(in_check(&pawn_board, Color::White));

        // A pawn straight ahead does not attack.
        let mut blocked = Board::empty();
        put(&mut blocked, "e1", PieceKind::King, Color::White, 0);
        put(&mut blocked, "e2", PieceKind::Pawn, Color::Black, 1);
        assert!(!in_check(&blocked, Color::White));
    }

    #[test]
    fn a_blocked_line_is_no_check() {
        let mut board = Board::empty();
        put(&mut board, "e1", PieceKind::King, Color::White, 0);
        put(&mut board, "e8", PieceKind::Rook, Color::Black, 1);
        put(&mut board, "e4", PieceKind::Knight, Color::White, 2);
        assert!(!in_check(&board, Color::White));
    }

    #[test]
    fn a_missing_king_is_not_in_check() {
        let mut board = Board::empty();
        put(&mut board, "e8", PieceKind::Rook, Color::Black, 0);
        assert!(!in_check(&board, Color::White));
    }

    #[test]
    fn moves_exposing_the_own_king_are_rejected() {
        // The white bishop on e2 is pinned by the rook on e8.
        let mut board = Board::empty();
        put(&mut board, "e1", PieceKind::King, Color::White, 0);
        put(&mut board, "e2", PieceKind::Bishop, Color::White, 1);
        put(&mut board, "e8", PieceKind::Rook, Color::Black, 2);
        let history = History::new(board);
        let white = Player::white();

        assert_eq!(
            white.try_move(tile("e2"), tile("d3"), &history),
            Err(ChessError::SelfCheck)
        );
        // The king itself may step aside.
        assert!(white.is_valid(tile("e1"), tile("d1"), &history));
    }

    #[test]
    fn wrong_color_and_empty_tiles_are_reported_precisely() {
        let history = History::new(starting_position());
        let white = Player::white();

        assert_eq!(
            white.try_move(tile("e4"), tile("e5"), &history),
            Err(ChessError::NoPieceOnTile(tile("e4")))
        );
        assert_eq!(
            white.try_move(tile("e7"), tile("e5"), &history),
            Err(ChessError::OpponentPiece(tile("e7")))
        );
        assert_eq!(
            white.try_move(tile("a1"), tile("a5"), &history),
            Err(ChessError::NoLegalTransition {
                start: tile("a1"),
                end: tile("a5")
            })
        );
    }

    #[test]
    fn back_rank_mate_is_checkmate_not_stalemate() {
        // Classic back-rank mate: the king is boxed in by its own pawns.
        let mut board = Board::empty();
        put(&mut board, "g1", PieceKind::King, Color::White, 0);
        put(&mut board, "f2", PieceKind::Pawn, Color::White, 1);
        put(&mut board, "g2", PieceKind::Pawn, Color::White, 2);
        put(&mut board, "h2", PieceKind::Pawn, Color::White, 3);
        put(&mut board, "a1", PieceKind::Rook, Color::Black, 4);
        put(&mut board, "e8", PieceKind::King, Color::Black, 5);
        let history = History::new(board);
        let white = Player::white();

        assert!(white.in_check(&history));
        assert!(white.is_checkmate(&history));
        assert!(!white.is_stalemate(&history));
    }

    #[test]
    fn cornered_king_without_check_is_stalemate() {
        // Black king on a8, white queen on c7: no black move exists but the
        // king is not attacked.
        let mut board = Board::empty();
        put(&mut board, "a8", PieceKind::King, Color::Black, 0);
        put(&mut board, "c7", PieceKind::Queen, Color::White, 1);
        put(&mut board, "e1", PieceKind::King, Color::White, 2);
        let history = History::new(board);
        let black = Player::black();

        assert!(!black.in_check(&history));
        assert!(black.is_stalemate(&history));
        assert!(!black.is_checkmate(&history));
    }

    #[test]
    fn a_player_with_escape_squares_is_neither() {
        let history = History::new(starting_position());
        assert!(!Player::white().is_checkmate(&history));
        assert!(!Player::white().is_stalemate(&history));
        assert!(!Player::black().is_checkmate(&history));
        assert!(!Player::black().is_stalemate(&history));
    }
}
