//! The append-only game history.
//!
//! A history is a gap-free ordered log of accepted moves layered over a fixed
//! initial snapshot. Appending enforces the chaining invariant: the new
//! move's initial board must equal the current position. A violation is a
//! programming error in the caller, not a user-facing condition, so `add`
//! panics rather than corrupting the log.

use crate::board::board::Board;
use crate::board::piece::PieceId;
use crate::moves::transition::Move;

/// The ordered log of moves plus the game's initial board.
#[derive(Debug, Clone)]
pub struct History {
    initial: Board,
    moves: Vec<Move>,
}

impl History {
    /// A fresh history over the given initial position.
    pub fn new(initial: Board) -> History {
        History {
            initial,
            moves: Vec::new(),
        }
    }

    /// Appends a move.
    ///
    /// # Panics
    ///
    /// Panics if the move's initial snapshot does not equal the current
    /// position.
    pub fn add(&mut self, mv: Move) {
        assert!(
            mv.initial() == self.current_position(),
            "history chaining violated: the move's initial board does not match the current position"
        );
        self.moves.push(mv);
    }

    /// The move at the given index, in play order.
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// The most recently played move.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Number of half-moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The result of the last move, or the initial snapshot if no move has
    /// been played yet.
    pub fn current_position(&self) -> &Board {
        match self.moves.last() {
            Some(mv) => mv.result(),
            None => &self.initial,
        }
    }

    /// The fixed snapshot the game started from.
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// Removes and returns the last move, or `None` if nothing was played.
    pub fn revert(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Drops all moves, resetting to the initial snapshot.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Whether the piece with the given identity has ever been moved.
    /// Castling eligibility keys off this.
    pub fn has_been_moved(&self, id: PieceId) -> bool {
        self.moves.iter().any(|mv| mv.moved().id == id)
    }

    /// An immutable view of the logged moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::History;
    use crate::board::setup::starting_position;
    use crate::board::tile::Tile;
    use crate::moves::pawn;

    fn tile(name: &str) -> Tile {
        Tile::from_algebraic(name).expect("test tile should parse")
    }

    #[test]
    fn current_position_follows_the_last_move() {
        let mut history = History::new(starting_position());
        assert_eq!(history.current_position(), history.initial());

        let leap = pawn::perform_leap(tile("e2"), tile("e4"), history.current_position())
            .expect("e2e4 is legal from the start");
        let expected = leap.result().clone();
        history.add(leap);

        assert_eq!(history.len(), 1);
        assert_eq!(history.current_position(), &expected);
    }

    #[test]
    #[should_panic(expected = "history chaining violated")]
    fn adding_an_unchained_move_panics() {
        let mut history = History::new(starting_position());
        let leap = pawn::perform_leap(tile("e2"), tile("e4"), history.current_position())
            .expect("e2e4 is legal from the start");
        history.add(leap.clone());
        // The same move again starts from a stale snapshot.
        history.add(leap);
    }

    #[test]
    fn revert_pops_and_returns_the_last_move() {
        let mut history = History::new(starting_position());
        assert!(history.revert().is_none());

        let leap = pawn::perform_leap(tile("e2"), tile("e4"), history.current_position())
            .expect("e2e4 is legal from the start");
        history.add(leap.clone());

        let reverted = history.revert().expect("one move to revert");
        assert_eq!(reverted, leap);
        assert!(history.is_empty());
        assert_eq!(history.current_position(), history.initial());
    }

    #[test]
    fn has_been_moved_tracks_piece_identity() {
        let mut history = History::new(starting_position());
        let pawn_id = history
            .initial()
            .piece_on(tile("e2"))
            .expect("pawn on e2")
            .id;
        let rook_id = history
            .initial()
            .piece_on(tile("a1"))
            .expect("rook on a1")
            .id;

        assert!(!history.has_been_moved(pawn_id));
        let leap = pawn::perform_leap(tile("e2"), tile("e4"), history.current_position())
            .expect("e2e4 is legal from the start");
        history.add(leap);

        assert!(history.has_been_moved(pawn_id));
        assert!(!history.has_been_moved(rook_id));
    }

    #[test]
    fn clear_resets_to_the_initial_snapshot() {
        let mut history = History::new(starting_position());
        let leap = pawn::perform_leap(tile("e2"), tile("e4"), history.current_position())
            .expect("e2e4 is legal from the start");
        history.add(leap);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.current_position(), history.initial());
    }
}
