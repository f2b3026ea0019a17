//! The game orchestrator.
//!
//! `ChessGame` drives two players over one history: it parses coordinate
//! move strings, enforces turn order, applies promotion, and recomputes the
//! status state machine after every accepted move. Errors never leave the
//! history partially applied; a move is only appended after parsing,
//! resolution, the self-check rule, and the promotion rules have all passed.

use log::{debug, info};

use crate::board::board::Board;
use crate::board::piece::{Color, PieceKind};
use crate::board::setup::starting_position;
use crate::board::tile::Tile;
use crate::errors::ChessError;
use crate::game::draws;
use crate::game::history::History;
use crate::game::player::Player;
use crate::game::status::Status;
use crate::moves::transition::Move;
use crate::utils::notation;

/// A player-versus-player chess game.
///
/// Single-threaded by design: every query is a pure computation over
/// immutable snapshots, and the history append/revert in `play`/`revert`
/// are the only mutations. Callers sharing a game across threads must
/// serialize access themselves.
#[derive(Debug, Clone)]
pub struct ChessGame {
    history: History,
    white: Player,
    black: Player,
    status: Status,
}

impl Default for ChessGame {
    fn default() -> Self {
        ChessGame::new()
    }
}

impl ChessGame {
    /// A fresh game from the standard starting position, white to move.
    pub fn new() -> ChessGame {
        ChessGame {
            history: History::new(starting_position()),
            white: Player::white(),
            black: Player::black(),
            status: Status::WhiteTurn,
        }
    }

    /// Resets to the starting position and white to move.
    pub fn new_game(&mut self) {
        self.history.clear();
        self.status = Status::WhiteTurn;
        info!("new game started");
    }

    /// The current board snapshot.
    pub fn board_position(&self) -> &Board {
        self.history.current_position()
    }

    /// All destination tiles currently legal for the piece on `start`.
    /// Empty when the tile is empty, the piece belongs to the player not on
    /// turn, or the game is over.
    pub fn reachable_tiles(&self, start: Tile) -> Vec<Tile> {
        let Some(color) = self.status.turn() else {
            return Vec::new();
        };
        let player = self.player_of(color);
        Tile::all()
            .filter(|end| player.is_valid(start, *end, &self.history))
            .collect()
    }

    /// Parses and plays a coordinate move such as `"e2e4"` or `"e7e8q"`.
    ///
    /// On success the move is appended to the history, promotion is applied,
    /// and the status is recomputed. On any error the game is unchanged.
    pub fn play(&mut self, move_str: &str) -> Result<(), ChessError> {
        let request = notation::parse_move(move_str)?;
        let color = self
            .status
            .turn()
            .ok_or(ChessError::GameOver(self.status))?;
        let mut mv = self
            .player_of(color)
            .try_move(request.start, request.end, &self.history)?;

        match (request.promotion, promotion_pending(&mv)) {
            (Some(kind), true) => mv.promote(kind),
            (None, false) => {}
            (Some(_), false) => return Err(ChessError::PromotionNotApplicable),
            (None, true) => return Err(ChessError::PromotionRequired),
        }

        debug!("{color} plays {move_str} ({:?})", mv.kind());
        self.history.add(mv);
        self.recompute_status();
        Ok(())
    }

    /// Undoes the last move, recomputes the status, and returns the reverted
    /// move. `None` if no move was played.
    pub fn revert(&mut self) -> Option<Move> {
        let reverted = self.history.revert();
        if reverted.is_some() {
            self.recompute_status();
        }
        reverted
    }

    /// Number of half-moves played.
    pub fn turn_number(&self) -> usize {
        self.history.len()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// An immutable view of the game history.
    pub fn history(&self) -> &History {
        &self.history
    }

    const fn player_of(&self, color: Color) -> Player {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Recomputes the status in fixed priority order: turn alternation
    /// first, then the checkmates, stalemate, and the draw rules. Later
    /// checks override earlier ones, so terminal conditions always beat the
    /// bare turn flip.
    fn recompute_status(&mut self) {
        let mut status = if self.history.len() % 2 == 0 {
            Status::WhiteTurn
        } else {
            Status::BlackTurn
        };
        if self.black.is_checkmate(&self.history) {
            status = Status::WhiteWon;
        }
        if self.white.is_checkmate(&self.history) {
            status = Status::BlackWon;
        }
        if self.white.is_stalemate(&self.history) || self.black.is_stalemate(&self.history) {
            status = Status::Stalemate;
        }
        if draws::is_threefold_repetition(&self.history) {
            status = Status::DrawByThreefoldRepetition;
        }
        if draws::is_fifty_move_rule(&self.history) {
            status = Status::DrawByFiftyMoveRule;
        }
        if draws::is_insufficient_material(self.history.current_position()) {
            status = Status::DrawByInsufficientMaterial;
        }
        if status != self.status {
            debug!("status: {} -> {}", self.status, status);
            if status.is_terminal() {
                info!("game over: {status}");
            }
        }
        self.status = status;
    }
}

/// A promotion is pending exactly when the move lands a pawn on its
/// farthest rank.
fn promotion_pending(mv: &Move) -> bool {
    if mv.moved().kind != PieceKind::Pawn {
        return false;
    }
    let last_rank = match mv.moved().color {
        Color::White => 8,
        Color::Black => 1,
    };
    mv.end().rank() == last_rank
}
