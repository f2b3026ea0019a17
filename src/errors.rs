//! Errors used throughout the arbiter.
//!
//! `ChessError` is the single error type returned by move parsing and move
//! acceptance. Its variants fall into two disjoint families: format errors
//! (the move string itself is malformed, or the promotion suffix disagrees
//! with whether a promotion is pending) and rule violations (the move string
//! parsed fine but the requested move is illegal in the current position).
//! Both families are recoverable: the game state is untouched and the caller
//! may retry with corrected input.
//!
//! Invariant violations, such as appending a move whose initial snapshot does
//! not chain onto the current position, are programming errors and panic
//! instead of surfacing here.

use thiserror::Error;

use crate::board::tile::Tile;
use crate::game::status::Status;

/// Unified error type for move parsing and move acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The move string does not match `([a-h][1-8])([a-h][1-8])([bkqr])?`.
    #[error("move string {0:?} does not match the coordinate grammar")]
    MalformedMove(String),

    /// A single algebraic square failed to parse.
    #[error("invalid algebraic square {0:?}")]
    InvalidSquare(String),

    /// A promotion letter was supplied but the move does not promote a pawn.
    #[error("a promotion letter was supplied but there is nothing to promote")]
    PromotionNotApplicable,

    /// The move lands a pawn on its farthest rank and no letter was supplied.
    #[error("the pawn must be promoted: append one of 'q', 'r', 'b' or 'k'")]
    PromotionRequired,

    /// There is no piece on the requested start tile.
    #[error("there is no piece on {0}")]
    NoPieceOnTile(Tile),

    /// The piece on the start tile belongs to the player not on turn.
    #[error("the piece on {0} belongs to the opponent")]
    OpponentPiece(Tile),

    /// No move variant produces a legal transition for the tile pair.
    #[error("no legal move from {start} to {end}")]
    NoLegalTransition { start: Tile, end: Tile },

    /// The resolved move would leave the mover's own king attacked.
    #[error("the move would leave the mover's own king in check")]
    SelfCheck,

    /// A move was requested although the game has already ended.
    #[error("cannot move, the game is over with status {0:?}")]
    GameOver(Status),
}

impl ChessError {
    /// Returns `true` for the format-error family (malformed input), and
    /// `false` for rule violations.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ChessError::MalformedMove(_)
                | ChessError::InvalidSquare(_)
                | ChessError::PromotionNotApplicable
                | ChessError::PromotionRequired
        )
    }
}
