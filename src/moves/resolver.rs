//! Move resolution: an ordered chain of candidate factories.
//!
//! For a `(start, end)` request the resolver picks the candidate list for
//! the piece on `start` and returns the first move a factory produces.
//! Pawns try advance, capture, leap, then en passant; every other piece
//! tries the normal move; a king falls back to castling when no normal move
//! fits. Exactly one variant, if any, produces the move.
//!
//! The chain is a list of constructors rather than nested conditionals so a
//! new special move slots in without touching any call site.

use log::trace;

use crate::board::piece::PieceKind;
use crate::board::tile::Tile;
use crate::game::history::History;
use crate::moves::transition::Move;
use crate::moves::{castling, en_passant, normal, pawn};

/// A candidate factory: builds the move if its variant's legality predicate
/// holds for the request.
type Candidate = fn(Tile, Tile, &History) -> Option<Move>;

fn normal_candidate(start: Tile, end: Tile, history: &History) -> Option<Move> {
    normal::perform(start, end, history.current_position())
}

fn advance_candidate(start: Tile, end: Tile, history: &History) -> Option<Move> {
    pawn::perform_advance(start, end, history.current_position())
}

fn capture_candidate(start: Tile, end: Tile, history: &History) -> Option<Move> {
    pawn::perform_capture(start, end, history.current_position())
}

fn leap_candidate(start: Tile, end: Tile, history: &History) -> Option<Move> {
    pawn::perform_leap(start, end, history.current_position())
}

const PAWN_CHAIN: &[Candidate] = &[
    advance_candidate,
    capture_candidate,
    leap_candidate,
    en_passant::perform,
];

const KING_CHAIN: &[Candidate] = &[normal_candidate, castling::perform];

const PIECE_CHAIN: &[Candidate] = &[normal_candidate];

/// Resolves a request to the unique legal transition, if one exists.
///
/// Self-check is not considered here; the player layer rejects transitions
/// that leave the mover's own king attacked.
pub fn resolve(start: Tile, end: Tile, history: &History) -> Option<Move> {
    let piece = history.current_position().piece_on(start)?;
    let chain = match piece.kind {
        PieceKind::Pawn => PAWN_CHAIN,
        PieceKind::King => KING_CHAIN,
        _ => PIECE_CHAIN,
    };
    let resolved = chain
        .iter()
        .find_map(|candidate| candidate(start, end, history));
    if let Some(mv) = &resolved {
        trace!("resolved {start}{end} as {:?}", mv.kind());
    }
    resolved
}
