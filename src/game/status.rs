//! The game status state machine.

use std::fmt;

use crate::board::piece::Color;

/// Every state a game can be in. The two turn states are the only
/// non-terminal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    WhiteTurn,
    BlackTurn,
    WhiteWon,
    BlackWon,
    Stalemate,
    DrawByThreefoldRepetition,
    DrawByFiftyMoveRule,
    DrawByInsufficientMaterial,
}

impl Status {
    /// Whether the game has ended.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::WhiteTurn | Status::BlackTurn)
    }

    /// The color to move, or `None` once the game is over.
    #[inline]
    pub const fn turn(self) -> Option<Color> {
        match self {
            Status::WhiteTurn => Some(Color::White),
            Status::BlackTurn => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::WhiteTurn => "white to move",
            Status::BlackTurn => "black to move",
            Status::WhiteWon => "white won",
            Status::BlackWon => "black won",
            Status::Stalemate => "draw by stalemate",
            Status::DrawByThreefoldRepetition => "draw by threefold repetition",
            Status::DrawByFiftyMoveRule => "draw by the fifty-move rule",
            Status::DrawByInsufficientMaterial => "draw by insufficient material",
        };
        write!(f, "{text}")
    }
}
