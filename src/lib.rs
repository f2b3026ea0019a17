//! Crate root module declarations for the chess arbiter library.
//!
//! This file exposes all top-level subsystems (board model, move variants,
//! game orchestration, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.
//!
//! The crate is a rules engine only: it validates move requests against the
//! laws of chess, keeps an append-only game history, and derives terminal
//! outcomes (checkmate, stalemate, the draw rules). It deliberately contains
//! no search, no evaluation, and no notation beyond the 4-5 character
//! coordinate move grammar.

pub mod errors;

pub mod board {
    pub mod board;
    pub mod piece;
    pub mod setup;
    pub mod tile;
}

pub mod moves {
    pub mod castling;
    pub mod en_passant;
    pub mod normal;
    pub mod pawn;
    pub mod resolver;
    pub mod transition;
}

pub mod game {
    pub mod draws;
    pub mod game;
    pub mod history;
    pub mod player;
    pub mod status;
}

pub mod utils {
    pub mod notation;
    pub mod render;
}
