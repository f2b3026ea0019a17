//! Standalone random self-play smoke runner for the arbiter.
//!
//! Plays a series of seeded games where both sides pick uniformly among all
//! legal moves, and checks arbiter invariants every ply: the half-move clock
//! grows by one per accepted move, `revert` restores the previous snapshot
//! and status exactly, and every finished game ends in a terminal status.
//!
//! Run with:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --verbose`

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_arbiter::board::piece::{Color, PieceKind};
use chess_arbiter::board::tile::Tile;
use chess_arbiter::game::game::ChessGame;
use chess_arbiter::game::status::Status;

const GAMES: u64 = 20;
const BASE_SEED: u64 = 1234;
const MAX_PLIES: usize = 400;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let mut outcomes: Vec<(u64, Status, usize)> = Vec::new();
    for game_index in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(BASE_SEED + game_index);
        let mut game = ChessGame::new();

        while !game.is_game_over() && game.turn_number() < MAX_PLIES {
            let move_str = pick_random_move(&game, &mut rng)
                .ok_or_else(|| "no legal move although the game is not over".to_owned())?;

            let board_before = game.board_position().clone();
            let status_before = game.status();
            let plies_before = game.turn_number();

            game.play(&move_str).map_err(|err| err.to_string())?;
            if game.turn_number() != plies_before + 1 {
                return Err(format!("half-move clock did not advance on {move_str}"));
            }

            // Every few plies, check that revert is a left inverse of play.
            if plies_before % 8 == 3 {
                game.revert()
                    .ok_or_else(|| "revert found an empty history".to_owned())?;
                if game.board_position() != &board_before || game.status() != status_before {
                    return Err(format!("revert did not restore the state before {move_str}"));
                }
                game.play(&move_str).map_err(|err| err.to_string())?;
            }

            if verbose {
                println!("game {game_index}: {move_str} -> {}", game.status());
            }
        }

        outcomes.push((game_index, game.status(), game.turn_number()));
    }

    println!("played {GAMES} random games (seeds {BASE_SEED}..):");
    for (game_index, status, plies) in &outcomes {
        println!("  game {game_index}: {status} after {plies} plies");
    }
    Ok(())
}

/// All legal moves of the side to move, one picked uniformly, rendered in
/// coordinate notation with a queen promotion suffix where required.
fn pick_random_move(game: &ChessGame, rng: &mut StdRng) -> Option<String> {
    let color = game.status().turn()?;
    let starts: Vec<Tile> = game
        .board_position()
        .pieces_of(color)
        .map(|(tile, _)| tile)
        .collect();

    let mut options: Vec<(Tile, Tile)> = Vec::new();
    for start in starts {
        for end in game.reachable_tiles(start) {
            options.push((start, end));
        }
    }

    let (start, end) = *options.choose(rng)?;
    let mut move_str = format!("{start}{end}");
    if is_promotion(game, start, end, color) {
        move_str.push('q');
    }
    Some(move_str)
}

fn is_promotion(game: &ChessGame, start: Tile, end: Tile, color: Color) -> bool {
    let last_rank = match color {
        Color::White => 8,
        Color::Black => 1,
    };
    game.board_position()
        .piece_on(start)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn)
        && end.rank() == last_rank
}
