//! Seeded random self-play for soak tests and benchmarks.
//!
//! Every ply selects a uniformly random check-safe move through the normal
//! `ChessGame` entry points, so each playout also exercises the selection,
//! bookkeeping and status code. Pending promotions are resolved immediately
//! to `PlayoutConfig::promote_to`.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::engine::chess_game::ChessGame;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Color },
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub promote_to: PieceKind,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            promote_to: PieceKind::Queen,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub plies: u16,
    pub promotions: u16,
    pub captures: u16,
    pub final_game: ChessGame,
}

/// Plays a random game from the starting position.
pub fn play_random_game(seed: u64, config: PlayoutConfig) -> ChessResult<PlayoutResult> {
    play_random_game_from(ChessGame::new(), seed, config)
}

/// Plays random moves from `game` until it ends or `max_plies` is reached.
pub fn play_random_game_from(
    mut game: ChessGame,
    seed: u64,
    config: PlayoutConfig,
) -> ChessResult<PlayoutResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut plies = 0u16;
    let mut promotions = 0u16;
    let mut captures = 0u16;

    let outcome = loop {
        if let Some(outcome) = finished_outcome(&game) {
            break outcome;
        }
        if plies >= config.max_plies {
            break PlayoutOutcome::MaxPlies;
        }

        let side = game.current_player();
        let moves = game.all_legal_moves(side);
        if moves.is_empty() {
            // Positions built with `from_board` are not evaluated up front.
            break if game.is_in_check(side) {
                PlayoutOutcome::Checkmate {
                    winner: side.opposite(),
                }
            } else {
                PlayoutOutcome::Stalemate
            };
        }

        let chosen = moves[rng.random_range(0..moves.len())];
        game.select_piece(chosen.from);
        let outcome = game.make_move(chosen.to)?;
        plies += 1;
        if outcome.captured.is_some() {
            captures += 1;
        }
        if let Some(pending) = outcome.promotion {
            game.promote_pawn(pending.position, config.promote_to)?;
            promotions += 1;
        }
    };

    debug!(seed, plies, promotions, captures, ?outcome, "random playout finished");

    Ok(PlayoutResult {
        outcome,
        plies,
        promotions,
        captures,
        final_game: game,
    })
}

fn finished_outcome(game: &ChessGame) -> Option<PlayoutOutcome> {
    if !game.is_game_over() {
        return None;
    }
    Some(match game.state().winner {
        Some(winner) => PlayoutOutcome::Checkmate { winner },
        None => PlayoutOutcome::Stalemate,
    })
}
