//! Click-driven interaction on top of `ChessGame`.
//!
//! The engine never reinterprets a rejected move. This layer does: a click
//! that is not a legal destination becomes a fresh selection attempt, and a
//! click on the already selected square drops the selection.

use tracing::debug;

use crate::engine::chess_game::ChessGame;
use crate::engine::move_outcome::MoveOutcome;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickResult {
    /// A piece of the side to move is now selected; `moves` are its
    /// check-safe targets for highlighting.
    Selected { piece: Piece, moves: Vec<Coord> },
    Deselected,
    Moved(MoveOutcome),
    /// Nothing selectable and no legal move; any selection was cleared.
    Ignored,
}

pub fn handle_square_click(game: &mut ChessGame, at: Coord) -> ClickResult {
    let Some(selected) = game.selected_coord().filter(|_| game.selected_piece().is_some()) else {
        return try_select(game, at);
    };

    if selected == at {
        game.clear_selection();
        return ClickResult::Deselected;
    }

    match game.make_move(at) {
        Ok(outcome) => ClickResult::Moved(outcome),
        Err(err) => {
            debug!(at = %at, %err, "click is not a move; trying as selection");
            try_select(game, at)
        }
    }
}

fn try_select(game: &mut ChessGame, at: Coord) -> ClickResult {
    match game.select_piece(at) {
        Some(piece) => ClickResult::Selected {
            piece,
            moves: game.valid_moves_for_selected(),
        },
        None => ClickResult::Ignored,
    }
}
