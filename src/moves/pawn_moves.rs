//! Pawn movement: pushes along z, captures forward-and-sideways.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_forward;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_capturable;

/// Sideways component of a capture: `±1` on w, x or y.
pub const PAWN_CAPTURE_SIDESTEPS: [Coord; 6] = [
    Coord::new(1, 0, 0, 0),
    Coord::new(-1, 0, 0, 0),
    Coord::new(0, 1, 0, 0),
    Coord::new(0, -1, 0, 0),
    Coord::new(0, 0, 1, 0),
    Coord::new(0, 0, -1, 0),
];

pub fn pawn_moves(board: &Board, piece: &Piece) -> Vec<Coord> {
    let forward = Coord::new(0, 0, 0, pawn_forward(piece.color));
    let from = piece.position;
    let mut moves = Vec::with_capacity(8);

    let one_step = from.offset(forward, 1);
    if board.is_empty(one_step) {
        moves.push(one_step);

        let two_step = from.offset(forward, 2);
        if !piece.has_moved && board.is_empty(two_step) {
            moves.push(two_step);
        }
    }

    for side in PAWN_CAPTURE_SIDESTEPS {
        let target = one_step.offset(side, 1);
        if is_capturable(board, piece.color, target) {
            moves.push(target);
        }
    }

    moves
}
