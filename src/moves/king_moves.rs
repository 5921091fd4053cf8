//! King movement: one step along any queen direction.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_targets;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

/// 8 orthogonal plus 24 two-axis diagonal single steps.
pub const KING_OFFSETS: [Coord; 32] = QUEEN_DIRECTIONS;

#[inline]
pub fn king_moves(board: &Board, piece: &Piece) -> Vec<Coord> {
    step_targets(board, piece, &KING_OFFSETS)
}
