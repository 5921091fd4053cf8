//! Rook movement: rays along exactly one axis.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::walk_rays;

/// `±1` on each of w, x, y, z in turn.
pub const ROOK_DIRECTIONS: [Coord; 8] = generate_rook_directions();

#[inline]
pub fn rook_moves(board: &Board, piece: &Piece) -> Vec<Coord> {
    walk_rays(board, piece, &ROOK_DIRECTIONS)
}

const fn generate_rook_directions() -> [Coord; 8] {
    let mut table = [Coord::ORIGIN; 8];
    let mut axis = 0usize;

    while axis < 4 {
        let mut axes = [0i8; 4];
        axes[axis] = 1;
        table[axis * 2] = Coord::from_axes(axes);
        axes[axis] = -1;
        table[axis * 2 + 1] = Coord::from_axes(axes);
        axis += 1;
    }

    table
}
