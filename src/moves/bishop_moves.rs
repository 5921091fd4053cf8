//! Bishop movement: equal-rate diagonals across any two axes.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::walk_rays;

/// Unordered axis pairs in w, x, y, z order.
pub const AXIS_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Sign combinations applied to an axis pair.
pub const DIAGONAL_SIGNS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Six axis pairs times four sign combinations.
pub const BISHOP_DIRECTIONS: [Coord; 24] = generate_bishop_directions();

#[inline]
pub fn bishop_moves(board: &Board, piece: &Piece) -> Vec<Coord> {
    walk_rays(board, piece, &BISHOP_DIRECTIONS)
}

const fn generate_bishop_directions() -> [Coord; 24] {
    let mut table = [Coord::ORIGIN; 24];
    let mut pair = 0usize;

    while pair < AXIS_PAIRS.len() {
        let (first, second) = AXIS_PAIRS[pair];
        let mut sign = 0usize;
        while sign < DIAGONAL_SIGNS.len() {
            let mut axes = [0i8; 4];
            axes[first] = DIAGONAL_SIGNS[sign].0;
            axes[second] = DIAGONAL_SIGNS[sign].1;
            table[pair * 4 + sign] = Coord::from_axes(axes);
            sign += 1;
        }
        pair += 1;
    }

    table
}
