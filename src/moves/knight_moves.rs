//! Knight movement: two steps on one axis and one step on another.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_targets;

/// Ordered axis pairs `(long, short)` times the four sign combinations.
pub const KNIGHT_OFFSETS: [Coord; 48] = generate_knight_offsets();

#[inline]
pub fn knight_moves(board: &Board, piece: &Piece) -> Vec<Coord> {
    step_targets(board, piece, &KNIGHT_OFFSETS)
}

const fn generate_knight_offsets() -> [Coord; 48] {
    let mut table = [Coord::ORIGIN; 48];
    let mut n = 0usize;
    let mut long = 0usize;

    while long < 4 {
        let mut short = 0usize;
        while short < 4 {
            if long != short {
                let mut long_sign = 0usize;
                while long_sign < 2 {
                    let mut short_sign = 0usize;
                    while short_sign < 2 {
                        let mut axes = [0i8; 4];
                        axes[long] = if long_sign == 0 { 2 } else { -2 };
                        axes[short] = if short_sign == 0 { 1 } else { -1 };
                        table[n] = Coord::from_axes(axes);
                        n += 1;
                        short_sign += 1;
                    }
                    long_sign += 1;
                }
            }
            short += 1;
        }
        long += 1;
    }

    table
}
