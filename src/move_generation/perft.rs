//! Exhaustive move-tree node counting.
//!
//! Moves are applied raw: a pawn reaching its promotion layer stays a pawn
//! and is only counted as promotion-eligible.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_layer;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{
    all_check_safe_moves, has_any_check_safe_move, LegalMove,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, side_to_move: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in all_check_safe_moves(board, side_to_move) {
        total.merge(perft_move(board, side_to_move, mv, depth));
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(board: &Board, side_to_move: Color, depth: u8) -> Vec<(LegalMove, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    all_check_safe_moves(board, side_to_move)
        .into_iter()
        .map(|mv| (mv, perft_move(board, side_to_move, mv, depth)))
        .collect()
}

fn perft_move(board: &Board, side: Color, mv: LegalMove, depth: u8) -> PerftCounts {
    let mut next = board.clone();
    let captured = next.move_piece(mv.from, mv.to);

    if depth > 1 {
        return perft(&next, side.opposite(), depth - 1);
    }

    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if captured.is_some() {
        counts.captures = 1;
    }
    if mv.piece == PieceKind::Pawn && mv.to.z == promotion_layer(side) {
        counts.promotions = 1;
    }
    if is_in_check(&next, side.opposite()) {
        counts.checks = 1;
        if !has_any_check_safe_move(&next, side.opposite()) {
            counts.checkmates = 1;
        }
    }
    counts
}
