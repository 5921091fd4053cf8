//! Check detection and hypothetical-move simulation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::pseudo_legal_moves;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Coord> {
    board.find_king(color).map(|king| king.position)
}

/// True iff some pseudo-legal move of `attacker_color` targets `square`.
pub fn is_square_attacked(board: &Board, square: Coord, attacker_color: Color) -> bool {
    board
        .pieces()
        .filter(|p| p.color == attacker_color)
        .any(|p| pseudo_legal_moves(board, p).contains(&square))
}

/// A side without a king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Every `attacker_color` piece with a pseudo-legal move onto `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Coord,
    attacker_color: Color,
) -> Vec<(Coord, PieceKind)> {
    board
        .pieces()
        .filter(|p| p.color == attacker_color)
        .filter(|p| pseudo_legal_moves(board, p).contains(&square))
        .map(|p| (p.position, p.kind))
        .collect()
}

/// Plays `from -> to` on a copy of `board` and reports whether the mover's
/// king is attacked afterwards. An empty `from` is never in check.
pub fn would_be_in_check(board: &Board, from: Coord, to: Coord) -> bool {
    let Some(mover) = board.get(from).map(|p| p.color) else {
        return false;
    };
    let mut scratch = board.clone();
    scratch.move_piece(from, to);
    is_in_check(&scratch, mover)
}
