//! Check-safe move generation.
//!
//! Each pseudo-legal move is replayed on a board copy and discarded when it
//! leaves the mover's own king attacked.

use serde::Serialize;
use tracing::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::would_be_in_check;
use crate::move_generation::move_generator::pseudo_legal_moves;

/// A check-safe move of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegalMove {
    pub from: Coord,
    pub to: Coord,
    pub piece: PieceKind,
}

/// Check-safe targets for the occupant of `at`; empty for an empty cell.
pub fn check_safe_moves(board: &Board, at: Coord) -> Vec<Coord> {
    let Some(piece) = board.get(at) else {
        return Vec::new();
    };
    let pseudo = pseudo_legal_moves(board, piece);
    let pseudo_count = pseudo.len();
    let safe: Vec<Coord> = pseudo
        .into_iter()
        .filter(|&to| !would_be_in_check(board, at, to))
        .collect();
    trace!(
        from = %at,
        pseudo = pseudo_count,
        safe = safe.len(),
        "filtered moves exposing own king"
    );
    safe
}

/// Every check-safe move of `color`, pieces in scan order.
pub fn all_check_safe_moves(board: &Board, color: Color) -> Vec<LegalMove> {
    let mut out = Vec::with_capacity(128);
    for piece in board.pieces_by_color(color) {
        for to in check_safe_moves(board, piece.position) {
            out.push(LegalMove {
                from: piece.position,
                to,
                piece: piece.kind,
            });
        }
    }
    out
}

/// Stops at the first check-safe move found.
pub fn has_any_check_safe_move(board: &Board, color: Color) -> bool {
    board.pieces_by_color(color).iter().any(|piece| {
        pseudo_legal_moves(board, piece)
            .into_iter()
            .any(|to| !would_be_in_check(board, piece.position, to))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::starting_board;

    #[test]
    fn start_position_move_counts() {
        let board = starting_board();
        let white = all_check_safe_moves(&board, Color::White);
        assert_eq!(white.len(), 112);
        assert!(has_any_check_safe_move(&board, Color::White));

        let king_moves = check_safe_moves(&board, Coord::new(1, 2, 0, 0));
        assert_eq!(king_moves.len(), 8);
    }

    #[test]
    fn pinned_rook_keeps_only_the_pin_line() {
        let mut board = Board::new_empty();
        for (at, kind, color) in [
            (Coord::ORIGIN, PieceKind::King, Color::White),
            (Coord::new(0, 0, 0, 1), PieceKind::Rook, Color::White),
            (Coord::new(0, 0, 0, 3), PieceKind::Rook, Color::Black),
            (Coord::new(3, 3, 3, 3), PieceKind::King, Color::Black),
        ] {
            board.set(at, Some(Piece::new(kind, color, at))).expect("valid");
        }

        let rook = check_safe_moves(&board, Coord::new(0, 0, 0, 1));
        assert_eq!(rook, vec![Coord::new(0, 0, 0, 2), Coord::new(0, 0, 0, 3)]);
    }

    #[test]
    fn empty_cell_has_no_safe_moves() {
        let board = starting_board();
        assert!(check_safe_moves(&board, Coord::new(2, 2, 2, 2)).is_empty());
    }
}
