//! Pseudo-legal move generation dispatched on the piece kind.
//!
//! Results ignore whether the mover's own king is left attacked; the
//! check-safety filter lives in `legal_move_generator`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub fn pseudo_legal_moves(board: &Board, piece: &Piece) -> Vec<Coord> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece),
        PieceKind::Knight => knight_moves(board, piece),
        PieceKind::Bishop => bishop_moves(board, piece),
        PieceKind::Rook => rook_moves(board, piece),
        PieceKind::Queen => queen_moves(board, piece),
        PieceKind::King => king_moves(board, piece),
    }
}

/// Pseudo-legal moves of whatever stands on `at`; empty for an empty cell.
pub fn pseudo_legal_moves_at(board: &Board, at: Coord) -> Vec<Coord> {
    board
        .get(at)
        .map(|piece| pseudo_legal_moves(board, piece))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::starting_board;

    #[test]
    fn empty_cell_has_no_moves() {
        let board = starting_board();
        assert!(pseudo_legal_moves_at(&board, Coord::new(3, 3, 3, 3)).is_empty());
        assert!(pseudo_legal_moves_at(&board, Coord::new(4, 0, 0, 0)).is_empty());
    }

    #[test]
    fn generated_targets_are_empty_or_enemy_for_every_start_piece() {
        let board = starting_board();
        for piece in board.pieces() {
            for target in pseudo_legal_moves(&board, piece) {
                assert!(target.is_valid(), "{target} off board for {piece:?}");
                assert_ne!(target, piece.position);
                if let Some(occupant) = board.get(target) {
                    assert_ne!(occupant.color, piece.color);
                }
            }
        }
    }

    #[test]
    fn start_position_knight_jumps() {
        let board = starting_board();
        let moves = pseudo_legal_moves_at(&board, Coord::new(0, 1, 0, 0));

        assert_eq!(moves.len(), 12);
        assert!(moves.contains(&Coord::new(0, 1, 2, 1)));
        assert!(moves.contains(&Coord::new(2, 1, 1, 0)));
        // Capture of the black pawn two layers up.
        assert!(moves.contains(&Coord::new(0, 0, 0, 2)));
        assert!(!moves.contains(&Coord::new(0, 0, 0, 0)));
        assert!(!moves.contains(&Coord::new(0, 3, 0, 0)));
    }
}
