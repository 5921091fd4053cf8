//! Queen movement: the rook and bishop rays walked together.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::walk_rays;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Rook directions followed by bishop directions.
pub const QUEEN_DIRECTIONS: [Coord; 32] = generate_queen_directions();

#[inline]
pub fn queen_moves(board: &Board, piece: &Piece) -> Vec<Coord> {
    walk_rays(board, piece, &QUEEN_DIRECTIONS)
}

const fn generate_queen_directions() -> [Coord; 32] {
    let mut table = [Coord::ORIGIN; 32];
    let mut i = 0usize;

    while i < ROOK_DIRECTIONS.len() {
        table[i] = ROOK_DIRECTIONS[i];
        i += 1;
    }
    while i < 32 {
        table[i] = BISHOP_DIRECTIONS[i - ROOK_DIRECTIONS.len()];
        i += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::bishop_moves::bishop_moves;
    use crate::moves::rook_moves::rook_moves;

    #[test]
    fn queen_moves_match_union_of_rook_and_bishop() {
        let mut board = Board::new_empty();
        let at = Coord::new(1, 2, 1, 0);
        board
            .set(at, Some(Piece::new(PieceKind::Queen, Color::White, at)))
            .expect("valid");
        for (blocker, color) in [
            (Coord::new(1, 2, 3, 0), Color::Black),
            (Coord::new(2, 3, 1, 0), Color::White),
            (Coord::new(1, 1, 1, 1), Color::Black),
        ] {
            board
                .set(blocker, Some(Piece::new(PieceKind::Pawn, color, blocker)))
                .expect("valid");
        }
        let piece = *board.get(at).expect("queen");

        let mut expected = rook_moves(&board, &piece);
        expected.extend(bishop_moves(&board, &piece));
        assert_eq!(queen_moves(&board, &piece), expected);
    }

    #[test]
    fn queen_from_centre_of_empty_board() {
        let mut board = Board::new_empty();
        let at = Coord::new(1, 1, 1, 1);
        board
            .set(at, Some(Piece::new(PieceKind::Queen, Color::Black, at)))
            .expect("valid");
        let piece = *board.get(at).expect("queen");
        assert_eq!(queen_moves(&board, &piece).len(), 42);
    }
}
