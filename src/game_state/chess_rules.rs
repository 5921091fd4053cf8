//! Canonical rule constants: the fixed starting layout, pawn direction and
//! promotion ranks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Back-layer pieces keyed by `(w, x)`; both sides share the arrangement on
/// `y = 0`.
pub const HEAVY_LAYOUT: [(i8, i8, PieceKind); 8] = [
    (0, 0, PieceKind::Rook),
    (0, 3, PieceKind::Rook),
    (0, 1, PieceKind::Knight),
    (0, 2, PieceKind::Knight),
    (1, 0, PieceKind::Bishop),
    (1, 3, PieceKind::Bishop),
    (1, 1, PieceKind::Queen),
    (1, 2, PieceKind::King),
];

/// z layer holding a side's heavy pieces.
#[inline]
pub const fn home_layer(color: Color) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => 3,
    }
}

/// z layer holding a side's pawns at the start.
#[inline]
pub const fn pawn_layer(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 2,
    }
}

/// Pawns advance along z: white towards 3, black towards 0.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// z value on which a pawn of `color` becomes eligible for promotion.
#[inline]
pub const fn promotion_layer(color: Color) -> i8 {
    match color {
        Color::White => AXIS_LEN - 1,
        Color::Black => 0,
    }
}

/// Pawn columns: all of `w = 0, 1`, plus `x = 0, 1` for `w = 2, 3`.
#[inline]
pub const fn is_pawn_start_column(w: i8, x: i8) -> bool {
    w < 2 || x < 2
}

/// Builds the fixed starting position.
pub fn starting_board() -> Board {
    let mut board = Board::new_empty();

    for color in [Color::White, Color::Black] {
        for (w, x, kind) in HEAVY_LAYOUT {
            place(&mut board, Coord::new(w, x, 0, home_layer(color)), kind, color);
        }

        for w in 0..AXIS_LEN {
            for x in 0..AXIS_LEN {
                if is_pawn_start_column(w, x) {
                    place(
                        &mut board,
                        Coord::new(w, x, 0, pawn_layer(color)),
                        PieceKind::Pawn,
                        color,
                    );
                }
            }
        }
    }

    board
}

fn place(board: &mut Board, at: Coord, kind: PieceKind, color: Color) {
    // Layout coordinates are compile-time constants inside the board.
    debug_assert!(at.is_valid());
    let _ = board.set(at, Some(Piece::new(kind, color, at)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_has_twenty_pieces_per_side() {
        let board = starting_board();
        assert_eq!(board.pieces_by_color(Color::White).len(), 20);
        assert_eq!(board.pieces_by_color(Color::Black).len(), 20);

        let white_pawns = board
            .pieces_by_color(Color::White)
            .iter()
            .filter(|p| p.kind == PieceKind::Pawn)
            .count();
        assert_eq!(white_pawns, 12);
    }

    #[test]
    fn kings_and_rooks_sit_on_home_layers() {
        let board = starting_board();
        let white_king = board.find_king(Color::White).expect("white king");
        let black_king = board.find_king(Color::Black).expect("black king");
        assert_eq!(white_king.position, Coord::new(1, 2, 0, 0));
        assert_eq!(black_king.position, Coord::new(1, 2, 0, 3));

        for at in [Coord::new(0, 0, 0, 0), Coord::new(0, 3, 0, 0)] {
            let piece = board.get(at).expect("rook");
            assert_eq!((piece.kind, piece.color), (PieceKind::Rook, Color::White));
        }
        let knight = board.get(Coord::new(0, 1, 0, 0)).expect("knight");
        assert_eq!(knight.kind, PieceKind::Knight);
    }

    #[test]
    fn every_piece_starts_unmoved_at_its_cell() {
        let board = starting_board();
        for piece in board.pieces() {
            assert!(!piece.has_moved);
            assert_eq!(board.get(piece.position), Some(piece));
        }
    }

    #[test]
    fn promotion_layer_is_far_end_of_forward_axis() {
        assert_eq!(promotion_layer(Color::White), 3);
        assert_eq!(promotion_layer(Color::Black), 0);
        assert_eq!(pawn_layer(Color::White) + pawn_forward(Color::White) * 2, 3);
    }
}
