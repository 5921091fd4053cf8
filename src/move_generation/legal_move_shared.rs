//! Target predicates and ray walking shared by every piece generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// On the board and holding a piece of the opposite color.
#[inline]
pub fn is_capturable(board: &Board, mover: Color, target: Coord) -> bool {
    board.get(target).is_some_and(|p| p.color != mover)
}

/// On the board and either empty or capturable.
#[inline]
pub fn is_occupiable(board: &Board, mover: Color, target: Coord) -> bool {
    target.is_valid() && board.get(target).map_or(true, |p| p.color != mover)
}

/// Walks each direction outward until the edge or the first occupant,
/// keeping that occupant only when it is an enemy.
pub fn walk_rays(board: &Board, piece: &Piece, directions: &[Coord]) -> Vec<Coord> {
    let mut moves = Vec::with_capacity(directions.len() * 2);

    for &dir in directions {
        let mut steps = 1i8;
        loop {
            let target = piece.position.offset(dir, steps);
            if !target.is_valid() {
                break;
            }
            match board.get(target) {
                Some(occupant) => {
                    if occupant.color != piece.color {
                        moves.push(target);
                    }
                    break;
                }
                None => moves.push(target),
            }
            steps += 1;
        }
    }

    moves
}

/// Single-step targets filtered by occupiability.
pub fn step_targets(board: &Board, piece: &Piece, offsets: &[Coord]) -> Vec<Coord> {
    offsets
        .iter()
        .map(|&offset| piece.position.offset(offset, 1))
        .filter(|&target| is_occupiable(board, piece.color, target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupiability_excludes_own_pieces_and_off_board() {
        let mut board = Board::new_empty();
        let own = Coord::new(1, 1, 1, 1);
        let enemy = Coord::new(2, 2, 2, 2);
        board
            .set(own, Some(Piece::new(PieceKind::Pawn, Color::White, own)))
            .expect("valid");
        board
            .set(enemy, Some(Piece::new(PieceKind::Pawn, Color::Black, enemy)))
            .expect("valid");

        assert!(!is_occupiable(&board, Color::White, own));
        assert!(is_occupiable(&board, Color::White, enemy));
        assert!(is_occupiable(&board, Color::White, Coord::new(0, 0, 0, 0)));
        assert!(!is_occupiable(&board, Color::White, Coord::new(0, 0, 0, -1)));

        assert!(is_capturable(&board, Color::White, enemy));
        assert!(!is_capturable(&board, Color::White, Coord::new(0, 0, 0, 0)));
        assert!(!is_capturable(&board, Color::Black, enemy));
    }

    #[test]
    fn ray_targets_are_never_own_pieces() {
        let board = crate::game_state::chess_rules::starting_board();
        for piece in board.pieces() {
            let targets = walk_rays(&board, piece, &crate::moves::queen_moves::QUEEN_DIRECTIONS);
            for target in targets {
                assert!(target.is_valid());
                assert!(board.get(target).map_or(true, |p| p.color != piece.color));
            }
        }
    }
}
