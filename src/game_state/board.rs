//! Fixed 4x4x4x4 grid of optional piece occupants.
//!
//! Cells are stored flat in w, x, y, z scan order. Pieces are owned by value,
//! so `clone` yields a fully independent board suitable for simulating a
//! hypothetical move.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub const fn is_valid_coordinate(coord: Coord) -> bool {
        coord.is_valid()
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&Piece> {
        coord.index().and_then(|i| self.cells[i].as_ref())
    }

    /// Writes `piece` (or clears the cell when `None`).
    ///
    /// A placed piece has its `position` rewritten to `coord`. Out-of-range
    /// coordinates leave the board untouched.
    pub fn set(&mut self, coord: Coord, piece: Option<Piece>) -> ChessResult<()> {
        let index = coord.index().ok_or(ChessErrors::InvalidCoordinate(coord))?;
        self.cells[index] = piece.map(|mut p| {
            p.position = coord;
            p
        });
        Ok(())
    }

    /// True iff `coord` is on the board and unoccupied.
    ///
    /// Out-of-range coordinates are not addressable and therefore never empty.
    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        coord.index().is_some_and(|i| self.cells[i].is_none())
    }

    /// True iff every strictly interior cell between `from` and `to` is empty.
    ///
    /// Each axis steps by its own sign and stops advancing once it reaches its
    /// target value, so paths with unequal per-axis lengths are walked too.
    /// Returns false when either endpoint is off the board.
    pub fn is_path_clear(&self, from: Coord, to: Coord) -> bool {
        if !from.is_valid() || !to.is_valid() {
            return false;
        }

        let from_axes = from.axes();
        let to_axes = to.axes();
        let mut steps = [0i8; 4];
        for axis in 0..4 {
            steps[axis] = (to_axes[axis] - from_axes[axis]).signum();
        }

        let mut current = from_axes;
        for axis in 0..4 {
            current[axis] += steps[axis];
        }

        while current != to_axes {
            if !self.is_empty(Coord::from_axes(current)) {
                return false;
            }
            for axis in 0..4 {
                if current[axis] != to_axes[axis] {
                    current[axis] += steps[axis];
                }
            }
        }

        true
    }

    /// Relocates the occupant of `from` to `to` without any legality check.
    ///
    /// Returns whatever previously stood on `to`. The source cell is cleared
    /// before the destination is written, then the piece's own position and
    /// `has_moved` flag are updated. An empty or invalid `from`, or an invalid
    /// `to`, is a no-op returning `None`.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let (Some(from_index), Some(to_index)) = (from.index(), to.index()) else {
            return None;
        };
        let mut piece = self.cells[from_index].take()?;
        let captured = self.cells[to_index].take();

        piece.position = to;
        piece.has_moved = true;
        self.cells[to_index] = Some(piece);

        captured
    }

    /// All live pieces of `color` in scan order.
    pub fn pieces_by_color(&self, color: Color) -> Vec<Piece> {
        self.pieces().filter(|p| p.color == color).copied().collect()
    }

    /// Every occupant in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten()
    }

    /// First king of `color` in scan order.
    pub fn find_king(&self, color: Color) -> Option<&Piece> {
        self.pieces()
            .find(|p| p.kind == PieceKind::King && p.color == color)
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rook(color: Color) -> Piece {
        Piece::new(PieceKind::Rook, color, Coord::ORIGIN)
    }

    #[test]
    fn set_rejects_out_of_range_without_mutation() {
        let mut board = Board::new_empty();
        let before = board.clone();

        let bad = Coord::new(0, 4, 0, 0);
        assert_eq!(
            board.set(bad, Some(rook(Color::White))),
            Err(ChessErrors::InvalidCoordinate(bad))
        );
        assert!(board.get(bad).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn set_writes_position_back_into_piece() {
        let mut board = Board::new_empty();
        let at = Coord::new(2, 1, 3, 0);
        board.set(at, Some(rook(Color::Black))).expect("valid coordinate");

        let piece = board.get(at).expect("piece was placed");
        assert_eq!(piece.position, at);
        assert!(!board.is_empty(at));

        board.set(at, None).expect("valid coordinate");
        assert!(board.is_empty(at));
    }

    #[test]
    fn out_of_range_is_never_empty() {
        let board = Board::new_empty();
        assert!(board.is_empty(Coord::new(3, 3, 3, 3)));
        assert!(!board.is_empty(Coord::new(-1, 0, 0, 0)));
        assert!(!board.is_empty(Coord::new(0, 0, 0, 4)));
    }

    #[test]
    fn move_piece_clears_source_and_returns_capture() {
        let mut board = Board::new_empty();
        let from = Coord::new(0, 0, 0, 0);
        let to = Coord::new(0, 0, 0, 3);
        board.set(from, Some(rook(Color::White))).expect("valid");
        board.set(to, Some(rook(Color::Black))).expect("valid");

        let captured = board.move_piece(from, to).expect("black rook captured");
        assert_eq!(captured.color, Color::Black);
        assert!(board.is_empty(from));

        let moved = board.get(to).expect("white rook moved");
        assert_eq!(moved.color, Color::White);
        assert_eq!(moved.position, to);
        assert!(moved.has_moved);
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn move_piece_from_empty_is_noop() {
        let mut board = Board::new_empty();
        board
            .set(Coord::new(1, 1, 1, 1), Some(rook(Color::White)))
            .expect("valid");
        let before = board.clone();

        assert!(board
            .move_piece(Coord::new(0, 0, 0, 0), Coord::new(1, 1, 1, 1))
            .is_none());
        assert!(board
            .move_piece(Coord::new(1, 1, 1, 1), Coord::new(1, 1, 1, 4))
            .is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn path_clear_walks_interior_cells_only() {
        let mut board = Board::new_empty();
        let from = Coord::new(0, 0, 0, 0);
        let to = Coord::new(3, 3, 0, 0);
        assert!(board.is_path_clear(from, to));

        // Endpoints never count as blockers.
        board.set(to, Some(rook(Color::Black))).expect("valid");
        board.set(from, Some(rook(Color::White))).expect("valid");
        assert!(board.is_path_clear(from, to));

        board
            .set(Coord::new(2, 2, 0, 0), Some(rook(Color::Black)))
            .expect("valid");
        assert!(!board.is_path_clear(from, to));
    }

    #[test]
    fn path_clear_handles_unequal_axis_lengths() {
        let mut board = Board::new_empty();
        let from = Coord::new(0, 0, 0, 0);
        let to = Coord::new(3, 1, 0, 0);
        // Walk is (1,1,0,0) then (2,1,0,0).
        board
            .set(Coord::new(2, 1, 0, 0), Some(rook(Color::Black)))
            .expect("valid");
        assert!(!board.is_path_clear(from, to));

        board.set(Coord::new(2, 1, 0, 0), None).expect("valid");
        board
            .set(Coord::new(2, 0, 0, 0), Some(rook(Color::Black)))
            .expect("valid");
        assert!(board.is_path_clear(from, to));
    }

    #[test]
    fn path_clear_rejects_off_board_endpoints() {
        let board = Board::new_empty();
        assert!(!board.is_path_clear(Coord::new(0, 0, 0, 0), Coord::new(0, 0, 0, 5)));
    }

    #[test]
    fn clone_is_independent() {
        let mut board = Board::new_empty();
        let at = Coord::new(1, 2, 3, 0);
        board.set(at, Some(rook(Color::White))).expect("valid");

        let mut copy = board.clone();
        copy.move_piece(at, Coord::new(1, 2, 3, 3));

        assert!(board.get(at).is_some_and(|p| !p.has_moved));
        assert!(copy.is_empty(at));
    }

    #[test]
    fn find_king_returns_first_in_scan_order() {
        let mut board = Board::new_empty();
        assert!(board.find_king(Color::White).is_none());

        let late = Coord::new(3, 0, 0, 0);
        let early = Coord::new(0, 3, 0, 0);
        board
            .set(late, Some(Piece::new(PieceKind::King, Color::White, late)))
            .expect("valid");
        board
            .set(early, Some(Piece::new(PieceKind::King, Color::White, early)))
            .expect("valid");

        assert_eq!(board.find_king(Color::White).map(|k| k.position), Some(early));
        assert!(board.find_king(Color::Black).is_none());
    }

    #[test]
    fn pieces_by_color_filters_and_keeps_scan_order() {
        let mut board = Board::new_empty();
        for (coord, color) in [
            (Coord::new(2, 0, 0, 0), Color::White),
            (Coord::new(0, 0, 0, 1), Color::White),
            (Coord::new(1, 0, 0, 0), Color::Black),
        ] {
            board.set(coord, Some(rook(color))).expect("valid");
        }

        let white: Vec<Coord> = board
            .pieces_by_color(Color::White)
            .iter()
            .map(|p| p.position)
            .collect();
        assert_eq!(white, vec![Coord::new(0, 0, 0, 1), Coord::new(2, 0, 0, 0)]);
    }
}
