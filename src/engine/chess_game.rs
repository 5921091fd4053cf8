//! The game engine: turn order, selection, check-safe move execution,
//! promotion and end-of-game detection.
//!
//! `ChessGame` owns one `Board` and one `GameState` and is the only entry point
//! a front end needs. Every command runs to completion synchronously and
//! either applies fully or returns an error without touching state.

use tracing::{debug, info};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engine::move_outcome::{GameSnapshot, GameStatus, MoveOutcome, PendingPromotion};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{promotion_layer, starting_board};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, MoveRecord};
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator::{
    all_check_safe_moves, check_safe_moves, has_any_check_safe_move, LegalMove,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    board: Board,
    state: GameState,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// A fresh game from the fixed starting layout, white to move.
    pub fn new() -> Self {
        Self {
            board: starting_board(),
            state: GameState::new(Color::White),
        }
    }

    /// A game continuing from an arbitrary position.
    pub fn from_board(board: Board, current_player: Color) -> Self {
        Self {
            board,
            state: GameState::new(current_player),
        }
    }

    /// Discards the board and all bookkeeping and rebuilds the start position.
    pub fn reset(&mut self) {
        self.board = starting_board();
        self.state = GameState::new(Color::White);
        debug!("game reset to starting position");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Selects the piece on `at` if it belongs to the side to move.
    ///
    /// Any failure (empty cell, enemy piece, off-board, game over) clears the
    /// previous selection and returns `None`.
    pub fn select_piece(&mut self, at: Coord) -> Option<Piece> {
        let selectable = self
            .board
            .get(at)
            .filter(|p| p.color == self.state.current_player && !self.state.game_over)
            .copied();

        self.state.selected = selectable.map(|p| p.position);
        match selectable {
            Some(piece) => debug!(at = %at, kind = %piece.kind, "piece selected"),
            None => debug!(at = %at, "selection rejected"),
        }
        selectable
    }

    pub fn clear_selection(&mut self) {
        self.state.selected = None;
    }

    #[inline]
    pub fn selected_coord(&self) -> Option<Coord> {
        self.state.selected
    }

    /// The selected piece, re-read from the board.
    ///
    /// A selection whose cell no longer holds a piece of the side to move
    /// reads as no selection.
    pub fn selected_piece(&self) -> Option<Piece> {
        let at = self.state.selected?;
        self.board
            .get(at)
            .filter(|p| p.color == self.state.current_player)
            .copied()
    }

    /// Check-safe targets of the selected piece.
    pub fn valid_moves_for_selected(&self) -> Vec<Coord> {
        match self.selected_piece() {
            Some(piece) => check_safe_moves(&self.board, piece.position),
            None => Vec::new(),
        }
    }

    /// Check-safe targets for a piece of the side to move on `at`.
    pub fn legal_moves_for(&self, at: Coord) -> Vec<Coord> {
        match self.board.get(at) {
            Some(piece) if piece.color == self.state.current_player => {
                check_safe_moves(&self.board, at)
            }
            _ => Vec::new(),
        }
    }

    pub fn all_legal_moves(&self, color: Color) -> Vec<LegalMove> {
        all_check_safe_moves(&self.board, color)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        legal_move_checks::is_in_check(&self.board, color)
    }

    /// In check with no check-safe move for any piece.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !has_any_check_safe_move(&self.board, color)
    }

    /// Not in check, yet no check-safe move for any piece.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !has_any_check_safe_move(&self.board, color)
    }

    /// Moves the selected piece to `target`.
    ///
    /// On success the move is recorded, any capture is stored under the
    /// mover's color, the turn passes, the selection is cleared and the new
    /// side to move is evaluated for checkmate, then stalemate, then check.
    /// A pawn landing on its promotion layer is reported, not resolved.
    ///
    /// On error nothing changes, including the selection.
    pub fn make_move(&mut self, target: Coord) -> ChessResult<MoveOutcome> {
        if self.state.game_over {
            return Err(ChessErrors::GameIsOver);
        }
        let piece = self.selected_piece().ok_or(ChessErrors::NoPieceSelected)?;
        let from = piece.position;

        if !check_safe_moves(&self.board, from).contains(&target) {
            debug!(from = %from, to = %target, "move rejected");
            return Err(ChessErrors::InvalidMove { from, to: target });
        }

        let mover = self.state.current_player;
        let captured = self.board.move_piece(from, target);
        if let Some(taken) = captured {
            self.state.captured_pieces.push(mover, taken);
        }

        let promotion = (piece.kind == PieceKind::Pawn && target.z == promotion_layer(mover))
            .then_some(PendingPromotion {
                position: target,
                color: mover,
            });

        self.state.move_history.push(MoveRecord {
            from,
            to: target,
            piece: piece.kind,
            captured: captured.map(|p| p.kind),
            player: mover,
        });

        self.state.current_player = mover.opposite();
        self.state.selected = None;

        let status = self.evaluate_status();
        self.apply_status(status);

        info!(
            player = %mover,
            kind = %piece.kind,
            from = %from,
            to = %target,
            captured = captured.is_some(),
            ?status,
            "move played"
        );

        Ok(MoveOutcome {
            from,
            to: target,
            piece: piece.kind,
            captured,
            promotion,
            status,
        })
    }

    /// Replaces the pawn on `at` with a fresh piece of `kind`.
    ///
    /// The replacement keeps the pawn's color and cell and is marked as moved.
    /// The cell is not checked against the promotion layer. While the game is
    /// still running, the side to move is re-evaluated since the new piece may
    /// give check; the resulting status is returned.
    pub fn promote_pawn(&mut self, at: Coord, kind: PieceKind) -> ChessResult<GameStatus> {
        if !at.is_valid() {
            return Err(ChessErrors::InvalidCoordinate(at));
        }
        let pawn = self
            .board
            .get(at)
            .filter(|p| p.kind == PieceKind::Pawn)
            .copied()
            .ok_or(ChessErrors::NotAPawn(at))?;
        if !kind.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionKind(kind));
        }

        let mut promoted = Piece::new(kind, pawn.color, at);
        promoted.has_moved = true;
        self.board.set(at, Some(promoted))?;
        debug!(at = %at, color = %pawn.color, kind = %kind, "pawn promoted");

        if self.state.game_over {
            return Ok(self.finished_status());
        }
        let status = self.evaluate_status();
        self.apply_status(status);
        Ok(status)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            current_player: self.state.current_player,
            game_over: self.state.game_over,
            winner: self.state.winner,
            in_check: self.is_in_check(self.state.current_player),
            selected_piece: self.selected_piece(),
            move_history: self.state.move_history.clone(),
            captured_pieces: self.state.captured_pieces.clone(),
        }
    }

    fn evaluate_status(&self) -> GameStatus {
        let side = self.state.current_player;
        if self.is_checkmate(side) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else if self.is_stalemate(side) {
            GameStatus::Stalemate
        } else if self.is_in_check(side) {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    fn apply_status(&mut self, status: GameStatus) {
        if status.is_game_over() {
            self.state.game_over = true;
            self.state.winner = status.winner();
            info!(?status, "game over");
        }
    }

    fn finished_status(&self) -> GameStatus {
        match self.state.winner {
            Some(winner) => GameStatus::Checkmate { winner },
            None => GameStatus::Stalemate,
        }
    }
}
