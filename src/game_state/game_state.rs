//! Turn and bookkeeping state owned by the game engine.
//!
//! `GameState` holds everything that is not on the board itself: whose turn it
//! is, whether the game has ended, the current selection, the append-only move
//! history and the captured-piece buckets.

use serde::Serialize;

use crate::game_state::chess_types::*;

/// One executed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub from: Coord,
    pub to: Coord,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub player: Color,
}

/// Captured pieces bucketed by the captor's color, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn by(&self, captor: Color) -> &[Piece] {
        match captor {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn push(&mut self, captor: Color, piece: Piece) {
        match captor {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub current_player: Color,
    pub game_over: bool,
    pub winner: Option<Color>,
    /// Selected cell; the piece is re-read from the board on every use.
    pub selected: Option<Coord>,
    pub move_history: Vec<MoveRecord>,
    pub captured_pieces: CapturedPieces,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl GameState {
    pub fn new(current_player: Color) -> Self {
        Self {
            current_player,
            game_over: false,
            winner: None,
            selected: None,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
        }
    }

    #[inline]
    pub fn ply(&self) -> usize {
        self.move_history.len()
    }
}
