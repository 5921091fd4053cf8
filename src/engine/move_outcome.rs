//! Result and snapshot types handed to an external renderer.
//!
//! All of these serialize with camelCase field names and lowercase enum values
//! so a renderer can consume them as JSON without knowing engine internals.

use serde::Serialize;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::{CapturedPieces, MoveRecord};

/// A pawn that reached its promotion layer and awaits `promote_pawn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingPromotion {
    pub position: Coord,
    pub color: Color,
}

/// Standing of the side to move after a completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn message(self) -> Option<String> {
        match self {
            GameStatus::Checkmate { winner } => Some(format!("Checkmate! {winner} wins!")),
            GameStatus::Stalemate => Some("Stalemate!".to_owned()),
            GameStatus::Check => Some("Check!".to_owned()),
            GameStatus::Ongoing => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub from: Coord,
    pub to: Coord,
    pub piece: PieceKind,
    pub captured: Option<Piece>,
    pub promotion: Option<PendingPromotion>,
    pub status: GameStatus,
}

impl MoveOutcome {
    #[inline]
    pub const fn game_over(&self) -> bool {
        self.status.is_game_over()
    }

    #[inline]
    pub const fn check(&self) -> bool {
        matches!(self.status, GameStatus::Check)
    }

    #[inline]
    pub const fn stalemate(&self) -> bool {
        matches!(self.status, GameStatus::Stalemate)
    }

    #[inline]
    pub const fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    /// Status line for the player, if the move changed anything worth saying.
    pub fn message(&self) -> Option<String> {
        self.status.message()
    }
}

/// Read-only view of the game for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub current_player: Color,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub in_check: bool,
    pub selected_piece: Option<Piece>,
    pub move_history: Vec<MoveRecord>,
    pub captured_pieces: CapturedPieces,
}
