//! Errors used throughout the engine.
//!
//! `ChessErrors` is the single error type returned by board writes, engine
//! commands, notation parsing and configuration loading. Every variant is
//! recoverable: the engine never mutates state before returning one, so the
//! caller may simply re-prompt.

use thiserror::Error;

use crate::game_state::chess_types::{Coord, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A coordinate with some axis outside `0..=3`.
    #[error("coordinate {0} is outside the 4x4x4x4 board")]
    InvalidCoordinate(Coord),

    /// `make_move` was called with no piece selected.
    #[error("no piece selected")]
    NoPieceSelected,

    /// A command that needs a game in progress was issued after it ended.
    #[error("the game is over")]
    GameIsOver,

    /// The target is not in the check-safe move set of the selected piece.
    #[error("invalid move from {from} to {to}")]
    InvalidMove { from: Coord, to: Coord },

    /// Promotion was requested on a square that does not hold a pawn.
    #[error("no pawn to promote at {0}")]
    NotAPawn(Coord),

    /// Promotion was requested to a pawn or king.
    #[error("cannot promote to {0}")]
    InvalidPromotionKind(PieceKind),

    /// A coordinate string could not be parsed.
    #[error("invalid coordinate notation: {0:?}")]
    InvalidNotation(String),

    /// An environment setting held a value outside its accepted set.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfigValue { key: String, value: String },
}

pub type ChessResult<T> = Result<T, ChessErrors>;
