//! Core value types shared by the board, move generation and the game engine.
//!
//! Coordinates, colors, piece kinds and the piece record itself are all small
//! `Copy` values so that a board snapshot can be duplicated by a plain copy.

use std::fmt;

use serde::Serialize;

/// Number of cells along each of the four axes.
pub const AXIS_LEN: i8 = 4;

/// Total number of cells on the board (`4^4`).
pub const CELL_COUNT: usize = 256;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed set of piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Kinds a pawn may be replaced with on the promotion rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Parses a lowercase or capitalised kind name (`"queen"`, `"Queen"`, `"q"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pawn" | "p" => Some(PieceKind::Pawn),
            "knight" | "n" => Some(PieceKind::Knight),
            "bishop" | "b" => Some(PieceKind::Bishop),
            "rook" | "r" => Some(PieceKind::Rook),
            "queen" | "q" => Some(PieceKind::Queen),
            "king" | "k" => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A point in the 4-axis grid, `(w, x, y, z)`.
///
/// Axes are signed so that candidate targets can be formed past the edge and
/// rejected afterwards with [`Coord::is_valid`]. Only valid coordinates ever
/// address a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub w: i8,
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Coord {
    pub const ORIGIN: Coord = Coord::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(w: i8, x: i8, y: i8, z: i8) -> Self {
        Self { w, x, y, z }
    }

    #[inline]
    pub const fn from_axes(axes: [i8; 4]) -> Self {
        Self::new(axes[0], axes[1], axes[2], axes[3])
    }

    #[inline]
    pub const fn axes(self) -> [i8; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// True iff every axis lies in `0..AXIS_LEN`.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.w >= 0
            && self.w < AXIS_LEN
            && self.x >= 0
            && self.x < AXIS_LEN
            && self.y >= 0
            && self.y < AXIS_LEN
            && self.z >= 0
            && self.z < AXIS_LEN
    }

    /// Cell index in w-major scan order, or `None` when out of range.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        Some(
            (self.w as usize) * 64
                + (self.x as usize) * 16
                + (self.y as usize) * 4
                + (self.z as usize),
        )
    }

    /// Inverse of [`Coord::index`] for `0..CELL_COUNT`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::new(
            ((index / 64) % 4) as i8,
            ((index / 16) % 4) as i8,
            ((index / 4) % 4) as i8,
            (index % 4) as i8,
        )
    }

    /// Component-wise `self + delta * steps`; the result may be out of range.
    #[inline]
    pub const fn offset(self, delta: Coord, steps: i8) -> Self {
        Self::new(
            self.w + delta.w * steps,
            self.x + delta.x * steps,
            self.y + delta.y * steps,
            self.z + delta.z * steps,
        )
    }

    /// Every valid coordinate in w, x, y, z scan order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.w, self.x, self.y, self.z)
    }
}

/// A piece as stored in a board cell.
///
/// `position` always mirrors the coordinate of the owning cell; the board
/// rewrites it whenever it places the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Coord,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, position: Coord) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
        }
    }
}
