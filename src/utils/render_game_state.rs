//! Terminal-oriented board renderer.
//!
//! The 256 cells are drawn as 16 mini-boards: one block per `w`, one mini-board
//! per `x` inside a block, `y` across and `z` down (z = 3 on top). Each cell is
//! a piece symbol followed by a marker: `+` on the selected piece and `*` on
//! each legal target.

use std::fmt::Write;

use crate::engine::chess_game::ChessGame;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    pub selected: Option<Coord>,
    pub targets: Vec<Coord>,
}

/// Renders `game` with its current selection and the selection's legal targets.
pub fn render_game_state(game: &ChessGame, style: RenderStyle) -> String {
    let highlights = Highlights {
        selected: game.selected_piece().map(|p| p.position),
        targets: game.valid_moves_for_selected(),
    };
    render_board(game.board(), style, &highlights)
}

pub fn render_board(board: &Board, style: RenderStyle, highlights: &Highlights) -> String {
    let mut out = String::new();

    for w in 0..AXIS_LEN {
        if w > 0 {
            out.push('\n');
        }

        let mut header = format!("w={w}");
        for x in 0..AXIS_LEN {
            let _ = write!(header, "{:<10}", format!("x={x}"));
        }
        out.push_str(header.trim_end());
        out.push('\n');

        for z in (0..AXIS_LEN).rev() {
            let mut row = format!("z{z} ");
            for x in 0..AXIS_LEN {
                for y in 0..AXIS_LEN {
                    let at = Coord::new(w, x, y, z);
                    row.push(cell_symbol(board.get(at), style));
                    row.push(cell_marker(at, highlights));
                }
                row.push_str("  ");
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }
    }

    let mut footer = String::from("y  ");
    for _ in 0..AXIS_LEN {
        footer.push_str("0 1 2 3   ");
    }
    out.push_str(footer.trim_end());

    out
}

fn cell_marker(at: Coord, highlights: &Highlights) -> char {
    if highlights.selected == Some(at) {
        '+'
    } else if highlights.targets.contains(&at) {
        '*'
    } else {
        ' '
    }
}

fn cell_symbol(piece: Option<&Piece>, style: RenderStyle) -> char {
    match (piece, style) {
        (None, RenderStyle::Unicode) => '·',
        (None, RenderStyle::Ascii) => '.',
        (Some(p), RenderStyle::Unicode) => piece_to_unicode(p.color, p.kind),
        (Some(p), RenderStyle::Ascii) => piece_to_ascii(p.color, p.kind),
    }
}

pub fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

pub fn piece_to_ascii(color: Color, piece: PieceKind) -> char {
    let symbol = match piece {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match color {
        Color::White => symbol.to_ascii_uppercase(),
        Color::Black => symbol,
    }
}
