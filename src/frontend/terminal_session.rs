//! Line-oriented terminal front end.
//!
//! Owns one `ChessGame`, reads commands from stdin and writes the board and
//! status text to stdout. A move that lands a pawn on its promotion layer
//! leaves the session waiting for `promote <kind>`; other moves are refused
//! until it is answered.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::engine::chess_game::ChessGame;
use crate::engine::move_outcome::{MoveOutcome, PendingPromotion};
use crate::engine::square_click::{handle_square_click, ClickResult};
use crate::game_state::chess_types::*;
use crate::utils::coordinate_notation::{format_coord, parse_coord};
use crate::utils::render_game_state::render_game_state;

const HELP_TEXT: &str = "\
commands:
  click <coord>      select, move or deselect as a board click would
  select <coord>     select a piece of the side to move
  moves              list legal targets of the selected piece
  move <coord>       move the selected piece
  promote <kind>     resolve a pending promotion (queen, rook, bishop, knight)
  state              print the game snapshot as JSON
  show               draw the board
  history            list the moves played
  reset              start a new game
  help               show this text
  quit               leave
coordinates are written wxyz (0100) or (w,x,y,z)";

pub fn run_stdio_loop(config: SessionConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TerminalSession::new(config);

    session.show(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TerminalSession {
    game: ChessGame,
    config: SessionConfig,
    pending_promotion: Option<PendingPromotion>,
}

impl TerminalSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_game(ChessGame::new(), config)
    }

    pub fn with_game(game: ChessGame, config: SessionConfig) -> Self {
        Self {
            game,
            config,
            pending_promotion: None,
        }
    }

    pub fn game(&self) -> &ChessGame {
        &self.game
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    /// Runs one command line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };
        debug!(cmd, arg, "command");

        match cmd.to_ascii_lowercase().as_str() {
            "click" => self.handle_click(arg, out)?,
            "select" => self.handle_select(arg, out)?,
            "moves" => self.print_selected_moves(out)?,
            "move" => self.handle_move(arg, out)?,
            "promote" => self.handle_promote(arg, out)?,
            "state" => {
                let json = serde_json::to_string_pretty(&self.game.snapshot())
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
            "show" => self.show(out)?,
            "history" => self.print_history(out)?,
            "reset" => {
                self.game.reset();
                self.pending_promotion = None;
                self.show(out)?;
            }
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" | "exit" => return Ok(true),
            other => writeln!(out, "unknown command '{other}' (try help)")?,
        }

        Ok(false)
    }

    pub fn show(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_game_state(&self.game, self.config.render_style))?;
        let state = self.game.state();
        if !state.game_over {
            let check = if self.game.is_in_check(state.current_player) {
                " (in check)"
            } else {
                ""
            };
            writeln!(out, "{} to move{check}", state.current_player)?;
        }
        Ok(())
    }

    fn handle_click(&mut self, arg: &str, out: &mut impl Write) -> io::Result<()> {
        let Some(at) = self.parse_target(arg, out)? else {
            return Ok(());
        };
        if self.refuse_while_promoting(out)? {
            return Ok(());
        }

        match handle_square_click(&mut self.game, at) {
            ClickResult::Selected { piece, moves } => {
                writeln!(out, "selected {} {} at {}", piece.color, piece.kind, piece.position)?;
                write_targets(out, &moves)?;
                self.show(out)?;
            }
            ClickResult::Deselected => writeln!(out, "selection cleared")?,
            ClickResult::Moved(outcome) => self.report_move(&outcome, out)?,
            ClickResult::Ignored => writeln!(out, "nothing to do at {at}")?,
        }
        Ok(())
    }

    fn handle_select(&mut self, arg: &str, out: &mut impl Write) -> io::Result<()> {
        let Some(at) = self.parse_target(arg, out)? else {
            return Ok(());
        };
        if self.refuse_while_promoting(out)? {
            return Ok(());
        }

        match self.game.select_piece(at) {
            Some(piece) => {
                writeln!(out, "selected {} {} at {}", piece.color, piece.kind, piece.position)?;
                self.show(out)?;
            }
            None => writeln!(out, "no {} piece at {at}", self.game.current_player())?,
        }
        Ok(())
    }

    fn print_selected_moves(&self, out: &mut impl Write) -> io::Result<()> {
        match self.game.selected_piece() {
            Some(_) => write_targets(out, &self.game.valid_moves_for_selected()),
            None => writeln!(out, "no piece selected"),
        }
    }

    fn handle_move(&mut self, arg: &str, out: &mut impl Write) -> io::Result<()> {
        let Some(at) = self.parse_target(arg, out)? else {
            return Ok(());
        };
        if self.refuse_while_promoting(out)? {
            return Ok(());
        }

        match self.game.make_move(at) {
            Ok(outcome) => self.report_move(&outcome, out),
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn handle_promote(&mut self, arg: &str, out: &mut impl Write) -> io::Result<()> {
        let Some(pending) = self.pending_promotion else {
            return writeln!(out, "no promotion pending");
        };
        let Some(kind) = PieceKind::from_name(arg) else {
            return writeln!(out, "unknown piece '{arg}'");
        };

        match self.game.promote_pawn(pending.position, kind) {
            Ok(status) => {
                self.pending_promotion = None;
                writeln!(out, "pawn at {} promoted to {kind}", pending.position)?;
                if let Some(message) = status.message() {
                    writeln!(out, "{message}")?;
                }
                self.show(out)
            }
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn print_history(&self, out: &mut impl Write) -> io::Result<()> {
        let history = &self.game.state().move_history;
        if history.is_empty() {
            return writeln!(out, "no moves yet");
        }
        for (ply, record) in history.iter().enumerate() {
            write!(
                out,
                "{:>3}. {} {} {} -> {}",
                ply + 1,
                record.player,
                record.piece,
                format_coord(record.from),
                format_coord(record.to)
            )?;
            match record.captured {
                Some(kind) => writeln!(out, " x {kind}")?,
                None => writeln!(out)?,
            }
        }
        Ok(())
    }

    fn report_move(&mut self, outcome: &MoveOutcome, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{} {} -> {}", outcome.piece, outcome.from, outcome.to)?;
        match outcome.captured {
            Some(taken) => writeln!(out, " captures {} {}", taken.color, taken.kind)?,
            None => writeln!(out)?,
        }

        if let Some(pending) = outcome.promotion {
            self.pending_promotion = Some(pending);
            writeln!(
                out,
                "pawn at {} may promote: promote <queen|rook|bishop|knight>",
                pending.position
            )?;
        }
        if let Some(message) = outcome.message() {
            writeln!(out, "{message}")?;
        }
        if self.config.show_history {
            self.print_history(out)?;
        }
        self.show(out)
    }

    fn parse_target(&self, arg: &str, out: &mut impl Write) -> io::Result<Option<Coord>> {
        match parse_coord(arg) {
            Ok(at) => Ok(Some(at)),
            Err(err) => {
                writeln!(out, "error: {err}")?;
                Ok(None)
            }
        }
    }

    fn refuse_while_promoting(&self, out: &mut impl Write) -> io::Result<bool> {
        match self.pending_promotion {
            Some(pending) => {
                warn!(at = %pending.position, "command refused while promotion is pending");
                writeln!(
                    out,
                    "promotion pending at {}: promote <queen|rook|bishop|knight>",
                    pending.position
                )?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn write_targets(out: &mut impl Write, moves: &[Coord]) -> io::Result<()> {
    if moves.is_empty() {
        return writeln!(out, "no legal moves");
    }
    let listed: Vec<String> = moves.iter().map(|m| format_coord(*m)).collect();
    writeln!(out, "{} legal moves: {}", moves.len(), listed.join(" "))
}
