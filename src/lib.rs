//! Crate root module declarations for the 4D chess rules engine.
//!
//! Exposes the board model, per-piece move patterns, check-safe move
//! generation, the game engine with its click controller, and the terminal
//! front end so the binary, integration tests and benches share stable paths.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod engine {
    pub mod chess_game;
    pub mod move_outcome;
    pub mod square_click;
}

pub mod frontend {
    pub mod terminal_session;
}

pub mod utils {
    pub mod coordinate_notation;
    pub mod random_playout;
    pub mod render_game_state;
}
