//! Crate root module declarations for the random-move chess engine.
//!
//! Exposes the board model, the piece catalog, candidate move generation,
//! the turn engine, and the text front-end so the binary, benches and any
//! embedding server can import stable module paths.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod piece_catalog;
}

pub mod move_generation {
    pub mod legal_move_shared;
    pub mod move_generator;
}

pub mod engines {
    pub mod turn_engine;
}

pub mod session {
    pub mod command_session;
}

pub mod utils {
    pub mod auto_play;
    pub mod render_board;
}
