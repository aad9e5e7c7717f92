//! Core engine types: seats, tokens, moves, board geometry, RNG, configuration, state.
//!
//! Everything here is plain data. Rules that change it live in `rules`.

pub mod board;
pub mod seat;
pub mod token;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use seat::{Color, SeatId};
pub use token::{Lifecycle, Token, TokenPosition};
pub use rng::{GameRng, GameRngState};
pub use config::MatchConfig;
pub use action::{ActionRecord, Capture, LegalMoves, Move, TurnAction};
pub use state::{GameState, Phase, Player};
