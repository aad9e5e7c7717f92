//! Engine error types.
//!
//! Three kinds of failure reach callers:
//! - phase mismatches (`PhaseMismatch`, `MatchOver`, `MovesAvailable`,
//!   `UnearnedBonus`): two input sources raced, fatal to the current turn;
//! - illegal moves (`IllegalMove`): the caller should resynchronize rather
//!   than retry;
//! - invalid construction (`InvalidPlayerCount`, `InvalidSeat`,
//!   `InvalidDiceValue`, `InvalidState`).
//!
//! A failing entry point never produces a partially updated state.

use thiserror::Error;

use crate::core::{Move, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{operation} requires phase {expected:?}, match is in {actual:?}")]
    PhaseMismatch {
        operation: &'static str,
        expected: Phase,
        actual: Phase,
    },
    #[error("{operation} is not allowed once the match is over")]
    MatchOver { operation: &'static str },
    #[error("move {0} is not in the current legal move list")]
    IllegalMove(Move),
    #[error("cannot skip: {count} legal moves are available")]
    MovesAvailable { count: usize },
    #[error("bonus turn requested but the roll was {dice_value:?}, not a six")]
    UnearnedBonus { dice_value: Option<u8> },
    #[error("dice value {0} is outside 1..=6")]
    InvalidDiceValue(u8),
    #[error("player count {0} is outside 2..=4")]
    InvalidPlayerCount(usize),
    #[error("seat {seat} does not exist in a {player_count}-seat match")]
    InvalidSeat { seat: usize, player_count: usize },
    #[error("invalid state: {0}")]
    InvalidState(String),
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
