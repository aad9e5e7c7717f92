//! Ludo rules: match setup, legal-move generation, execution and turn control.
//!
//! All entry points are pure with respect to their input: they take a
//! `&GameState` and hand back a new one.

pub mod setup;
pub mod movegen;
pub mod engine;

pub use setup::{create_initial_state, MatchBuilder};
pub use movegen::compute_legal_moves;
pub use engine::{
    advance_turn, apply_roll, execute_move, roll_dice, skip_turn, timeout_turn, MoveOutcome,
    RollOutcome, MAX_CONSECUTIVE_SIXES,
};
