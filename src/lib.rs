//! # ludo-engine
//!
//! A deterministic rules engine for four-seat Ludo.
//!
//! ## Design Principles
//!
//! 1. **Values, not objects**: every entry point takes a `&GameState` and
//!    returns a new one. A caller's older reference never changes, so UI,
//!    network and persistence layers can diff snapshots freely.
//!
//! 2. **Validate by membership**: a move is accepted only if it is in the
//!    legal-move list the engine computed for the current roll.
//!
//! 3. **No I/O, no clocks, no threads**: callers own time, animation and
//!    transport. The engine is synchronous and runs to completion.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`.
//!
//! - **Seeded Dice**: the dice stream lives in the state, so a snapshot
//!   replays the same rolls.
//!
//! - **Separate "applied" and "advanced"**: `execute_move` leaves the match
//!   in `Phase::Animating` until the caller calls `advance_turn`.
//!
//! ## Modules
//!
//! - `core`: seats, tokens, moves, board geometry, RNG, configuration, state
//! - `rules`: match setup, legal-move generation, execution, turn control
//! - `ai`: heuristic opponent
//! - `protocol`: peer-to-peer turn messages
//! - `error`: engine error type

pub mod core;
pub mod rules;
pub mod ai;
pub mod protocol;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Capture, Color, GameRng, GameRngState, GameState, LegalMoves, Lifecycle,
    MatchConfig, Move, Phase, Player, SeatId, Token, TokenPosition, TurnAction,
};

pub use crate::rules::{
    advance_turn, apply_roll, compute_legal_moves, create_initial_state, execute_move,
    roll_dice, skip_turn, timeout_turn, MatchBuilder, MoveOutcome, RollOutcome,
};

pub use crate::ai::{select_ai_move, Difficulty, HeuristicPolicy, MovePolicy, RandomPolicy};

pub use crate::protocol::{apply_remote, ProtocolError, RemoteApplied, RemoteOutcome, TurnMessage};

pub use crate::error::EngineError;
