//! Opponent AI for single-player mode.
//!
//! ## Components
//!
//! - `Difficulty`: how often the heuristic is ignored
//! - `MovePolicy`: trait for anything that picks a legal move
//! - `HeuristicPolicy`, `RandomPolicy`: the built-in policies
//!
//! ## Usage
//!
//! ```
//! use ludo_engine::ai::{select_ai_move, Difficulty};
//! use ludo_engine::rules::{apply_roll, MatchBuilder};
//!
//! let state = MatchBuilder::new().player_count(2).build().unwrap();
//! let rolled = apply_roll(&state, 6).unwrap();
//!
//! let mv = select_ai_move(&rolled.state, Difficulty::Hard).unwrap();
//! assert!(mv.is_entry());
//! ```

mod difficulty;
mod policy;

pub use difficulty::Difficulty;
pub use policy::{select_ai_move, HeuristicPolicy, MovePolicy, RandomPolicy};
