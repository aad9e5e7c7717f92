//! Move policies for AI-driven seats.
//!
//! A policy sees exactly what a human sees: the state and its legal-move
//! list. No lookahead, no peeking at future dice.
//!
//! - `HeuristicPolicy`: fixed priority order, diluted by difficulty
//! - `RandomPolicy`: uniform over legal moves

use std::cmp::Reverse;

use tracing::debug;

use crate::core::board::progress;
use crate::core::{GameRng, GameState, Move};

use super::difficulty::Difficulty;

/// RNG context for AI decisions, kept apart from the dice stream.
const AI_CONTEXT: &str = "ai-move";

// =============================================================================
// Policy Trait
// =============================================================================

/// Picks one of the state's legal moves.
pub trait MovePolicy: Send + Sync {
    /// Choose a move, or `None` when the legal-move list is empty.
    fn choose(&self, state: &GameState) -> Option<Move>;
}

// =============================================================================
// Random Policy
// =============================================================================

/// Uniformly random legal move.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, state: &GameState) -> Option<Move> {
        let mut rng = state.rng.for_context(AI_CONTEXT);
        rng.choose(&state.legal_moves).copied()
    }
}

// =============================================================================
// Heuristic Policy
// =============================================================================

/// Priority-ordered opponent.
///
/// In order:
/// 1. finish a token
/// 2. capture
/// 3. advance the token that ends up furthest along
/// 4. bring a token out of base
/// 5. anything, at random
///
/// With probability `difficulty.random_move_probability()` steps 1-4 are
/// skipped. Randomness comes from a context stream of the state's RNG, so the
/// same state always yields the same choice.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy {
    pub difficulty: Difficulty,
}

impl HeuristicPolicy {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    fn prioritized(state: &GameState, moves: &[Move]) -> Option<Move> {
        let color = state.active_player()?.color;

        moves
            .iter()
            .find(|m| m.is_finish())
            .or_else(|| moves.iter().find(|m| m.is_capture()))
            .or_else(|| {
                moves
                    .iter()
                    .filter(|m| !m.is_entry())
                    .min_by_key(|m| Reverse(progress(color, m.to)))
            })
            .or_else(|| moves.iter().find(|m| m.is_entry()))
            .copied()
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose(&self, state: &GameState) -> Option<Move> {
        let moves = state.legal_moves.as_slice();
        if moves.is_empty() {
            return None;
        }

        let mut rng: GameRng = state.rng.for_context(AI_CONTEXT);
        if !rng.gen_bool(self.difficulty.random_move_probability()) {
            if let Some(mv) = Self::prioritized(state, moves) {
                debug!(difficulty = ?self.difficulty, %mv, "heuristic move");
                return Some(mv);
            }
        }

        let mv = rng.choose(moves).copied();
        debug!(difficulty = ?self.difficulty, ?mv, "random move");
        mv
    }
}

/// Pick a move for the active seat with the heuristic policy.
#[must_use]
pub fn select_ai_move(state: &GameState, difficulty: Difficulty) -> Option<Move> {
    HeuristicPolicy::new(difficulty).choose(state)
}
