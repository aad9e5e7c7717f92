//! Match configuration.
//!
//! A `MatchConfig` describes how to seat a new match. It is consumed by
//! `MatchBuilder`, which validates it and produces the initial `GameState`.

use serde::{Deserialize, Serialize};

/// Smallest supported seat count.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported seat count.
pub const MAX_PLAYERS: usize = 4;

/// Configuration for a new match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Seat driven by the local human. All other seats are AI-flagged.
    pub human_seat: usize,

    /// Identity string for the human seat (e.g. a wallet address).
    pub human_identity: String,

    /// Seed for the dice stream.
    /// Same seed produces the same sequence of rolls.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: MAX_PLAYERS,
            human_seat: 0,
            human_identity: "local".to_string(),
            seed: 42,
        }
    }
}

impl MatchConfig {
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_human_seat(mut self, seat: usize) -> Self {
        self.human_seat = seat;
        self
    }

    pub fn with_human_identity(mut self, identity: impl Into<String>) -> Self {
        self.human_identity = identity.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
