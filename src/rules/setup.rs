//! Match creation.

use im::Vector;
use tracing::info;

use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::{Color, GameState, MatchConfig, Player, SeatId};
use crate::error::{EngineError, Result};

/// Builder for a fresh match.
///
/// ```
/// use ludo_engine::rules::MatchBuilder;
///
/// let state = MatchBuilder::new()
///     .player_count(2)
///     .human_seat(1)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(state.player_count(), 2);
/// assert!(state.players[0].is_ai);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: MatchConfig,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn human_seat(mut self, seat: usize) -> Self {
        self.config.human_seat = seat;
        self
    }

    pub fn human_identity(mut self, identity: impl Into<String>) -> Self {
        self.config.human_identity = identity.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build the initial state: every token in base, seat 0 to roll.
    pub fn build(self) -> Result<GameState> {
        let MatchConfig {
            player_count,
            human_seat,
            human_identity,
            seed,
        } = self.config;

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(EngineError::InvalidPlayerCount(player_count));
        }
        if human_seat >= player_count {
            return Err(EngineError::InvalidSeat {
                seat: human_seat,
                player_count,
            });
        }

        let players: Vector<Player> = SeatId::all(player_count)
            .zip(Color::ALL)
            .map(|(seat, color)| {
                if seat.index() == human_seat {
                    Player::new(color, human_identity.clone(), false)
                } else {
                    Player::new(color, format!("ai-{color}"), true)
                }
            })
            .collect();

        info!(player_count, human_seat, seed, "match created");
        Ok(GameState::new(players, seed))
    }
}

/// Create a fresh match with a randomly seeded dice stream.
pub fn create_initial_state(player_count: usize, human_seat: usize) -> Result<GameState> {
    MatchBuilder::new()
        .player_count(player_count)
        .human_seat(human_seat)
        .seed(rand::random())
        .build()
}
