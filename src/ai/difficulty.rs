//! AI difficulty levels.

use serde::{Deserialize, Serialize};

/// How strongly the heuristic opponent plays.
///
/// Difficulty only changes how often the priority order is skipped in favor
/// of a uniformly random legal move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability of ignoring the heuristic and moving at random.
    #[must_use]
    pub const fn random_move_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Medium => 0.2,
            Difficulty::Hard => 0.0,
        }
    }
}
