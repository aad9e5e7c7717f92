//! Tokens and their lifecycle.
//!
//! A token's lifecycle state and position are one tagged value, so a position
//! exists exactly when the token is on the ring or in its lane.

use serde::{Deserialize, Serialize};

/// Where a token is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenPosition {
    /// Waiting in the seat's base.
    Base,
    /// On the shared ring, at an absolute cell `0..52`.
    Track(u8),
    /// In the seat's private lane, at cell `0..6`.
    HomePath(u8),
    /// Reached the center.
    Finished,
}

/// Lifecycle tag without the position payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    Base,
    Track,
    HomePath,
    Finished,
}

impl TokenPosition {
    /// Lifecycle tag of this position.
    #[must_use]
    pub const fn lifecycle(self) -> Lifecycle {
        match self {
            TokenPosition::Base => Lifecycle::Base,
            TokenPosition::Track(_) => Lifecycle::Track,
            TokenPosition::HomePath(_) => Lifecycle::HomePath,
            TokenPosition::Finished => Lifecycle::Finished,
        }
    }

    /// Cell index, present only on the ring or in the lane.
    #[must_use]
    pub const fn cell(self) -> Option<u8> {
        match self {
            TokenPosition::Track(cell) | TokenPosition::HomePath(cell) => Some(cell),
            TokenPosition::Base | TokenPosition::Finished => None,
        }
    }
}

impl std::fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenPosition::Base => f.write_str("base"),
            TokenPosition::Track(cell) => write!(f, "track {cell}"),
            TokenPosition::HomePath(lane) => write!(f, "lane {lane}"),
            TokenPosition::Finished => f.write_str("finished"),
        }
    }
}

/// One of a seat's four tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token index 0-3, fixed for its lifetime.
    pub id: u8,
    pub position: TokenPosition,
}

impl Token {
    /// A token in base.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self {
            id,
            position: TokenPosition::Base,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position == TokenPosition::Finished
    }
}
