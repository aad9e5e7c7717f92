//! Moves and the turn history.
//!
//! A `Move` is a complete, self-describing transition for one token: source,
//! destination, and the token it captures (if any). The executor accepts a
//! move only if it is equal to one the generator produced, so every field
//! takes part in comparison.
//!
//! `ActionRecord` is an entry in the match history. The animation layer
//! replays these to drive visuals.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::seat::SeatId;
use super::token::TokenPosition;

/// An opponent token sent back to base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub seat: SeatId,
    pub token: u8,
}

/// A proposed or applied token transition.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Move, SeatId, TokenPosition};
///
/// let enter = Move::new(SeatId::new(0), 2, TokenPosition::Base, TokenPosition::Track(0));
/// assert!(enter.is_entry());
/// assert!(!enter.is_capture());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Seat that owns the moving token.
    pub seat: SeatId,
    /// Token index 0-3 within that seat.
    pub token: u8,
    pub from: TokenPosition,
    pub to: TokenPosition,
    /// Opponent token captured by landing on its cell.
    pub capture: Option<Capture>,
}

/// Legal moves for one roll. At most one per token, so never spills.
pub type LegalMoves = SmallVec<[Move; 4]>;

impl Move {
    /// Create a non-capturing move.
    #[must_use]
    pub fn new(seat: SeatId, token: u8, from: TokenPosition, to: TokenPosition) -> Self {
        Self {
            seat,
            token,
            from,
            to,
            capture: None,
        }
    }

    /// Attach a capture to this move.
    #[must_use]
    pub fn capturing(mut self, capture: Capture) -> Self {
        self.capture = Some(capture);
        self
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Check if this move brings a token to the center.
    #[must_use]
    pub fn is_finish(&self) -> bool {
        self.to == TokenPosition::Finished
    }

    /// Check if this move brings a token out of base.
    #[must_use]
    pub fn is_entry(&self) -> bool {
        self.from == TokenPosition::Base
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} token {}: {} -> {}", self.seat, self.token, self.from, self.to)?;
        if let Some(capture) = self.capture {
            write!(f, " (captures {} token {})", capture.seat, capture.token)?;
        }
        Ok(())
    }
}

/// What happened at one step of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// The active seat rolled the die.
    Roll { value: u8 },
    /// Third consecutive six: the turn is lost.
    Forfeit,
    /// A move was applied.
    Move(Move),
    /// No legal move existed for the roll.
    Skip,
    /// The caller forced the turn to pass (timeout, resignation).
    Timeout,
}

/// A recorded action with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub seat: SeatId,

    /// The action taken.
    pub action: TurnAction,

    /// Position in the match history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: SeatId, action: TurnAction, sequence: u32) -> Self {
        Self {
            seat,
            action,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_flags() {
        let seat = SeatId::new(1);
        let finish = Move::new(seat, 0, TokenPosition::HomePath(4), TokenPosition::Finished);
        assert!(finish.is_finish());
        assert!(!finish.is_entry());

        let capture = Move::new(seat, 3, TokenPosition::Track(20), TokenPosition::Track(22))
            .capturing(Capture { seat: SeatId::new(0), token: 1 });
        assert!(capture.is_capture());
        assert!(!capture.is_finish());
    }

    #[test]
    fn test_move_equality_includes_capture() {
        let seat = SeatId::new(0);
        let plain = Move::new(seat, 0, TokenPosition::Track(3), TokenPosition::Track(5));
        let with_capture = plain.capturing(Capture { seat: SeatId::new(1), token: 0 });

        assert_ne!(plain, with_capture);
        assert_eq!(plain, Move::new(seat, 0, TokenPosition::Track(3), TokenPosition::Track(5)));
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(SeatId::new(2), 1, TokenPosition::Track(30), TokenPosition::Track(33))
            .capturing(Capture { seat: SeatId::new(0), token: 2 });
        assert_eq!(
            mv.to_string(),
            "Seat 2 token 1: track 30 -> track 33 (captures Seat 0 token 2)"
        );
    }

    #[test]
    fn test_action_record_serialization() {
        let mv = Move::new(SeatId::new(1), 2, TokenPosition::Base, TokenPosition::Track(13));
        let record = ActionRecord::new(SeatId::new(1), TurnAction::Move(mv), 7);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
