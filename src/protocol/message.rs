//! Turn messages exchanged between peers.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{GameState, Move, SeatId};
use crate::error::EngineError;
use crate::rules::{apply_roll, execute_move, MoveOutcome, RollOutcome};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),
    #[error("message from {claimed} but {expected} is to act")]
    SeatMismatch { claimed: SeatId, expected: SeatId },
}

/// One turn action, as sent by the seat that performed it.
///
/// `resync` optionally carries the sender's resulting state. It is only
/// compared against the locally derived state, never adopted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TurnMessage {
    DiceRolled {
        seat: SeatId,
        dice_value: u8,
        resync: Option<Box<GameState>>,
    },
    MovePlayed {
        seat: SeatId,
        mv: Move,
        resync: Option<Box<GameState>>,
    },
}

impl TurnMessage {
    /// Announce a local roll.
    #[must_use]
    pub fn dice_rolled(seat: SeatId, outcome: &RollOutcome, with_state: bool) -> Self {
        TurnMessage::DiceRolled {
            seat,
            dice_value: outcome.dice_value,
            resync: with_state.then(|| Box::new(outcome.state.clone())),
        }
    }

    /// Announce a locally executed move.
    #[must_use]
    pub fn move_played(mv: Move, outcome: &MoveOutcome, with_state: bool) -> Self {
        TurnMessage::MovePlayed {
            seat: mv.seat,
            mv,
            resync: with_state.then(|| Box::new(outcome.state.clone())),
        }
    }

    /// Seat that sent this message.
    #[must_use]
    pub fn seat(&self) -> SeatId {
        match self {
            TurnMessage::DiceRolled { seat, .. } | TurnMessage::MovePlayed { seat, .. } => *seat,
        }
    }

    fn resync(&self) -> Option<&GameState> {
        match self {
            TurnMessage::DiceRolled { resync, .. } | TurnMessage::MovePlayed { resync, .. } => {
                resync.as_deref()
            }
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ProtocolError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Locally derived result of a remote message.
#[derive(Clone, Debug)]
pub enum RemoteOutcome {
    Rolled(RollOutcome),
    Moved(MoveOutcome),
}

impl RemoteOutcome {
    #[must_use]
    pub fn state(&self) -> &GameState {
        match self {
            RemoteOutcome::Rolled(o) => &o.state,
            RemoteOutcome::Moved(o) => &o.state,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RemoteApplied {
    pub outcome: RemoteOutcome,
    /// The sender's attached state disagrees with ours. Callers should
    /// resynchronize with the authoritative peer.
    pub diverged: bool,
}

/// Apply a peer's message to the local state.
///
/// The roll value or move is replayed through `apply_roll` / `execute_move`,
/// so a move that is not legal in our own state is rejected. The caller still
/// advances or skips the turn itself.
pub fn apply_remote(state: &GameState, message: &TurnMessage) -> Result<RemoteApplied, ProtocolError> {
    let claimed = message.seat();
    if claimed != state.current_seat {
        warn!(%claimed, expected = %state.current_seat, "message from seat not on turn");
        return Err(ProtocolError::SeatMismatch {
            claimed,
            expected: state.current_seat,
        });
    }

    let outcome = match message {
        TurnMessage::DiceRolled { dice_value, .. } => {
            RemoteOutcome::Rolled(apply_roll(state, *dice_value)?)
        }
        TurnMessage::MovePlayed { mv, .. } => {
            if mv.seat != claimed {
                return Err(ProtocolError::SeatMismatch {
                    claimed: mv.seat,
                    expected: claimed,
                });
            }
            RemoteOutcome::Moved(execute_move(state, mv)?)
        }
    };

    let diverged = message
        .resync()
        .is_some_and(|theirs| !theirs.same_position(outcome.state()));
    if diverged {
        warn!(seat = %claimed, "peer state diverged from local derivation");
    } else {
        debug!(seat = %claimed, "remote action applied");
    }

    Ok(RemoteApplied { outcome, diverged })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Phase, TokenPosition};
    use crate::rules::MatchBuilder;

    fn fresh() -> GameState {
        MatchBuilder::new().player_count(2).seed(5).build().unwrap()
    }

    #[test]
    fn test_seat_reads_either_variant() {
        let roll = TurnMessage::DiceRolled {
            seat: SeatId::new(1),
            dice_value: 2,
            resync: None,
        };
        let mv = Move::new(SeatId::new(0), 3, TokenPosition::Base, TokenPosition::Track(0));
        let played = TurnMessage::MovePlayed {
            seat: SeatId::new(0),
            mv,
            resync: None,
        };

        assert_eq!(roll.seat(), SeatId::new(1));
        assert_eq!(played.seat(), SeatId::new(0));
    }

    #[test]
    fn test_move_message_encoding() {
        let rolled = apply_roll(&fresh(), 6).unwrap();
        let mv = rolled.legal_moves[2];
        let outcome = execute_move(&rolled.state, &mv).unwrap();

        let msg = TurnMessage::move_played(mv, &outcome, false);
        let decoded = TurnMessage::decode(&msg.encode().unwrap()).unwrap();

        assert!(decoded.resync().is_none());
        match decoded {
            TurnMessage::MovePlayed { seat, mv: got, .. } => {
                assert_eq!(seat, SeatId::new(0));
                assert_eq!(got, mv);
            }
            TurnMessage::DiceRolled { .. } => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_resync_state_survives_encoding() {
        let rolled = apply_roll(&fresh(), 4).unwrap();
        let msg = TurnMessage::dice_rolled(SeatId::new(0), &rolled, true);
        let decoded = TurnMessage::decode(&msg.encode().unwrap()).unwrap();

        let carried = decoded.resync().unwrap();
        assert_eq!(carried.phase, Phase::Rolled);
        assert!(carried.same_position(&rolled.state));
    }

    #[test]
    fn test_move_seat_must_match_message_seat() {
        let rolled = apply_roll(&fresh(), 6).unwrap();
        let mv = rolled.legal_moves[0];
        let msg = TurnMessage::MovePlayed {
            seat: SeatId::new(0),
            mv: Move { seat: SeatId::new(1), ..mv },
            resync: None,
        };

        assert!(matches!(
            apply_remote(&rolled.state, &msg),
            Err(ProtocolError::SeatMismatch { claimed, expected })
                if claimed == SeatId::new(1) && expected == SeatId::new(0)
        ));
    }
}
