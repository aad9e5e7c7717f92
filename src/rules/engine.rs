//! Move execution and turn control.
//!
//! ## Phases
//!
//! ```text
//! WaitingRoll --roll--> Rolled --execute--> Animating --advance--> WaitingRoll
//!      ^                  |  \                  |
//!      +------skip--------+   +---win---> GameOver <---+
//! ```
//!
//! A third consecutive six forfeits the turn straight from `WaitingRoll`
//! without ever entering `Rolled`.
//!
//! Every function takes the current state by reference and returns a new
//! one. On error nothing is returned and the input is untouched.

use tracing::{debug, info, warn};

use crate::core::{
    Capture, GameState, LegalMoves, Move, Phase, TokenPosition, TurnAction,
};
use crate::error::{EngineError, Result};

use super::movegen::compute_legal_moves;

/// Sixes in a row that forfeit the turn.
pub const MAX_CONSECUTIVE_SIXES: u8 = 3;

/// Result of a roll.
#[derive(Clone, Debug)]
pub struct RollOutcome {
    pub state: GameState,
    pub dice_value: u8,
    /// Same as `state.legal_moves`. Empty on forfeit.
    pub legal_moves: LegalMoves,
    /// Third consecutive six: the turn already passed to the next seat.
    pub turn_forfeited: bool,
}

/// Result of an executed move.
#[derive(Clone, Debug)]
pub struct MoveOutcome {
    pub state: GameState,
    pub captured: Option<Capture>,
    /// The moved token reached the center.
    pub finished: bool,
    /// The roll was a six; pass this to `advance_turn`.
    pub bonus_turn: bool,
    pub game_won: bool,
}

fn expect_phase(state: &GameState, operation: &'static str, expected: Phase) -> Result<()> {
    if state.phase == expected {
        Ok(())
    } else {
        warn!(operation, ?expected, actual = ?state.phase, "phase mismatch");
        Err(EngineError::PhaseMismatch {
            operation,
            expected,
            actual: state.phase,
        })
    }
}

/// Roll the die for the active seat using the state's own dice stream.
pub fn roll_dice(state: &GameState) -> Result<RollOutcome> {
    expect_phase(state, "roll_dice", Phase::WaitingRoll)?;

    let mut next = state.clone();
    let value = next.rng.roll_die();
    Ok(resolve_roll(next, value))
}

/// Apply a dice value rolled elsewhere, e.g. by the authoritative peer.
///
/// Same rules as `roll_dice`, but the state's dice stream is not advanced.
pub fn apply_roll(state: &GameState, dice_value: u8) -> Result<RollOutcome> {
    expect_phase(state, "apply_roll", Phase::WaitingRoll)?;
    if !(1..=6).contains(&dice_value) {
        return Err(EngineError::InvalidDiceValue(dice_value));
    }

    Ok(resolve_roll(state.clone(), dice_value))
}

fn resolve_roll(mut next: GameState, value: u8) -> RollOutcome {
    let seat = next.current_seat;
    next.record(seat, TurnAction::Roll { value });

    // Forfeiture is decided before any move is generated.
    if value == 6 {
        next.consecutive_sixes = next.consecutive_sixes.saturating_add(1);
        if next.consecutive_sixes >= MAX_CONSECUTIVE_SIXES {
            debug!(%seat, "third consecutive six, turn forfeited");
            next.record(seat, TurnAction::Forfeit);
            end_turn(&mut next, false);
            return RollOutcome {
                state: next,
                dice_value: value,
                legal_moves: LegalMoves::new(),
                turn_forfeited: true,
            };
        }
    }

    let legal_moves = compute_legal_moves(&next, seat, value);
    debug!(%seat, dice = value, moves = legal_moves.len(), "rolled");

    next.dice_value = Some(value);
    next.legal_moves = legal_moves.clone();
    next.phase = Phase::Rolled;

    RollOutcome {
        state: next,
        dice_value: value,
        legal_moves,
        turn_forfeited: false,
    }
}

/// Apply one of the state's legal moves.
///
/// The move is accepted only if it equals an entry of `state.legal_moves`,
/// which rejects fabricated and stale moves.
pub fn execute_move(state: &GameState, mv: &Move) -> Result<MoveOutcome> {
    expect_phase(state, "execute_move", Phase::Rolled)?;
    if !state.legal_moves.contains(mv) {
        warn!(%mv, "rejected move not in legal list");
        return Err(EngineError::IllegalMove(*mv));
    }

    let mut next = state.clone();
    next.set_token(mv.seat, mv.token, mv.to);
    if let Some(victim) = mv.capture {
        debug!(seat = %victim.seat, token = victim.token, "captured");
        next.set_token(victim.seat, victim.token, TokenPosition::Base);
    }
    next.record(mv.seat, TurnAction::Move(*mv));
    next.legal_moves.clear();
    debug!(%mv, "move applied");

    let finished = mv.is_finish();
    let winner = next
        .player(mv.seat)
        .filter(|p| finished && p.all_finished())
        .map(|p| p.color);

    let (game_won, bonus_turn) = match winner {
        Some(color) => {
            info!(%color, seat = %mv.seat, "match won");
            next.winner = Some(color);
            next.phase = Phase::GameOver;
            (true, false)
        }
        None => {
            next.phase = Phase::Animating;
            (false, next.dice_value == Some(6))
        }
    };

    Ok(MoveOutcome {
        state: next,
        captured: mv.capture,
        finished,
        bonus_turn,
        game_won,
    })
}

/// Hand the turn on once the caller has finished animating the move.
///
/// With `bonus_turn` the same seat rolls again; otherwise the next seat
/// does and the six counter resets. A bonus is only honored after a six.
pub fn advance_turn(state: &GameState, bonus_turn: bool) -> Result<GameState> {
    expect_phase(state, "advance_turn", Phase::Animating)?;
    if bonus_turn && state.dice_value != Some(6) {
        warn!(dice = ?state.dice_value, "bonus turn refused");
        return Err(EngineError::UnearnedBonus {
            dice_value: state.dice_value,
        });
    }

    let mut next = state.clone();
    end_turn(&mut next, bonus_turn);
    Ok(next)
}

/// Give up a roll that has no legal move.
///
/// A six still earns another roll for the same seat.
pub fn skip_turn(state: &GameState) -> Result<GameState> {
    expect_phase(state, "skip_turn", Phase::Rolled)?;
    if !state.legal_moves.is_empty() {
        return Err(EngineError::MovesAvailable {
            count: state.legal_moves.len(),
        });
    }

    let mut next = state.clone();
    let bonus = next.dice_value == Some(6);
    next.record(next.current_seat, TurnAction::Skip);
    end_turn(&mut next, bonus);
    Ok(next)
}

/// Force the turn to the next seat regardless of phase.
///
/// Used by callers for timeouts and resignations. Fails once the match is over.
pub fn timeout_turn(state: &GameState) -> Result<GameState> {
    if state.is_over() {
        return Err(EngineError::MatchOver {
            operation: "timeout_turn",
        });
    }

    let mut next = state.clone();
    next.record(next.current_seat, TurnAction::Timeout);
    end_turn(&mut next, false);
    Ok(next)
}

fn end_turn(state: &mut GameState, same_seat: bool) {
    if !same_seat {
        state.current_seat = state.next_seat();
        state.consecutive_sixes = 0;
    }
    state.dice_value = None;
    state.legal_moves.clear();
    state.phase = Phase::WaitingRoll;
    debug!(seat = %state.current_seat, bonus = same_seat, "turn advanced");
}
