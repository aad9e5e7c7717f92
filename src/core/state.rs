//! Match state.
//!
//! ## GameState
//!
//! The whole match as one value:
//! - Seats and their tokens
//! - Active seat, dice value, consecutive-six counter
//! - Turn phase and the legal moves for the current roll
//! - Winner
//! - Dice RNG and action history
//!
//! Entry points never mutate a `GameState` they are given. They clone it,
//! change the clone and return it, so a caller's older reference stays valid
//! for diffing. Players and history use `im` persistent data structures, so
//! the clone is O(1).
//!
//! A snapshot is the serialized `GameState`; restoring is deserializing it and
//! calling `validate()` before resuming play.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, LegalMoves, TurnAction};
use super::board::{is_safe_square, LANE_LEN, RING_SIZE, TOKENS_PER_PLAYER};
use super::config::{MAX_PLAYERS, MIN_PLAYERS};
use super::rng::GameRng;
use super::seat::{Color, SeatId};
use super::token::{Token, TokenPosition};
use crate::error::{EngineError, Result};
use crate::rules::compute_legal_moves;

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The active seat must roll.
    WaitingRoll,
    /// Legal moves are computed; waiting for a move or a skip.
    Rolled,
    /// A move was applied; waiting for the caller to advance the turn.
    Animating,
    /// A seat has finished all tokens. Terminal.
    GameOver,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
    /// Wallet address, or a synthetic tag for AI seats.
    pub identity: String,
    pub is_ai: bool,
    pub tokens: [Token; TOKENS_PER_PLAYER],
}

impl Player {
    /// A seat with all four tokens in base.
    #[must_use]
    pub fn new(color: Color, identity: impl Into<String>, is_ai: bool) -> Self {
        Self {
            color,
            identity: identity.into(),
            is_ai,
            tokens: [Token::new(0), Token::new(1), Token::new(2), Token::new(3)],
        }
    }

    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_finished()).count()
    }

    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.finished_count() == TOKENS_PER_PLAYER
    }

    /// Get a token by index.
    #[must_use]
    pub fn token(&self, id: u8) -> Option<&Token> {
        self.tokens.get(id as usize)
    }
}

/// Complete match state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order.
    pub players: Vector<Player>,

    /// Seat to act.
    pub current_seat: SeatId,

    /// Dice value of the current roll. `None` between rolls.
    pub dice_value: Option<u8>,

    /// Consecutive sixes rolled by the active seat this turn.
    pub consecutive_sixes: u8,

    /// Color of the winning seat, once decided.
    pub winner: Option<Color>,

    pub phase: Phase,

    /// Legal moves for the current roll. Empty outside `Phase::Rolled`.
    pub legal_moves: LegalMoves,

    /// Dice stream.
    pub rng: GameRng,

    /// Everything that happened so far, in order.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state for the given seats, seat 0 to roll.
    ///
    /// Prefer `MatchBuilder`, which also validates seat counts.
    #[must_use]
    pub fn new(players: Vector<Player>, seed: u64) -> Self {
        Self {
            players,
            current_seat: SeatId::new(0),
            dice_value: None,
            consecutive_sixes: 0,
            winner: None,
            phase: Phase::WaitingRoll,
            legal_moves: LegalMoves::new(),
            rng: GameRng::new(seed),
            history: Vector::new(),
        }
    }

    /// Get seat count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a seat's player record.
    #[must_use]
    pub fn player(&self, seat: SeatId) -> Option<&Player> {
        self.players.get(seat.index())
    }

    /// Get the active seat's player record.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.player(self.current_seat)
    }

    /// Check if the match is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Place a token. Returns false if the seat or token does not exist.
    ///
    /// Used by the executor and for setting up positions; it does not check
    /// game rules. Run `validate()` on hand-built positions.
    pub fn set_token(&mut self, seat: SeatId, token: u8, position: TokenPosition) -> bool {
        match self
            .players
            .get_mut(seat.index())
            .and_then(|p| p.tokens.get_mut(token as usize))
        {
            Some(t) => {
                t.position = position;
                true
            }
            None => false,
        }
    }

    /// Next seat in cyclic order that still has an unfinished token.
    #[must_use]
    pub fn next_seat(&self) -> SeatId {
        let count = self.player_count();
        let mut seat = self.current_seat;
        for _ in 0..count {
            seat = seat.next(count);
            if self.player(seat).is_some_and(|p| !p.all_finished()) {
                return seat;
            }
        }
        self.current_seat
    }

    /// Compare board, turn and phase, ignoring the RNG and history.
    ///
    /// Two peers that applied the same rolls and moves agree on this even
    /// though their dice streams differ.
    #[must_use]
    pub fn same_position(&self, other: &GameState) -> bool {
        self.players == other.players
            && self.current_seat == other.current_seat
            && self.dice_value == other.dice_value
            && self.consecutive_sixes == other.consecutive_sixes
            && self.winner == other.winner
            && self.phase == other.phase
            && self.legal_moves == other.legal_moves
    }

    /// Append to the history.
    pub(crate) fn record(&mut self, seat: SeatId, action: TurnAction) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(seat, action, sequence));
    }

    /// Check every structural invariant.
    ///
    /// Used when restoring a snapshot from outside the engine.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(EngineError::InvalidState(msg));
        let count = self.player_count();

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(EngineError::InvalidPlayerCount(count));
        }
        if self.current_seat.index() >= count {
            return Err(EngineError::InvalidSeat {
                seat: self.current_seat.index(),
                player_count: count,
            });
        }

        let mut ring: [Option<SeatId>; RING_SIZE as usize] = [None; RING_SIZE as usize];
        for (idx, player) in self.players.iter().enumerate() {
            let seat = SeatId::new(idx as u8);
            if Color::for_seat(seat) != Some(player.color) {
                return invalid(format!("{seat} has color {}", player.color));
            }

            let mut own_ring = [false; RING_SIZE as usize];
            let mut own_lane = [false; LANE_LEN as usize];
            for (i, token) in player.tokens.iter().enumerate() {
                if token.id as usize != i {
                    return invalid(format!("{seat} token slot {i} holds id {}", token.id));
                }
                match token.position {
                    TokenPosition::Track(cell) => {
                        if cell >= RING_SIZE {
                            return invalid(format!("{seat} token {i} on ring cell {cell}"));
                        }
                        if std::mem::replace(&mut own_ring[cell as usize], true) {
                            return invalid(format!("{seat} stacks two tokens on {cell}"));
                        }
                        if let Some(other) = ring[cell as usize] {
                            if !is_safe_square(cell) {
                                return invalid(format!(
                                    "{seat} and {other} share unsafe cell {cell}"
                                ));
                            }
                        }
                        ring[cell as usize] = Some(seat);
                    }
                    TokenPosition::HomePath(cell) => {
                        if cell >= LANE_LEN {
                            return invalid(format!("{seat} token {i} on lane cell {cell}"));
                        }
                        if std::mem::replace(&mut own_lane[cell as usize], true) {
                            return invalid(format!("{seat} stacks two tokens on lane {cell}"));
                        }
                    }
                    TokenPosition::Base | TokenPosition::Finished => {}
                }
            }
        }

        let finished: Vec<_> = self.players.iter().filter(|p| p.all_finished()).collect();
        match (self.phase, self.winner) {
            (Phase::GameOver, Some(winner)) => {
                if finished.len() != 1 || finished[0].color != winner {
                    return invalid(format!("winner {winner} has not finished alone"));
                }
            }
            (Phase::GameOver, None) => return invalid("game over without a winner".into()),
            (_, Some(winner)) => return invalid(format!("winner {winner} set mid-game")),
            (_, None) => {
                if !finished.is_empty() {
                    return invalid("a seat finished but the match continues".into());
                }
            }
        }

        if self.consecutive_sixes >= crate::rules::MAX_CONSECUTIVE_SIXES {
            return invalid(format!("{} consecutive sixes", self.consecutive_sixes));
        }

        match self.phase {
            Phase::WaitingRoll if self.dice_value.is_some() => {
                return invalid("dice value present while waiting for a roll".into());
            }
            Phase::Rolled => {
                let Some(value) = self.dice_value else {
                    return invalid("rolled without a dice value".into());
                };
                if !(1..=6).contains(&value) {
                    return Err(EngineError::InvalidDiceValue(value));
                }
                if compute_legal_moves(self, self.current_seat, value) != self.legal_moves {
                    return invalid("legal moves do not match the position".into());
                }
            }
            _ if !self.legal_moves.is_empty() => {
                return invalid(format!("legal moves present in {:?}", self.phase));
            }
            _ => {}
        }

        Ok(())
    }
}
