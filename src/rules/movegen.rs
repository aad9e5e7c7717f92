//! Legal-move generation.
//!
//! Pure function of (state, seat, dice value). Produces at most one move per
//! token and never ranks them.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::board::{is_safe_square, position_at, progress};
use crate::core::{Capture, Color, GameState, LegalMoves, Move, SeatId, Token, TokenPosition};

/// Ring cell -> tokens on it.
///
/// Several seats can share a safe square; elsewhere a cell holds one token.
struct RingIndex {
    cells: FxHashMap<u8, SmallVec<[Capture; 2]>>,
}

impl RingIndex {
    fn of(state: &GameState) -> Self {
        let mut cells: FxHashMap<u8, SmallVec<[Capture; 2]>> = FxHashMap::default();
        for (idx, player) in state.players.iter().enumerate() {
            for token in &player.tokens {
                if let TokenPosition::Track(cell) = token.position {
                    cells.entry(cell).or_default().push(Capture {
                        seat: SeatId::new(idx as u8),
                        token: token.id,
                    });
                }
            }
        }
        Self { cells }
    }

    fn occupants(&self, cell: u8) -> &[Capture] {
        self.cells.get(&cell).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn has_own(&self, seat: SeatId, cell: u8) -> bool {
        self.occupants(cell).iter().any(|o| o.seat == seat)
    }

    fn opponent(&self, seat: SeatId, cell: u8) -> Option<Capture> {
        self.occupants(cell).iter().find(|o| o.seat != seat).copied()
    }
}

/// Compute every legal move for `seat` with the given dice value.
///
/// Returns an empty list for an unknown seat or a dice value outside 1..=6.
/// Does not look at the phase, so it can be used to resync from any state.
#[must_use]
pub fn compute_legal_moves(state: &GameState, seat: SeatId, dice_value: u8) -> LegalMoves {
    let mut moves = LegalMoves::new();
    if !(1..=6).contains(&dice_value) {
        return moves;
    }
    let Some(player) = state.player(seat) else {
        return moves;
    };

    let ring = RingIndex::of(state);
    for token in &player.tokens {
        if let Some(mv) = token_move(&ring, &player.tokens, seat, player.color, token, dice_value) {
            moves.push(mv);
        }
    }
    moves
}

fn token_move(
    ring: &RingIndex,
    own: &[Token],
    seat: SeatId,
    color: Color,
    token: &Token,
    dice_value: u8,
) -> Option<Move> {
    let to = match token.position {
        TokenPosition::Finished => return None,
        TokenPosition::Base if dice_value != 6 => return None,
        TokenPosition::Base => TokenPosition::Track(color.entry_square()),
        on_board => position_at(color, progress(color, on_board)?.saturating_add(dice_value))?,
    };

    let mv = Move::new(seat, token.id, token.position, to);
    match to {
        TokenPosition::Track(cell) if ring.has_own(seat, cell) => None,
        TokenPosition::Track(cell) if is_safe_square(cell) => Some(mv),
        TokenPosition::Track(cell) => Some(match ring.opponent(seat, cell) {
            Some(victim) => mv.capturing(victim),
            None => mv,
        }),
        TokenPosition::HomePath(_) if own.iter().any(|t| t.position == to) => None,
        _ => Some(mv),
    }
}
