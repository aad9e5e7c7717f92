//! Board geometry: the shared ring, the private lanes, and the progress scale.
//!
//! ## Coordinates
//!
//! - Ring cells are absolute indices `0..RING_SIZE`, shared by every seat.
//! - Lane cells are private per seat, `0..LANE_LEN`.
//!
//! ## Progress Scale
//!
//! Every on-board position maps onto one seat-relative scale:
//!
//! | Position            | Progress          |
//! |---------------------|-------------------|
//! | Ring, distance `d`  | `d` (0..=51)      |
//! | Lane, cell `p`      | `52 + p` (52..=57)|
//! | Finished            | `58`              |
//!
//! Moves are computed by adding the dice value on this scale and mapping back.

use super::seat::Color;
use super::token::TokenPosition;

/// Number of cells on the shared ring.
pub const RING_SIZE: u8 = 52;

/// Number of cells in each seat's private lane.
pub const LANE_LEN: u8 = 6;

/// Tokens per seat.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Progress value of a finished token.
pub const FINISH_PROGRESS: u8 = RING_SIZE + LANE_LEN;

/// Ring cells where captures cannot happen (the four entry squares).
pub const SAFE_SQUARES: [u8; 4] = [0, 13, 26, 39];

/// Check if a ring cell is a safe square.
#[must_use]
pub fn is_safe_square(cell: u8) -> bool {
    SAFE_SQUARES.contains(&cell)
}

/// Distance travelled from `color`'s entry square to `cell`.
#[must_use]
pub fn ring_distance(color: Color, cell: u8) -> u8 {
    (cell % RING_SIZE + RING_SIZE - color.entry_square()) % RING_SIZE
}

/// Absolute ring cell `distance` steps past `color`'s entry square.
#[must_use]
pub fn ring_cell(color: Color, distance: u8) -> u8 {
    (color.entry_square() + distance) % RING_SIZE
}

/// Position on the progress scale, or `None` for a token still in base.
#[must_use]
pub fn progress(color: Color, position: TokenPosition) -> Option<u8> {
    match position {
        TokenPosition::Base => None,
        TokenPosition::Track(cell) => Some(ring_distance(color, cell)),
        TokenPosition::HomePath(lane) => Some(RING_SIZE.saturating_add(lane)),
        TokenPosition::Finished => Some(FINISH_PROGRESS),
    }
}

/// Map a progress value back to a position. Returns `None` on overshoot.
#[must_use]
pub fn position_at(color: Color, progress: u8) -> Option<TokenPosition> {
    match progress {
        p if p < RING_SIZE => Some(TokenPosition::Track(ring_cell(color, p))),
        p if p < FINISH_PROGRESS => Some(TokenPosition::HomePath(p - RING_SIZE)),
        FINISH_PROGRESS => Some(TokenPosition::Finished),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_squares_are_entry_squares() {
        for color in Color::ALL {
            assert!(is_safe_square(color.entry_square()));
        }
        assert!(!is_safe_square(1));
        assert!(!is_safe_square(51));
    }

    #[test]
    fn test_ring_distance_wraps() {
        assert_eq!(ring_distance(Color::Red, 0), 0);
        assert_eq!(ring_distance(Color::Red, 51), 51);
        assert_eq!(ring_distance(Color::Green, 13), 0);
        assert_eq!(ring_distance(Color::Green, 12), 51);
        assert_eq!(ring_distance(Color::Blue, 2), 15);
    }

    #[test]
    fn test_ring_cell_inverse_of_distance() {
        for color in Color::ALL {
            for cell in 0..RING_SIZE {
                assert_eq!(ring_cell(color, ring_distance(color, cell)), cell);
            }
        }
    }

    #[test]
    fn test_progress_scale_boundaries() {
        let c = Color::Yellow;
        assert_eq!(position_at(c, 0), Some(TokenPosition::Track(26)));
        assert_eq!(position_at(c, 51), Some(TokenPosition::Track(25)));
        assert_eq!(position_at(c, 52), Some(TokenPosition::HomePath(0)));
        assert_eq!(position_at(c, 57), Some(TokenPosition::HomePath(5)));
        assert_eq!(position_at(c, 58), Some(TokenPosition::Finished));
        assert_eq!(position_at(c, 59), None);
    }

    #[test]
    fn test_progress_of_base_is_none() {
        assert_eq!(progress(Color::Red, TokenPosition::Base), None);
        assert_eq!(progress(Color::Red, TokenPosition::HomePath(4)), Some(56));
        assert_eq!(progress(Color::Red, TokenPosition::Finished), Some(FINISH_PROGRESS));
    }
}
