//! Seat identification and colors.
//!
//! ## SeatId
//!
//! Type-safe index into the match's player list. Turn order is seat order.
//!
//! ## Color
//!
//! Fixed identity of a seat. Doubles as the turn-order label and the key
//! for board geometry (entry square, private lane).

use serde::{Deserialize, Serialize};

/// Seat identifier for a 2-4 player match.
///
/// Seat indices are 0-based: the first seat to act is `SeatId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one in cyclic turn order.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seat IDs for a match with `player_count` seats.
    ///
    /// ```
    /// use ludo_engine::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all(3).collect();
    /// assert_eq!(seats, vec![SeatId::new(0), SeatId::new(1), SeatId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = SeatId> {
        (0..player_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Seat color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Color assigned to a seat. Seats take colors in turn order.
    #[must_use]
    pub fn for_seat(seat: SeatId) -> Option<Color> {
        Self::ALL.get(seat.index()).copied()
    }

    /// Ring cell where this color's tokens enter play.
    #[must_use]
    pub const fn entry_square(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Green => 13,
            Color::Yellow => 26,
            Color::Blue => 39,
        }
    }

    /// Lowercase name, used for synthetic AI identities.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_basics() {
        let s0 = SeatId::new(0);
        let s3 = SeatId::new(3);

        assert_eq!(s0.index(), 0);
        assert_eq!(s3.index(), 3);
        assert_eq!(format!("{}", s3), "Seat 3");
    }

    #[test]
    fn test_seat_next_wraps() {
        assert_eq!(SeatId::new(0).next(2), SeatId::new(1));
        assert_eq!(SeatId::new(1).next(2), SeatId::new(0));
        assert_eq!(SeatId::new(3).next(4), SeatId::new(0));
    }

    #[test]
    fn test_colors_follow_seat_order() {
        assert_eq!(Color::for_seat(SeatId::new(0)), Some(Color::Red));
        assert_eq!(Color::for_seat(SeatId::new(3)), Some(Color::Blue));
        assert_eq!(Color::for_seat(SeatId::new(4)), None);
    }

    #[test]
    fn test_entry_squares_are_distinct_quarters() {
        let entries: Vec<_> = Color::ALL.iter().map(|c| c.entry_square()).collect();
        assert_eq!(entries, vec![0, 13, 26, 39]);
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&Color::Green).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Green);
    }
}
