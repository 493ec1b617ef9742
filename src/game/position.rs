//! Board coordinates and movement directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four directions an actor can step in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the top row (increasing y).
    Up,
    /// Towards the bottom row (decreasing y).
    Down,
    /// Towards column 0 (decreasing x).
    Left,
    /// Away from column 0 (increasing x).
    Right,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Whether this is a horizontal (left/right) direction.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Offset applied to a position when stepping in this direction.
    #[must_use]
    const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Parse from a direction name or its initial (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

/// A cell coordinate on the board. Row 0 is the bottom row.
///
/// Positions carry no knowledge of the board size, so they may point
/// outside it; the board decides what lives there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row, counted from the bottom).
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one cell away in `direction`.
    ///
    /// Coordinates wrap at the `i32` limits; board cells never get close.
    #[must_use]
    #[inline]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The position directly below this one.
    #[must_use]
    #[inline]
    pub const fn below(self) -> Self {
        self.step(Direction::Down)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_offsets() {
        let p = Position::new(3, 3);
        assert_eq!(p.step(Direction::Up), Position::new(3, 4));
        assert_eq!(p.step(Direction::Down), Position::new(3, 2));
        assert_eq!(p.step(Direction::Left), Position::new(2, 3));
        assert_eq!(p.step(Direction::Right), Position::new(4, 3));
        assert_eq!(p.below(), Position::new(3, 2));
    }

    #[test]
    fn test_step_leaves_origin_untouched() {
        let p = Position::new(0, 0);
        let q = p.step(Direction::Left).step(Direction::Down);
        assert_eq!(p, Position::new(0, 0));
        assert_eq!(q, Position::new(-1, -1));
    }

    #[test]
    fn test_step_at_coordinate_limits_wraps() {
        let p = Position::new(i32::MAX, i32::MIN);
        assert_eq!(p.step(Direction::Right), Position::new(i32::MIN, i32::MIN));
        assert_eq!(p.step(Direction::Down), Position::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("r".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("Up".parse::<Direction>(), Ok(Direction::Up));
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_display_roundtrip() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }
}
