//! Board coordinates and scan axes.
//!
//! Positions are `(x, y)` cell coordinates with `x` growing rightwards and
//! `y` growing downwards. They are signed so that walking off the edge of the
//! board while scanning a word never underflows.

use serde::{Deserialize, Serialize};

/// A cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The next cell along `axis` (right or down).
    #[must_use]
    pub const fn forward(self, axis: Axis) -> Self {
        let (dx, dy) = axis.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The previous cell along `axis` (left or up).
    #[must_use]
    pub const fn backward(self, axis: Axis) -> Self {
        let (dx, dy) = axis.delta();
        Self::new(self.x - dx, self.y - dy)
    }

    /// The four orthogonal neighbours.
    pub fn neighbors(self) -> [Position; 4] {
        [
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
        ]
    }

    /// Check whether the position lies on a square board of `size` cells per side.
    #[must_use]
    pub fn within(self, size: u32) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// One of the two principal scan directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Unit step `(dx, dy)` along the axis.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
        }
    }
}
