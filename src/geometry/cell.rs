//! Integer grid coordinates and the transforms applied during canonicalization

use std::fmt;

/// Offsets of the four edge-adjacent neighbours (no diagonals)
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A single grid cell identified by its (x, y) coordinates
///
/// Ordering is lexicographic by x then y, which fixes the canonical cell
/// sequence inside a [`Shape`](crate::geometry::shape::Shape).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Cell {
    /// Create a cell at the given coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell translated by the given deltas
    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Cell after a 90 degree rotation about the origin: (x, y) to (y, -x)
    #[must_use]
    pub const fn rotated90(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Cell after a horizontal reflection: (x, y) to (-x, y)
    #[must_use]
    pub const fn reflected(self) -> Self {
        Self::new(-self.x, self.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
