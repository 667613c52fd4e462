//! Normalized polyomino shapes with rotation and reflection transforms
//!
//! A shape stores its cells translated so the minimum x and minimum y are both
//! zero, sorted lexicographically and deduplicated. Two shapes covering the
//! same cell set therefore compare equal and hash identically, which is what
//! generation sets rely on for deduplication. Shapes are value objects: every
//! transform derives a new shape and never mutates the receiver.

use crate::geometry::cell::Cell;
use crate::io::error::{EnumerationError, Result};
use std::fmt;

/// A set of grid cells in canonical layout
///
/// The cell sequence is the identity of the shape: equality, ordering, and
/// the hash all derive from it. Connectivity is a property of how the growth
/// engine constructs shapes, not an invariant enforced here.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shape {
    cells: Vec<Cell>,
}

impl Shape {
    /// Build a shape from an arbitrary cell list
    ///
    /// The input is translated so the minimum coordinates are zero, sorted,
    /// and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::EmptyShape`] when `cells` is empty.
    pub fn new(cells: Vec<Cell>) -> Result<Self> {
        if cells.is_empty() {
            return Err(EnumerationError::EmptyShape);
        }
        Ok(Self::from_raw(cells))
    }

    /// The single-cell shape at the origin, seed of every enumeration
    pub fn monomino() -> Self {
        Self {
            cells: vec![Cell::new(0, 0)],
        }
    }

    // Normalize a non-empty cell list: translate to origin, sort, dedup
    fn from_raw(mut cells: Vec<Cell>) -> Self {
        let min_x = cells.iter().map(|cell| cell.x).min().unwrap_or(0);
        let min_y = cells.iter().map(|cell| cell.y).min().unwrap_or(0);
        for cell in &mut cells {
            *cell = cell.translated(-min_x, -min_y);
        }
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
    }

    /// New shape equal to this one plus `cell`, re-normalized
    ///
    /// Callers guarantee `cell` is not already a member; the growth engine
    /// only offers frontier cells, which are disjoint from the shape by
    /// construction.
    #[must_use]
    pub fn with_cell(&self, cell: Cell) -> Self {
        debug_assert!(!self.contains(cell), "cell {cell} is already a member");
        let mut cells = Vec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(cell);
        Self::from_raw(cells)
    }

    /// Shape rotated 90 degrees, re-normalized
    ///
    /// Four successive applications return the original shape.
    #[must_use]
    pub fn rotated90(&self) -> Self {
        Self::from_raw(self.cells.iter().map(|cell| cell.rotated90()).collect())
    }

    /// Shape reflected horizontally, re-normalized
    #[must_use]
    pub fn reflected(&self) -> Self {
        Self::from_raw(self.cells.iter().map(|cell| cell.reflected()).collect())
    }

    /// Cells in canonical sorted order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the shape has no cells; never true for a constructed shape
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Membership test against the sorted cell sequence
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Bounding box extent as (width, height)
    ///
    /// Normalization pins the minimum coordinates at zero, so the extent is
    /// one past the maximum coordinate on each axis.
    pub fn extent(&self) -> (usize, usize) {
        let max_x = self.cells.iter().map(|cell| cell.x).max().unwrap_or(0);
        let max_y = self.cells.iter().map(|cell| cell.y).max().unwrap_or(0);
        ((max_x + 1) as usize, (max_y + 1) as usize)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({} cells)", self.len())
    }
}
