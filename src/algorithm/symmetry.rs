//! Symmetry modes and canonical-form selection
//!
//! A shape's canonical form is the lexicographically smallest member of its
//! symmetry orbit. Which transforms generate the orbit depends on the
//! enumeration mode: free collapses rotations and reflections, one-sided
//! collapses rotations only, fixed collapses nothing.

use crate::geometry::shape::Shape;

/// Symmetry group under which two shapes count as the same polyomino
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymmetryMode {
    /// Rotations and reflections are equivalent (orbit of up to 8 variants)
    Free,
    /// Rotations only; mirror images stay distinct (orbit of up to 4)
    OneSided,
    /// Every orientation is its own shape
    Fixed,
}

impl SymmetryMode {
    /// Name used in summaries and listings
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::OneSided => "one-sided",
            Self::Fixed => "fixed",
        }
    }
}

/// Maps shapes to the unique representative of their symmetry class
#[derive(Clone, Copy, Debug)]
pub struct Canonicalizer {
    mode: SymmetryMode,
}

impl Canonicalizer {
    /// Create a canonicalizer for the given mode
    pub const fn new(mode: SymmetryMode) -> Self {
        Self { mode }
    }

    /// The enumeration mode this canonicalizer applies
    pub const fn mode(&self) -> SymmetryMode {
        self.mode
    }

    /// Canonical representative of `shape` under the configured mode
    ///
    /// Pure and idempotent: the representative of a representative is
    /// itself. Fixed mode returns the shape unchanged, since normalization
    /// already makes every distinct cell set its own class.
    #[must_use]
    pub fn canonical(&self, shape: &Shape) -> Shape {
        match self.mode {
            SymmetryMode::Fixed => shape.clone(),
            SymmetryMode::OneSided => min_rotation(shape.clone()),
            SymmetryMode::Free => {
                let direct = min_rotation(shape.clone());
                let mirrored = min_rotation(shape.reflected());
                direct.min(mirrored)
            }
        }
    }
}

// Smallest of the four rotations under the shape total order
fn min_rotation(shape: Shape) -> Shape {
    let quarter = shape.rotated90();
    let half = quarter.rotated90();
    let three_quarter = half.rotated90();
    shape.min(quarter).min(half).min(three_quarter)
}
