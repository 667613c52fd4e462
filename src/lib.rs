//! Polyomino enumeration by incremental growth and canonical-form deduplication
//!
//! Shapes of size k+1 are produced by extending every canonical shape of size k
//! through its frontier cells; each extension is mapped to the minimal
//! representative of its symmetry orbit and collected into a set, which is the
//! deduplication step. Repeating from the single-cell shape up to the target
//! size yields all distinct polyominoes for the chosen symmetry mode
//! (free, one-sided, or fixed).

#![forbid(unsafe_code)]

/// Canonical-form selection and the size-by-size growth engine
pub mod algorithm;
/// Cell coordinates and normalized shapes
pub mod geometry;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{EnumerationError, Result};
