//! Size-by-size growth of canonical shape generations
//!
//! Starting from the monomino, each transition takes every shape of the
//! current size, extends it by one frontier cell in all possible ways,
//! canonicalizes each extension, and collects the results into the next
//! generation's set. Set insertion is the deduplication step: many distinct
//! (shape, cell) pairs collapse onto one canonical representative. Only the
//! current generation is held; its predecessor is dropped on transition.

use crate::algorithm::occupancy::frontier_cells;
use crate::algorithm::symmetry::{Canonicalizer, SymmetryMode};
use crate::geometry::shape::Shape;
use crate::io::configuration::MAX_TARGET_SIZE;
use crate::io::error::{EnumerationError, Result};
use std::collections::HashSet;
use std::collections::hash_set;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Parameters fixed for a whole enumeration run
#[derive(Clone, Copy, Debug)]
pub struct GrowthConfig {
    /// Number of cells in the enumerated shapes
    pub target_size: usize,
    /// Symmetry group under which shapes are deduplicated
    pub mode: SymmetryMode,
}

/// Live counters exposed while a run is in progress
///
/// The engine updates these on every extension with no throttling of its
/// own; display cadence belongs to whoever polls. Within a transition the
/// values only increase, so a mid-transition reader sees a consistent lower
/// bound, never a final figure.
#[derive(Debug, Default)]
pub struct ProgressCounters {
    current_size: AtomicUsize,
    canonical_count: AtomicUsize,
    raw_extensions: AtomicUsize,
}

impl ProgressCounters {
    fn begin_size(&self, size: usize) {
        self.current_size.store(size, Ordering::Relaxed);
        self.canonical_count.store(0, Ordering::Relaxed);
    }

    fn record_extension(&self) {
        self.raw_extensions.fetch_add(1, Ordering::Relaxed);
    }

    fn record_canonical(&self) {
        self.canonical_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time view of the counters for display
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current_size: self.current_size.load(Ordering::Relaxed),
            canonical_count: self.canonical_count.load(Ordering::Relaxed),
            raw_extensions: self.raw_extensions.load(Ordering::Relaxed),
        }
    }
}

/// Counter values captured by one poll
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Size currently being grown into; zero before the first transition
    pub current_size: usize,
    /// Canonical shapes accumulated so far at that size
    pub canonical_count: usize,
    /// Raw extensions processed since the run started
    pub raw_extensions: usize,
}

/// A completed set of canonical shapes of one size
#[derive(Clone, Debug)]
pub struct Generation {
    size: usize,
    shapes: HashSet<Shape>,
}

impl Generation {
    // The size-1 generation: exactly the monomino
    fn seed() -> Self {
        let mut shapes = HashSet::with_capacity(1);
        shapes.insert(Shape::monomino());
        Self { size: 1, shapes }
    }

    /// Cell count of every shape in this generation
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of canonical shapes
    pub fn count(&self) -> usize {
        self.shapes.len()
    }

    /// Membership test for a canonical shape
    pub fn contains(&self, shape: &Shape) -> bool {
        self.shapes.contains(shape)
    }

    /// Iterate the shapes in arbitrary order
    pub fn iter(&self) -> hash_set::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Consume the generation into a deterministically ordered listing
    pub fn into_sorted_shapes(self) -> Vec<Shape> {
        let mut shapes: Vec<Shape> = self.shapes.into_iter().collect();
        shapes.sort_unstable();
        shapes
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Shape;
    type IntoIter = hash_set::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Breadth-first enumeration engine growing one generation per step
pub struct GrowthEngine {
    config: GrowthConfig,
    canonicalizer: Canonicalizer,
    generation: Generation,
    counters: Arc<ProgressCounters>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl GrowthEngine {
    /// Create an engine positioned at the size-1 generation
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::InvalidSize`] when the target size is
    /// zero or beyond [`MAX_TARGET_SIZE`]; no work happens in that case.
    pub fn new(config: GrowthConfig) -> Result<Self> {
        if config.target_size < 1 || config.target_size > MAX_TARGET_SIZE {
            return Err(EnumerationError::InvalidSize {
                size: config.target_size,
                max: MAX_TARGET_SIZE,
            });
        }
        Ok(Self {
            config,
            canonicalizer: Canonicalizer::new(config.mode),
            generation: Generation::seed(),
            counters: Arc::new(ProgressCounters::default()),
            cancel_flag: None,
        })
    }

    /// Shared handle to the live progress counters
    pub fn counters(&self) -> Arc<ProgressCounters> {
        Arc::clone(&self.counters)
    }

    /// Install a flag checked between generation transitions
    ///
    /// A set flag stops the run before the next transition begins. A
    /// transition already underway always completes: a partially grown
    /// generation is not a valid canonical set, so there is no cheaper
    /// stopping point.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel_flag = Some(flag);
    }

    /// Configured run parameters
    pub const fn config(&self) -> GrowthConfig {
        self.config
    }

    /// Size of the generation currently held
    pub const fn current_size(&self) -> usize {
        self.generation.size()
    }

    /// Grow the current generation by one cell
    ///
    /// Returns `false` once the target size has been reached, leaving the
    /// final generation in place.
    pub fn advance(&mut self) -> bool {
        if self.generation.size() >= self.config.target_size {
            return false;
        }
        let next_size = self.generation.size() + 1;
        self.counters.begin_size(next_size);

        // Each generation runs a few times larger than its predecessor
        let mut next = HashSet::with_capacity(self.generation.count() * 3);
        for shape in &self.generation {
            for candidate in frontier_cells(shape) {
                self.counters.record_extension();
                let canonical = self.canonicalizer.canonical(&shape.with_cell(candidate));
                if next.insert(canonical) {
                    self.counters.record_canonical();
                }
            }
        }

        self.generation = Generation {
            size: next_size,
            shapes: next,
        };
        self.generation.size() < self.config.target_size
    }

    /// Run transitions until the target size is reached
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::Cancelled`] when the cancellation flag is
    /// observed set at a generation boundary; the error names the last size
    /// whose generation completed.
    pub fn run(mut self) -> Result<Generation> {
        loop {
            if self.is_cancelled() {
                return Err(EnumerationError::Cancelled {
                    completed_size: self.generation.size(),
                });
            }
            if !self.advance() {
                return Ok(self.generation);
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
