//! Command-line interface driving enumeration, display, and export

use crate::algorithm::growth::{Generation, GrowthConfig, GrowthEngine, ProgressCounters};
use crate::algorithm::symmetry::SymmetryMode;
use crate::geometry::shape::Shape;
use crate::io::configuration::{
    DEFAULT_RENDER_LIMIT, DEFAULT_SEED, DEFAULT_TARGET_SIZE, PROGRESS_POLL_INTERVAL_MS,
};
use crate::io::error::{EnumerationError, Result};
use crate::io::progress::ProgressManager;
use crate::io::render::{listing_header, render_listing};
use crate::io::sheet::export_sheet;
use crate::io::validation::known_count;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Symmetry mode as accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Rotations and reflections count as the same shape
    Free,
    /// Rotations only; mirror images stay distinct
    OneSided,
    /// No symmetry reduction
    Fixed,
}

impl ModeArg {
    /// Bridge into the engine's symmetry mode
    pub const fn into_mode(self) -> SymmetryMode {
        match self {
            Self::Free => SymmetryMode::Free,
            Self::OneSided => SymmetryMode::OneSided,
            Self::Fixed => SymmetryMode::Fixed,
        }
    }
}

#[derive(Parser)]
#[command(name = "polyform")]
#[command(version, about = "Enumerate polyominoes by canonical-form growth")]
/// Command-line arguments for the enumeration tool
pub struct Cli {
    /// Number of cells in the enumerated shapes
    #[arg(value_name = "SIZE", default_value_t = DEFAULT_TARGET_SIZE)]
    pub size: usize,

    /// Symmetry group under which shapes are deduplicated
    #[arg(short, long, value_enum, default_value = "free")]
    pub mode: ModeArg,

    /// Render shapes to the console
    #[arg(short, long)]
    pub display: bool,

    /// Write the shape listing to a text file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Export the shapes as a PNG contact sheet
    #[arg(short = 'g', long, value_name = "FILE")]
    pub sheet: Option<PathBuf>,

    /// Most shapes rendered before sampling kicks in
    #[arg(short, long, default_value_t = DEFAULT_RENDER_LIMIT)]
    pub limit: usize,

    /// Random seed for sampling oversized result sets
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip the check against known reference counts
    #[arg(long)]
    pub no_validate: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a full enumeration run: engine, progress, display, export
pub struct EnumerationRunner {
    cli: Cli,
}

impl EnumerationRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the run described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target size is out of range, the worker
    /// thread fails, or writing an output file fails.
    pub fn run(&self) -> Result<()> {
        let config = GrowthConfig {
            target_size: self.cli.size,
            mode: self.cli.mode.into_mode(),
        };
        let engine = GrowthEngine::new(config)?;
        let counters = engine.counters();
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(self.cli.size));

        let start = Instant::now();
        let generation = run_with_polling(engine, &counters, progress.as_ref())?;
        let elapsed = start.elapsed();

        self.report(generation, elapsed)
    }

    // Allow print for user-facing result output
    #[allow(clippy::print_stdout)]
    fn report(&self, generation: Generation, elapsed: Duration) -> Result<()> {
        let size = generation.size();
        let mode = self.cli.mode.into_mode();
        let count = generation.count();

        println!(
            "Found {count} {} polyominoes of size {size} in {:.3}s",
            mode.label(),
            elapsed.as_secs_f64()
        );

        let shapes = generation.into_sorted_shapes();
        let header = listing_header(size, mode, count);

        if self.cli.display {
            let selection = self.select_for_display(&shapes);
            if selection.len() < shapes.len() {
                println!(
                    "Rendering a sample of {} of {count} shapes (seed {})",
                    selection.len(),
                    self.cli.seed
                );
            }
            print!("{}", render_listing(&selection, &header));
        }

        if let Some(path) = &self.cli.output {
            let listing = render_listing(&shapes, &header);
            std::fs::write(path, listing).map_err(|source| EnumerationError::FileSystem {
                path: path.clone(),
                operation: "write listing",
                source,
            })?;
            println!("Listing written to {}", path.display());
        }

        if let Some(path) = &self.cli.sheet {
            export_sheet(&shapes, path)?;
            println!("Sheet written to {}", path.display());
        }

        if !self.cli.no_validate {
            match known_count(size, mode) {
                Some(expected) if expected == count as u64 => {
                    println!("Validation passed: matches the known count");
                }
                Some(expected) => {
                    println!("Validation FAILED: expected {expected}, got {count}");
                }
                None => {
                    println!(
                        "No reference count available for size {size} ({})",
                        mode.label()
                    );
                }
            }
        }

        Ok(())
    }

    /// Pick which shapes to render, sampling reproducibly when over the limit
    fn select_for_display(&self, shapes: &[Shape]) -> Vec<Shape> {
        if shapes.len() <= self.cli.limit {
            return shapes.to_vec();
        }
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut indices =
            rand::seq::index::sample(&mut rng, shapes.len(), self.cli.limit).into_vec();
        indices.sort_unstable();
        indices
            .iter()
            .filter_map(|&index| shapes.get(index).cloned())
            .collect()
    }
}

/// Run the engine on a worker thread while polling counters for display
///
/// The engine stays strictly single-threaded; the worker exists so the main
/// thread can read the counters mid-transition and keep the bar live.
fn run_with_polling(
    engine: GrowthEngine,
    counters: &Arc<ProgressCounters>,
    progress: Option<&ProgressManager>,
) -> Result<Generation> {
    std::thread::scope(|scope| -> Result<Generation> {
        let worker = scope.spawn(move || engine.run());

        while !worker.is_finished() {
            if let Some(bar) = progress {
                bar.update(counters.snapshot());
            }
            std::thread::sleep(Duration::from_millis(PROGRESS_POLL_INTERVAL_MS));
        }
        if let Some(bar) = progress {
            bar.finish();
        }

        worker.join().map_err(|payload| EnumerationError::Worker {
            reason: panic_reason(payload.as_ref()),
        })?
    })
}

// Best-effort extraction of a panic payload message
fn panic_reason(payload: &(dyn Any + Send)) -> String {
    payload.downcast_ref::<&str>().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| "enumeration thread panicked".to_owned())
        },
        |msg| (*msg).to_owned(),
    )
}
