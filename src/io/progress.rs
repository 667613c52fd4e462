//! Progress display for a single enumeration run
//!
//! The bar tracks the size currently being grown against the target; the
//! message carries the live canonical and raw extension counts. All cadence
//! lives in the caller's poll loop, the engine never throttles.

use crate::algorithm::growth::ProgressSnapshot;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GROWTH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Size: [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Drives a progress bar from polled engine counters
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar spanning sizes 1 through the target
    pub fn new(target_size: usize) -> Self {
        let bar = ProgressBar::new(target_size as u64);
        bar.set_style(GROWTH_STYLE.clone());
        bar.set_position(1);
        Self { bar }
    }

    /// Refresh the display from a counter snapshot
    pub fn update(&self, snapshot: ProgressSnapshot) {
        if snapshot.current_size > 0 {
            self.bar.set_position(snapshot.current_size as u64);
        }
        self.bar.set_message(format!(
            "unique: {} | generated: {}",
            snapshot.canonical_count, snapshot.raw_extensions
        ));
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
