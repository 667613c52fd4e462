//! Runtime defaults and limits for the enumeration front end

/// Largest target size the engine accepts
///
/// Coordinates fit `i32` far beyond this; the bound tracks the reference
/// table and the memory a full generation of that size would need.
pub const MAX_TARGET_SIZE: usize = 28;

/// Target size used when none is given on the command line
pub const DEFAULT_TARGET_SIZE: usize = 8;

/// Fixed seed for reproducible shape sampling
pub const DEFAULT_SEED: u64 = 42;

/// Most shapes rendered to console or sheet before sampling kicks in
pub const DEFAULT_RENDER_LIMIT: usize = 50;

/// Interval between progress counter polls (milliseconds)
pub const PROGRESS_POLL_INTERVAL_MS: u64 = 50;

/// Pixel size of one grid cell in the PNG sheet
pub const SHEET_CELL_PIXELS: u32 = 8;

/// Pixel gap between shape slots in the PNG sheet
pub const SHEET_SLOT_GAP: u32 = 4;

/// Glyph used for occupied cells in ASCII renderings
pub const FILLED_GLYPH: char = '#';
