//! Input/output operations and error handling
//!
//! Everything the engine's consumers need: the command-line surface,
//! progress display, ASCII and PNG rendering, reference-count validation,
//! and the shared error type.

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime defaults and limits
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Progress bar management
pub mod progress;
/// ASCII rendering and listing assembly
pub mod render;
/// PNG contact-sheet export
pub mod sheet;
/// Known-count reference tables
pub mod validation;
