//! Input/output operations and error handling

/// Command-line interface
pub mod cli;
/// Compile-time configuration constants
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of boolean grids
pub mod image;
/// Text parsing into grids
pub mod parse;
/// Progress display for batch processing
pub mod progress;
