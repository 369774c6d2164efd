//! Dense 2D grids, integer points and axis-aligned directions
//!
//! The core is a row-major `Grid` addressed by `Point2` coordinates, with
//! `Direction` steps for movement. Text parsing, PNG rendering and a small
//! batch CLI sit on top in the `io` module.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Integer arithmetic helpers
pub mod math;
/// Grids, points and directions
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Cyclic, Direction, DirectionSet, Grid, Point2};
