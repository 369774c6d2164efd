//! Spatial data structures for grid-based reasoning
//!
//! This module contains:
//! - The `Point2` coordinate and displacement type
//! - Axis-aligned directions and direction sets
//! - The dense `Grid` container and its text rendering

/// Cyclic directions and direction sets
pub mod direction;
/// Dense row-major grid container
pub mod grid;
/// Integer 2D points and neighbour offsets
pub mod point;
/// Text rendering of grids
pub mod render;

pub use direction::{Cyclic, Direction, DirectionSet};
pub use grid::{Grid, Positions};
pub use point::Point2;
