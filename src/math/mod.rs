//! Integer arithmetic helpers shared by the spatial types

/// True modulo and wrapping index access
pub mod modulo;

pub use modulo::{WrappingIndex, true_mod};
