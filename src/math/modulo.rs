//! True modulo arithmetic and wrapping slice access
//!
//! Rust's `%` truncates toward zero, so `-1 % 3 == -1`. Wraparound addressing
//! needs the result folded back into `[0, count)` instead.

use num_traits::PrimInt;

/// Modulo whose result always lies in `[0, count)` for a positive `count`
///
/// # Panics
///
/// Panics if `count` is zero
#[inline]
pub fn true_mod<T: PrimInt>(value: T, count: T) -> T {
    let simple = value % count;
    if simple < T::zero() {
        simple + count
    } else {
        simple
    }
}

/// Access into a slice with an index wrapped into its bounds
pub trait WrappingIndex<T> {
    /// Element at `index` taken modulo the slice length
    ///
    /// # Panics
    ///
    /// Panics if the slice is empty
    fn wrapping(&self, index: i64) -> &T;

    /// Mutable element at `index` taken modulo the slice length
    ///
    /// # Panics
    ///
    /// Panics if the slice is empty
    fn wrapping_mut(&mut self, index: i64) -> &mut T;
}

// The wrapped index is always below a non-zero length
#[allow(clippy::indexing_slicing)]
impl<T> WrappingIndex<T> for [T] {
    fn wrapping(&self, index: i64) -> &T {
        assert!(!self.is_empty(), "wrapping access into an empty slice");
        let wrapped = true_mod(index, self.len() as i64) as usize;
        &self[wrapped]
    }

    fn wrapping_mut(&mut self, index: i64) -> &mut T {
        assert!(!self.is_empty(), "wrapping access into an empty slice");
        let wrapped = true_mod(index, self.len() as i64) as usize;
        &mut self[wrapped]
    }
}
