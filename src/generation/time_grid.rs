//! Regular value grids and sampling without replacement.
//!
//! Work patterns are built by sampling small subsets from regular half-hour
//! grids over the configured start/end/break ranges.

use rand::Rng;
use rand::seq::index;
use rust_decimal::Decimal;

/// Builds the inclusive regular grid `min, min + step, ... <= max`.
///
/// An inverted range yields an empty grid. A non-positive step degenerates to
/// the single value `min` instead of looping.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use timesynth::generation::time_increments;
///
/// let grid = time_increments(Decimal::from(7), Decimal::from(9), Decimal::new(5, 1));
/// assert_eq!(grid.len(), 5); // 7, 7.5, 8, 8.5, 9
/// assert_eq!(grid[0], Decimal::from(7));
/// assert_eq!(grid[4], Decimal::from(9));
/// ```
pub fn time_increments(min: Decimal, max: Decimal, step: Decimal) -> Vec<Decimal> {
    if step <= Decimal::ZERO {
        return if min <= max { vec![min] } else { Vec::new() };
    }
    let mut values = Vec::new();
    let mut value = min;
    while value <= max {
        values.push(value);
        value += step;
    }
    values
}

/// Samples `count` distinct values from `values` without replacement.
///
/// The requested count is clamped into `[1, values.len()]` so the result is
/// never empty for a non-empty input (the work pattern invariant). Sampled
/// values keep the original ordering of `values`, so grid samples come out
/// ascending.
pub fn sample_distinct<T: Clone>(values: &[T], count: usize, rng: &mut impl Rng) -> Vec<T> {
    let amount = count.max(1).min(values.len());
    let mut indices = index::sample(rng, values.len(), amount).into_vec();
    indices.sort_unstable();
    indices.into_iter().map(|i| values[i].clone()).collect()
}
