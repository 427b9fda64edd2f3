//! Carving blanks out of a complete solution to make a puzzle.

use std::collections::HashSet;

use ninefold_core::Grid;
use rand::RngExt as _;
use rand_pcg::Pcg64Mcg;

/// Clears a pseudo-random selection of cells, sampling the target count
/// uniformly from `[lower, upper)`.
///
/// Coordinates are drawn uniformly; a coordinate drawn twice consumes its
/// iteration without clearing anything, so the returned sampled count is an
/// upper bound on the cells actually emptied. The carved puzzle is not
/// checked for solution uniqueness.
///
/// # Panics
///
/// Panics if `lower >= upper`.
pub(crate) fn carve(grid: &mut Grid, rng: &mut Pcg64Mcg, lower: usize, upper: usize) -> usize {
    assert!(lower < upper, "carve range must be non-empty");
    let target = rng.random_range(lower..upper);
    let mut visited = HashSet::new();
    for _ in 0..target {
        let row = rng.random_range(0..9);
        let col = rng.random_range(0..9);
        if !visited.insert((row, col)) {
            continue;
        }
        grid[(row, col)] = 0;
    }
    target
}
