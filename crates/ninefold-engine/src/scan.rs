//! Constraint scanning: which digits remain legal for a cell.
//!
//! A scan walks the cell's full row, full column, and containing 3×3 block,
//! striking every placed digit from the full universe. The scan is
//! self-inclusive: the target cell's own value participates in its row walk,
//! so a filled cell never reports its own digit as open. Under that
//! convention a complete, consistent board has an empty candidate set at
//! every cell, which is exactly what [`is_saturated`] checks.

use ninefold_core::{Block, DigitSet, Grid};

/// Returns the digits not yet excluded for the cell at `(row, col)` by its
/// row, column, or block.
///
/// Pure function of the grid state; recomputed on demand, never cached. An
/// empty result means no legal assignment exists for the cell as the board
/// stands.
///
/// # Panics
///
/// Panics if `row` or `col` is not in the range 0-8.
#[must_use]
pub(crate) fn candidates(grid: &Grid, row: usize, col: usize) -> DigitSet {
    assert!(row < 9 && col < 9);
    let mut open = DigitSet::FULL;
    for c in 0..9 {
        strike(&mut open, grid[(row, c)]);
    }
    for r in 0..9 {
        strike(&mut open, grid[(r, col)]);
    }
    for (r, c) in Block::containing(row, col).cells() {
        strike(&mut open, grid[(r, c)]);
    }
    open
}

fn strike(open: &mut DigitSet, value: u8) {
    if value != 0 {
        open.remove(value);
    }
}

/// Returns `true` if the cell at `(row, col)` still has at least one
/// candidate digit.
#[must_use]
pub(crate) fn has_candidates(grid: &Grid, row: usize, col: usize) -> bool {
    !candidates(grid, row, col).is_empty()
}

/// Returns `true` if no cell on the board has any candidate digit left.
///
/// With the self-inclusive scan this holds for every complete consistent
/// board, and more generally whenever no further assignment is possible
/// anywhere.
#[must_use]
pub(crate) fn is_saturated(grid: &Grid) -> bool {
    (0..9).all(|row| (0..9).all(|col| candidates(grid, row, col).is_empty()))
}
