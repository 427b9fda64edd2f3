//! Randomized depth-first backtracking over board cells.
//!
//! Both filling an empty board and solving a clued puzzle run the same
//! search: visit cells in row-major order from (0, 0), compute the open
//! digits for the current cell, try them in uniformly shuffled order, and
//! unwind on dead ends. Recursion depth is bounded by the 81 cells.

use ninefold_core::Grid;
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64Mcg;
use tinyvec::ArrayVec;

use crate::scan;

/// Row-major successor of `(row, col)`, or `None` past the last cell.
fn next_cell(row: usize, col: usize) -> Option<(usize, usize)> {
    if col < 8 {
        Some((row, col + 1))
    } else if row < 8 {
        Some((row + 1, 0))
    } else {
        None
    }
}

fn shuffled_candidates(
    grid: &Grid,
    rng: &mut Pcg64Mcg,
    row: usize,
    col: usize,
) -> ArrayVec<[u8; 9]> {
    let mut order: ArrayVec<[u8; 9]> = scan::candidates(grid, row, col).iter().collect();
    order.shuffle(rng);
    order
}

/// Fills the board by assigning every cell in row-major order.
///
/// Pre-existing digits are not cleared first; they constrain the search
/// until the walk overwrites them. Returns `false` when some cell runs out
/// of candidates on every branch, which cannot happen starting from an
/// empty board.
pub(crate) fn fill(grid: &mut Grid, rng: &mut Pcg64Mcg) -> bool {
    fill_from(grid, rng, 0, 0)
}

fn fill_from(grid: &mut Grid, rng: &mut Pcg64Mcg, row: usize, col: usize) -> bool {
    let order = shuffled_candidates(grid, rng, row, col);
    if order.is_empty() {
        return false;
    }
    for digit in order {
        grid[(row, col)] = digit;
        match next_cell(row, col) {
            None => return true,
            Some((next_row, next_col)) => {
                if fill_from(grid, rng, next_row, next_col) {
                    return true;
                }
            }
        }
        grid[(row, col)] = 0;
    }
    false
}

/// Solves the board in place, treating non-zero cells as fixed clues.
///
/// One full randomized search attempt; returns `false` on exhaustion, with
/// every assignment this attempt made already unwound.
pub(crate) fn solve(grid: &mut Grid, rng: &mut Pcg64Mcg) -> bool {
    solve_from(grid, rng, 0, 0)
}

fn solve_from(grid: &mut Grid, rng: &mut Pcg64Mcg, row: usize, col: usize) -> bool {
    if grid[(row, col)] != 0 {
        return match next_cell(row, col) {
            None => true,
            Some((next_row, next_col)) => solve_from(grid, rng, next_row, next_col),
        };
    }

    let order = shuffled_candidates(grid, rng, row, col);
    if order.is_empty() {
        return false;
    }
    for digit in order {
        grid[(row, col)] = digit;
        match next_cell(row, col) {
            None => return true,
            Some((next_row, next_col)) => {
                if solve_from(grid, rng, next_row, next_col) {
                    return true;
                }
            }
        }
        grid[(row, col)] = 0;
    }
    false
}
