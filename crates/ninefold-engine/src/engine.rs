//! The engine facade: one grid, one random stream, all operations.

use std::time::Instant;

use ninefold_core::{DigitSet, Grid, GridError};
use rand_pcg::Pcg64Mcg;

use crate::{backtrack, carve, scan, seed::PuzzleSeed};

/// Number of full randomized solve attempts before giving up.
///
/// The retry cap is an empirical safety margin around the randomized
/// candidate order, not a completeness argument.
const SOLVE_ATTEMPTS: u32 = 5;

/// A sudoku engine owning a 9×9 board and a single pseudo-random source.
///
/// The engine runs every operation to completion on the caller's thread;
/// there is no background work and no cancellation. One grid and one PRNG
/// belong exclusively to one engine instance, and `&mut self` receivers make
/// concurrent mutation from multiple threads unrepresentable without
/// external serialization.
///
/// # Examples
///
/// ```
/// use ninefold_engine::SudokuEngine;
///
/// let mut engine = SudokuEngine::new();
/// assert!(engine.generate());
/// assert!(engine.grid().is_complete());
///
/// let blanked = engine.carve(40, 56);
/// assert!(blanked >= 40);
/// assert!(engine.solve());
/// ```
#[derive(Debug, Clone)]
pub struct SudokuEngine {
    grid: Grid,
    seed: PuzzleSeed,
    rng: Pcg64Mcg,
}

impl SudokuEngine {
    /// Creates an engine with an empty board and a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(PuzzleSeed::random())
    }

    /// Creates an engine with an empty board and the given seed.
    ///
    /// Two engines built from equal seeds walk identical generate, carve,
    /// and solve streams.
    #[must_use]
    pub fn with_seed(seed: PuzzleSeed) -> Self {
        Self {
            grid: Grid::new(),
            rng: seed.rng(),
            seed,
        }
    }

    /// Creates an engine around an already-validated grid, with a random
    /// seed.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        let mut engine = Self::new();
        engine.grid = grid;
        engine
    }

    /// Creates an engine from externally supplied rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Dimension`] unless the input is exactly 9×9,
    /// and [`GridError::ValueRange`] if any entry exceeds 9.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[u8]>,
    {
        Ok(Self::from_grid(Grid::from_rows(rows)?))
    }

    /// Returns the seed this engine's random stream was derived from.
    #[must_use]
    pub const fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the current board.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replaces the board contents.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Dimension`] unless the input is exactly 9×9,
    /// and [`GridError::ValueRange`] if any entry exceeds 9.
    pub fn set_board<R>(&mut self, rows: &[R]) -> Result<(), GridError>
    where
        R: AsRef<[u8]>,
    {
        self.grid = Grid::from_rows(rows)?;
        Ok(())
    }

    /// Fills the board into a complete random solution.
    ///
    /// Cells are assigned in place in row-major order without clearing
    /// first, so pre-existing digits steer the search; on the usual empty
    /// board the search always succeeds. Returns `false` when the search
    /// exhausts instead, which happens in particular on a board that is
    /// already saturated. Elapsed time is reported through [`log`] as an
    /// informational side channel.
    pub fn generate(&mut self) -> bool {
        let start = Instant::now();
        let filled = backtrack::fill(&mut self.grid, &mut self.rng);
        if filled {
            log::info!(
                "board generated in {:.3}s",
                start.elapsed().as_secs_f64()
            );
        } else {
            log::warn!("board generation exhausted the search space");
        }
        filled
    }

    /// Clears a pseudo-random selection of cells, sampling the target count
    /// uniformly from `[lower, upper)`, and returns the sampled count.
    ///
    /// A coordinate drawn twice consumes its iteration without clearing
    /// anything, so the returned count is an upper bound on the cells
    /// actually emptied. The resulting puzzle is not checked for solution
    /// uniqueness; that is a deliberate simplification.
    ///
    /// # Panics
    ///
    /// Panics if `lower >= upper`.
    pub fn carve(&mut self, lower: usize, upper: usize) -> usize {
        carve::carve(&mut self.grid, &mut self.rng, lower, upper)
    }

    /// Attempts to solve the board in place, treating non-zero cells as
    /// fixed clues.
    ///
    /// Runs up to five full randomized searches, short-circuiting on the
    /// first success. On failure a diagnostic is
    /// logged and the grid is left as the last attempt left it; no
    /// restoration of the pre-solve contents is guaranteed.
    pub fn solve(&mut self) -> bool {
        let start = Instant::now();
        for attempt in 1..=SOLVE_ATTEMPTS {
            if backtrack::solve(&mut self.grid, &mut self.rng) {
                log::info!(
                    "puzzle solved in {:.3}s (attempt {attempt} of {SOLVE_ATTEMPTS})",
                    start.elapsed().as_secs_f64()
                );
                return true;
            }
        }
        log::warn!("puzzle not solved after {SOLVE_ATTEMPTS} attempts");
        false
    }

    /// Returns the candidate digits for the cell at `(row, col)`.
    ///
    /// The scan is self-inclusive: a filled cell's own value is struck from
    /// its own candidate set, so cells of a complete board report no
    /// candidates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn candidates(&self, row: usize, col: usize) -> DigitSet {
        scan::candidates(&self.grid, row, col)
    }

    /// Returns `true` if the cell at `(row, col)` still has at least one
    /// candidate digit. Read-only; idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn has_candidates(&self, row: usize, col: usize) -> bool {
        scan::has_candidates(&self.grid, row, col)
    }

    /// Returns `true` if no cell on the board has any candidate digit left,
    /// the state every complete consistent board is in under the
    /// self-inclusive scan. Read-only; idempotent.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        scan::is_saturated(&self.grid)
    }
}

impl Default for SudokuEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::{Block, GridError};

    use super::*;

    const SEED_A: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
    const SEED_B: &str = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

    const KNOWN_PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const KNOWN_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    fn seeded(seed: &str) -> SudokuEngine {
        SudokuEngine::with_seed(seed.parse().unwrap())
    }

    fn assert_valid_solution(grid: &Grid) {
        assert!(grid.is_complete());
        for i in 0..9 {
            let row: DigitSet = (0..9).map(|c| grid[(i, c)]).collect();
            let col: DigitSet = (0..9).map(|r| grid[(r, i)]).collect();
            assert_eq!(row, DigitSet::FULL, "row {i} is not a permutation of 1-9");
            assert_eq!(col, DigitSet::FULL, "column {i} is not a permutation of 1-9");
        }
        for index in 0..9 {
            let block: DigitSet = Block::containing(index / 3 * 3, index % 3 * 3)
                .cells()
                .map(|(r, c)| grid[(r, c)])
                .collect();
            assert_eq!(block, DigitSet::FULL, "block {index} is not a permutation of 1-9");
        }
    }

    #[test]
    fn test_generate_produces_valid_solution() {
        let mut engine = seeded(SEED_A);
        assert!(engine.generate());
        assert_valid_solution(engine.grid());
    }

    #[test]
    fn test_generate_is_reproducible_per_seed() {
        let mut a = seeded(SEED_A);
        let mut b = seeded(SEED_A);
        let mut c = seeded(SEED_B);
        assert!(a.generate());
        assert!(b.generate());
        assert!(c.generate());
        assert_eq!(a.grid(), b.grid());
        assert_ne!(a.grid(), c.grid());
    }

    #[test]
    fn test_generate_fails_on_saturated_board() {
        let mut engine = seeded(SEED_A);
        assert!(engine.generate());
        let solution = engine.grid().clone();

        assert!(!engine.generate());
        assert_eq!(engine.grid(), &solution);
    }

    #[test]
    fn test_solve_right_after_generate_changes_nothing() {
        let mut engine = seeded(SEED_A);
        assert!(engine.generate());
        let solution = engine.grid().clone();

        assert!(engine.solve());
        assert_eq!(engine.grid(), &solution);
    }

    #[test]
    fn test_complete_board_is_saturated() {
        let mut engine = seeded(SEED_A);
        assert!(engine.generate());

        for row in 0..9 {
            for col in 0..9 {
                assert!(!engine.has_candidates(row, col));
                assert!(engine.candidates(row, col).is_empty());
            }
        }
        assert!(engine.is_saturated());
        // Read-only queries are idempotent.
        assert!(engine.is_saturated());
    }

    #[test]
    fn test_carve_reports_sampled_count() {
        let mut engine = seeded(SEED_A);
        assert!(engine.generate());

        let sampled = engine.carve(10, 11);
        assert_eq!(sampled, 10);
        assert!(engine.grid().empty_count() <= 10);
        assert!(!engine.is_saturated());
    }

    #[test]
    fn test_carved_puzzle_solves_to_valid_solution() {
        let mut engine = seeded(SEED_B);
        assert!(engine.generate());
        engine.carve(40, 56);
        let puzzle = engine.grid().clone();

        assert!(engine.solve());
        assert_valid_solution(engine.grid());
        // Clues survive solving untouched.
        for row in 0..9 {
            for col in 0..9 {
                if puzzle[(row, col)] != 0 {
                    assert_eq!(engine.grid()[(row, col)], puzzle[(row, col)]);
                }
            }
        }
    }

    #[test]
    fn test_solve_finds_the_known_unique_solution() {
        let puzzle: Grid = KNOWN_PUZZLE.parse().unwrap();
        let solution: Grid = KNOWN_SOLUTION.parse().unwrap();

        let mut engine = SudokuEngine::from_grid(puzzle);
        assert!(engine.solve());
        assert_eq!(engine.grid(), &solution);
    }

    #[test]
    fn test_solve_reports_failure_on_contradiction() {
        // (0, 8) has no candidates: its row uses 1-8 and its column uses 9.
        let mut rows = [[0u8; 9]; 9];
        rows[0] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        rows[5][8] = 9;

        let mut engine = SudokuEngine::from_rows(&rows).unwrap();
        assert!(!engine.solve());
    }

    #[test]
    fn test_from_rows_rejects_bad_dimensions() {
        let rows = vec![vec![0u8; 9]; 8];
        assert_eq!(
            SudokuEngine::from_rows(&rows).unwrap_err(),
            GridError::Dimension { rows: 8, cols: 9 }
        );
    }

    #[test]
    fn test_set_board_replaces_contents() {
        let mut engine = seeded(SEED_A);
        assert!(engine.generate());

        let rows = [[0u8; 9]; 9];
        engine.set_board(&rows).unwrap();
        assert_eq!(engine.grid().empty_count(), 81);

        let short = vec![vec![0u8; 9]; 8];
        assert_eq!(
            engine.set_board(&short).unwrap_err(),
            GridError::Dimension { rows: 8, cols: 9 }
        );
    }
}
