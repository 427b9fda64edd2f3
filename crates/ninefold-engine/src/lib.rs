//! Randomized-backtracking generation, carving, and solving of sudoku
//! boards.
//!
//! The crate is organized around one facade, [`SudokuEngine`], which owns a
//! [`Grid`](ninefold_core::Grid) and a single seeded PRNG and exposes the
//! four operations of the system:
//!
//! - **generate** — fill the board into a complete random solution by
//!   depth-first search with shuffled candidate order
//! - **carve** — blank a sampled number of cells to turn a solution into a
//!   puzzle (no uniqueness guarantee)
//! - **solve** — run the same backtracking search with non-zero cells fixed
//!   as clues, retried up to five times
//! - **validate** — query per-cell candidate sets and board saturation
//!
//! Everything is single-threaded and synchronous; operations run to
//! completion on the caller's thread. Reproducibility comes from
//! [`PuzzleSeed`]: equal seeds give equal boards.
//!
//! # Examples
//!
//! ```
//! use ninefold_engine::{PuzzleSeed, SudokuEngine};
//!
//! let seed: PuzzleSeed =
//!     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
//! let mut engine = SudokuEngine::with_seed(seed);
//!
//! assert!(engine.generate());
//! let blanked = engine.carve(40, 56);
//! println!("{} cells blanked:\n{}", blanked, engine.grid());
//!
//! assert!(engine.solve());
//! # Ok::<(), ninefold_engine::ParseSeedError>(())
//! ```

mod backtrack;
mod carve;
mod engine;
mod scan;
mod seed;

pub use self::{
    engine::SudokuEngine,
    seed::{ParseSeedError, PuzzleSeed},
};
