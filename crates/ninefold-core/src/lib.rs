//! Core data structures for the Ninefold sudoku engine.
//!
//! This crate holds the leaf types the engine builds on:
//!
//! - [`grid`]: the 9×9 board of cell values 0-9, with boundary validation,
//!   text parsing, and decorative rendering
//! - [`digit_set`]: the bitset of digits 1-9 used for candidate computation
//! - [`block`]: addressing for the nine 3×3 sub-grids
//! - [`error`]: the error taxonomy raised at the validation boundary
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Block, DigitSet, Grid};
//!
//! let mut grid = Grid::new();
//! grid.set(0, 0, 5)?;
//!
//! // Candidate computation starts from the full digit universe
//! let mut open = DigitSet::FULL;
//! for (row, col) in Block::containing(0, 0).cells() {
//!     let value = grid[(row, col)];
//!     if value != 0 {
//!         open.remove(value);
//!     }
//! }
//! assert!(!open.contains(5));
//! # Ok::<(), ninefold_core::GridError>(())
//! ```

pub mod block;
pub mod digit_set;
pub mod error;
pub mod grid;

pub use self::{
    block::Block,
    digit_set::DigitSet,
    error::{GridError, ParseGridError},
    grid::Grid,
};
