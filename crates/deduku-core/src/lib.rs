//! Core data structures for deduku puzzle grids.
//!
//! This crate provides the board model shared by every deduku component:
//! typed digits and positions, per-cell candidate sets, and the [`Grid`]
//! itself with its commit-time elimination cascade and immutable history
//! chain.
//!
//! # Overview
//!
//! 1. **Scalar types**
//!    - [`digit`]: Type-safe representation of the digits 1-9
//!    - [`digit_set`]: Bit-packed sets of digits, used for candidate tracking
//!    - [`position`]: Row/column coordinates and the letter-digit cell names
//!    - [`unit`]: The 27 constraint groups (rows, columns, and boxes)
//!
//! 2. **Board types**
//!    - [`cell`]: A single cell holding either a value or a candidate set
//!    - [`grid`]: The 81-cell board, puzzle-string codec, and history chain
//!
//! 3. **Errors**
//!    - [`error`]: Commit rejections and puzzle-string parse failures
//!
//! # Examples
//!
//! ```
//! use deduku_core::{Digit, DigitSet, Grid};
//!
//! let mut grid = Grid::new();
//! grid.set("E5", Digit::D5)?;
//!
//! // The commit cascades into every peer's candidate set
//! let candidates: DigitSet = grid.candidates("E6");
//! assert!(!candidates.contains(Digit::D5));
//! # Ok::<(), deduku_core::GridError>(())
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod position;
pub mod unit;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    error::{GridError, ParseGridError},
    grid::Grid,
    position::Position,
    unit::Unit,
};
