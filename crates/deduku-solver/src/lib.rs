//! Constraint-propagation strategies for deduku grids.
//!
//! A strategy takes a grid by reference and produces a [`Pass`]: the values
//! it committed, the positions still empty, and a new grid chained back to
//! the input. Looping a strategy until it stops committing is the whole
//! solving protocol.
//!
//! # Overview
//!
//! - [`strategy`]: The closed [`Strategy`] enum and the pass implementations
//! - [`outcome`]: The [`Pass`] and [`Placement`] result types
//! - [`error`]: The [`SolverError`] failure modes
//! - [`testing`]: A fluent harness for asserting on strategy behavior
//!
//! # Examples
//!
//! ```
//! use deduku_core::Grid;
//! use deduku_solver::Strategy;
//!
//! let mut grid = Grid::from_serialized(
//!     "..1.948.7..2..........8.9.1.45..12..6.72..3....98354.....9.6...96..5378.12347865.",
//! )?;
//! loop {
//!     let pass = Strategy::NakedSingleton.solve(&grid)?;
//!     let progress = !pass.solved.is_empty();
//!     grid = pass.grid;
//!     if !progress {
//!         break;
//!     }
//! }
//! assert!(grid.remaining().is_empty());
//! assert_eq!(grid.chain_length(), 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod outcome;
pub mod strategy;
pub mod testing;

// Re-export commonly used types
pub use self::{
    error::SolverError,
    outcome::{Pass, Placement},
    strategy::Strategy,
};
