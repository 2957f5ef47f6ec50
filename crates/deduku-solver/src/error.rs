//! Solver failure modes.

use deduku_core::{GridError, Position};
use derive_more::{Display, Error, From};

/// An error raised while running a strategy pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolverError {
    /// A commit made by the pass was rejected by the grid.
    #[display("{_0}")]
    Grid(#[from] GridError),
    /// The pass visited an empty cell with no remaining candidates, so the
    /// board cannot be completed from its current state.
    #[display("cell {position} has no remaining candidates")]
    Contradiction {
        /// The first exhausted cell in the pass's scan order.
        position: Position,
    },
}
