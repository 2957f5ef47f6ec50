//! The grid-solving strategies.
//!
//! Every strategy follows the same pass protocol: [`Strategy::solve`] chains
//! a working copy of the caller's grid, applies every deduction it can find
//! in one sweep, and reports the outcome as a [`Pass`]. The caller's grid is
//! never modified; feeding each pass's grid into the next call grows the
//! history chain one link at a time.

use std::fmt::{self, Display};

use deduku_core::Grid;

use crate::{Pass, SolverError};

mod box_line_removal;
mod naked_singleton;
mod row_col_box_singleton;

/// A single constraint-propagation strategy.
///
/// The set of strategies is closed: dispatch is a plain `match` on the
/// variant, and callers can enumerate [`Strategy::ALL`] without any
/// registration step.
///
/// # Examples
///
/// ```
/// use deduku_core::Grid;
/// use deduku_solver::Strategy;
///
/// let puzzle = format!(".23456789{}", ".".repeat(72));
/// let grid = Grid::from_serialized(&puzzle)?;
/// let pass = Strategy::NakedSingleton.solve(&grid)?;
///
/// assert_eq!(pass.solved.len(), 1);
/// assert_eq!(pass.solved[0].to_string(), "A1 = 1");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Commits cells whose candidate set holds exactly one digit.
    NakedSingleton,
    /// Commits digits with exactly one holder in a row, column, or box.
    RowColBoxSingleton,
    /// Eliminates candidates along a box's confined line; commits nothing.
    BoxLineRemoval,
}

impl Strategy {
    /// Every strategy, cheapest deduction first.
    pub const ALL: [Self; 3] = [
        Self::NakedSingleton,
        Self::RowColBoxSingleton,
        Self::BoxLineRemoval,
    ];

    /// Returns the strategy's human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NakedSingleton => "naked singleton",
            Self::RowColBoxSingleton => "row-col-box singleton",
            Self::BoxLineRemoval => "box-line removal",
        }
    }

    /// Runs one pass over a chained copy of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] when the pass visits an empty
    /// cell with no remaining candidates.
    pub fn solve(self, grid: &Grid) -> Result<Pass, SolverError> {
        match self {
            Self::NakedSingleton => naked_singleton::solve(grid),
            Self::RowColBoxSingleton => row_col_box_singleton::solve(grid),
            Self::BoxLineRemoval => box_line_removal::solve(grid),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
