//! What a strategy pass reports back.

use deduku_core::{Digit, Grid, Position};
use derive_more::Display;

/// A value committed by a strategy pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{position} = {digit}")]
pub struct Placement {
    /// The cell that was filled.
    pub position: Position,
    /// The digit committed there.
    pub digit: Digit,
}

/// The outcome of one strategy pass.
///
/// The pass never touches the grid it was given: `grid` is a chained copy
/// carrying the pass's commits and eliminations. Feeding it back into the
/// next pass extends the history chain by one link per pass.
#[derive(Debug, Clone)]
pub struct Pass {
    /// Values committed during the pass, in commit order.
    pub solved: Vec<Placement>,
    /// Positions still empty after the pass, in row-major order.
    pub remaining: Vec<Position>,
    /// The updated board, chained back to the pass's input.
    pub grid: Grid,
}
