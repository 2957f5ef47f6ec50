use deduku_core::{Grid, Position};
use log::{debug, trace};

use crate::{Pass, Placement, SolverError};

/// Commits every naked singleton found in one row-major sweep.
///
/// A naked singleton is an empty cell whose candidate set has shrunk to a
/// single digit. Each commit cascades eliminations into the cell's peers
/// before the sweep moves on, so a cell that becomes a singleton partway
/// through the sweep is still committed in the same pass.
pub(crate) fn solve(grid: &Grid) -> Result<Pass, SolverError> {
    let mut cells = grid.chain();
    let mut solved = Vec::new();
    for position in Position::ALL {
        let cell = cells.cell(position);
        if cell.is_solved() {
            continue;
        }
        let candidates = cell.candidates();
        if candidates.is_empty() {
            return Err(SolverError::Contradiction { position });
        }
        if let Some(digit) = candidates.as_single() {
            cells.set(position, digit)?;
            trace!("naked singleton: {position} = {digit}");
            solved.push(Placement { position, digit });
        }
    }
    let remaining = cells.remaining();
    debug!(
        "naked singleton pass: {} solved, {} remaining",
        solved.len(),
        remaining.len()
    );
    Ok(Pass {
        solved,
        remaining,
        grid: cells,
    })
}
