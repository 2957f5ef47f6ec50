use deduku_core::{Digit, Grid, Position, Unit};
use log::{debug, trace};
use tinyvec::ArrayVec;

use crate::{Pass, Placement, SolverError};

/// Commits every digit that has exactly one holder within a unit.
///
/// For each unit index the sweep checks the row, the column, and the box at
/// that index, digit by digit. An empty cell is a holder of a digit when the
/// digit is in its candidate set; a digit with a single holder in a unit can
/// only go there, regardless of how many other candidates that cell has.
/// Commits cascade immediately, so later units in the sweep see the updated
/// candidates.
pub(crate) fn solve(grid: &Grid) -> Result<Pass, SolverError> {
    let mut cells = grid.chain();
    let mut solved = Vec::new();
    for index in 0..9 {
        let units = [
            Unit::Row { row: index },
            Unit::Column { col: index },
            Unit::Box { index },
        ];
        for digit in Digit::ALL {
            for unit in units {
                let mut holders: ArrayVec<[Position; 9]> = ArrayVec::new();
                for position in unit.positions() {
                    let cell = cells.cell(position);
                    if cell.is_solved() {
                        continue;
                    }
                    let candidates = cell.candidates();
                    if candidates.is_empty() {
                        return Err(SolverError::Contradiction { position });
                    }
                    if candidates.contains(digit) {
                        holders.push(position);
                    }
                }
                if let &[position] = holders.as_slice() {
                    cells.set(position, digit)?;
                    trace!("row-col-box singleton: {position} = {digit} via {unit:?}");
                    solved.push(Placement { position, digit });
                }
            }
        }
    }
    let remaining = cells.remaining();
    debug!(
        "row-col-box singleton pass: {} solved, {} remaining",
        solved.len(),
        remaining.len()
    );
    Ok(Pass {
        solved,
        remaining,
        grid: cells,
    })
}

#[cfg(test)]
mod tests {
    use deduku_core::DigitSet;

    use super::*;
    use crate::{Strategy, testing::StrategyTester};

    const EASY_PUZZLE: &str =
        "..1.948.7..2..........8.9.1.45..12..6.72..3....98354.....9.6...96..5378.12347865.";
    const EASY_SOLUTION: &str =
        "531694827892317564476582931345761298687249315219835476758926143964153782123478659";
    const HARD_PUZZLE: &str =
        "...7.....98....2...76.1..5......3.8...8491..653.....9..9.587.1.8.....6....7..6...";

    /// A grid where a 5 is blocked from A1 through A8 by column peers,
    /// leaving A9 as the sole holder of 5 in row A.
    fn sole_holder_in_row_a() -> Grid {
        let mut grid = Grid::new();
        for name in ["C1", "E2", "H3", "B4", "F5", "J6", "D7", "G8"] {
            grid.set(name, Digit::D5).unwrap();
        }
        grid
    }

    #[test]
    fn test_commits_sole_holder_with_many_candidates() {
        let grid = sole_holder_in_row_a();
        // A9 still has all nine candidates, so it is no naked singleton
        assert_eq!(grid.candidates("A9"), DigitSet::FULL);

        StrategyTester::new(grid)
            .solve_once(Strategy::RowColBoxSingleton)
            .assert_placements([("A9", Digit::D5)])
            .assert_remaining(72)
            .assert_chain_length(2);
    }

    #[test]
    fn test_naked_singleton_cannot_see_the_sole_holder() {
        let pass = Strategy::NakedSingleton.solve(&sole_holder_in_row_a()).unwrap();
        assert!(pass.solved.is_empty());
    }

    #[test]
    fn test_pass_leaves_the_source_grid_untouched() {
        let grid = sole_holder_in_row_a();
        let pass = solve(&grid).unwrap();
        assert_eq!(grid.value("A9"), None);
        assert_eq!(grid.candidates("A9"), DigitSet::FULL);
        assert_eq!(grid.chain_length(), 1);
        assert_eq!(pass.grid.value("A9"), Some(Digit::D5));
    }

    #[test]
    fn test_detects_contradiction_at_first_exhausted_cell() {
        let mut grid = Grid::new();
        for (col, digit) in (1..=8).zip(Digit::ALL[1..].iter().copied()) {
            grid.set((0, col), digit).unwrap();
        }
        grid.set("D1", Digit::D1).unwrap();

        let err = solve(&grid).unwrap_err();
        assert_eq!(
            err,
            SolverError::Contradiction {
                position: Position::from_name("A1"),
            }
        );
    }

    #[test]
    fn test_easy_puzzle_solves_in_three_passes() {
        StrategyTester::from_serialized(EASY_PUZZLE)
            .solve_until_stuck(Strategy::RowColBoxSingleton)
            .assert_calls(3)
            .assert_chain_length(4)
            .assert_remaining(0)
            .assert_serialized(EASY_SOLUTION)
            .assert_placements_sorted([
                ("A1", Digit::D5),
                ("A2", Digit::D3),
                ("A4", Digit::D6),
                ("A8", Digit::D2),
                ("B1", Digit::D8),
                ("B2", Digit::D9),
                ("B4", Digit::D3),
                ("B5", Digit::D1),
                ("B6", Digit::D7),
                ("B7", Digit::D5),
                ("B8", Digit::D6),
                ("B9", Digit::D4),
                ("C1", Digit::D4),
                ("C2", Digit::D7),
                ("C3", Digit::D6),
                ("C4", Digit::D5),
                ("C6", Digit::D2),
                ("C8", Digit::D3),
                ("D1", Digit::D3),
                ("D4", Digit::D7),
                ("D5", Digit::D6),
                ("D8", Digit::D9),
                ("D9", Digit::D8),
                ("E2", Digit::D8),
                ("E5", Digit::D4),
                ("E6", Digit::D9),
                ("E8", Digit::D1),
                ("E9", Digit::D5),
                ("F1", Digit::D2),
                ("F2", Digit::D1),
                ("F8", Digit::D7),
                ("F9", Digit::D6),
                ("G1", Digit::D7),
                ("G2", Digit::D5),
                ("G3", Digit::D8),
                ("G5", Digit::D2),
                ("G7", Digit::D1),
                ("G8", Digit::D4),
                ("G9", Digit::D3),
                ("H3", Digit::D4),
                ("H4", Digit::D1),
                ("H9", Digit::D2),
                ("J9", Digit::D9),
            ]);
    }

    #[test]
    fn test_hard_puzzle_stalls_after_sixteen_placements() {
        StrategyTester::from_serialized(HARD_PUZZLE)
            .solve_until_stuck(Strategy::RowColBoxSingleton)
            .assert_calls(3)
            .assert_chain_length(4)
            .assert_remaining(38)
            .assert_placements_sorted([
                ("C4", Digit::D8),
                ("D2", Digit::D6),
                ("D3", Digit::D9),
                ("D4", Digit::D2),
                ("D5", Digit::D5),
                ("D7", Digit::D7),
                ("E1", Digit::D7),
                ("E2", Digit::D2),
                ("E7", Digit::D5),
                ("E8", Digit::D3),
                ("F4", Digit::D6),
                ("F5", Digit::D7),
                ("F6", Digit::D8),
                ("F9", Digit::D2),
                ("G1", Digit::D6),
                ("G3", Digit::D2),
            ]);
    }
}
