use deduku_core::{Digit, Grid, Position, Unit};
use log::{debug, trace};
use tinyvec::ArrayVec;

use crate::{Pass, SolverError};

/// Eliminates candidates confined to a single line within a box.
///
/// When a box has exactly two holders of a digit and they share a row or a
/// column, the digit must land on one of them, so no cell of that line
/// outside the box can hold it. The pass applies that elimination for every
/// box and digit; it never commits a value and its `solved` list is always
/// empty. Two holders that share neither a row nor a column prove nothing
/// and are skipped.
pub(crate) fn solve(grid: &Grid) -> Result<Pass, SolverError> {
    let mut cells = grid.chain();
    for index in 0..9 {
        let unit = Unit::Box { index };
        for digit in Digit::ALL {
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
            let &[first, second] = holders.as_slice() else {
                continue;
            };
            let line = if first.row() == second.row() {
                Unit::Row { row: first.row() }
            } else if first.col() == second.col() {
                Unit::Column { col: first.col() }
            } else {
                continue;
            };
            let mut eliminated = 0_usize;
            for position in line.positions() {
                if position.box_index() != index && cells.remove_candidate(position, digit) {
                    trace!("box-line removal: {digit} removed from {position}");
                    eliminated += 1;
                }
            }
            if eliminated > 0 {
                debug!(
                    "box-line removal: {digit} confined to {first} and {second}, \
                     {eliminated} cells updated"
                );
            }
        }
    }
    let remaining = cells.remaining();
    debug!("box-line removal pass: {} remaining", remaining.len());
    Ok(Pass {
        solved: Vec::new(),
        remaining,
        grid: cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Strategy, testing::StrategyTester};

    /// Box 0 with everything solved except A1 and A2, which both keep
    /// candidates 1 and 9.
    fn pair_in_row_a() -> Grid {
        let mut grid = Grid::new();
        for (name, digit) in [
            ("A3", Digit::D2),
            ("B1", Digit::D3),
            ("B2", Digit::D4),
            ("B3", Digit::D5),
            ("C1", Digit::D6),
            ("C2", Digit::D7),
            ("C3", Digit::D8),
        ] {
            grid.set(name, digit).unwrap();
        }
        grid
    }

    #[test]
    fn test_removes_confined_digits_from_the_rest_of_the_row() {
        let tester = StrategyTester::new(pair_in_row_a())
            .solve_once(Strategy::BoxLineRemoval)
            .assert_placements([])
            .assert_remaining(74)
            .assert_chain_length(2)
            // The holders themselves keep both digits
            .assert_no_change("A1")
            .assert_no_change("A2")
            // Digits 1 and 9 leave every row cell outside the box
            .assert_removed_exact("A4", [Digit::D1, Digit::D9])
            .assert_removed_exact("A5", [Digit::D1, Digit::D9])
            .assert_removed_exact("A6", [Digit::D1, Digit::D9])
            .assert_removed_exact("A7", [Digit::D1, Digit::D9])
            .assert_removed_exact("A8", [Digit::D1, Digit::D9])
            .assert_removed_exact("A9", [Digit::D1, Digit::D9]);

        // No cell off row A is touched
        for position in Position::ALL {
            if position.row() == 0 {
                continue;
            }
            assert_eq!(
                tester.initial().candidates(position),
                tester.current().candidates(position),
                "unexpected change at {position}"
            );
        }
    }

    #[test]
    fn test_removes_confined_digits_from_the_rest_of_the_column() {
        // Same shape rotated: A1 and B1 are the only empties in box 0
        let mut grid = Grid::new();
        for (name, digit) in [
            ("A2", Digit::D2),
            ("A3", Digit::D3),
            ("B2", Digit::D4),
            ("B3", Digit::D5),
            ("C1", Digit::D6),
            ("C2", Digit::D7),
            ("C3", Digit::D8),
        ] {
            grid.set(name, digit).unwrap();
        }

        StrategyTester::new(grid)
            .solve_once(Strategy::BoxLineRemoval)
            .assert_no_change("A1")
            .assert_no_change("B1")
            .assert_removed_exact("D1", [Digit::D1, Digit::D9])
            .assert_removed_exact("E1", [Digit::D1, Digit::D9])
            .assert_removed_exact("F1", [Digit::D1, Digit::D9])
            .assert_removed_exact("G1", [Digit::D1, Digit::D9])
            .assert_removed_exact("H1", [Digit::D1, Digit::D9])
            .assert_removed_exact("J1", [Digit::D1, Digit::D9]);
    }

    #[test]
    fn test_skips_holders_sharing_neither_row_nor_column() {
        // A1 and B2 are the only empties in box 0, on a diagonal
        let mut grid = Grid::new();
        for (name, digit) in [
            ("A2", Digit::D2),
            ("A3", Digit::D3),
            ("B1", Digit::D4),
            ("B3", Digit::D5),
            ("C1", Digit::D6),
            ("C2", Digit::D7),
            ("C3", Digit::D8),
        ] {
            grid.set(name, digit).unwrap();
        }

        let tester = StrategyTester::new(grid).solve_once(Strategy::BoxLineRemoval);
        for position in Position::ALL {
            assert_eq!(
                tester.initial().candidates(position),
                tester.current().candidates(position),
                "unexpected change at {position}"
            );
        }
    }

    #[test]
    fn test_never_commits_values() {
        let pass = solve(&pair_in_row_a()).unwrap();
        assert!(pass.solved.is_empty());
        assert_eq!(pass.remaining.len(), 74);

        let pass = solve(&Grid::new()).unwrap();
        assert!(pass.solved.is_empty());
        assert_eq!(pass.remaining.len(), 81);
    }

    #[test]
    fn test_pass_leaves_the_source_grid_untouched() {
        let grid = pair_in_row_a();
        let pass = solve(&grid).unwrap();
        assert!(grid.candidates("A4").contains(Digit::D1));
        assert!(grid.candidates("A4").contains(Digit::D9));
        assert_eq!(grid.chain_length(), 1);
        assert!(!pass.grid.candidates("A4").contains(Digit::D1));
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
}
