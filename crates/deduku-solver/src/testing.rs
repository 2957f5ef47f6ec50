//! Test utilities for strategy implementations.
//!
//! This module provides [`StrategyTester`], a harness for verifying that
//! strategy passes commit and eliminate exactly what they should.
//!
//! # Example
//!
//! ```
//! use deduku_core::Digit;
//! use deduku_solver::{Strategy, testing::StrategyTester};
//!
//! let puzzle = format!(".23456789{}", ".".repeat(72));
//! StrategyTester::from_serialized(&puzzle)
//!     .solve_once(Strategy::NakedSingleton)
//!     .assert_committed("A1", Digit::D1)
//!     .assert_remaining(72);
//! ```

use deduku_core::{Digit, DigitSet, Grid, Position};

use crate::{Placement, Strategy};

/// A test harness for verifying strategy implementations.
///
/// The tester keeps the grid it started from alongside the grid produced by
/// the passes run so far, so assertions can compare the two states. Solve
/// methods accumulate every [`Placement`] the passes report and count the
/// number of calls made.
///
/// All methods return `self` for fluent chaining, and all assertion methods
/// panic with detailed messages on failure, using `#[track_caller]` to
/// report the correct source location.
#[derive(Debug)]
pub struct StrategyTester {
    initial: Grid,
    current: Grid,
    solved: Vec<Placement>,
    calls: usize,
}

impl StrategyTester {
    /// Creates a tester from an initial grid state.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            initial: grid.clone(),
            current: grid,
            solved: Vec::new(),
            calls: 0,
        }
    }

    /// Creates a tester from an 81-character puzzle string.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid puzzle.
    #[track_caller]
    #[must_use]
    pub fn from_serialized(s: &str) -> Self {
        Self::new(Grid::from_serialized(s).unwrap())
    }

    /// The grid state the tester started from.
    #[must_use]
    pub fn initial(&self) -> &Grid {
        &self.initial
    }

    /// The grid state after the passes run so far.
    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Runs one pass of `strategy` and returns self for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the pass returns an error.
    #[track_caller]
    pub fn solve_once(mut self, strategy: Strategy) -> Self {
        let pass = strategy.solve(&self.current).unwrap();
        self.calls += 1;
        self.solved.extend(pass.solved);
        self.current = pass.grid;
        self
    }

    /// Runs passes of `strategy` until one commits nothing.
    ///
    /// The final no-progress pass is counted like any other call.
    ///
    /// # Panics
    ///
    /// Panics if any pass returns an error.
    #[track_caller]
    pub fn solve_until_stuck(mut self, strategy: Strategy) -> Self {
        loop {
            let pass = strategy.solve(&self.current).unwrap();
            self.calls += 1;
            let stuck = pass.solved.is_empty();
            self.solved.extend(pass.solved);
            self.current = pass.grid;
            if stuck {
                return self;
            }
        }
    }

    /// Asserts that a cell was empty initially and now holds `digit`.
    ///
    /// # Panics
    ///
    /// Panics if the cell started solved or holds a different value.
    #[track_caller]
    pub fn assert_committed(self, name: &str, digit: Digit) -> Self {
        let position = Position::from_name(name);
        assert!(
            self.initial.value(position).is_none(),
            "cell {position} was already solved in the initial grid"
        );
        let value = self.current.value(position);
        assert_eq!(
            value,
            Some(digit),
            "expected {position} = {digit}, found {value:?}"
        );
        self
    }

    /// Asserts the accumulated placements in exact commit order.
    ///
    /// # Panics
    ///
    /// Panics if the placements differ in content or order.
    #[track_caller]
    pub fn assert_placements<'a, I>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Digit)>,
    {
        let expected = Self::placements(expected);
        assert_eq!(self.solved, expected, "placements differ");
        self
    }

    /// Asserts the accumulated placements, ignoring commit order.
    ///
    /// # Panics
    ///
    /// Panics if the placements differ as sets.
    #[track_caller]
    pub fn assert_placements_sorted<'a, I>(self, expected: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Digit)>,
    {
        let mut expected = Self::placements(expected);
        expected.sort_by_key(|placement| placement.position);
        let mut solved = self.solved.clone();
        solved.sort_by_key(|placement| placement.position);
        assert_eq!(solved, expected, "placements differ");
        self
    }

    fn placements<'a, I>(pairs: I) -> Vec<Placement>
    where
        I: IntoIterator<Item = (&'a str, Digit)>,
    {
        pairs
            .into_iter()
            .map(|(name, digit)| Placement {
                position: Position::from_name(name),
                digit,
            })
            .collect()
    }

    /// Asserts that exactly the given candidates were removed from a cell
    /// over all passes run so far.
    ///
    /// # Panics
    ///
    /// Panics if the removed candidates do not match exactly.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, name: &str, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let position = Position::from_name(name);
        let expected = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(position);
        let current = self.current.candidates(position);
        let removed = initial.difference(current);
        assert_eq!(
            removed, expected,
            "removed candidates at {position}: expected {{{expected}}}, \
             got {{{removed}}} (initial {{{initial}}}, current {{{current}}})"
        );
        self
    }

    /// Asserts that a cell's value and candidates are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the cell differs from its initial state.
    #[track_caller]
    pub fn assert_no_change(self, name: &str) -> Self {
        let position = Position::from_name(name);
        assert_eq!(
            self.initial.value(position),
            self.current.value(position),
            "value changed at {position}"
        );
        let initial = self.initial.candidates(position);
        let current = self.current.candidates(position);
        assert_eq!(
            initial, current,
            "candidates changed at {position}: {{{initial}}} to {{{current}}}"
        );
        self
    }

    /// Asserts the number of empty cells left on the current grid.
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    #[track_caller]
    pub fn assert_remaining(self, expected: usize) -> Self {
        let remaining = self.current.remaining().len();
        assert_eq!(remaining, expected, "remaining cell count differs");
        self
    }

    /// Asserts how many passes have been run.
    ///
    /// # Panics
    ///
    /// Panics if the call count differs.
    #[track_caller]
    pub fn assert_calls(self, expected: usize) -> Self {
        assert_eq!(self.calls, expected, "pass call count differs");
        self
    }

    /// Asserts the history chain length of the current grid.
    ///
    /// # Panics
    ///
    /// Panics if the chain length differs.
    #[track_caller]
    pub fn assert_chain_length(self, expected: usize) -> Self {
        let length = self.current.chain_length();
        assert_eq!(length, expected, "chain length differs");
        self
    }

    /// Asserts the current grid's 81-character serialization.
    ///
    /// # Panics
    ///
    /// Panics if the serialization differs.
    #[track_caller]
    pub fn assert_serialized(self, expected: &str) -> Self {
        let serialized = self.current.serialized();
        assert_eq!(serialized, expected, "serialized grid differs");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn singleton_at_a1() -> String {
        format!(".23456789{}", ".".repeat(72))
    }

    #[test]
    fn test_solve_once_tracks_calls_and_placements() {
        StrategyTester::from_serialized(&singleton_at_a1())
            .solve_once(Strategy::NakedSingleton)
            .assert_calls(1)
            .assert_chain_length(2)
            .assert_committed("A1", Digit::D1)
            .assert_placements([("A1", Digit::D1)]);
    }

    #[test]
    fn test_solve_until_stuck_counts_the_final_pass() {
        StrategyTester::from_serialized(&singleton_at_a1())
            .solve_until_stuck(Strategy::NakedSingleton)
            .assert_calls(2)
            .assert_chain_length(3)
            .assert_remaining(72);
    }

    #[test]
    #[should_panic(expected = "expected A1 = 2")]
    fn test_assert_committed_fails_on_wrong_digit() {
        StrategyTester::from_serialized(&singleton_at_a1())
            .solve_once(Strategy::NakedSingleton)
            .assert_committed("A1", Digit::D2);
    }

    #[test]
    #[should_panic(expected = "candidates changed at B1")]
    fn test_assert_no_change_fails_on_eliminated_candidates() {
        // Committing A1 = 1 removes 1 from B1 in the same box
        StrategyTester::from_serialized(&singleton_at_a1())
            .solve_once(Strategy::NakedSingleton)
            .assert_no_change("B1");
    }
}
