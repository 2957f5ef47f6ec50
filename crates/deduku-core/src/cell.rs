//! A single grid cell: an optional committed value plus live candidates.

use crate::{Digit, DigitSet, Position};

/// One cell of the 9×9 grid.
///
/// A cell is either empty, with a candidate set holding exactly the digits
/// not yet committed in its row, column, or box, or solved, with a value and
/// an empty candidate set. Cells move from empty to solved at most once and
/// never revert within one grid.
///
/// Cells are owned and mutated by [`Grid`](crate::Grid); the cascade that
/// keeps candidate sets consistent lives there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    value: Option<Digit>,
    candidates: DigitSet,
}

impl Cell {
    /// Creates an empty cell with a full candidate set.
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            value: None,
            candidates: DigitSet::FULL,
        }
    }

    /// Returns this cell's position.
    #[must_use]
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the committed value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns the current live candidate set (empty if solved).
    #[must_use]
    #[inline]
    pub fn candidates(&self) -> DigitSet {
        self.candidates
    }

    /// Returns `true` if the cell holds a committed value.
    #[must_use]
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the cell holds no committed value.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Commits a value and clears the candidate set.
    ///
    /// Validity checks (already solved, value not a candidate) belong to the
    /// grid, which also cascades the elimination to peers.
    pub(crate) fn commit(&mut self, digit: Digit) {
        self.value = Some(digit);
        self.candidates = DigitSet::EMPTY;
    }

    /// Removes a candidate, returning whether it was present.
    pub(crate) fn remove_candidate(&mut self, digit: Digit) -> bool {
        self.candidates.remove(digit)
    }
}
