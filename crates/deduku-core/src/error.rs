//! Error types for grid construction and value commits.

use crate::{Digit, DigitSet, Position};

/// An error rejecting a value commit on a grid.
///
/// Both variants are unrecoverable at the point of detection: a well-formed
/// strategy never re-commits a cell, and a rejected candidate means the
/// puzzle is over-constrained or the caller's deduction was wrong. Callers
/// propagate these rather than retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The cell already holds a committed value.
    #[display("cell {position} is already solved with {value}")]
    AlreadySolved {
        /// The cell that was targeted.
        position: Position,
        /// The value the cell already holds.
        value: Digit,
    },
    /// The value is not in the cell's current candidate set.
    #[display("{digit} is not a valid value for cell {position}; valid values are {candidates}")]
    InvalidCandidate {
        /// The cell that was targeted.
        position: Position,
        /// The rejected value.
        digit: Digit,
        /// The candidates the cell still accepts.
        candidates: DigitSet,
    },
}

/// An error rejecting an 81-character puzzle string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseGridError {
    /// The input is not exactly 81 characters.
    #[display("puzzle string must be 81 characters, got {len}")]
    InvalidLength {
        /// Character count of the input.
        len: usize,
    },
    /// The input contains a character outside `.` and `1`-`9`.
    #[display("invalid character {ch:?} at index {index}")]
    InvalidCharacter {
        /// Character index of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
    /// A digit in the input conflicts with an earlier digit in its row,
    /// column, or box. Digits are committed positionally in row-major
    /// order, so the first conflicting cell is reported.
    #[display("{_0}")]
    Conflict(#[from] GridError),
}
