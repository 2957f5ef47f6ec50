//! Constraint units: rows, columns, and 3×3 boxes.

use crate::Position;

/// A constraint unit (row, column, or 3×3 box).
///
/// A unit names a group of 9 positions that must contain each digit at most
/// once. Units are derived views: they carry only an index, and
/// [`positions`](Unit::positions) resolves membership through constant
/// tables, so no references into a grid are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl Unit {
    /// All rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { row: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        rows
    };

    /// All columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        columns
    };

    /// All boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// All 27 units in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the 9 positions of this unit, row-major within the unit.
    ///
    /// # Panics
    ///
    /// Panics if the unit's index is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn positions(self) -> [Position; 9] {
        match self {
            Unit::Row { row } => Position::ROWS[usize::from(row)],
            Unit::Column { col } => Position::COLUMNS[usize::from(col)],
            Unit::Box { index } => Position::BOXES[usize::from(index)],
        }
    }
}
