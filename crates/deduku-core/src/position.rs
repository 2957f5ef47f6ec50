//! Cell positions and the cell-name notation.
//!
//! A position is a zero-based `(row, col)` pair. Its human-readable name is a
//! row letter followed by a 1-based column digit, e.g. `"A1"` for the top-left
//! cell or `"J8"` for `(8, 7)`. Row letters skip `I` to avoid confusion with
//! the digit `1`.

use std::fmt::{self, Display};

/// A cell position on the 9×9 grid.
///
/// Positions order row-major, render as cell names, and convert from both
/// name strings and `(row, col)` pairs, so APIs taking `impl Into<Position>`
/// accept either form:
///
/// ```
/// use deduku_core::Position;
///
/// assert_eq!(Position::from("J8"), Position::new(8, 7));
/// assert_eq!(Position::from((8, 7)).to_string(), "J8");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Row letters in row order: `I` is skipped.
    pub const ROW_LETTERS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J'];

    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Positions of each row, indexed by row number, columns ascending.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { row: 0, col: 0 }; 9]; 9];
        let mut r = 0;
        #[expect(clippy::cast_possible_truncation)]
        while r < 9 {
            let mut c = 0;
            while c < 9 {
                rows[r][c] = Self {
                    row: r as u8,
                    col: c as u8,
                };
                c += 1;
            }
            r += 1;
        }
        rows
    };

    /// Positions of each column, indexed by column number, rows ascending.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { row: 0, col: 0 }; 9]; 9];
        let mut c = 0;
        #[expect(clippy::cast_possible_truncation)]
        while c < 9 {
            let mut r = 0;
            while r < 9 {
                columns[c][r] = Self {
                    row: r as u8,
                    col: c as u8,
                };
                r += 1;
            }
            c += 1;
        }
        columns
    };

    /// Positions of each 3×3 box, indexed by box number, row-major within
    /// the box. Boxes number left to right, top to bottom.
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { row: 0, col: 0 }; 9]; 9];
        let mut b = 0;
        #[expect(clippy::cast_possible_truncation)]
        while b < 9 {
            let mut k = 0;
            while k < 9 {
                boxes[b][k] = Self {
                    row: ((b / 3) * 3 + k / 3) as u8,
                    col: ((b % 3) * 3 + k % 3) as u8,
                };
                k += 1;
            }
            b += 1;
        }
        boxes
    };

    /// Creates a position from zero-based coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "row index out of range: {row}");
        assert!(col < 9, "column index out of range: {col}");
        Self { row, col }
    }

    /// Parses a cell name such as `"A1"` or `"j8"` (case-insensitive).
    ///
    /// Malformed names are a caller contract violation; untrusted input is
    /// validated at the serialization boundary before positions are built.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a row letter `A`-`H` or `J` followed by a
    /// column digit `1`-`9`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        let (Some(row_char), Some(col_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            panic!("invalid cell name: {name:?}");
        };
        let row_char = row_char.to_ascii_uppercase();
        let Some(row) = Self::ROW_LETTERS.iter().position(|&c| c == row_char) else {
            panic!("invalid row letter in cell name: {name:?}");
        };
        let Some(col) = col_char.to_digit(10).filter(|d| (1..=9).contains(d)) else {
            panic!("invalid column digit in cell name: {name:?}");
        };
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = (row as u8, (col - 1) as u8);
        Self { row, col }
    }

    /// Returns the zero-based row index.
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the zero-based column index.
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Row-major index into an 81-element array.
    #[inline]
    pub(crate) fn index(self) -> usize {
        usize::from(self.row) * 9 + usize::from(self.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            Self::ROW_LETTERS[usize::from(self.row)],
            self.col + 1
        )
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

impl From<&str> for Position {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
