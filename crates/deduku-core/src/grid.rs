//! The 9×9 grid: cell ownership, candidate maintenance, and the history
//! chain.

use std::fmt::{self, Display};

use crate::{Cell, Digit, DigitSet, GridError, ParseGridError, Position, Unit};

/// A 9×9 Sudoku grid with live candidate tracking.
///
/// The grid owns all 81 [`Cell`]s exclusively. Committing a value through
/// [`set`](Grid::set) removes that value from the candidate set of every
/// peer in the same row, column, and box, so the candidate invariant holds
/// after every commit with no recompute pass. Candidate sets only ever
/// shrink, through the commit cascade or through explicit
/// [`remove_candidate`](Grid::remove_candidate) deductions.
///
/// Grids form an immutable history chain: [`chain`](Grid::chain) produces an
/// independent copy linked back to its source, letting a strategy mutate the
/// copy freely while the caller's grid stays untouched.
///
/// # Examples
///
/// ```
/// use deduku_core::{Digit, Grid};
///
/// let mut grid = Grid::new();
/// grid.set("A1", Digit::D5)?;
///
/// assert_eq!(grid.value("A1"), Some(Digit::D5));
/// // 5 is no longer a candidate for peers of A1
/// assert!(!grid.candidates("A9").contains(Digit::D5));
/// assert!(!grid.candidates("J1").contains(Digit::D5));
/// assert!(!grid.candidates("B2").contains(Digit::D5));
/// # Ok::<(), deduku_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    cells: [Cell; 81],
    previous: Option<Box<Grid>>,
}

impl Grid {
    /// Creates a grid of 81 empty cells with full candidate sets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|i| Cell::new(Position::ALL[i])),
            previous: None,
        }
    }

    /// Parses an 81-character puzzle string, row-major, `'.'` for empty.
    ///
    /// Digits are committed positionally in row-major order, so an input
    /// that is syntactically valid but contains a duplicate within a unit
    /// fails at the first conflicting cell with the same diagnostics as a
    /// runtime [`set`](Grid::set).
    ///
    /// # Errors
    ///
    /// Fails if the input is not exactly 81 characters, contains a character
    /// outside `.` and `1`-`9`, or commits a conflicting digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use deduku_core::{Digit, Grid};
    ///
    /// let grid = Grid::from_serialized(
    ///     "..1.948.7..2..........8.9.1.45..12..6.72..3....98354.....9.6...96..5378.12347865.",
    /// )?;
    /// assert_eq!(grid.value("A3"), Some(Digit::D1));
    /// assert_eq!(grid.value("J4"), Some(Digit::D4));
    /// assert_eq!(grid.remaining().len(), 43);
    /// # Ok::<(), deduku_core::ParseGridError>(())
    /// ```
    pub fn from_serialized(s: &str) -> Result<Self, ParseGridError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::InvalidLength { len });
        }
        let mut grid = Self::new();
        for (index, ch) in s.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let Some(digit) = Digit::from_char(ch) else {
                return Err(ParseGridError::InvalidCharacter { index, ch });
            };
            grid.set(Position::ALL[index], digit)?;
        }
        Ok(grid)
    }

    /// Writes the grid back out as the 81-character row-major form.
    #[must_use]
    pub fn serialized(&self) -> String {
        self.cells
            .iter()
            .map(|cell| {
                cell.value()
                    .map_or('.', |digit| char::from(b'0' + digit.value()))
            })
            .collect()
    }

    /// Commits `digit` at `position` and cascades the elimination to peers.
    ///
    /// # Errors
    ///
    /// Fails with [`GridError::AlreadySolved`] if the cell holds a value, or
    /// [`GridError::InvalidCandidate`] if `digit` is not in the cell's
    /// current candidate set. Either way the grid is left unchanged.
    pub fn set(&mut self, position: impl Into<Position>, digit: Digit) -> Result<(), GridError> {
        let position = position.into();
        let cell = &self.cells[position.index()];
        if let Some(value) = cell.value() {
            return Err(GridError::AlreadySolved { position, value });
        }
        let candidates = cell.candidates();
        if !candidates.contains(digit) {
            return Err(GridError::InvalidCandidate {
                position,
                digit,
                candidates,
            });
        }
        self.cells[position.index()].commit(digit);
        self.eliminate_from_peers(position, digit);
        Ok(())
    }

    /// Removes `digit` from the candidate set at `position` without
    /// committing anything, returning whether it was present.
    ///
    /// This is the entry point for deductions of the form "this cell cannot
    /// hold this digit". Solved cells have empty candidate sets and are
    /// unaffected.
    pub fn remove_candidate(&mut self, position: impl Into<Position>, digit: Digit) -> bool {
        self.cells[position.into().index()].remove_candidate(digit)
    }

    /// Removes `digit` from every peer sharing the committing cell's row,
    /// column, or box. Cells on two shared units are visited twice; removal
    /// is idempotent.
    fn eliminate_from_peers(&mut self, position: Position, digit: Digit) {
        let units = [
            Unit::Row {
                row: position.row(),
            },
            Unit::Column {
                col: position.col(),
            },
            Unit::Box {
                index: position.box_index(),
            },
        ];
        for unit in units {
            for peer in unit.positions() {
                if peer != position {
                    self.cells[peer.index()].remove_candidate(digit);
                }
            }
        }
    }

    /// Returns the cell at `position`.
    #[must_use]
    pub fn cell(&self, position: impl Into<Position>) -> &Cell {
        &self.cells[position.into().index()]
    }

    /// Returns the committed value at `position`, if any.
    #[must_use]
    pub fn value(&self, position: impl Into<Position>) -> Option<Digit> {
        self.cell(position).value()
    }

    /// Returns the live candidate set at `position` (empty if solved).
    #[must_use]
    pub fn candidates(&self, position: impl Into<Position>) -> DigitSet {
        self.cell(position).candidates()
    }

    /// Returns the 9 cells of `unit`, row-major within the unit.
    #[must_use]
    pub fn unit_cells(&self, unit: Unit) -> [&Cell; 9] {
        unit.positions().map(|pos| &self.cells[pos.index()])
    }

    /// Returns the 9 cells of a row, columns ascending.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn row_cells(&self, row: u8) -> [&Cell; 9] {
        self.unit_cells(Unit::Row { row })
    }

    /// Returns the 9 cells of a column, rows ascending.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in the range 0-8.
    #[must_use]
    pub fn column_cells(&self, col: u8) -> [&Cell; 9] {
        self.unit_cells(Unit::Column { col })
    }

    /// Returns the 9 cells of a 3×3 box, row-major within the box.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub fn box_cells(&self, index: u8) -> [&Cell; 9] {
        self.unit_cells(Unit::Box { index })
    }

    /// Iterates over all 81 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns the positions of all empty cells in row-major order.
    #[must_use]
    pub fn remaining(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(Cell::position)
            .collect()
    }

    /// Produces an independent copy of this grid linked back to it.
    ///
    /// The copy carries the same values and candidate sets but shares no
    /// mutable state with `self`: mutating it never changes the source.
    ///
    /// # Examples
    ///
    /// ```
    /// use deduku_core::{Digit, Grid};
    ///
    /// let source = Grid::new();
    /// let mut copy = source.chain();
    /// copy.set("A1", Digit::D1)?;
    ///
    /// assert_eq!(source.value("A1"), None);
    /// assert_eq!(source.chain_length(), 1);
    /// assert_eq!(copy.chain_length(), 2);
    /// # Ok::<(), deduku_core::GridError>(())
    /// ```
    #[must_use]
    pub fn chain(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            previous: Some(Box::new(self.clone())),
        }
    }

    /// Returns the grid this one was chained from, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&Grid> {
        self.previous.as_deref()
    }

    /// Counts the links from this grid back to the root (a root-only grid
    /// has chain length 1).
    #[must_use]
    pub fn chain_length(&self) -> usize {
        let mut length = 1;
        let mut node = self;
        while let Some(previous) = node.previous() {
            length += 1;
            node = previous;
        }
        length
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Grid {
    /// Renders a human-readable board: a column-number header, then one
    /// letter-labelled line per row with `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 1..=9 {
            write!(f, "  {col}")?;
        }
        for (row, letter) in Position::ROW_LETTERS.iter().enumerate() {
            write!(f, "\n {letter}")?;
            for pos in Position::ROWS[row] {
                match self.cells[pos.index()].value() {
                    Some(digit) => write!(f, "  {digit}")?,
                    None => write!(f, "  .")?,
                }
            }
        }
        Ok(())
    }
}
