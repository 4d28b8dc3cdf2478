//! The 9x9 board model and non-destructive cell updates.
//!
//! A [`Board`] owns its cells as a vector of rows, so boards of the wrong
//! shape are representable on purpose: text input and generated data are
//! loaded first and judged afterwards with
//! [`is_structurally_valid`](Board::is_structurally_valid).
//!
//! # Examples
//!
//! ```
//! use ninewise_core::{Board, Digit, Position};
//!
//! let board = Board::all_blank();
//! assert!(board.is_structurally_valid());
//! assert!(!board.is_filled());
//!
//! let board = board.update_cell(Position::new(0, 0), Some(Digit::D5))?;
//! assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
//! # Ok::<(), ninewise_core::OutOfRangeError>(())
//! ```

use std::ops::Index;

use derive_more::{Display, Error};

use crate::{digit::Digit, position::Position};

/// A single board cell, either a digit or blank.
pub type Cell = Option<Digit>;

/// One horizontal row of cells.
pub type Row = Vec<Cell>;

/// Replaces the element at `index` in `seq`, returning a new vector.
///
/// The input is left untouched.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `index` is not a valid index into `seq`.
///
/// # Examples
///
/// ```
/// use ninewise_core::replace_at;
///
/// let updated = replace_at(&[1, 2, 3], 1, 9)?;
/// assert_eq!(updated, [1, 9, 3]);
///
/// assert!(replace_at(&[1, 2, 3], 3, 9).is_err());
/// # Ok::<(), ninewise_core::OutOfRangeError>(())
/// ```
pub fn replace_at<T>(seq: &[T], index: usize, value: T) -> Result<Vec<T>, OutOfRangeError>
where
    T: Clone,
{
    if index >= seq.len() {
        return Err(OutOfRangeError {
            index,
            len: seq.len(),
        });
    }
    let mut updated = seq.to_vec();
    updated[index] = value;
    Ok(updated)
}

/// An index that does not fit the sequence it was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("index {index} out of range for length {len}")]
pub struct OutOfRangeError {
    /// The rejected index.
    pub index: usize,
    /// The length of the indexed sequence.
    pub len: usize,
}

/// A 9x9 sudoku board.
///
/// Rows are stored top to bottom and cells within a row left to right.
/// The shape is not enforced by the type; a freshly parsed or generated
/// board may be ragged until it passes
/// [`is_structurally_valid`](Self::is_structurally_valid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    /// Creates a 9x9 board with every cell blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninewise_core::Board;
    ///
    /// let board = Board::all_blank();
    /// assert!(board.is_structurally_valid());
    /// assert_eq!(board.blank_positions().len(), 81);
    /// ```
    #[must_use]
    pub fn all_blank() -> Self {
        Self {
            rows: vec![vec![None; 9]; 9],
        }
    }

    /// Creates a board from row data, without checking its shape.
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns the rows of the board, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns `true` if the board is exactly 9 rows of 9 cells.
    #[must_use]
    pub fn is_structurally_valid(&self) -> bool {
        self.rows.len() == 9 && self.rows.iter().all(|row| row.len() == 9)
    }

    /// Returns `true` if every cell holds a digit.
    ///
    /// This checks the cells that exist, not the shape: a board with no
    /// rows has no blank cells and reports `true`. Callers that need a
    /// complete 9x9 grid check
    /// [`is_structurally_valid`](Self::is_structurally_valid) as well.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(Option::is_some))
    }

    /// Returns the cell at `pos`, or `None` if the board's shape does not
    /// cover that position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninewise_core::{Board, Position};
    ///
    /// let board = Board::all_blank();
    /// assert_eq!(board.get(Position::new(4, 4)), Some(None));
    ///
    /// let empty = Board::from_rows(Vec::new());
    /// assert_eq!(empty.get(Position::new(4, 4)), None);
    /// ```
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.rows
            .get(usize::from(pos.row()))
            .and_then(|row| row.get(usize::from(pos.col())))
            .copied()
    }

    /// Returns every blank position, in row-major order.
    #[must_use]
    pub fn blank_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for (row_index, row) in (0u8..).zip(self.rows.iter().take(9)) {
            for (col_index, cell) in (0u8..).zip(row.iter().take(9)) {
                if cell.is_none() {
                    positions.push(Position::new(row_index, col_index));
                }
            }
        }
        positions
    }

    /// Returns a new board with the cell at `pos` set to `cell`.
    ///
    /// The original board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if the board's shape does not cover
    /// `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninewise_core::{Board, Digit, Position};
    ///
    /// let blank = Board::all_blank();
    /// let updated = blank.update_cell(Position::new(2, 7), Some(Digit::D4))?;
    ///
    /// assert_eq!(updated[Position::new(2, 7)], Some(Digit::D4));
    /// assert_eq!(blank[Position::new(2, 7)], None);
    /// # Ok::<(), ninewise_core::OutOfRangeError>(())
    /// ```
    pub fn update_cell(&self, pos: Position, cell: Cell) -> Result<Self, OutOfRangeError> {
        let row_index = usize::from(pos.row());
        let col_index = usize::from(pos.col());
        let row = self.rows.get(row_index).ok_or(OutOfRangeError {
            index: row_index,
            len: self.rows.len(),
        })?;
        let rows = replace_at(&self.rows, row_index, replace_at(row, col_index, cell)?)?;
        Ok(Self { rows })
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the board's shape does not cover `pos`. Use
    /// [`Board::get`] for boards that may not be 9x9.
    fn index(&self, pos: Position) -> &Self::Output {
        &self.rows[usize::from(pos.row())][usize::from(pos.col())]
    }
}
