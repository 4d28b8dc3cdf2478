//! Plain-text rendering and parsing of boards.
//!
//! The format is one line per row: cells render as their digit or `.` for
//! blank, separated by single spaces, with a newline after every row. The
//! parser ignores spaces and tabs between cells, so the compact form with
//! no separators parses too.
//!
//! # Examples
//!
//! ```
//! use ninewise_core::Board;
//!
//! let input = "\
//! 123456789
//! 456789123
//! 789123456
//! 234567891
//! 567891234
//! 891234567
//! 345678912
//! 678912345
//! 912345678
//! ";
//!
//! let board: Board = input.parse()?;
//! assert!(board.is_consistent());
//! assert_eq!(board.render().lines().next(), Some("1 2 3 4 5 6 7 8 9"));
//! # Ok::<(), ninewise_core::ParseBoardError>(())
//! ```

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{board::Board, digit::Digit};

/// A failure to parse text as a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The input contained no characters.
    #[display("input is empty")]
    Empty,
    /// The input contained a character that is not a digit, `.`, or
    /// whitespace.
    #[display("invalid character {ch:?} at line {line}, column {column}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// The 1-based line the character appeared on.
        line: usize,
        /// The 1-based column of the character within its line.
        column: usize,
    },
    /// A line did not hold exactly 9 cells.
    #[display("expected 9 cells on line {line}, found {cells}")]
    InvalidRowLength {
        /// The 1-based line the row came from.
        line: usize,
        /// The number of cells parsed from the line.
        cells: usize,
    },
    /// The input did not hold exactly 9 rows.
    #[display("expected 9 rows, found {rows}")]
    InvalidRowCount {
        /// The number of rows in the parsed grid.
        rows: usize,
    },
}

impl Board {
    /// Renders the board as plain text, one line per row.
    ///
    /// A board with no rows renders as the empty string.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (index, cell) in row.iter().enumerate() {
                if index > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(".")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBoardError::Empty);
        }

        let mut rows = Vec::new();
        for (line_index, line) in s.lines().enumerate() {
            let mut cells = Vec::new();
            for (column_index, ch) in line.chars().enumerate() {
                let cell = match ch {
                    ' ' | '\t' => continue,
                    '.' => None,
                    ch => match Digit::from_char(ch) {
                        Some(digit) => Some(digit),
                        None => {
                            return Err(ParseBoardError::InvalidCharacter {
                                ch,
                                line: line_index + 1,
                                column: column_index + 1,
                            });
                        }
                    },
                };
                cells.push(cell);
            }
            if cells.len() != 9 {
                return Err(ParseBoardError::InvalidRowLength {
                    line: line_index + 1,
                    cells: cells.len(),
                });
            }
            rows.push(cells);
        }

        if rows.len() != 9 {
            return Err(ParseBoardError::InvalidRowCount { rows: rows.len() });
        }
        Ok(Self::from_rows(rows))
    }
}
