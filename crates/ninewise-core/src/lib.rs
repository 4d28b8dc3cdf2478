//! Core board model for 9x9 sudoku grids.
//!
//! This crate provides the data structures and checks shared by the
//! generator and the command-line front end: the board itself, its
//! constraint groups, and the plain-text codec that moves boards in and
//! out of the process.
//!
//! # Overview
//!
//! The crate is organized around three concerns:
//!
//! 1. **The board** - Cell-level types and non-destructive updates
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9
//!    - [`position`]: Row and column coordinates on the 9x9 grid
//!    - [`board`]: The board itself, shape checks, and cell updates
//!
//! 2. **Validation** - The rules a filled grid must obey
//!    - [`digit_set`]: A bitmask set of digits for duplicate scans
//!    - [`group`]: The 27 rows, columns, and boxes and their validity
//!
//! 3. **The codec** - Text at the process boundary
//!    - [`text`]: Rendering to and parsing from the line-per-row format
//!
//! # Examples
//!
//! ```
//! use ninewise_core::{Board, Digit, Position};
//!
//! let board: Board = "\
//! 5 3 . . 7 . . . .
//! 6 . . 1 9 5 . . .
//! . 9 8 . . . . 6 .
//! 8 . . . 6 . . . 3
//! 4 . . 8 . 3 . . 1
//! 7 . . . 2 . . . 6
//! . 6 . . . . 2 8 .
//! . . . 4 1 9 . . 5
//! . . . . 8 . . 7 9
//! ".parse()?;
//!
//! assert!(board.is_structurally_valid());
//! assert!(board.is_consistent());
//! assert!(!board.is_filled());
//! assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
//! # Ok::<(), ninewise_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod group;
pub mod position;
pub mod text;

// Re-export commonly used types
pub use self::{
    board::{Board, Cell, OutOfRangeError, Row, replace_at},
    digit::Digit,
    digit_set::DigitSet,
    group::{ConstraintGroup, GroupKind},
    position::Position,
    text::ParseBoardError,
};
