//! Cell coordinates on a 9x9 board.

/// A cell coordinate on a 9x9 board.
///
/// Both components are in the range 0-8, with `(0, 0)` at the top-left
/// corner. Construction asserts the range, so a `Position` in hand is
/// always on the board.
///
/// # Examples
///
/// ```
/// use ninewise_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut index = 0;
        while index < all.len() {
            #[expect(clippy::cast_possible_truncation)]
            let pos = Self::new((index / 9) as u8, (index % 9) as u8);
            all[index] = pos;
            index += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9);
        assert!(col < 9);
        Self { row, col }
    }

    /// Returns the row index (0-8, top to bottom).
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8, left to right).
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Returns the index of the 3x3 box containing this position.
    ///
    /// Boxes are numbered 0-8 down each stack of three columns, then
    /// across: box 0 is the top-left, box 2 the bottom-left, box 3 the
    /// top-middle, and box 8 the bottom-right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninewise_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_index(), 0);
    /// assert_eq!(Position::new(8, 0).box_index(), 2);
    /// assert_eq!(Position::new(0, 8).box_index(), 6);
    /// assert_eq!(Position::new(4, 4).box_index(), 4);
    /// ```
    #[must_use]
    pub const fn box_index(&self) -> u8 {
        (self.col / 3) * 3 + self.row / 3
    }
}
