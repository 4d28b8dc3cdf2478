//! Constraint groups: the rows, columns, and boxes of a board.
//!
//! Validity is judged group by group rather than with one global digit
//! count, so every violation can be attributed to the specific row,
//! column, or box that contains the duplicate.

use derive_more::Display;

use crate::{
    board::{Board, Cell},
    digit_set::DigitSet,
};

/// Identifies which row, column, or box a [`ConstraintGroup`] covers.
///
/// Indices are 0-based. Boxes are numbered down each stack of three
/// columns and then across, matching
/// [`Position::box_index`](crate::Position::box_index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GroupKind {
    /// A horizontal row, top to bottom.
    #[display("row {index}")]
    Row {
        /// The row index.
        index: u8,
    },
    /// A vertical column, left to right.
    #[display("column {index}")]
    Column {
        /// The column index.
        index: u8,
    },
    /// A 3x3 box.
    #[display("box {index}")]
    Box {
        /// The box index.
        index: u8,
    },
}

/// The cells of one row, column, or box, tagged with which one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintGroup {
    kind: GroupKind,
    cells: Vec<Cell>,
}

impl ConstraintGroup {
    /// Creates a group from its kind and cells.
    #[must_use]
    pub fn new(kind: GroupKind, cells: Vec<Cell>) -> Self {
        Self { kind, cells }
    }

    /// Returns which row, column, or box this group covers.
    #[must_use]
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Returns the cells of the group.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns `true` if no digit occurs more than once in the group.
    ///
    /// Blank cells never conflict with anything, so a group of nine
    /// blanks is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninewise_core::{ConstraintGroup, Digit, GroupKind};
    ///
    /// let kind = GroupKind::Row { index: 0 };
    /// let group = ConstraintGroup::new(kind, vec![Some(Digit::D2), None, Some(Digit::D5)]);
    /// assert!(group.is_valid());
    ///
    /// let group = ConstraintGroup::new(kind, vec![Some(Digit::D2), None, Some(Digit::D2)]);
    /// assert!(!group.is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut seen = DigitSet::new();
        for digit in self.cells.iter().copied().flatten() {
            if seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
        true
    }
}

impl Board {
    /// Returns the board's constraint groups: the 9 rows top to bottom,
    /// the 9 columns left to right, then the 9 boxes ordered down each
    /// column band and then across, with each box's cells in row-major
    /// order.
    ///
    /// A board with no rows has no groups.
    #[must_use]
    pub fn constraint_groups(&self) -> Vec<ConstraintGroup> {
        let rows = self.rows();
        if rows.is_empty() {
            return Vec::new();
        }

        let mut groups = Vec::with_capacity(27);
        for (index, row) in (0u8..).zip(rows.iter().take(9)) {
            groups.push(ConstraintGroup::new(GroupKind::Row { index }, row.clone()));
        }
        for index in 0..9u8 {
            let cells = rows
                .iter()
                .take(9)
                .filter_map(|row| row.get(usize::from(index)).copied())
                .collect();
            groups.push(ConstraintGroup::new(GroupKind::Column { index }, cells));
        }
        for index in 0..9u8 {
            let col_start = usize::from(index / 3) * 3;
            let row_start = usize::from(index % 3) * 3;
            let cells = rows
                .iter()
                .skip(row_start)
                .take(3)
                .flat_map(|row| (col_start..col_start + 3).filter_map(|col| row.get(col).copied()))
                .collect();
            groups.push(ConstraintGroup::new(GroupKind::Box { index }, cells));
        }

        debug_assert!(
            !self.is_structurally_valid() || groups.iter().all(|group| group.cells().len() == 9)
        );
        groups
    }

    /// Returns `true` if no row, column, or box contains a duplicate
    /// digit.
    ///
    /// A board with no rows is inconsistent, matching the strict answer
    /// [`is_structurally_valid`](Self::is_structurally_valid) gives for
    /// the same board.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninewise_core::Board;
    ///
    /// assert!(Board::all_blank().is_consistent());
    /// assert!(!Board::from_rows(Vec::new()).is_consistent());
    /// ```
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.rows().is_empty() {
            return false;
        }
        self.constraint_groups()
            .iter()
            .all(ConstraintGroup::is_valid)
    }

    /// Returns the groups that contain a duplicate digit, in group order.
    #[must_use]
    pub fn invalid_groups(&self) -> Vec<ConstraintGroup> {
        self.constraint_groups()
            .into_iter()
            .filter(|group| !group.is_valid())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{digit::Digit, position::Position};

    /// Builds a board from numeric rows, treating 0 as a blank cell.
    fn board(values: [[u8; 9]; 9]) -> Board {
        let rows = values
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&value| (value != 0).then(|| Digit::from_value(value)))
                    .collect()
            })
            .collect();
        Board::from_rows(rows)
    }

    /// A solved board whose rows are left shifts of `1..=9`.
    fn solved_board() -> Board {
        board([
            [1, 2, 3, 4, 5, 6, 7, 8, 9],
            [4, 5, 6, 7, 8, 9, 1, 2, 3],
            [7, 8, 9, 1, 2, 3, 4, 5, 6],
            [2, 3, 4, 5, 6, 7, 8, 9, 1],
            [5, 6, 7, 8, 9, 1, 2, 3, 4],
            [8, 9, 1, 2, 3, 4, 5, 6, 7],
            [3, 4, 5, 6, 7, 8, 9, 1, 2],
            [6, 7, 8, 9, 1, 2, 3, 4, 5],
            [9, 1, 2, 3, 4, 5, 6, 7, 8],
        ])
    }

    fn digits(values: [u8; 9]) -> Vec<Cell> {
        values
            .iter()
            .map(|&value| (value != 0).then(|| Digit::from_value(value)))
            .collect()
    }

    #[test]
    fn test_group_order() {
        let board = solved_board();
        let groups = board.constraint_groups();
        assert_eq!(groups.len(), 27);

        assert_eq!(groups[0].kind(), GroupKind::Row { index: 0 });
        assert_eq!(groups[0].cells(), digits([1, 2, 3, 4, 5, 6, 7, 8, 9]));
        assert_eq!(groups[8].kind(), GroupKind::Row { index: 8 });

        assert_eq!(groups[9].kind(), GroupKind::Column { index: 0 });
        assert_eq!(groups[9].cells(), digits([1, 4, 7, 2, 5, 8, 3, 6, 9]));
        assert_eq!(groups[17].kind(), GroupKind::Column { index: 8 });

        // Boxes run down the left column band first, then across.
        assert_eq!(groups[18].kind(), GroupKind::Box { index: 0 });
        assert_eq!(groups[18].cells(), digits([1, 2, 3, 4, 5, 6, 7, 8, 9]));
        assert_eq!(groups[19].cells(), digits([2, 3, 4, 5, 6, 7, 8, 9, 1]));
        assert_eq!(groups[21].cells(), digits([4, 5, 6, 7, 8, 9, 1, 2, 3]));
        assert_eq!(groups[26].kind(), GroupKind::Box { index: 8 });
    }

    #[test]
    fn test_box_groups_match_box_index() {
        let board = solved_board();
        let groups = board.constraint_groups();
        for pos in Position::ALL {
            let group = &groups[18 + usize::from(pos.box_index())];
            let slot = usize::from(pos.row() % 3) * 3 + usize::from(pos.col() % 3);
            assert_eq!(group.cells()[slot], board[pos]);
        }
    }

    #[test]
    fn test_solved_board_is_consistent() {
        let board = solved_board();
        assert!(board.is_consistent());
        assert!(board.invalid_groups().is_empty());
        assert!(board.constraint_groups().iter().all(ConstraintGroup::is_valid));
    }

    #[test]
    fn test_blank_board_is_consistent() {
        let board = Board::all_blank();
        assert_eq!(board.constraint_groups().len(), 27);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_empty_board_has_no_groups() {
        let board = Board::from_rows(Vec::new());
        assert!(board.constraint_groups().is_empty());
        assert!(!board.is_consistent());
        assert!(board.invalid_groups().is_empty());
    }

    #[test]
    fn test_partial_row_with_distinct_digits_is_valid() {
        let kind = GroupKind::Row { index: 0 };
        let group = ConstraintGroup::new(kind, digits([3, 6, 0, 0, 7, 1, 2, 0, 0]));
        assert!(group.is_valid());
    }

    #[test]
    fn test_duplicate_is_attributed_to_row_and_box() {
        let mut values = [[0; 9]; 9];
        values[0][0] = 5;
        values[0][1] = 5;
        let board = board(values);

        assert!(!board.is_consistent());
        let kinds: Vec<_> = board
            .invalid_groups()
            .iter()
            .map(ConstraintGroup::kind)
            .collect();
        assert_eq!(
            kinds,
            [GroupKind::Row { index: 0 }, GroupKind::Box { index: 0 }]
        );
    }

    #[test]
    fn test_duplicate_in_column_only() {
        let mut values = [[0; 9]; 9];
        values[0][4] = 8;
        values[7][4] = 8;
        let board = board(values);

        let kinds: Vec<_> = board
            .invalid_groups()
            .iter()
            .map(ConstraintGroup::kind)
            .collect();
        assert_eq!(kinds, [GroupKind::Column { index: 4 }]);
    }

    #[test]
    fn test_group_kind_display() {
        assert_eq!(GroupKind::Row { index: 3 }.to_string(), "row 3");
        assert_eq!(GroupKind::Column { index: 7 }.to_string(), "column 7");
        assert_eq!(GroupKind::Box { index: 2 }.to_string(), "box 2");
    }

    proptest! {
        #[test]
        fn distinct_digits_form_a_valid_group(
            digits in proptest::sample::subsequence(Digit::ALL.to_vec(), 1..=9),
        ) {
            let cells: Vec<Cell> = digits.iter().copied().map(Some).collect();
            let group = ConstraintGroup::new(GroupKind::Row { index: 0 }, cells);
            prop_assert!(group.is_valid());
        }

        #[test]
        fn repeated_digit_invalidates_a_group(
            digits in proptest::sample::subsequence(Digit::ALL.to_vec(), 1..=9),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut cells: Vec<Cell> = digits.iter().copied().map(Some).collect();
            cells.push(Some(digits[pick.index(digits.len())]));
            let group = ConstraintGroup::new(GroupKind::Row { index: 0 }, cells);
            prop_assert!(!group.is_valid());
        }

        #[test]
        fn structurally_valid_boards_always_produce_27_groups(
            values in proptest::collection::vec(
                proptest::collection::vec(proptest::option::of(1u8..=9), 9),
                9,
            ),
        ) {
            let rows = values
                .iter()
                .map(|row| row.iter().map(|value| value.map(Digit::from_value)).collect())
                .collect();
            let board = Board::from_rows(rows);
            let groups = board.constraint_groups();
            prop_assert_eq!(groups.len(), 27);
            prop_assert!(groups.iter().all(|group| group.cells().len() == 9));
        }
    }
}
