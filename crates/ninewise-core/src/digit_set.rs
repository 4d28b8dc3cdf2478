//! A compact set of sudoku digits.
//!
//! # Examples
//!
//! ```
//! use ninewise_core::{Digit, DigitSet};
//!
//! let mut seen = DigitSet::new();
//! assert!(seen.is_empty());
//!
//! seen.insert(Digit::D5);
//! assert!(seen.contains(Digit::D5));
//! assert!(!seen.contains(Digit::D6));
//! assert_eq!(seen.len(), 1);
//! ```

use crate::digit::Digit;

/// A set of [`Digit`]s backed by a bitmask.
///
/// Membership checks and updates are single bit operations, which keeps
/// duplicate scans over constraint groups cheap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Returns `true` if `digit` is in the set.
    #[must_use]
    pub const fn contains(&self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Adds `digit` to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes `digit` from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Digit> {
        let set = *self;
        Digit::ALL.into_iter().filter(move |&digit| set.contains(digit))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}
