//! Random board generation.
//!
//! The free functions draw cells, rows, boards, and positions from any
//! [`Rng`] passed in by the caller; no randomness source is ever reached
//! for implicitly. [`BoardGenerator`] wraps the same drawing behind a
//! [`GeneratorSeed`], so every board it hands out can be regenerated.

use ninewise_core::{Board, Cell, Digit, Position, Row};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::seed::GeneratorSeed;

/// Draws one cell: blank nine times as often as a digit, with digits
/// uniform in 1-9.
///
/// The blank bias keeps randomly drawn boards sparse, so most of them
/// stay free of forced duplicate digits.
pub fn random_cell(rng: &mut impl Rng) -> Cell {
    if rng.random_range(0..10) == 0 {
        Some(Digit::from_value(rng.random_range(1..=9)))
    } else {
        None
    }
}

/// Draws a row of 9 independent cells.
pub fn random_row(rng: &mut impl Rng) -> Row {
    (0..9).map(|_| random_cell(rng)).collect()
}

/// Draws one row of 9 cells and repeats it as all nine rows.
///
/// The result is always structurally valid, but its rows are identical
/// copies of a single draw, so any row containing a digit repeats that
/// digit down the full column. Boards from this function are suitable
/// for exercising shape handling and the text codec, never for
/// consistency testing.
pub fn random_board(rng: &mut impl Rng) -> Board {
    let row = random_row(rng);
    Board::from_rows(vec![row; 9])
}

/// Draws a position uniformly over the 9x9 board.
pub fn random_position(rng: &mut impl Rng) -> Position {
    Position::new(rng.random_range(0..9), rng.random_range(0..9))
}

/// Generates boards from reproducible seeds.
///
/// # Examples
///
/// ```
/// use ninewise_generator::{BoardGenerator, GeneratorSeed};
///
/// let generator = BoardGenerator::new();
/// let seed = GeneratorSeed::from_phrase("rainy tuesday");
///
/// let first = generator.generate_with_seed(seed);
/// let second = generator.generate_with_seed(seed);
/// assert_eq!(first, second);
/// assert_eq!(first.seed, seed);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardGenerator;

impl BoardGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a board from a fresh entropy seed.
    ///
    /// The seed travels with the board, so the result can be reproduced
    /// later with [`generate_with_seed`](Self::generate_with_seed).
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(GeneratorSeed::from_entropy())
    }

    /// Generates the board determined by `seed`.
    #[expect(clippy::unused_self)]
    #[must_use]
    pub fn generate_with_seed(&self, seed: GeneratorSeed) -> GeneratedBoard {
        let mut rng = Pcg64::from_seed(seed.to_bytes());
        let board = random_board(&mut rng);
        GeneratedBoard { board, seed }
    }
}

/// A generated board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The generated board.
    pub board: Board,
    /// The seed that regenerates [`board`](Self::board).
    pub seed: GeneratorSeed,
}
