//! Random 9x9 board generation with reproducible seeds.
//!
//! This crate draws random boards for the `ninewise` tools and their
//! property tests. Randomness always flows in from the caller: the free
//! functions in [`generator`] take any [`rand::Rng`], and
//! [`BoardGenerator`] derives its RNG from an explicit [`GeneratorSeed`]
//! that is returned alongside every board.
//!
//! # Overview
//!
//! - [`generator`]: Drawing cells, rows, boards, and positions, and the
//!   seed-driven [`BoardGenerator`]
//! - [`seed`]: [`GeneratorSeed`] with its hex and phrase forms
//!
//! # Examples
//!
//! ```
//! use ninewise_generator::{BoardGenerator, GeneratorSeed};
//!
//! let generator = BoardGenerator::new();
//! let result = generator.generate_with_seed(GeneratorSeed::from_phrase("docs"));
//!
//! // The board is a full 9x9 grid and carries the seed that rebuilds it.
//! assert!(result.board.is_structurally_valid());
//! assert_eq!(result.seed, GeneratorSeed::from_phrase("docs"));
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{
        BoardGenerator, GeneratedBoard, random_board, random_cell, random_position, random_row,
    },
    seed::{GeneratorSeed, ParseSeedError},
};
