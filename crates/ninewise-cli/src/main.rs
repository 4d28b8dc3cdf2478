//! Command-line tools for 9x9 sudoku boards.
//!
//! # Usage
//!
//! Check a board file for rule violations:
//!
//! ```sh
//! ninewise check puzzle.txt
//! ```
//!
//! Reprint a board file in the canonical spaced layout:
//!
//! ```sh
//! ninewise show puzzle.txt
//! ```
//!
//! Generate a random board, optionally from a reproducible seed. The seed
//! is either the 64-hex form printed by an earlier run or any phrase:
//!
//! ```sh
//! ninewise random
//! ninewise random --seed "rainy tuesday"
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
    str::FromStr as _,
};

use clap::{Parser, Subcommand};
use derive_more::{Display, Error, From};
use ninewise_core::{Board, ParseBoardError};
use ninewise_generator::{BoardGenerator, GeneratorSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a board file for structural validity and rule violations.
    Check {
        /// Path of the board file.
        path: PathBuf,
    },
    /// Parse a board file and print it in the canonical layout.
    Show {
        /// Path of the board file.
        path: PathBuf,
    },
    /// Generate a random board and print it with its seed.
    Random {
        /// Seed to replay: 64 hex characters, or any phrase to hash.
        #[arg(long, value_name = "SEED")]
        seed: Option<String>,
    },
}

#[derive(Debug, Display, Error, From)]
enum LoadError {
    #[display("failed to read board file: {_0}")]
    Io(io::Error),
    #[display("invalid board file: {_0}")]
    Parse(ParseBoardError),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let code = match cli.command {
        Command::Check { path } => check(&path),
        Command::Show { path } => show(&path),
        Command::Random { seed } => random(seed.as_deref()),
    };
    process::exit(code);
}

fn load_board(path: &Path) -> Result<Board, LoadError> {
    let contents = fs::read_to_string(path)?;
    let board = Board::from_str(&contents)?;
    log::debug!("loaded board from {}", path.display());
    Ok(board)
}

fn check(path: &Path) -> i32 {
    let board = match load_board(path) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}: {err}", path.display());
            return 2;
        }
    };

    let structurally_valid = board.is_structurally_valid();
    let consistent = board.is_consistent();
    println!("structurally valid: {structurally_valid}");
    println!("filled: {}", board.is_filled());
    println!("consistent: {consistent}");
    for group in board.invalid_groups() {
        println!("duplicate digit in {}", group.kind());
    }

    i32::from(!(structurally_valid && consistent))
}

fn show(path: &Path) -> i32 {
    match load_board(path) {
        Ok(board) => {
            print!("{}", board_output(&board));
            0
        }
        Err(err) => {
            eprintln!("{}: {err}", path.display());
            2
        }
    }
}

fn random(seed: Option<&str>) -> i32 {
    let generator = BoardGenerator::new();
    let result = match seed {
        Some(text) => generator.generate_with_seed(parse_seed(text)),
        None => generator.generate(),
    };
    log::info!("generated board from seed {}", result.seed);

    println!("Seed:");
    println!("  {}", result.seed);
    println!();
    print!("{}", board_output(&result.board));
    0
}

/// Reads `text` as a 64-hex seed, falling back to hashing it as a phrase.
fn parse_seed(text: &str) -> GeneratorSeed {
    GeneratorSeed::from_str(text).unwrap_or_else(|_| GeneratorSeed::from_phrase(text))
}

/// Renders a board for terminal output.
///
/// A board with no rows renders as the empty string; it prints as a blank
/// line instead so the command's output is never silent.
fn board_output(board: &Board) -> String {
    let mut output = board.render();
    if board.rows().is_empty() {
        output.push('\n');
    }
    output
}
