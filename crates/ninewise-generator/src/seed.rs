//! Reproducible seeds for board generation.
//!
//! A [`GeneratorSeed`] is 32 bytes, displayed and parsed as 64 lowercase
//! hex characters. Seeds come from three places: OS entropy for everyday
//! generation, a phrase hashed with SHA-256 when a human-memorable seed
//! is wanted, and the hex form itself when replaying a seed printed by an
//! earlier run.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed for the board generator.
///
/// # Examples
///
/// ```
/// use ninewise_generator::GeneratorSeed;
///
/// let seed = GeneratorSeed::from_phrase("rainy tuesday");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex.parse(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorSeed([u8; 32]);

impl GeneratorSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the seed.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Creates a fresh seed from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates the seed a phrase hashes to under SHA-256.
    ///
    /// The same phrase always produces the same seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninewise_generator::GeneratorSeed;
    ///
    /// let seed = GeneratorSeed::from_phrase("abc");
    /// assert_eq!(
    ///     seed.to_string(),
    ///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    /// );
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }
}

impl fmt::Display for GeneratorSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A failure to parse a hex string as a [`GeneratorSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters.
    #[display("expected 64 hex characters, found {len}")]
    InvalidLength {
        /// The number of characters found.
        len: usize,
    },
    /// The input contained a character that is not a hex digit.
    #[display("invalid hex digit {ch:?}")]
    InvalidHexDigit {
        /// The rejected character.
        ch: char,
    },
}

impl FromStr for GeneratorSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        for (index, ch) in s.chars().enumerate() {
            let Some(value) = ch.to_digit(16) else {
                return Err(ParseSeedError::InvalidHexDigit { ch });
            };
            #[expect(clippy::cast_possible_truncation)]
            let value = value as u8;
            bytes[index / 2] = (bytes[index / 2] << 4) | value;
        }
        Ok(Self(bytes))
    }
}
