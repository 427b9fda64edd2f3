//! Reproducible seeds for the engine's random stream.
//!
//! A [`PuzzleSeed`] is 32 opaque bytes, printed and parsed as 64 lowercase
//! hex characters. The PRNG state is derived by hashing the seed bytes, so
//! any two engines built from the same seed walk identical generate, carve,
//! and solve streams.

use std::{fmt, str::FromStr};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one reproducible random stream.
///
/// # Examples
///
/// ```
/// use ninefold_engine::PuzzleSeed;
///
/// let seed = PuzzleSeed::random();
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives the PRNG for this seed.
    ///
    /// The seed bytes are hashed so that structured input (all zeros, short
    /// counters) still produces a well-mixed initial state.
    pub(crate) fn rng(self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut state = [0; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let mut bytes = [0; 32];
        for byte in &mut bytes {
            let hi = next_hex_value(&mut chars, s)?;
            let lo = next_hex_value(&mut chars, s)?;
            *byte = hi << 4 | lo;
        }
        if chars.next().is_some() {
            return Err(ParseSeedError::Length {
                len: s.chars().count(),
            });
        }
        Ok(Self(bytes))
    }
}

fn next_hex_value(chars: &mut std::str::Chars<'_>, s: &str) -> Result<u8, ParseSeedError> {
    let c = chars.next().ok_or(ParseSeedError::Length {
        len: s.chars().count(),
    })?;
    #[expect(clippy::cast_possible_truncation)]
    let value = c
        .to_digit(16)
        .ok_or(ParseSeedError::UnexpectedCharacter { c })? as u8;
    Ok(value)
}

/// An error raised when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    Length {
        /// Number of characters found.
        len: usize,
    },
    /// The text contains a non-hex character.
    #[display("unexpected character {c:?} in seed")]
    UnexpectedCharacter {
        /// The offending character.
        c: char,
    },
}
