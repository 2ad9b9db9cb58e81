use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that makes puzzle generation reproducible.
///
/// Seeds print as 64 lowercase hex characters and parse back from the same
/// form. The same seed, code, and settings always produce the same puzzle.
///
/// # Examples
///
/// ```
/// use pinquest_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("treasure hunt");
/// let parsed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(parsed, seed);
/// # Ok::<(), pinquest_generator::SeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Errors returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedError {
    /// The input is not 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the input.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("invalid hex digit at position {index}")]
    InvalidHex {
        /// Byte position of the first non-hex character.
        index: usize,
    },
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the random generator driven by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(SeedError::InvalidLength { len: s.len() });
        }
        if let Some(index) = s.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(SeedError::InvalidHex { index });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let index = i * 2;
            *byte = u8::from_str_radix(&s[index..index + 2], 16)
                .map_err(|_| SeedError::InvalidHex { index })?;
        }
        Ok(Self(bytes))
    }
}
