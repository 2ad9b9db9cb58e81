//! Difficulty levels, their operand constraints, and chain length ranges.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Puzzle difficulty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Values up to 10, no carrying, single-digit operands.
    Easy,
    /// Values up to 18, carrying allowed, single-digit operands.
    Medium,
    /// Values up to 99, carrying allowed, two-digit operands.
    Hard,
}

/// Operand constraints for a [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConstraints {
    /// Largest value any operand or intermediate result may take.
    pub max_value: u32,
    /// Whether an addition may exceed 10.
    pub allow_carry: bool,
    /// Whether operands must have two digits.
    pub two_digit: bool,
}

impl Difficulty {
    /// All difficulties from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the operand constraints for this difficulty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinquest_core::Difficulty;
    ///
    /// let easy = Difficulty::Easy.constraints();
    /// assert_eq!(easy.max_value, 10);
    /// assert!(!easy.allow_carry);
    /// assert!(Difficulty::Hard.constraints().two_digit);
    /// ```
    #[must_use]
    pub const fn constraints(self) -> DifficultyConstraints {
        match self {
            Self::Easy => DifficultyConstraints {
                max_value: 10,
                allow_carry: false,
                two_digit: false,
            },
            Self::Medium => DifficultyConstraints {
                max_value: 18,
                allow_carry: true,
                two_digit: false,
            },
            Self::Hard => DifficultyConstraints {
                max_value: 99,
                allow_carry: true,
                two_digit: true,
            },
        }
    }

    /// Largest factor used in multiplication and division facts.
    #[must_use]
    pub const fn max_factor(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 12,
            Self::Hard => 15,
        }
    }

    /// Chain length used for the row and column chains of a meta puzzle.
    #[must_use]
    pub const fn meta_chain_length(self) -> ChainLength {
        match self {
            Self::Easy => ChainLength { min: 5, max: 7 },
            Self::Medium => ChainLength { min: 7, max: 10 },
            Self::Hard => ChainLength { min: 10, max: 14 },
        }
    }

    /// Returns the lowercase name of this difficulty.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Difficulty`] name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {name:?}")]
pub struct DifficultyParseError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DifficultyParseError { name: s.to_owned() })
    }
}

/// An inclusive range of chain lengths (number of steps).
///
/// # Examples
///
/// ```
/// use pinquest_core::ChainLength;
///
/// let range = ChainLength::new(4, 6)?;
/// assert!(range.contains(5));
/// assert!(ChainLength::new(6, 4).is_err());
/// # Ok::<(), pinquest_core::ChainLengthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainLength {
    min: usize,
    max: usize,
}

/// Errors returned by [`ChainLength::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ChainLengthError {
    /// A chain needs at least one step.
    #[display("chain length must be at least 1")]
    Zero,
    /// The minimum is larger than the maximum.
    #[display("minimum chain length {min} exceeds maximum {max}")]
    MinExceedsMax {
        /// Requested minimum.
        min: usize,
        /// Requested maximum.
        max: usize,
    },
}

impl ChainLength {
    /// Default length of a standalone puzzle chain.
    pub const STANDALONE: Self = Self { min: 3, max: 5 };
    /// Length of the longer chains used by story puzzles.
    pub const STORY: Self = Self { min: 6, max: 9 };

    /// Creates a range of chain lengths.
    ///
    /// # Errors
    ///
    /// Returns [`ChainLengthError`] if `min` is zero or larger than `max`.
    pub const fn new(min: usize, max: usize) -> Result<Self, ChainLengthError> {
        if min == 0 {
            return Err(ChainLengthError::Zero);
        }
        if min > max {
            return Err(ChainLengthError::MinExceedsMax { min, max });
        }
        Ok(Self { min, max })
    }

    /// Shortest allowed chain.
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    /// Longest allowed chain.
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Returns `true` if `len` lies within the range.
    #[must_use]
    pub const fn contains(self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

impl Default for ChainLength {
    fn default() -> Self {
        Self::STANDALONE
    }
}
