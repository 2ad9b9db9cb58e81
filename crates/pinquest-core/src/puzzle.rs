//! Complete puzzles and the modes they are played in.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Code, MetaGrid, PuzzleChain};

/// A generated puzzle for one code.
///
/// Without `meta`, `chains[i]` reveals digit `i` of the code. With `meta`,
/// chains come in pairs: `chains[2 * i]` reveals the row and
/// `chains[2 * i + 1]` the column of `meta.coordinates[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The code the puzzle reveals.
    pub code: Code,
    /// The chains, in solving order.
    pub chains: Vec<PuzzleChain>,
    /// The coordinate grid of a meta puzzle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaGrid>,
}

impl Puzzle {
    /// Returns `true` for a meta (grid) puzzle.
    #[must_use]
    pub fn is_meta(&self) -> bool {
        self.meta.is_some()
    }

    /// Solves the puzzle from its chains and returns the revealed digits.
    ///
    /// Returns `None` if the chains do not line up with the puzzle shape or a
    /// meta chain pair points outside the grid.
    #[must_use]
    pub fn revealed_code(&self) -> Option<Vec<u8>> {
        match &self.meta {
            None => self
                .chains
                .iter()
                .map(|chain| u8::try_from(chain.revealed_digit()).ok())
                .collect(),
            Some(grid) => {
                if self.chains.len() != 2 * grid.coordinates.len() {
                    return None;
                }
                self.chains
                    .chunks_exact(2)
                    .map(|pair| grid.digit_at(pair[0].revealed_digit(), pair[1].revealed_digit()))
                    .collect()
            }
        }
    }

    /// Returns `true` if every chain is consistent and solving the puzzle
    /// yields its code.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.chains.iter().all(PuzzleChain::is_consistent)
            && self.meta.as_ref().is_none_or(MetaGrid::is_consistent)
            && self.revealed_code().as_deref() == Some(self.code.digits())
    }
}

/// How a puzzle is presented to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Solved on screen, one chain per code digit.
    #[default]
    Digital,
    /// Printed worksheet, one chain per code digit.
    Print,
    /// Solved on screen through the coordinate grid.
    Meta,
    /// Printed worksheet with the coordinate grid.
    MetaPrint,
}

impl GameMode {
    /// All modes.
    pub const ALL: [Self; 4] = [Self::Digital, Self::Print, Self::Meta, Self::MetaPrint];

    /// Returns `true` if puzzles in this mode use the coordinate grid.
    #[must_use]
    pub const fn is_meta(self) -> bool {
        matches!(self, Self::Meta | Self::MetaPrint)
    }

    /// Returns `true` if this mode produces a printed worksheet.
    #[must_use]
    pub const fn is_print(self) -> bool {
        matches!(self, Self::Print | Self::MetaPrint)
    }

    /// Returns the kebab-case name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Print => "print",
            Self::Meta => "meta",
            Self::MetaPrint => "meta-print",
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`GameMode`] name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown game mode: {name:?}")]
pub struct GameModeParseError {
    name: String,
}

impl FromStr for GameMode {
    type Err = GameModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameModeParseError { name: s.to_owned() })
    }
}

/// Parameters of a multiplication table drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicationTableConfig {
    /// The number whose table is practiced.
    pub number: u32,
    /// The largest multiplier (inclusive).
    pub max_multiplier: u32,
}

impl MultiplicationTableConfig {
    /// Default largest multiplier.
    pub const DEFAULT_MAX_MULTIPLIER: u32 = 10;

    /// Creates a config for `number` with the default largest multiplier.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self {
            number,
            max_multiplier: Self::DEFAULT_MAX_MULTIPLIER,
        }
    }
}
