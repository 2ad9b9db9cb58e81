//! The 10×10 grid used by meta puzzles.

use serde::{Deserialize, Serialize};

/// Number of rows and columns in a [`MetaGrid`].
pub const GRID_SIZE: usize = 10;

/// Largest code a meta grid can hold (one coordinate per cell).
pub const MAX_META_CODE_LEN: usize = GRID_SIZE * GRID_SIZE;

/// The grid position of one code digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaCoordinate {
    /// Row index (0-9).
    pub row: u8,
    /// Column index (0-9).
    pub col: u8,
    /// The code digit stored at this position.
    pub pin_digit: u8,
}

/// A grid of random digits hiding the code digits at known coordinates.
///
/// Every coordinate's cell holds its `pin_digit`, and no two coordinates share
/// a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaGrid {
    /// Cell values, indexed as `cells[row][col]`.
    pub cells: [[u8; GRID_SIZE]; GRID_SIZE],
    /// Coordinates of the code digits, in code order.
    pub coordinates: Vec<MetaCoordinate>,
}

impl MetaGrid {
    /// Returns the digit at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn digit_at(&self, row: u32, col: u32) -> Option<u8> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    /// Reads the digits stored at the coordinates, in order.
    #[must_use]
    pub fn reveal(&self) -> Vec<u8> {
        self.coordinates
            .iter()
            .map(|c| self.cells[usize::from(c.row)][usize::from(c.col)])
            .collect()
    }

    /// Returns `true` if the coordinates are distinct, in range, and point at
    /// cells holding their digits.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = [[false; GRID_SIZE]; GRID_SIZE];
        self.coordinates.iter().all(|c| {
            let (row, col) = (usize::from(c.row), usize::from(c.col));
            if row >= GRID_SIZE || col >= GRID_SIZE || seen[row][col] {
                return false;
            }
            seen[row][col] = true;
            self.cells[row][col] == c.pin_digit
        })
    }
}
