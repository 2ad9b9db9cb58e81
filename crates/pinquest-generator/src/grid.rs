use std::collections::HashSet;

use pinquest_core::{
    Code, MetaCoordinate, MetaGrid,
    meta::{GRID_SIZE, MAX_META_CODE_LEN},
};
use rand::Rng;

use crate::{GenerateError, random::random_int};

#[expect(clippy::cast_possible_truncation)]
const LAST_INDEX: u8 = GRID_SIZE as u8 - 1;
/// Random draws per coordinate before scanning for a free cell.
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Fills a grid with random digits and hides each code digit at its own
/// random cell.
///
/// Cells that are not coordinates are noise and may hold any digit.
///
/// # Errors
///
/// Returns [`GenerateError::CodeTooLong`] if the code has more digits than
/// the grid has cells.
///
/// # Examples
///
/// ```
/// use pinquest_core::Code;
/// use pinquest_generator::{PuzzleSeed, generate_meta_grid};
///
/// let code: Code = "1234".parse()?;
/// let grid = generate_meta_grid(&mut PuzzleSeed::from_phrase("grid").rng(), &code)?;
/// assert_eq!(grid.reveal(), vec![1, 2, 3, 4]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_meta_grid<R>(rng: &mut R, code: &Code) -> Result<MetaGrid, GenerateError>
where
    R: Rng + ?Sized,
{
    if code.len() > MAX_META_CODE_LEN {
        return Err(GenerateError::CodeTooLong {
            len: code.len(),
            max: MAX_META_CODE_LEN,
        });
    }

    let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
    for cell in cells.iter_mut().flatten() {
        *cell = random_int(rng, 0, 9);
    }

    let mut used = HashSet::with_capacity(code.len());
    let mut coordinates = Vec::with_capacity(code.len());
    for &pin_digit in code.digits() {
        let (row, col) = free_position(rng, &used);
        used.insert((row, col));
        cells[usize::from(row)][usize::from(col)] = pin_digit;
        coordinates.push(MetaCoordinate { row, col, pin_digit });
    }
    log::trace!("placed {} digits in meta grid", coordinates.len());

    Ok(MetaGrid { cells, coordinates })
}

/// A random cell not in `used`, or the first free cell in row-major order
/// once the random draws run out.
///
/// `used` must leave at least one cell free.
fn free_position<R>(rng: &mut R, used: &HashSet<(u8, u8)>) -> (u8, u8)
where
    R: Rng + ?Sized,
{
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let position = (random_int(rng, 0, LAST_INDEX), random_int(rng, 0, LAST_INDEX));
        if !used.contains(&position) {
            return position;
        }
    }
    log::trace!("no free cell after {MAX_PLACEMENT_ATTEMPTS} draws, scanning");
    (0..=LAST_INDEX)
        .flat_map(|row| (0..=LAST_INDEX).map(move |col| (row, col)))
        .find(|position| !used.contains(position))
        .unwrap_or((0, 0))
}
