use pinquest_core::{ChainLength, Code, Difficulty, OperationSet, Puzzle};
use rand::Rng;

use crate::{
    GenerateError,
    chain::{build_chain, check_operations},
    grid::generate_meta_grid,
};

/// Generates one chain per code digit, in code order.
///
/// Chains use the default [`ChainLength::STANDALONE`] range.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyOperations`] for an empty operation set.
pub fn generate_puzzle<R>(
    rng: &mut R,
    code: &Code,
    difficulty: Difficulty,
    operations: OperationSet,
) -> Result<Puzzle, GenerateError>
where
    R: Rng + ?Sized,
{
    generate_puzzle_with_length(rng, code, difficulty, operations, ChainLength::STANDALONE)
}

/// Like [`generate_puzzle`], with an explicit chain length range.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyOperations`] for an empty operation set.
pub fn generate_puzzle_with_length<R>(
    rng: &mut R,
    code: &Code,
    difficulty: Difficulty,
    operations: OperationSet,
    length: ChainLength,
) -> Result<Puzzle, GenerateError>
where
    R: Rng + ?Sized,
{
    check_operations(operations)?;
    Ok(build_puzzle(rng, code, difficulty, operations, length))
}

/// Builds a plain puzzle from an already validated operation set.
pub(crate) fn build_puzzle<R>(
    rng: &mut R,
    code: &Code,
    difficulty: Difficulty,
    operations: OperationSet,
    length: ChainLength,
) -> Puzzle
where
    R: Rng + ?Sized,
{
    let chains = code
        .digits()
        .iter()
        .map(|&digit| build_chain(rng, digit, difficulty, operations, length))
        .collect();
    Puzzle {
        code: code.clone(),
        chains,
        meta: None,
    }
}

/// Generates a meta puzzle: a grid hiding the code plus a row chain and a
/// column chain for every hidden digit.
///
/// Chain lengths follow [`Difficulty::meta_chain_length`].
///
/// # Errors
///
/// Returns [`GenerateError::EmptyOperations`] for an empty operation set and
/// [`GenerateError::CodeTooLong`] if the code does not fit in the grid.
///
/// # Examples
///
/// ```
/// use pinquest_core::{Code, Difficulty, OperationSet};
/// use pinquest_generator::{PuzzleSeed, generate_meta_puzzle};
///
/// let code: Code = "1234".parse()?;
/// let mut rng = PuzzleSeed::from_phrase("meta").rng();
/// let puzzle = generate_meta_puzzle(&mut rng, &code, Difficulty::Easy, OperationSet::ADD_SUBTRACT)?;
/// assert_eq!(puzzle.chains.len(), 8);
/// assert_eq!(puzzle.revealed_code(), Some(vec![1, 2, 3, 4]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_meta_puzzle<R>(
    rng: &mut R,
    code: &Code,
    difficulty: Difficulty,
    operations: OperationSet,
) -> Result<Puzzle, GenerateError>
where
    R: Rng + ?Sized,
{
    check_operations(operations)?;
    let grid = generate_meta_grid(rng, code)?;
    let length = difficulty.meta_chain_length();
    let mut chains = Vec::with_capacity(2 * grid.coordinates.len());
    for coordinate in &grid.coordinates {
        chains.push(build_chain(rng, coordinate.row, difficulty, operations, length));
        chains.push(build_chain(rng, coordinate.col, difficulty, operations, length));
    }
    Ok(Puzzle {
        code: code.clone(),
        chains,
        meta: Some(grid),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_chain_valid, seeded_rng};

    #[test]
    fn test_zero_code_easy() {
        let mut rng = seeded_rng(61);
        let code: Code = "0000".parse().unwrap();
        let puzzle = generate_puzzle(&mut rng, &code, Difficulty::Easy, OperationSet::ADD_SUBTRACT).unwrap();
        assert_eq!(puzzle.chains.len(), 4);
        assert!(puzzle.meta.is_none());
        for chain in &puzzle.chains {
            assert_chain_valid(chain, 0);
            assert!(ChainLength::STANDALONE.contains(chain.len()));
            assert!(chain.steps.iter().all(|step| step.max_value() <= 10));
        }
        assert!(puzzle.is_consistent());
    }

    #[test]
    fn test_chains_follow_code_order() {
        let mut rng = seeded_rng(62);
        let code: Code = "90210".parse().unwrap();
        for difficulty in Difficulty::ALL {
            for ops in [OperationSet::ADD_SUBTRACT, OperationSet::ALL] {
                let puzzle = generate_puzzle(&mut rng, &code, difficulty, ops).unwrap();
                assert_eq!(puzzle.chains.len(), code.len());
                for (chain, &digit) in puzzle.chains.iter().zip(code.digits()) {
                    assert_chain_valid(chain, digit);
                }
                assert_eq!(puzzle.revealed_code().unwrap(), code.digits());
            }
        }
    }

    #[test]
    fn test_story_length() {
        let mut rng = seeded_rng(63);
        let code: Code = "3141".parse().unwrap();
        let puzzle = generate_puzzle_with_length(
            &mut rng,
            &code,
            Difficulty::Medium,
            OperationSet::ADD_SUBTRACT,
            ChainLength::STORY,
        )
        .unwrap();
        assert!(puzzle.chains.iter().all(|chain| ChainLength::STORY.contains(chain.len())));
    }

    #[test]
    fn test_empty_operations() {
        let mut rng = seeded_rng(64);
        let code: Code = "1".parse().unwrap();
        assert_eq!(
            generate_puzzle(&mut rng, &code, Difficulty::Easy, OperationSet::empty()),
            Err(GenerateError::EmptyOperations)
        );
        assert_eq!(
            generate_meta_puzzle(&mut rng, &code, Difficulty::Easy, OperationSet::empty()),
            Err(GenerateError::EmptyOperations)
        );
    }

    #[test]
    fn test_meta_puzzle_pairs_chains_with_coordinates() {
        let mut rng = seeded_rng(65);
        let code: Code = "7351".parse().unwrap();
        for difficulty in Difficulty::ALL {
            for ops in [OperationSet::ADD_SUBTRACT, OperationSet::MULTIPLY | OperationSet::DIVIDE] {
                let puzzle = generate_meta_puzzle(&mut rng, &code, difficulty, ops).unwrap();
                let grid = puzzle.meta.as_ref().unwrap();
                assert_eq!(puzzle.chains.len(), 2 * code.len());
                assert_eq!(grid.coordinates.len(), code.len());
                for (i, coordinate) in grid.coordinates.iter().enumerate() {
                    assert_chain_valid(&puzzle.chains[2 * i], coordinate.row);
                    assert_chain_valid(&puzzle.chains[2 * i + 1], coordinate.col);
                }
                let range = difficulty.meta_chain_length();
                assert!(puzzle.chains.iter().all(|chain| range.contains(chain.len())));
                assert!(puzzle.is_consistent());
                assert_eq!(puzzle.revealed_code().unwrap(), code.digits());
            }
        }
    }
}
