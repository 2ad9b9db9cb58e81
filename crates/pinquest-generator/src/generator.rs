use pinquest_core::{ChainLength, Code, Difficulty, GameMode, OperationSet, Puzzle};

use crate::{
    GenerateError, PuzzleSeed,
    assemble::{build_puzzle, generate_meta_puzzle},
    chain::check_operations,
    multiplication::generate_multiplication_pin_puzzle,
};

/// A generated puzzle together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed the puzzle was generated from.
    pub seed: PuzzleSeed,
    /// The puzzle.
    pub puzzle: Puzzle,
}

/// Generates puzzles for a fixed difficulty and operation set.
///
/// Every method has a `_with_seed` twin; the seed is returned with the
/// puzzle so the same puzzle can be generated again.
///
/// # Examples
///
/// ```
/// use pinquest_core::{Code, Difficulty, OperationSet};
/// use pinquest_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(Difficulty::Medium, OperationSet::ADD_SUBTRACT)?;
/// let code: Code = "2468".parse()?;
///
/// let first = generator.generate(&code);
/// let again = generator.generate_with_seed(&code, first.seed);
/// assert_eq!(first, again);
/// assert_eq!(first.puzzle.revealed_code(), Some(vec![2, 4, 6, 8]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
    operations: OperationSet,
    chain_length: ChainLength,
}

impl PuzzleGenerator {
    /// Creates a generator using [`ChainLength::STANDALONE`] chains.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyOperations`] for an empty operation set.
    pub fn new(difficulty: Difficulty, operations: OperationSet) -> Result<Self, GenerateError> {
        check_operations(operations)?;
        Ok(Self {
            difficulty,
            operations,
            chain_length: ChainLength::STANDALONE,
        })
    }

    /// Overrides the chain length of plain puzzles.
    ///
    /// Meta puzzles always use [`Difficulty::meta_chain_length`].
    #[must_use]
    pub const fn with_chain_length(mut self, chain_length: ChainLength) -> Self {
        self.chain_length = chain_length;
        self
    }

    /// Returns the difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the enabled operations.
    #[must_use]
    pub const fn operations(&self) -> OperationSet {
        self.operations
    }

    /// Returns the chain length range of plain puzzles.
    #[must_use]
    pub const fn chain_length(&self) -> ChainLength {
        self.chain_length
    }

    /// Generates a plain puzzle from a random seed.
    #[must_use]
    pub fn generate(&self, code: &Code) -> GeneratedPuzzle {
        self.generate_with_seed(code, PuzzleSeed::random())
    }

    /// Generates a plain puzzle from `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, code: &Code, seed: PuzzleSeed) -> GeneratedPuzzle {
        log::debug!("generating {} puzzle for {} digits from seed {seed}", self.difficulty, code.len());
        let puzzle = build_puzzle(
            &mut seed.rng(),
            code,
            self.difficulty,
            self.operations,
            self.chain_length,
        );
        GeneratedPuzzle { seed, puzzle }
    }

    /// Generates a meta puzzle from a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::CodeTooLong`] if the code does not fit in the
    /// grid.
    pub fn generate_meta(&self, code: &Code) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_meta_with_seed(code, PuzzleSeed::random())
    }

    /// Generates a meta puzzle from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::CodeTooLong`] if the code does not fit in the
    /// grid.
    pub fn generate_meta_with_seed(
        &self,
        code: &Code,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        log::debug!("generating {} meta puzzle for {} digits from seed {seed}", self.difficulty, code.len());
        let puzzle = generate_meta_puzzle(&mut seed.rng(), code, self.difficulty, self.operations)?;
        Ok(GeneratedPuzzle { seed, puzzle })
    }

    /// Generates a multiplication PIN puzzle from a random seed.
    ///
    /// The difficulty and operations do not apply to this puzzle kind.
    #[must_use]
    pub fn generate_multiplication_pin(&self, code: &Code) -> GeneratedPuzzle {
        self.generate_multiplication_pin_with_seed(code, PuzzleSeed::random())
    }

    /// Generates a multiplication PIN puzzle from `seed`.
    #[must_use]
    #[expect(clippy::unused_self)]
    pub fn generate_multiplication_pin_with_seed(&self, code: &Code, seed: PuzzleSeed) -> GeneratedPuzzle {
        let puzzle = generate_multiplication_pin_puzzle(&mut seed.rng(), code);
        GeneratedPuzzle { seed, puzzle }
    }

    /// Generates the puzzle kind `mode` is played with from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::CodeTooLong`] if a meta mode is requested and
    /// the code does not fit in the grid.
    pub fn generate_for_mode(
        &self,
        code: &Code,
        mode: GameMode,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        if mode.is_meta() {
            self.generate_meta_with_seed(code, seed)
        } else {
            Ok(self.generate_with_seed(code, seed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_rejects_empty_operations() {
        assert_eq!(
            PuzzleGenerator::new(Difficulty::Easy, OperationSet::empty()),
            Err(GenerateError::EmptyOperations)
        );
    }

    #[test]
    fn test_builder_and_getters() {
        let generator = PuzzleGenerator::new(Difficulty::Hard, OperationSet::ALL)
            .unwrap()
            .with_chain_length(ChainLength::STORY);
        assert_eq!(generator.difficulty(), Difficulty::Hard);
        assert_eq!(generator.operations(), OperationSet::ALL);
        assert_eq!(generator.chain_length(), ChainLength::STORY);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let seed = PuzzleSeed::from_phrase("reproducible");
        let code = code("1357");
        for difficulty in Difficulty::ALL {
            for ops in [OperationSet::ADD_SUBTRACT, OperationSet::ALL] {
                let generator = PuzzleGenerator::new(difficulty, ops).unwrap();
                assert_eq!(
                    generator.generate_with_seed(&code, seed),
                    generator.generate_with_seed(&code, seed)
                );
                assert_eq!(
                    generator.generate_meta_with_seed(&code, seed).unwrap(),
                    generator.generate_meta_with_seed(&code, seed).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let generator = PuzzleGenerator::new(Difficulty::Medium, OperationSet::ADD_SUBTRACT).unwrap();
        let code = code("5555");
        let a = generator.generate_with_seed(&code, PuzzleSeed::from_phrase("a"));
        let b = generator.generate_with_seed(&code, PuzzleSeed::from_phrase("b"));
        assert_ne!(a.puzzle, b.puzzle);
        assert!(a.puzzle.is_consistent() && b.puzzle.is_consistent());
    }

    #[test]
    fn test_generate_reports_seed() {
        let generator = PuzzleGenerator::new(Difficulty::Easy, OperationSet::ADD).unwrap();
        let code = code("42");
        let generated = generator.generate(&code);
        assert_eq!(generator.generate_with_seed(&code, generated.seed), generated);

        let generated = generator.generate_multiplication_pin(&code);
        assert_eq!(
            generator.generate_multiplication_pin_with_seed(&code, generated.seed),
            generated
        );
        assert!(generated.puzzle.is_consistent());
    }

    #[test]
    fn test_generate_for_mode() {
        let generator = PuzzleGenerator::new(Difficulty::Medium, OperationSet::ALL).unwrap();
        let code = code("8080");
        let seed = PuzzleSeed::from_phrase("modes");
        for mode in GameMode::ALL {
            let generated = generator.generate_for_mode(&code, mode, seed).unwrap();
            assert_eq!(generated.puzzle.is_meta(), mode.is_meta());
            assert!(generated.puzzle.is_consistent());
        }
    }

    #[test]
    fn test_meta_rejects_long_codes() {
        let generator = PuzzleGenerator::new(Difficulty::Easy, OperationSet::ADD).unwrap();
        let long = Code::from_digits(&[5; 101]).unwrap();
        assert!(matches!(
            generator.generate_meta(&long),
            Err(GenerateError::CodeTooLong { len: 101, max: 100 })
        ));
        assert_eq!(generator.generate(&long).puzzle.chains.len(), 101);
    }
}
