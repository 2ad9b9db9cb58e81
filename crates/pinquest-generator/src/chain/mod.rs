//! Chain generation.
//!
//! A chain is a list of arithmetic steps whose final answer reveals a target
//! digit. Three strategies build chains, selected by [`ChainStrategy::select`]:
//!
//! - [`ChainStrategy::IndependentFacts`] when multiplication or division is
//!   enabled: unrelated facts followed by a final fact that hits the target.
//! - [`ChainStrategy::Forward`] for hard addition/subtraction: a two-digit walk
//!   from a random start that finally subtracts down to the target.
//! - [`ChainStrategy::Backward`] otherwise: steps are found by inverting
//!   operations starting from the target and read back in reverse.

use pinquest_core::{
    ChainLength, Difficulty, MathStep, Operation, OperationSet, PuzzleChain,
};
use rand::Rng;

use crate::{GenerateError, random::random_int};

mod backward;
mod forward;
mod independent;

/// The construction used for a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStrategy {
    /// Work backward from the target by inverting additions and subtractions.
    Backward,
    /// Walk forward through two-digit values, then subtract to the target.
    Forward,
    /// Unrelated facts plus a final fact built to reveal the target.
    IndependentFacts,
}

impl ChainStrategy {
    /// Picks the strategy for a difficulty and operation set.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinquest_core::{Difficulty, OperationSet};
    /// use pinquest_generator::chain::ChainStrategy;
    ///
    /// assert_eq!(
    ///     ChainStrategy::select(Difficulty::Easy, OperationSet::ADD_SUBTRACT),
    ///     ChainStrategy::Backward,
    /// );
    /// assert_eq!(
    ///     ChainStrategy::select(Difficulty::Hard, OperationSet::ADD_SUBTRACT),
    ///     ChainStrategy::Forward,
    /// );
    /// assert_eq!(
    ///     ChainStrategy::select(Difficulty::Hard, OperationSet::ALL),
    ///     ChainStrategy::IndependentFacts,
    /// );
    /// ```
    #[must_use]
    pub fn select(difficulty: Difficulty, operations: OperationSet) -> Self {
        if operations.has_multiply_or_divide() {
            Self::IndependentFacts
        } else if difficulty.is_hard() {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Generates a chain whose final answer reveals `target_digit`.
///
/// `chain_length` defaults to [`ChainLength::STANDALONE`].
///
/// # Errors
///
/// Returns [`GenerateError::EmptyOperations`] for an empty operation set and
/// [`GenerateError::DigitOutOfRange`] for a target above 9.
///
/// # Examples
///
/// ```
/// use pinquest_core::{Difficulty, OperationSet};
/// use pinquest_generator::{PuzzleSeed, generate_chain};
///
/// let mut rng = PuzzleSeed::from_phrase("example").rng();
/// let chain = generate_chain(&mut rng, 7, Difficulty::Easy, OperationSet::ADD_SUBTRACT, None)?;
/// assert_eq!(chain.steps.last().unwrap().result, 7);
/// assert!(chain.is_consistent());
/// # Ok::<(), pinquest_generator::GenerateError>(())
/// ```
pub fn generate_chain<R>(
    rng: &mut R,
    target_digit: u8,
    difficulty: Difficulty,
    operations: OperationSet,
    chain_length: Option<ChainLength>,
) -> Result<PuzzleChain, GenerateError>
where
    R: Rng + ?Sized,
{
    check_operations(operations)?;
    check_digit(target_digit)?;
    Ok(build_chain(
        rng,
        target_digit,
        difficulty,
        operations,
        chain_length.unwrap_or_default(),
    ))
}

/// Builds a chain from already validated input.
pub(crate) fn build_chain<R>(
    rng: &mut R,
    target_digit: u8,
    difficulty: Difficulty,
    operations: OperationSet,
    length: ChainLength,
) -> PuzzleChain
where
    R: Rng + ?Sized,
{
    let strategy = ChainStrategy::select(difficulty, operations);
    log::debug!("building chain to {target_digit} with {strategy:?} ({difficulty}, {operations})");
    let request = ChainRequest {
        target: u32::from(target_digit),
        difficulty,
        operations,
        length: random_int(rng, length.min(), length.max()),
    };
    let (steps, use_last_digit) = match strategy {
        ChainStrategy::Backward => (backward::build(rng, &request, length), false),
        ChainStrategy::Forward => (forward::build(rng, &request), false),
        ChainStrategy::IndependentFacts => independent::build(rng, &request),
    };
    PuzzleChain {
        target_digit,
        steps,
        use_last_digit,
    }
}

pub(crate) fn check_operations(operations: OperationSet) -> Result<(), GenerateError> {
    if operations.is_empty() {
        return Err(GenerateError::EmptyOperations);
    }
    Ok(())
}

pub(crate) fn check_digit(digit: u8) -> Result<(), GenerateError> {
    if digit > 9 {
        return Err(GenerateError::DigitOutOfRange(digit));
    }
    Ok(())
}

/// Validated input shared by the strategies.
#[derive(Debug, Clone, Copy)]
struct ChainRequest {
    target: u32,
    difficulty: Difficulty,
    operations: OperationSet,
    /// Number of steps drawn from the requested range.
    length: usize,
}

pub(crate) fn add(left: u32, right: u32) -> MathStep {
    MathStep {
        left,
        operator: Operation::Add,
        right,
        result: left + right,
    }
}

pub(crate) fn sub(left: u32, right: u32) -> MathStep {
    debug_assert!(left >= right, "{left} - {right} would be negative");
    MathStep {
        left,
        operator: Operation::Subtract,
        right,
        result: left - right,
    }
}

pub(crate) fn mul(left: u32, right: u32) -> MathStep {
    MathStep {
        left,
        operator: Operation::Multiply,
        right,
        result: left * right,
    }
}

/// `quotient * divisor ÷ divisor = quotient`
pub(crate) fn div(quotient: u32, divisor: u32) -> MathStep {
    MathStep {
        left: quotient * divisor,
        operator: Operation::Divide,
        right: divisor,
        result: quotient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_chain_valid, seeded_rng};

    #[test]
    fn test_rejects_invalid_input() {
        let mut rng = seeded_rng(0);
        assert_eq!(
            generate_chain(&mut rng, 3, Difficulty::Easy, OperationSet::empty(), None),
            Err(GenerateError::EmptyOperations)
        );
        assert_eq!(
            generate_chain(&mut rng, 10, Difficulty::Easy, OperationSet::ADD, None),
            Err(GenerateError::DigitOutOfRange(10))
        );
    }

    #[test]
    fn test_strategy_selection() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                ChainStrategy::select(difficulty, OperationSet::MULTIPLY | OperationSet::ADD),
                ChainStrategy::IndependentFacts
            );
            assert_eq!(
                ChainStrategy::select(difficulty, OperationSet::DIVIDE),
                ChainStrategy::IndependentFacts
            );
        }
        assert_eq!(
            ChainStrategy::select(Difficulty::Medium, OperationSet::SUBTRACT),
            ChainStrategy::Backward
        );
        assert_eq!(
            ChainStrategy::select(Difficulty::Hard, OperationSet::ADD),
            ChainStrategy::Forward
        );
    }

    #[test]
    fn test_every_digit_every_setting() {
        let mut rng = seeded_rng(42);
        let op_sets = [
            OperationSet::ADD_SUBTRACT,
            OperationSet::MULTIPLY | OperationSet::DIVIDE,
            OperationSet::ALL,
            OperationSet::MULTIPLY,
            OperationSet::DIVIDE,
            OperationSet::ADD | OperationSet::DIVIDE,
        ];
        for difficulty in Difficulty::ALL {
            for ops in op_sets {
                for digit in 0..=9 {
                    for _ in 0..5 {
                        let chain = generate_chain(&mut rng, digit, difficulty, ops, None).unwrap();
                        assert_chain_valid(&chain, digit);
                    }
                }
            }
        }
    }

    #[test]
    fn test_length_override_is_honored() {
        let mut rng = seeded_rng(7);
        let length = ChainLength::STORY;
        for difficulty in Difficulty::ALL {
            for ops in [OperationSet::ADD_SUBTRACT, OperationSet::ALL] {
                for digit in 0..=9 {
                    let chain = generate_chain(&mut rng, digit, difficulty, ops, Some(length)).unwrap();
                    assert!(
                        length.contains(chain.len()),
                        "{difficulty} {ops} -> {digit}: {} steps",
                        chain.len()
                    );
                }
            }
        }
    }

    #[test]
    fn test_step_helpers() {
        assert!(add(3, 4).is_correct());
        assert!(sub(9, 9).is_correct());
        assert!(mul(6, 7).is_correct());
        let step = div(0, 5);
        assert_eq!((step.left, step.right, step.result), (0, 5, 0));
        assert!(div(4, 3).is_correct());
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        fn difficulty() -> impl Strategy<Value = Difficulty> {
            prop::sample::select(Difficulty::ALL.to_vec())
        }

        fn operations() -> impl Strategy<Value = OperationSet> {
            (1u8..16).prop_map(OperationSet::from_bits_truncate)
        }

        proptest! {
            #[test]
            fn chain_reveals_target(
                digit in 0u8..=9,
                difficulty in difficulty(),
                ops in operations(),
                seed in any::<u64>(),
            ) {
                let chain = generate_chain(&mut seeded_rng(seed), digit, difficulty, ops, None).unwrap();
                prop_assert!(ChainLength::STANDALONE.contains(chain.len()));
                assert_chain_valid(&chain, digit);
                for step in chain.steps.iter().filter(|s| s.operator == Operation::Divide) {
                    prop_assert_eq!(step.left % step.right, 0);
                }
            }

            #[test]
            fn add_subtract_chains_stay_in_range(
                digit in 0u8..=9,
                difficulty in prop::sample::select(vec![Difficulty::Easy, Difficulty::Medium]),
                ops in prop::sample::select(vec![
                    OperationSet::ADD,
                    OperationSet::SUBTRACT,
                    OperationSet::ADD_SUBTRACT,
                ]),
                seed in any::<u64>(),
            ) {
                let max = difficulty.constraints().max_value;
                let chain = generate_chain(&mut seeded_rng(seed), digit, difficulty, ops, None).unwrap();
                for step in &chain.steps {
                    prop_assert!(step.max_value() <= max, "{} exceeds {}", step, max);
                }
            }

            #[test]
            fn meta_lengths_are_honored(
                digit in 0u8..=9,
                difficulty in difficulty(),
                ops in operations(),
                seed in any::<u64>(),
            ) {
                let length = difficulty.meta_chain_length();
                let chain = generate_chain(&mut seeded_rng(seed), digit, difficulty, ops, Some(length)).unwrap();
                prop_assert!(length.contains(chain.len()));
                assert_chain_valid(&chain, digit);
            }
        }
    }
}
