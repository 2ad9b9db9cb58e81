//! Checking submitted answers.
//!
//! Validation is exact: an answer is correct only if it equals the expected
//! result.

use crate::{MathStep, PuzzleChain};

/// Returns `true` if `answer` is the step's result.
///
/// # Examples
///
/// ```
/// use pinquest_core::{MathStep, Operation, validate};
///
/// let step = MathStep::new(6, Operation::Add, 1).unwrap();
/// assert!(validate::validate_step(&step, 7));
/// assert!(!validate::validate_step(&step, 8));
/// ```
#[must_use]
pub fn validate_step(step: &MathStep, answer: u32) -> bool {
    answer == step.result
}

/// Returns `true` if there is exactly one answer per step and every answer is
/// correct.
///
/// An empty answer list is never valid for a non-empty chain.
#[must_use]
pub fn validate_chain(chain: &PuzzleChain, answers: &[u32]) -> bool {
    answers.len() == chain.steps.len()
        && chain
            .steps
            .iter()
            .zip(answers)
            .all(|(step, &answer)| validate_step(step, answer))
}

/// Returns the last step's result, or the target digit if the chain is empty.
#[must_use]
pub fn chain_final_digit(chain: &PuzzleChain) -> u32 {
    chain.final_result()
}

/// Returns `true` if `left × right == answer`.
#[must_use]
pub fn validate_multiplication_answer(left: u32, right: u32, answer: u32) -> bool {
    u64::from(left) * u64::from(right) == u64::from(answer)
}
