//! Chains of steps that reveal a single digit.

use serde::{Deserialize, Serialize};

use crate::MathStep;

/// An ordered list of steps whose final answer reveals `target_digit`.
///
/// When `use_last_digit` is `false`, the last step's result equals the target.
/// When it is `true`, only the ones digit of the last result does; this is the
/// case for chains ending in a multiplication with a two-digit product.
///
/// # Examples
///
/// ```
/// use pinquest_core::{MathStep, Operation, PuzzleChain};
///
/// let chain = PuzzleChain {
///     target_digit: 7,
///     steps: vec![
///         MathStep::new(3, Operation::Multiply, 4).unwrap(),
///         MathStep::new(9, Operation::Multiply, 3).unwrap(),
///     ],
///     use_last_digit: true,
/// };
/// assert_eq!(chain.final_result(), 27);
/// assert_eq!(chain.revealed_digit(), 7);
/// assert!(chain.is_consistent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleChain {
    /// The digit (0-9) this chain reveals.
    pub target_digit: u8,
    /// The steps, in solving order.
    pub steps: Vec<MathStep>,
    /// Whether the ones digit of the final result is the revealed digit.
    #[serde(default)]
    pub use_last_digit: bool,
}

impl PuzzleChain {
    /// Result of the last step, or the target digit for an empty chain.
    #[must_use]
    pub fn final_result(&self) -> u32 {
        self.steps
            .last()
            .map_or(u32::from(self.target_digit), |step| step.result)
    }

    /// The digit a solver reads off after answering every step.
    #[must_use]
    pub fn revealed_digit(&self) -> u32 {
        if self.use_last_digit {
            self.final_result() % 10
        } else {
            self.final_result()
        }
    }

    /// Returns `true` if every step is arithmetically correct and the chain
    /// reveals its target digit.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        !self.steps.is_empty()
            && self.steps.iter().all(MathStep::is_correct)
            && self.revealed_digit() == u32::from(self.target_digit)
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the chain has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
