//! A single arithmetic step.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::Operation;

/// One arithmetic problem: `left operator right = result`.
///
/// Steps built through [`MathStep::new`] always satisfy
/// `result == operator.apply(left, right)`.
///
/// # Examples
///
/// ```
/// use pinquest_core::{MathStep, Operation};
///
/// let step = MathStep::new(12, Operation::Divide, 4).unwrap();
/// assert_eq!(step.result, 3);
/// assert_eq!(step.to_string(), "12 ÷ 4 = 3");
///
/// // Inexact division is rejected.
/// assert!(MathStep::new(13, Operation::Divide, 4).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MathStep {
    /// Left operand.
    pub left: u32,
    /// The operation.
    pub operator: Operation,
    /// Right operand.
    pub right: u32,
    /// The exact result.
    pub result: u32,
}

impl MathStep {
    /// Creates a step, computing its result.
    ///
    /// Returns `None` when the operation has no exact non-negative result.
    #[must_use]
    pub fn new(left: u32, operator: Operation, right: u32) -> Option<Self> {
        let result = operator.apply(left, right)?;
        Some(Self {
            left,
            operator,
            right,
            result,
        })
    }

    /// Returns `true` if the stored result matches the operation.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.operator.apply(self.left, self.right) == Some(self.result)
    }

    /// Key identifying the problem regardless of its result.
    #[must_use]
    pub const fn key(&self) -> (u32, Operation, u32) {
        (self.left, self.operator, self.right)
    }

    /// Returns the largest number that appears in the step.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.left.max(self.right).max(self.result)
    }
}

impl Display for MathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}
