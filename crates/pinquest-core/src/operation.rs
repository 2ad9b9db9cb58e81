//! Arithmetic operations and operation sets.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// One of the four arithmetic operations a puzzle step can use.
///
/// # Examples
///
/// ```
/// use pinquest_core::Operation;
///
/// assert_eq!(Operation::Add.apply(2, 3), Some(5));
/// assert_eq!(Operation::Subtract.apply(2, 3), None);
/// assert_eq!(Operation::Divide.apply(12, 4), Some(3));
/// assert_eq!(Operation::Divide.apply(13, 4), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Multiplication (`×`).
    Multiply,
    /// Division (`÷`). Only exact quotients are allowed.
    Divide,
}

impl Operation {
    /// All operations in declaration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the symbol used when printing a step.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Applies the operation using exact integer arithmetic.
    ///
    /// Returns `None` when the result is not a non-negative integer: a negative
    /// difference, a division with a remainder or by zero, or an overflow.
    #[must_use]
    pub fn apply(self, left: u32, right: u32) -> Option<u32> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Subtract => left.checked_sub(right),
            Self::Multiply => left.checked_mul(right),
            Self::Divide => (left.checked_rem(right)? == 0).then(|| left / right),
        }
    }

    /// Returns the single-element set containing this operation.
    #[must_use]
    pub const fn flag(self) -> OperationSet {
        match self {
            Self::Add => OperationSet::ADD,
            Self::Subtract => OperationSet::SUBTRACT,
            Self::Multiply => OperationSet::MULTIPLY,
            Self::Divide => OperationSet::DIVIDE,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let op = match name.to_ascii_lowercase().as_str() {
            "add" | "plus" | "addition" => Self::Add,
            "sub" | "subtract" | "minus" | "subtraction" => Self::Subtract,
            "mul" | "multiply" | "times" | "multiplication" => Self::Multiply,
            "div" | "divide" | "division" => Self::Divide,
            _ => return None,
        };
        Some(op)
    }

    fn from_symbol(ch: char) -> Option<Self> {
        let op = match ch {
            '+' => Self::Add,
            '-' | '−' => Self::Subtract,
            '*' | 'x' | '×' | '·' => Self::Multiply,
            '/' | ':' | '÷' => Self::Divide,
            _ => return None,
        };
        Some(op)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

bitflags! {
    /// A set of enabled operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinquest_core::{Operation, OperationSet};
    ///
    /// let ops: OperationSet = "+-".parse().unwrap();
    /// assert_eq!(ops, OperationSet::ADD_SUBTRACT);
    /// assert!(!ops.has_multiply_or_divide());
    ///
    /// let ops: OperationSet = "add, div".parse().unwrap();
    /// assert_eq!(ops.operations().collect::<Vec<_>>(), [Operation::Add, Operation::Divide]);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct OperationSet: u8 {
        /// Addition.
        const ADD = 1 << 0;
        /// Subtraction.
        const SUBTRACT = 1 << 1;
        /// Multiplication.
        const MULTIPLY = 1 << 2;
        /// Division.
        const DIVIDE = 1 << 3;

        /// Addition and subtraction.
        const ADD_SUBTRACT = Self::ADD.bits() | Self::SUBTRACT.bits();
        /// Every operation.
        const ALL = Self::ADD_SUBTRACT.bits() | Self::MULTIPLY.bits() | Self::DIVIDE.bits();
    }
}

impl OperationSet {
    /// Returns `true` if `op` is enabled.
    #[must_use]
    pub const fn has(self, op: Operation) -> bool {
        self.contains(op.flag())
    }

    /// Returns `true` if multiplication or division is enabled.
    #[must_use]
    pub const fn has_multiply_or_divide(self) -> bool {
        self.intersects(Self::MULTIPLY.union(Self::DIVIDE))
    }

    /// Iterates over the enabled operations in declaration order.
    pub fn operations(self) -> impl Iterator<Item = Operation> {
        Operation::ALL.into_iter().filter(move |op| self.has(*op))
    }

    /// Returns the enabled operations as a vector.
    #[must_use]
    pub fn to_vec(self) -> Vec<Operation> {
        self.operations().collect()
    }
}

impl From<Operation> for OperationSet {
    fn from(op: Operation) -> Self {
        op.flag()
    }
}

impl FromIterator<Operation> for OperationSet {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, op| set.union(op.flag()))
    }
}

impl Display for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in self.operations() {
            write!(f, "{}", op.symbol())?;
        }
        Ok(())
    }
}

/// Errors returned when parsing an [`OperationSet`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum OperationSetError {
    /// The input named no operations.
    #[display("no operations given")]
    Empty,
    /// A token was neither an operation name nor a string of operation symbols.
    #[display("unknown operation: {_0:?}")]
    Unknown(#[error(not(source))] String),
}

impl FromStr for OperationSet {
    type Err = OperationSetError;

    /// Parses operation names (`add`, `sub`, `mul`, `div`) or symbols
    /// (`+ - * x / :`), separated by commas or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::empty();
        for token in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            if let Some(op) = Operation::from_name(token) {
                set |= op.flag();
                continue;
            }
            for ch in token.chars() {
                let op = Operation::from_symbol(ch)
                    .ok_or_else(|| OperationSetError::Unknown(token.to_owned()))?;
                set |= op.flag();
            }
        }
        if set.is_empty() {
            return Err(OperationSetError::Empty);
        }
        Ok(set)
    }
}
