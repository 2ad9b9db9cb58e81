//! The secret code a puzzle reveals.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// A non-empty sequence of decimal digits, usually a 4-digit PIN.
///
/// The code is a gameplay artifact, not a credential.
///
/// # Examples
///
/// ```
/// use pinquest_core::Code;
///
/// let code: Code = "0472".parse()?;
/// assert_eq!(code.digits(), &[0, 4, 7, 2]);
/// assert_eq!(code.to_string(), "0472");
/// # Ok::<(), pinquest_core::CodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code {
    digits: Vec<u8>,
}

/// Errors returned when parsing a [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CodeError {
    /// The code has no digits.
    #[display("code must contain at least one digit")]
    Empty,
    /// A character is not a decimal digit.
    #[display("invalid digit {ch:?} at position {index}")]
    InvalidDigit {
        /// Character position of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

impl Code {
    /// Creates a code from digit values.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Empty`] for an empty slice and
    /// [`CodeError::InvalidDigit`] for any value above 9.
    pub fn from_digits(digits: &[u8]) -> Result<Self, CodeError> {
        if digits.is_empty() {
            return Err(CodeError::Empty);
        }
        if let Some((index, &d)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(CodeError::InvalidDigit {
                index,
                ch: char::from_digit(u32::from(d), 36).unwrap_or('?'),
            });
        }
        Ok(Self {
            digits: digits.to_vec(),
        })
    }

    /// The digits in order.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`; a code has at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                ch.to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(CodeError::InvalidDigit { index, ch })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if digits.is_empty() {
            return Err(CodeError::Empty);
        }
        Ok(Self { digits })
    }
}

impl TryFrom<String> for Code {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
