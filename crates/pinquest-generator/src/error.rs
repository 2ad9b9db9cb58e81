/// Errors returned for invalid generator input.
///
/// Running out of random attempts is never an error: the generator falls back
/// to a deterministic construction instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The operation set is empty.
    #[display("at least one operation must be enabled")]
    EmptyOperations,
    /// A target digit is larger than 9.
    #[display("target digit {_0} is outside 0-9")]
    DigitOutOfRange(#[error(not(source))] u8),
    /// The code has more digits than a meta grid has cells.
    #[display("code has {len} digits but a meta grid holds at most {max}")]
    CodeTooLong {
        /// Number of digits in the code.
        len: usize,
        /// Number of cells in the grid.
        max: usize,
    },
}
