use thiserror::Error;

/// Errors raised while expanding, indexing or combining continued fractions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("limit must be greater than zero")]
    InvalidLimit,

    /// Convergents are 1-indexed, so index 0 is always out of range
    #[error("convergent index {index} is out of range 1..={len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot expand a number that is not finite")]
    NotFinite,

    #[error("value does not fit into the integer type")]
    Overflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("at least one quotient is required")]
    EmptyQuotients,

    #[error("value cannot be represented by the number type")]
    Unrepresentable,
}
