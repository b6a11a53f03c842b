use num_bigint::BigInt;
use thiserror::Error;

/// Errors reported by the approximation routines. Every error is raised
/// before any computation starts, so there is never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The denominator window is empty or has a non-positive bound
    #[error("invalid denominator window [{lower}, {upper}]: bounds must be positive and ordered")]
    InvalidWindow { lower: BigInt, upper: BigInt },

    /// A rational input was not a (numerator, denominator) pair
    #[error("expected a (numerator, denominator) pair, got {len} element(s)")]
    InvalidShape { len: usize },

    #[error("denominator must not be zero")]
    ZeroDenominator,

    /// The denominator limit of an expansion must be positive
    #[error("denominator limit must be positive")]
    InvalidLimit,

    #[error("cannot parse number: {0}")]
    Parse(String),

    #[error("unknown constant `{0}`")]
    UnknownConstant(String),

    /// The constant is only known to a fixed number of digits
    #[error("constant `{name}` is available to {available} digits, {requested} requested")]
    PrecisionUnavailable {
        name: String,
        requested: usize,
        available: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
