//! Error types for quantity operations.

use crate::dimension::DimensionId;
use thiserror::Error;

/// Result type for quantity operations.
pub type Result<T> = core::result::Result<T, QuantityError>;

/// Errors that can occur while building, converting or combining quantities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// A magnitude could not be represented (NaN, infinity, out of decimal range) or an argument was inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A division had an exact-zero divisor.
    #[error("Division by zero")]
    DivideByZero,

    /// The numeric primitive overflowed while performing the named operation.
    #[error("Numeric overflow in {0}")]
    Overflow(&'static str),

    /// Two runtime-tagged quantities were combined without a matching dimension or registered relation.
    #[error("Dimension mismatch: no relation for {left} {op} {right}")]
    DimensionMismatch {
        /// Operator symbol (`+`, `-`, `*`, `/`, `as`).
        op: &'static str,
        /// Dimension of the left operand.
        left: DimensionId,
        /// Dimension of the right operand.
        right: DimensionId,
    },

    /// A unit symbol was not found in the registry.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// A dimension name was not found in the registry.
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    /// A unit catalog could not be read or merged.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<toml::de::Error> for QuantityError {
    fn from(err: toml::de::Error) -> Self {
        QuantityError::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for QuantityError {
    fn from(err: std::io::Error) -> Self {
        QuantityError::Configuration(err.to_string())
    }
}
