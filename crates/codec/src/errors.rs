//! Error types for encoding and decoding.

use grs_field::FieldError;
use grs_polynomial::PolynomialError;
use thiserror::Error;

/// Errors raised by the codec.
///
/// Too many corrupted positions is not an error: decoding always returns a
/// [`crate::Decoded`] and reports unrecoverable inputs through its status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A zero element was inverted, e.g. duplicate evaluation points
    #[error("Division by zero: evaluation points must be pairwise distinct")]
    DivisionByZero,

    /// An input vector has the wrong length
    #[error("Length mismatch for {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Code dimensions violate 1 <= k <= n
    #[error("Invalid code dimensions: n = {n}, k = {k} (need 1 <= k <= n)")]
    InvalidDimension { n: usize, k: usize },

    /// The field is too small to supply n distinct nonzero evaluation points
    #[error("Field of order {order} cannot supply {n} distinct nonzero evaluation points")]
    TooManyPoints { n: usize, order: String },

    /// Matrix verification failure
    #[error("Verification failed: {message}")]
    Verification { message: String },

    /// Other field arithmetic failure
    #[error("Field error: {0}")]
    Field(FieldError),

    /// Other polynomial failure
    #[error("Polynomial error: {0}")]
    Polynomial(PolynomialError),
}

impl CodecError {
    /// Create a length mismatch error
    pub fn length_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        CodecError::LengthMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create a verification error
    pub fn verification(message: impl Into<String>) -> Self {
        CodecError::Verification {
            message: message.into(),
        }
    }
}

impl From<FieldError> for CodecError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::DivisionByZero => CodecError::DivisionByZero,
            other => CodecError::Field(other),
        }
    }
}

impl From<PolynomialError> for CodecError {
    fn from(err: PolynomialError) -> Self {
        match err {
            PolynomialError::Field(field) => field.into(),
            other => CodecError::Polynomial(other),
        }
    }
}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_division_by_zero_is_flattened() {
        let err: CodecError = FieldError::DivisionByZero.into();
        assert_eq!(err, CodecError::DivisionByZero);

        let err: CodecError = PolynomialError::Field(FieldError::DivisionByZero).into();
        assert_eq!(err, CodecError::DivisionByZero);
    }

    #[test]
    fn test_other_errors_are_wrapped() {
        let err: CodecError = PolynomialError::DivisionByZero.into();
        assert_eq!(err, CodecError::Polynomial(PolynomialError::DivisionByZero));

        let err = CodecError::length_mismatch("received word", 10, 9);
        assert_eq!(
            err.to_string(),
            "Length mismatch for received word: expected 10, got 9"
        );
    }
}
