//! Error types for polynomial operations.

use grs_field::FieldError;
use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Division by zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Interpolation points and values differ in number
    #[error("Interpolation needs one value per point: got {xs} points and {ys} values")]
    LengthMismatch { xs: usize, ys: usize },

    /// Field arithmetic failure, typically inverting zero for duplicate points
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;
