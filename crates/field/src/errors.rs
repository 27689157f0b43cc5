// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for finite field arithmetic.

use thiserror::Error;

/// Errors raised by [`crate::Field`] implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Attempted to invert the additive identity.
    #[error("Division by zero: the additive identity has no multiplicative inverse")]
    DivisionByZero,

    /// The element is nonzero but shares a factor with a composite modulus.
    #[error("Modular inverse does not exist for {value} mod {modulus} (gcd != 1)")]
    NoInverse { value: String, modulus: String },

    /// The field description cannot define a field.
    #[error("Invalid modulus: {modulus} - {reason}")]
    InvalidModulus { modulus: String, reason: String },
}

/// Result type alias for field operations
pub type FieldResult<T> = Result<T, FieldError>;

impl FieldError {
    pub fn invalid_modulus(modulus: impl ToString, reason: impl Into<String>) -> Self {
        FieldError::InvalidModulus {
            modulus: modulus.to_string(),
            reason: reason.into(),
        }
    }
}
