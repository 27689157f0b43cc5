// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Finite field arithmetic for the GRS codec.
//!
//! The codec never assumes a concrete field. It is written against the
//! [`Field`] capability (add, sub, mul, inverse) and any implementation can be
//! plugged in. Two are provided:
//!
//! - [`PrimeField`]: `Z_q` for a prime `q` of any size, backed by `num-bigint`.
//! - [`BinaryField`]: `GF(2^m)` for `m <= 16` in polynomial basis.
//!
//! Inverting zero is always [`FieldError::DivisionByZero`].

pub mod binary;
pub mod errors;
pub mod field;
pub mod math;
pub mod prime;

pub use binary::BinaryField;
pub use errors::{FieldError, FieldResult};
pub use field::Field;
pub use prime::PrimeField;
