// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Dense polynomials whose coefficients live in an abstract finite field.
//!
//! ## Features
//!
//! - Field agnostic: every operation takes a [`grs_field::Field`], so the same
//!   code runs over `Z_q` and `GF(2^m)`.
//! - Arithmetic: Horner evaluation, addition, subtraction, scaling, shifting,
//!   convolution and long division.
//! - Lagrange interpolation from point sets.
//!
//! ## Representation
//!
//! Coefficients are stored constant term first, so a message
//! `[m_0, ..., m_{k-1}]` is directly the polynomial `m_0 + ... + m_{k-1} x^{k-1}`.

pub mod errors;
pub mod interpolation;
pub mod polynomial;

pub use errors::{PolynomialError, PolynomialResult};
pub use polynomial::{Polynomial, PolynomialDisplay};
