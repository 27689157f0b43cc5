// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Welch–Berlekamp decoding by linear algebra.
//!
//! Finds `N` with `deg N < k + t` and `E` with `deg E <= t` such that
//! `N(α_i) = r_i · E(α_i)` for every position, then divides. Slower than
//! the syndrome decoder but independent of it, which makes it a useful
//! cross-check.

use crate::code::GrsCode;
use crate::decoder::{DecodeStatus, Decoded};
use crate::errors::{CodecError, CodecResult};
use crate::matrix::{null_space, Matrix};
use grs_field::Field;
use grs_polynomial::Polynomial;
use std::collections::BTreeSet;
use tracing::debug;

/// Decodes `received`, or returns `None` when no message lies within the
/// correction radius.
pub fn decode<F: Field>(
    code: &GrsCode<F>,
    received: &[F::Elem],
) -> CodecResult<Option<Decoded<F::Elem>>> {
    let field = code.field();
    let (n, k, t) = (code.n(), code.k(), code.correction_radius());
    if received.len() != n {
        return Err(CodecError::length_mismatch("received word", n, received.len()));
    }

    let numerator_len = k + t;
    let system = key_equation_system(field, code.alphas(), received, numerator_len, t + 1);
    let basis = null_space(field, &system)?;

    let Some(solution) = basis
        .into_iter()
        .find(|v| v[numerator_len..].iter().any(|x| !field.is_zero(x)))
    else {
        debug!(n, k, "key equation has no solution with a nonzero locator");
        return Ok(None);
    };

    let numerator = Polynomial::new(solution[..numerator_len].to_vec());
    let locator = Polynomial::new(solution[numerator_len..].to_vec()).trim(field);
    let (quotient, remainder) = numerator.div_rem(field, &locator)?;
    if !remainder.is_zero(field) || quotient.degree(field).is_some_and(|d| d >= k) {
        debug!(n, k, "locator does not divide numerator");
        return Ok(None);
    }

    let message = quotient.padded(field, k).into_coefficients();
    let codeword = code.encode(&message)?;
    let error_positions: BTreeSet<usize> = codeword
        .iter()
        .zip(received)
        .enumerate()
        .filter(|(_, (c, r))| c != r)
        .map(|(i, _)| i)
        .collect();
    if error_positions.len() > t {
        debug!(n, k, errors = error_positions.len(), "solution outside correction radius");
        return Ok(None);
    }

    let status = if error_positions.is_empty() {
        DecodeStatus::Clean
    } else {
        DecodeStatus::Corrected
    };
    Ok(Some(Decoded {
        message,
        error_positions,
        status,
    }))
}

/// Row i is `[1, α_i, ..., α_i^{a−1}, −r_i, −r_i α_i, ..., −r_i α_i^{b−1}]`.
fn key_equation_system<F: Field>(
    field: &F,
    alphas: &[F::Elem],
    received: &[F::Elem],
    numerator_len: usize,
    locator_len: usize,
) -> Matrix<F::Elem> {
    alphas
        .iter()
        .zip(received)
        .map(|(alpha, r)| {
            powers(field, field.one(), alpha, numerator_len)
                .chain(powers(field, field.neg(r), alpha, locator_len))
                .collect()
        })
        .collect()
}

/// `start, start·α, start·α^2, ...`, `len` terms.
fn powers<'a, F: Field>(
    field: &'a F,
    start: F::Elem,
    alpha: &'a F::Elem,
    len: usize,
) -> impl Iterator<Item = F::Elem> + 'a {
    std::iter::successors(Some(start), move |p| Some(field.mul(p, alpha))).take(len)
}
