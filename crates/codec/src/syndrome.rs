// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Column multipliers and syndromes.

use crate::errors::{CodecError, CodecResult};
use grs_field::Field;
use rayon::prelude::*;

/// Computes the column multipliers `w_i = (∏_{j≠i} (α_i − α_j))^{-1}`.
///
/// These weights make `Σ_i w_i α_i^j c_i = 0` for every codeword `c` and every
/// `0 <= j < n − k`.
///
/// # Errors
///
/// [`CodecError::DivisionByZero`] if two evaluation points coincide.
pub fn weights<F: Field>(field: &F, alphas: &[F::Elem]) -> CodecResult<Vec<F::Elem>> {
    alphas
        .iter()
        .enumerate()
        .map(|(i, alpha_i)| {
            let denominator = alphas
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(field.one(), |acc, (_, alpha_j)| {
                    field.mul(&acc, &field.sub(alpha_i, alpha_j))
                });
            field.inverse(&denominator).map_err(CodecError::from)
        })
        .collect()
}

/// Computes `count` syndromes `S_j = Σ_i r_i w_i α_i^j` for `j = 0..count`.
///
/// Positions are processed in parallel; each contributes the run
/// `r_i w_i, r_i w_i α_i, r_i w_i α_i^2, ...` and the runs are summed.
pub fn syndromes<F: Field>(
    field: &F,
    received: &[F::Elem],
    alphas: &[F::Elem],
    weights: &[F::Elem],
    count: usize,
) -> CodecResult<Vec<F::Elem>> {
    if received.len() != alphas.len() {
        return Err(CodecError::length_mismatch(
            "received word",
            alphas.len(),
            received.len(),
        ));
    }
    if weights.len() != alphas.len() {
        return Err(CodecError::length_mismatch(
            "weights",
            alphas.len(),
            weights.len(),
        ));
    }

    let sums = received
        .par_iter()
        .zip(alphas.par_iter())
        .zip(weights.par_iter())
        .map(|((r, alpha), w)| {
            let mut term = field.mul(r, w);
            let mut run = Vec::with_capacity(count);
            for _ in 0..count {
                let next = field.mul(&term, alpha);
                run.push(std::mem::replace(&mut term, next));
            }
            run
        })
        .reduce(
            || vec![field.zero(); count],
            |acc, run| {
                acc.iter()
                    .zip(&run)
                    .map(|(a, b)| field.add(a, b))
                    .collect()
            },
        );

    Ok(sums)
}
