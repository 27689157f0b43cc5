// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Syndrome decoding: locator synthesis, root search and message recovery.

use crate::berlekamp_massey::BerlekampMassey;
use crate::errors::{CodecError, CodecResult};
use crate::syndrome::syndromes;
use grs_field::Field;
use grs_polynomial::Polynomial;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, trace, warn};

/// How a received word was turned into a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStatus {
    /// Every syndrome was zero; the word was already a codeword.
    Clean,
    /// Error positions were located and the message interpolated from the rest.
    ///
    /// With more than `⌊(n−k)/2⌋` corrupted positions the message can still
    /// be wrong.
    Corrected,
    /// Fewer than k positions survived root search; the message is all zeros.
    InsufficientValidPoints,
}

impl fmt::Display for DecodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStatus::Clean => write!(f, "clean"),
            DecodeStatus::Corrected => write!(f, "corrected"),
            DecodeStatus::InsufficientValidPoints => write!(f, "insufficient valid points"),
        }
    }
}

/// Result of decoding a received word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<E> {
    /// Recovered message coefficients, always exactly k of them
    pub message: Vec<E>,
    /// Positions flagged as corrupted
    pub error_positions: BTreeSet<usize>,
    pub status: DecodeStatus,
}

impl<E> Decoded<E> {
    /// False only when too few positions were left to interpolate.
    pub fn is_recovered(&self) -> bool {
        self.status != DecodeStatus::InsufficientValidPoints
    }

    pub fn into_parts(self) -> (Vec<E>, BTreeSet<usize>) {
        (self.message, self.error_positions)
    }
}

/// Returns every position `i` with `α_i ≠ 0` and `Λ(α_i^{-1}) = 0`.
///
/// Zero evaluation points have no inverse and are never flagged.
pub fn find_error_positions<F: Field>(
    field: &F,
    locator: &Polynomial<F::Elem>,
    alphas: &[F::Elem],
) -> CodecResult<BTreeSet<usize>> {
    let mut positions = BTreeSet::new();
    for (i, alpha) in alphas.iter().enumerate() {
        if field.is_zero(alpha) {
            trace!(position = i, "skipping zero evaluation point");
            continue;
        }
        let inverse = field.inverse(alpha)?;
        if field.is_zero(&locator.evaluate(field, &inverse)) {
            positions.insert(i);
        }
    }
    Ok(positions)
}

/// Interpolates the message from the first k positions not in `error_positions`.
///
/// With fewer than k such positions a zero message is returned with status
/// [`DecodeStatus::InsufficientValidPoints`].
pub fn recover<F: Field>(
    field: &F,
    received: &[F::Elem],
    alphas: &[F::Elem],
    k: usize,
    error_positions: BTreeSet<usize>,
) -> CodecResult<Decoded<F::Elem>> {
    if received.len() != alphas.len() {
        return Err(CodecError::length_mismatch(
            "received word",
            alphas.len(),
            received.len(),
        ));
    }

    let (xs, ys): (Vec<F::Elem>, Vec<F::Elem>) = alphas
        .iter()
        .zip(received)
        .enumerate()
        .filter(|(i, _)| !error_positions.contains(i))
        .map(|(_, (alpha, r))| (alpha.clone(), r.clone()))
        .take(k)
        .unzip();

    if xs.len() < k {
        warn!(
            valid = xs.len(),
            k,
            errors = error_positions.len(),
            "too few valid points to interpolate"
        );
        return Ok(Decoded {
            message: vec![field.zero(); k],
            error_positions,
            status: DecodeStatus::InsufficientValidPoints,
        });
    }

    let message = Polynomial::interpolate(field, &xs, &ys)?
        .padded(field, k)
        .into_coefficients();

    Ok(Decoded {
        message,
        error_positions,
        status: DecodeStatus::Corrected,
    })
}

/// Decodes with precomputed column multipliers.
///
/// Runs `n − k` syndromes through Berlekamp–Massey, locates the roots of the
/// resulting locator and interpolates the survivors. Never fails because of
/// too many errors; see [`DecodeStatus`].
pub fn decode_with_weights<F: Field>(
    field: &F,
    received: &[F::Elem],
    alphas: &[F::Elem],
    weights: &[F::Elem],
    k: usize,
) -> CodecResult<Decoded<F::Elem>> {
    let n = alphas.len();
    if k == 0 || k > n {
        return Err(CodecError::InvalidDimension { n, k });
    }

    let s = syndromes(field, received, alphas, weights, n - k)?;
    if s.iter().all(|sj| field.is_zero(sj)) {
        trace!(n, k, "all syndromes zero");
        let message = Polynomial::interpolate(field, &alphas[..k], &received[..k])?
            .padded(field, k)
            .into_coefficients();
        return Ok(Decoded {
            message,
            error_positions: BTreeSet::new(),
            status: DecodeStatus::Clean,
        });
    }

    let state = BerlekampMassey::synthesize(field, &s)?;
    let error_positions = find_error_positions(field, state.locator(), alphas)?;
    if error_positions.len() != state.length() {
        debug!(
            length = state.length(),
            located = error_positions.len(),
            "locator roots do not match its length; correction may be wrong"
        );
    }
    debug!(
        n,
        k,
        errors = error_positions.len(),
        positions = ?error_positions,
        "located errors"
    );

    recover(field, received, alphas, k, error_positions)
}
