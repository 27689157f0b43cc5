// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # GRS Codec
//!
//! Generalized Reed–Solomon codes over any [`grs_field::Field`].
//!
//! A message `m = [m_0, ..., m_{k-1}]` is the polynomial
//! `f(x) = m_0 + m_1 x + ... + m_{k-1} x^{k-1}`; its codeword is
//! `[f(α_0), ..., f(α_{n-1})]` for distinct evaluation points `α_i`.
//!
//! Decoding computes `n − k` weighted syndromes, synthesizes the error
//! locator with Berlekamp–Massey, finds its reciprocal roots among the
//! evaluation points and interpolates the message from the remaining
//! positions. Up to `⌊(n − k) / 2⌋` corrupted positions are corrected.
//! Beyond that the decoder still returns, possibly with a wrong message.
//!
//! ```
//! use grs_codec::{decode, encode, DecodeStatus};
//! use grs_field::{Field, PrimeField};
//!
//! let field = PrimeField::from_u64(31)?;
//! let alphas: Vec<_> = (1..=10).map(|i| field.element(i)).collect();
//! let message: Vec<_> = [7, 3, 29, 12].iter().map(|&v| field.element(v)).collect();
//!
//! let mut received = encode(&field, &message, &alphas, 4)?;
//! received[4] = field.add(&received[4], &field.one());
//!
//! let decoded = decode(&field, &received, &alphas, 10, 4)?;
//! assert_eq!(decoded.message, message);
//! assert_eq!(decoded.status, DecodeStatus::Corrected);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod berlekamp_massey;
pub mod code;
pub mod decoder;
pub mod errors;
pub mod matrix;
pub mod syndrome;
pub mod welch_berlekamp;

pub use berlekamp_massey::BerlekampMassey;
pub use code::GrsCode;
pub use decoder::{decode_with_weights, find_error_positions, recover, DecodeStatus, Decoded};
pub use errors::{CodecError, CodecResult};
pub use matrix::{generator_matrix, null_space, parity_check_matrix, verify_parity, Matrix};
pub use syndrome::{syndromes, weights};

use grs_field::Field;
use grs_polynomial::Polynomial;

/// Encodes a k-symbol message as its evaluations at `alphas`.
///
/// # Errors
///
/// [`CodecError::LengthMismatch`] if `message.len() != k`.
pub fn encode<F: Field>(
    field: &F,
    message: &[F::Elem],
    alphas: &[F::Elem],
    k: usize,
) -> CodecResult<Vec<F::Elem>> {
    if message.len() != k {
        return Err(CodecError::length_mismatch("message", k, message.len()));
    }
    Ok(Polynomial::new(message.to_vec()).evaluate_many(field, alphas))
}

/// Decodes a received word of length n back to a k-symbol message.
///
/// Fails only on malformed input: mismatched lengths, invalid dimensions or
/// duplicate evaluation points. Too many errors never raise an error.
pub fn decode<F: Field>(
    field: &F,
    received: &[F::Elem],
    alphas: &[F::Elem],
    n: usize,
    k: usize,
) -> CodecResult<Decoded<F::Elem>> {
    if alphas.len() != n {
        return Err(CodecError::length_mismatch("evaluation points", n, alphas.len()));
    }
    if received.len() != n {
        return Err(CodecError::length_mismatch("received word", n, received.len()));
    }
    if k == 0 || k > n {
        return Err(CodecError::InvalidDimension { n, k });
    }
    let weights = weights(field, alphas)?;
    decode_with_weights(field, received, alphas, &weights, k)
}
