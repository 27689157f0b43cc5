// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::decoder::{decode_with_weights, Decoded};
use crate::errors::{CodecError, CodecResult};
use crate::matrix::{generator_matrix, parity_check_matrix, Matrix};
use crate::syndrome::{syndromes, weights};
use grs_field::Field;
use grs_polynomial::Polynomial;
use num_bigint::BigUint;
use rayon::prelude::*;
use tracing::debug;

/// A Generalized Reed–Solomon code of length n and dimension k.
///
/// Holds the field, the evaluation points and the column multipliers derived
/// from them, so repeated encode and decode calls skip the O(n²) weight
/// computation.
#[derive(Debug, Clone)]
pub struct GrsCode<F: Field> {
    field: F,
    alphas: Vec<F::Elem>,
    weights: Vec<F::Elem>,
    k: usize,
}

impl<F: Field> GrsCode<F> {
    /// Creates a code over the given evaluation points.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidDimension`] unless `1 <= k <= alphas.len()`
    /// - [`CodecError::DivisionByZero`] if two points coincide
    pub fn new(field: F, alphas: Vec<F::Elem>, k: usize) -> CodecResult<Self> {
        let n = alphas.len();
        if k == 0 || k > n {
            return Err(CodecError::InvalidDimension { n, k });
        }
        let weights = weights(&field, &alphas)?;
        debug!(n, k, t = (n - k) / 2, "constructed GRS code");
        Ok(Self {
            field,
            alphas,
            weights,
            k,
        })
    }

    /// Creates a code over the points `1, 2, ..., n`.
    pub fn with_consecutive_points(field: F, n: usize, k: usize) -> CodecResult<Self> {
        let order = field.order();
        if BigUint::from(n) >= order {
            return Err(CodecError::TooManyPoints {
                n,
                order: order.to_string(),
            });
        }
        let alphas = (1..=n as u64).map(|i| field.element(i)).collect();
        Self::new(field, alphas, k)
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn alphas(&self) -> &[F::Elem] {
        &self.alphas
    }

    pub fn weights(&self) -> &[F::Elem] {
        &self.weights
    }

    /// Code length
    pub fn n(&self) -> usize {
        self.alphas.len()
    }

    /// Message length
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of syndromes, `n − k`
    pub fn redundancy(&self) -> usize {
        self.n() - self.k
    }

    /// Designed number of correctable errors, `⌊(n − k) / 2⌋`
    pub fn correction_radius(&self) -> usize {
        self.redundancy() / 2
    }

    /// Evaluates the message polynomial at every point.
    pub fn encode(&self, message: &[F::Elem]) -> CodecResult<Vec<F::Elem>> {
        if message.len() != self.k {
            return Err(CodecError::length_mismatch("message", self.k, message.len()));
        }
        let poly = Polynomial::new(message.to_vec());
        Ok(poly.evaluate_many(&self.field, &self.alphas))
    }

    /// Encodes many messages in parallel.
    pub fn encode_batch(&self, messages: &[Vec<F::Elem>]) -> CodecResult<Vec<Vec<F::Elem>>> {
        messages
            .par_iter()
            .map(|message| self.encode(message))
            .collect()
    }

    /// The `n − k` syndromes of a received word.
    pub fn syndromes(&self, received: &[F::Elem]) -> CodecResult<Vec<F::Elem>> {
        syndromes(
            &self.field,
            received,
            &self.alphas,
            &self.weights,
            self.redundancy(),
        )
    }

    /// Decodes with Berlekamp–Massey. See [`crate::decode`].
    pub fn decode(&self, received: &[F::Elem]) -> CodecResult<Decoded<F::Elem>> {
        decode_with_weights(&self.field, received, &self.alphas, &self.weights, self.k)
    }

    /// True when every syndrome is zero.
    pub fn is_codeword(&self, word: &[F::Elem]) -> CodecResult<bool> {
        Ok(self.syndromes(word)?.iter().all(|s| self.field.is_zero(s)))
    }

    pub fn generator_matrix(&self) -> CodecResult<Matrix<F::Elem>> {
        generator_matrix(&self.field, &self.alphas, self.k)
    }

    pub fn parity_check_matrix(&self) -> CodecResult<Matrix<F::Elem>> {
        parity_check_matrix(&self.field, &self.alphas, &self.weights, self.k)
    }
}
