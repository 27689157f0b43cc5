// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Berlekamp–Massey synthesis of the error-locator polynomial.

use crate::errors::CodecResult;
use grs_field::Field;
use grs_polynomial::Polynomial;
use tracing::trace;

/// Iteration state of the Berlekamp–Massey algorithm.
///
/// After processing syndromes `S_0..S_r`, `locator` is the shortest
/// connection polynomial (constant term one) generating that prefix and
/// `length` is its linear complexity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BerlekampMassey<E> {
    /// Current connection polynomial Λ
    locator: Polynomial<E>,
    /// Connection polynomial before the last length change
    previous: Polynomial<E>,
    /// Linear complexity L
    length: usize,
    /// Steps since the last length change
    shift: usize,
    /// Discrepancy recorded at the last length change
    last_discrepancy: E,
}

impl<E: Clone + PartialEq> BerlekampMassey<E> {
    /// Initial state: `Λ = B = 1`, `L = 0`, `m = 1`, `b = 1`.
    pub fn new<F: Field<Elem = E>>(field: &F) -> Self {
        Self {
            locator: Polynomial::one(field),
            previous: Polynomial::one(field),
            length: 0,
            shift: 1,
            last_discrepancy: field.one(),
        }
    }

    /// Runs the algorithm over every syndrome and returns the final state.
    pub fn synthesize<F: Field<Elem = E>>(field: &F, syndromes: &[E]) -> CodecResult<Self> {
        let mut state = Self::new(field);
        for r in 0..syndromes.len() {
            state.step(field, syndromes, r)?;
        }
        trace!(
            length = state.length,
            locator = %state.locator.display(field),
            "Berlekamp-Massey finished"
        );
        Ok(state)
    }

    /// `δ = S_r + Σ_{i≥1} Λ_i S_{r−i}`, omitting terms with negative index.
    pub fn discrepancy<F: Field<Elem = E>>(&self, field: &F, syndromes: &[E], r: usize) -> E {
        self.locator
            .coefficients()
            .iter()
            .enumerate()
            .skip(1)
            .take_while(|(i, _)| *i <= r)
            .fold(syndromes[r].clone(), |acc, (i, coeff)| {
                field.add(&acc, &field.mul(coeff, &syndromes[r - i]))
            })
    }

    /// Processes syndrome `r`. Steps must be taken in order `r = 0, 1, ...`.
    ///
    /// # Panics
    ///
    /// If `r >= syndromes.len()`.
    pub fn step<F: Field<Elem = E>>(
        &mut self,
        field: &F,
        syndromes: &[E],
        r: usize,
    ) -> CodecResult<()> {
        let delta = self.discrepancy(field, syndromes, r);
        if field.is_zero(&delta) {
            self.shift += 1;
            return Ok(());
        }

        let factor = field.div(&delta, &self.last_discrepancy)?;
        let correction = self
            .previous
            .shift(field, self.shift)
            .scale(field, &factor);
        let next = self.locator.sub(field, &correction).trim(field);

        if 2 * self.length <= r {
            self.length = r + 1 - self.length;
            self.previous = std::mem::replace(&mut self.locator, next);
            self.last_discrepancy = delta;
            self.shift = 1;
        } else {
            self.locator = next;
            self.shift += 1;
        }
        Ok(())
    }

    pub fn locator(&self) -> &Polynomial<E> {
        &self.locator
    }

    pub fn into_locator(self) -> Polynomial<E> {
        self.locator
    }

    pub fn previous(&self) -> &Polynomial<E> {
        &self.previous
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    pub fn last_discrepancy(&self) -> &E {
        &self.last_discrepancy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grs_field::{BinaryField, PrimeField};
    use num_bigint::BigUint;

    fn elems(field: &PrimeField, values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| field.element(v)).collect()
    }

    #[test]
    fn test_fibonacci_sequence() {
        // s_r = s_{r-1} + s_{r-2} has connection polynomial 1 - x - x^2
        let field = PrimeField::from_u64(31).unwrap();
        let s = elems(&field, &[1, 1, 2, 3, 5, 8]);
        let state = BerlekampMassey::synthesize(&field, &s).unwrap();

        assert_eq!(state.length(), 2);
        assert_eq!(
            state.locator().coefficients(),
            elems(&field, &[1, 30, 30]).as_slice()
        );
    }

    #[test]
    fn test_intermediate_states() {
        let field = PrimeField::from_u64(31).unwrap();
        let s = elems(&field, &[1, 1, 2, 3, 5, 8]);
        let mut state = BerlekampMassey::new(&field);

        state.step(&field, &s, 0).unwrap();
        assert_eq!(state.length(), 1);
        assert_eq!(state.shift(), 1);
        assert_eq!(state.locator().coefficients(), elems(&field, &[1, 30]).as_slice());
        assert_eq!(state.previous().coefficients(), elems(&field, &[1]).as_slice());

        // 1 + 30 * 1 = 0: no update, only the shift grows
        assert!(field.is_zero(&state.discrepancy(&field, &s, 1)));
        state.step(&field, &s, 1).unwrap();
        assert_eq!(state.length(), 1);
        assert_eq!(state.shift(), 2);

        state.step(&field, &s, 2).unwrap();
        assert_eq!(state.length(), 2);
        assert_eq!(state.shift(), 1);
        assert_eq!(state.last_discrepancy(), &field.one());
        assert_eq!(
            state.previous().coefficients(),
            elems(&field, &[1, 30]).as_slice()
        );
    }

    #[test]
    fn test_all_zero_syndromes() {
        let field = PrimeField::from_u64(31).unwrap();
        let s = vec![field.zero(); 6];
        let state = BerlekampMassey::synthesize(&field, &s).unwrap();
        assert_eq!(state.length(), 0);
        assert_eq!(state.locator(), &Polynomial::one(&field));
        assert_eq!(state.shift(), 7);
    }

    #[test]
    fn test_geometric_sequence() {
        // s_r = 3^r: single root, Λ = 1 - 3x
        let field = PrimeField::from_u64(31).unwrap();
        let three = field.element(3);
        let s: Vec<BigUint> = (0..6).map(|r| field.pow(&three, r)).collect();
        let state = BerlekampMassey::synthesize(&field, &s).unwrap();
        assert_eq!(state.length(), 1);
        assert_eq!(
            state.locator().coefficients(),
            elems(&field, &[1, 28]).as_slice()
        );
    }

    #[test]
    fn test_binary_field_locator_generates_sequence() {
        let field = BinaryField::with_default_modulus(6).unwrap();
        let s: Vec<u32> = vec![7, 0, 33, 12, 5, 61, 2, 19];
        let state = BerlekampMassey::synthesize(&field, &s).unwrap();
        let lambda = state.locator().coefficients();
        assert_eq!(lambda[0], 1);
        assert!(state.locator().degree(&field).unwrap_or(0) <= state.length());

        // Λ annihilates the sequence from index L onwards
        for r in state.length()..s.len() {
            assert_eq!(state.discrepancy(&field, &s, r), 0, "r = {}", r);
        }
    }
}
