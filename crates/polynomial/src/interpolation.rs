// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange interpolation.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::polynomial::Polynomial;
use grs_field::Field;

impl<E: Clone + PartialEq> Polynomial<E> {
    /// Returns the unique polynomial of degree `< xs.len()` passing through
    /// every `(xs[i], ys[i])`.
    ///
    /// For each `i` the numerator `∏_{j≠i}(x − x_j)` is built, divided by
    /// `∏_{j≠i}(x_i − x_j)` and scaled by `y_i`; the terms are summed. The
    /// result always has exactly `xs.len()` coefficients (trailing zeros are
    /// kept).
    ///
    /// The points must be pairwise distinct. This is not checked up front: a
    /// duplicate makes one of the denominators zero and surfaces as a field
    /// `DivisionByZero`.
    ///
    /// # Errors
    ///
    /// [`PolynomialError::LengthMismatch`] if `xs` and `ys` differ in length.
    pub fn interpolate<F: Field<Elem = E>>(
        field: &F,
        xs: &[E],
        ys: &[E],
    ) -> PolynomialResult<Self> {
        if xs.len() != ys.len() {
            return Err(PolynomialError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        let mut result = Polynomial::new(vec![field.zero(); xs.len()]);

        for (i, (xi, yi)) in xs.iter().zip(ys).enumerate() {
            if field.is_zero(yi) {
                continue;
            }

            let mut numerator = Polynomial::one(field);
            let mut denominator = field.one();
            for (j, xj) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                let linear = Polynomial::new(vec![field.neg(xj), field.one()]);
                numerator = numerator.mul(field, &linear);
                denominator = field.mul(&denominator, &field.sub(xi, xj));
            }

            let factor = field.mul(yi, &field.inverse(&denominator)?);
            result = result.add(field, &numerator.scale(field, &factor));
        }

        Ok(result)
    }

    /// Returns `∏ (x − r)` over all `roots`.
    pub fn from_roots<F: Field<Elem = E>>(field: &F, roots: &[E]) -> Self {
        roots.iter().fold(Polynomial::one(field), |acc, root| {
            acc.mul(field, &Polynomial::new(vec![field.neg(root), field.one()]))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Polynomial, PolynomialError};
    use grs_field::{BinaryField, Field, FieldError, PrimeField};
    use num_bigint::BigUint;
    use proptest::prelude::*;

    fn elems(field: &PrimeField, values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| field.element(v)).collect()
    }

    #[test]
    fn test_interpolates_line() {
        let field = PrimeField::from_u64(31).unwrap();
        // y = 3x + 2
        let xs = elems(&field, &[1, 2]);
        let ys = elems(&field, &[5, 8]);
        let p = Polynomial::interpolate(&field, &xs, &ys).unwrap();
        assert_eq!(p.coefficients(), elems(&field, &[2, 3]).as_slice());
    }

    #[test]
    fn test_keeps_length_for_low_degree() {
        let field = PrimeField::from_u64(31).unwrap();
        // constant 7 sampled at three points
        let xs = elems(&field, &[1, 2, 3]);
        let ys = elems(&field, &[7, 7, 7]);
        let p = Polynomial::interpolate(&field, &xs, &ys).unwrap();
        assert_eq!(p.coefficients(), elems(&field, &[7, 0, 0]).as_slice());
    }

    #[test]
    fn test_empty_input() {
        let field = PrimeField::from_u64(31).unwrap();
        let p = Polynomial::interpolate(&field, &[], &[]).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let field = PrimeField::from_u64(31).unwrap();
        let xs = elems(&field, &[1, 2, 3]);
        let ys = elems(&field, &[1, 2]);
        assert_eq!(
            Polynomial::interpolate(&field, &xs, &ys),
            Err(PolynomialError::LengthMismatch { xs: 3, ys: 2 })
        );
    }

    #[test]
    fn test_duplicate_points_surface_division_by_zero() {
        let field = PrimeField::from_u64(31).unwrap();
        let xs = elems(&field, &[4, 4]);
        let ys = elems(&field, &[1, 2]);
        assert_eq!(
            Polynomial::interpolate(&field, &xs, &ys),
            Err(PolynomialError::Field(FieldError::DivisionByZero))
        );
    }

    #[test]
    fn test_from_roots_vanishes_on_roots() {
        let field = PrimeField::from_u64(31).unwrap();
        let roots = elems(&field, &[3, 9, 27]);
        let p = Polynomial::from_roots(&field, &roots);
        assert_eq!(p.degree(&field), Some(3));
        for r in &roots {
            assert!(field.is_zero(&p.evaluate(&field, r)));
        }
    }

    #[test]
    fn test_binary_field_interpolation() {
        let field = BinaryField::with_default_modulus(6).unwrap();
        let p = Polynomial::new(vec![17u32, 0, 42, 5]);
        let xs: Vec<u32> = (1..=4).collect();
        let ys = p.evaluate_many(&field, &xs);
        assert_eq!(Polynomial::interpolate(&field, &xs, &ys).unwrap(), p);
    }

    proptest! {
        #[test]
        fn interpolation_is_idempotent(
            coeffs in prop::collection::vec(0u64..101, 1..8),
            offset in 1u64..50,
        ) {
            let field = PrimeField::from_u64(101).unwrap();
            let p = Polynomial::new(elems(&field, &coeffs));
            // distinct points offset, offset + 1, ...
            let xs: Vec<BigUint> = (0..coeffs.len() as u64)
                .map(|i| field.element(offset + i))
                .collect();
            let ys = p.evaluate_many(&field, &xs);
            let recovered = Polynomial::interpolate(&field, &xs, &ys).unwrap();
            prop_assert_eq!(recovered, p);
        }
    }
}
