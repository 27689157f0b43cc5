// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Prime field `Z_q` with arbitrary precision elements.

use crate::errors::{FieldError, FieldResult};
use crate::field::Field;
use crate::math::{mod_inverse, mod_pow};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

/// The field of integers modulo a prime `q`.
///
/// Elements are `BigUint` values in `[0, q)`. Primality of `q` is the caller's
/// responsibility; with a composite modulus some nonzero elements will fail to
/// invert with [`FieldError::NoInverse`].
///
/// # Example
///
/// ```
/// use grs_field::{Field, PrimeField};
/// use num_bigint::BigUint;
///
/// let field = PrimeField::from_u64(31).unwrap();
/// let a = field.element(7);
/// let inv = field.inverse(&a).unwrap();
/// assert_eq!(field.mul(&a, &inv), BigUint::from(1u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    q: BigUint,
}

impl PrimeField {
    /// Creates the field `Z_q`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidModulus`] when `q < 2`.
    pub fn new(q: BigUint) -> FieldResult<Self> {
        if q < BigUint::from(2u32) {
            return Err(FieldError::invalid_modulus(&q, "modulus must be at least 2"));
        }
        Ok(Self { q })
    }

    pub fn from_u64(q: u64) -> FieldResult<Self> {
        Self::new(BigUint::from(q))
    }

    /// Returns the modulus `q`.
    pub fn modulus(&self) -> &BigUint {
        &self.q
    }

    fn reduce(&self, value: &BigUint) -> BigUint {
        if value < &self.q {
            value.clone()
        } else {
            value % &self.q
        }
    }
}

impl Field for PrimeField {
    type Elem = BigUint;

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        BigUint::one()
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.q
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = self.reduce(b);
        (a + (&self.q - b)) % &self.q
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.q
    }

    fn inverse(&self, a: &BigUint) -> FieldResult<BigUint> {
        mod_inverse(a, &self.q)
    }

    fn element(&self, value: u64) -> BigUint {
        BigUint::from(value) % &self.q
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_below(&self.q)
    }

    fn order(&self) -> BigUint {
        self.q.clone()
    }

    fn is_zero(&self, a: &BigUint) -> bool {
        a.is_zero()
    }

    fn pow(&self, base: &BigUint, exp: u64) -> BigUint {
        mod_pow(base, exp, &self.q)
    }
}
