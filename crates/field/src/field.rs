// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::FieldResult;
use num_bigint::BigUint;
use rand::Rng;
use std::fmt;

/// Arithmetic capability of a finite field.
///
/// A `Field` value is the field *description* (a modulus, a reduction
/// polynomial, ...) and every operation goes through it, so elements can stay
/// plain data. Implementations must always return canonical representatives.
pub trait Field: Clone + fmt::Debug + Send + Sync {
    /// Representation of a single field element.
    type Elem: Clone + fmt::Debug + fmt::Display + PartialEq + Eq + Send + Sync;

    /// The additive identity.
    fn zero(&self) -> Self::Elem;

    /// The multiplicative identity.
    fn one(&self) -> Self::Elem;

    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Returns the unique `b` with `a * b = 1`.
    ///
    /// # Errors
    ///
    /// [`crate::FieldError::DivisionByZero`] when `a` is zero.
    fn inverse(&self, a: &Self::Elem) -> FieldResult<Self::Elem>;

    /// Embeds an integer into the field, reducing it to a canonical element.
    fn element(&self, value: u64) -> Self::Elem;

    /// Draws a uniformly random element.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Elem;

    /// Number of elements in the field.
    fn order(&self) -> BigUint;

    fn neg(&self, a: &Self::Elem) -> Self::Elem {
        self.sub(&self.zero(), a)
    }

    fn div(&self, a: &Self::Elem, b: &Self::Elem) -> FieldResult<Self::Elem> {
        Ok(self.mul(a, &self.inverse(b)?))
    }

    fn is_zero(&self, a: &Self::Elem) -> bool {
        *a == self.zero()
    }

    /// Square-and-multiply exponentiation. `pow(0, 0)` is one.
    fn pow(&self, base: &Self::Elem, exp: u64) -> Self::Elem {
        let mut result = self.one();
        let mut acc = base.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(&result, &acc);
            }
            acc = self.mul(&acc, &acc);
            exp >>= 1;
        }
        result
    }

    /// Draws a uniformly random nonzero element.
    fn sample_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Elem {
        loop {
            let candidate = self.sample(rng);
            if !self.is_zero(&candidate) {
                return candidate;
            }
        }
    }

    /// Sums a sequence of elements.
    fn sum<'a, I>(&self, items: I) -> Self::Elem
    where
        I: IntoIterator<Item = &'a Self::Elem>,
        Self::Elem: 'a,
    {
        items
            .into_iter()
            .fold(self.zero(), |acc, item| self.add(&acc, item))
    }

    /// Multiplies a sequence of elements.
    fn product<'a, I>(&self, items: I) -> Self::Elem
    where
        I: IntoIterator<Item = &'a Self::Elem>,
        Self::Elem: 'a,
    {
        items
            .into_iter()
            .fold(self.one(), |acc, item| self.mul(&acc, item))
    }
}
