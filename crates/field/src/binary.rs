// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Binary extension field GF(2^m) in polynomial basis.
//!
//! An element is the bit pattern of a polynomial over GF(2) of degree `< m`
//! (bit `i` is the coefficient of `x^i`). Addition is XOR and multiplication
//! is carry-less multiplication reduced by an irreducible polynomial of
//! degree `m`.

use crate::errors::{FieldError, FieldResult};
use crate::field::Field;
use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;

/// Largest supported extension degree.
pub const MAX_DEGREE: u32 = 16;

/// Primitive polynomials indexed by degree, `x^m` bit included.
const PRIMITIVE_POLYNOMIALS: [u32; 17] = [
    0x0, 0x3, 0x7, 0xB, 0x13, 0x25, 0x43, 0x89, 0x11D, 0x211, 0x409, 0x805, 0x1053, 0x201B,
    0x4443, 0x8003, 0x1100B,
];

/// GF(2^m) for `1 <= m <= 16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryField {
    degree: u32,
    modulus: u32,
}

impl BinaryField {
    /// Creates GF(2^m) reduced by `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidModulus`] if `m` is out of range, if the
    /// modulus does not have degree exactly `m`, or if it factors over GF(2).
    pub fn new(degree: u32, modulus: u32) -> FieldResult<Self> {
        if degree == 0 || degree > MAX_DEGREE {
            return Err(FieldError::invalid_modulus(
                format!("{modulus:#x}"),
                format!("extension degree {degree} is outside 1..={MAX_DEGREE}"),
            ));
        }
        if gf2_degree(u64::from(modulus)) != Some(degree) {
            return Err(FieldError::invalid_modulus(
                format!("{modulus:#x}"),
                format!("reduction polynomial must have degree {degree}"),
            ));
        }
        if !is_irreducible(u64::from(modulus)) {
            return Err(FieldError::invalid_modulus(
                format!("{modulus:#x}"),
                "reduction polynomial is reducible over GF(2)",
            ));
        }
        Ok(Self { degree, modulus })
    }

    /// Creates GF(2^m) with a standard primitive reduction polynomial.
    pub fn with_default_modulus(degree: u32) -> FieldResult<Self> {
        let modulus = PRIMITIVE_POLYNOMIALS
            .get(degree as usize)
            .copied()
            .unwrap_or(0);
        Self::new(degree, modulus)
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    fn size(&self) -> u32 {
        1 << self.degree
    }
}

impl Field for BinaryField {
    type Elem = u32;

    fn zero(&self) -> u32 {
        0
    }

    fn one(&self) -> u32 {
        1
    }

    fn add(&self, a: &u32, b: &u32) -> u32 {
        a ^ b
    }

    fn sub(&self, a: &u32, b: &u32) -> u32 {
        a ^ b
    }

    fn neg(&self, a: &u32) -> u32 {
        *a
    }

    fn mul(&self, a: &u32, b: &u32) -> u32 {
        let high_bit = self.size();
        let mut a = *a;
        let mut b = *b;
        let mut result = 0u32;
        while b != 0 {
            if b & 1 == 1 {
                result ^= a;
            }
            b >>= 1;
            a <<= 1;
            if a & high_bit != 0 {
                a ^= self.modulus;
            }
        }
        result
    }

    fn inverse(&self, a: &u32) -> FieldResult<u32> {
        if *a == 0 {
            return Err(FieldError::DivisionByZero);
        }
        // The multiplicative group has order 2^m - 1
        Ok(self.pow(a, u64::from(self.size() - 2)))
    }

    fn element(&self, value: u64) -> u32 {
        gf2_rem(value, u64::from(self.modulus)) as u32
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(0..self.size())
    }

    fn order(&self) -> BigUint {
        BigUint::one() << self.degree
    }
}

fn gf2_degree(p: u64) -> Option<u32> {
    if p == 0 {
        None
    } else {
        Some(63 - p.leading_zeros())
    }
}

/// Remainder of `a` divided by `b` in GF(2)[x]. `b` must be nonzero.
fn gf2_rem(mut a: u64, b: u64) -> u64 {
    let Some(db) = gf2_degree(b) else {
        return a;
    };
    while let Some(da) = gf2_degree(a) {
        if da < db {
            break;
        }
        a ^= b << (da - db);
    }
    a
}

/// Trial division by every polynomial of degree `1..=deg/2`.
fn is_irreducible(p: u64) -> bool {
    let Some(degree) = gf2_degree(p) else {
        return false;
    };
    if degree == 0 {
        return false;
    }
    let half = degree / 2;
    (2u64..(1u64 << (half + 1))).all(|divisor| gf2_rem(p, divisor) != 0)
}
