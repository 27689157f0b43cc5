// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{FieldError, FieldResult};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Compute modular exponentiation: base^exp mod modulus
pub fn mod_pow(base: &BigUint, exp: u64, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }
    base.modpow(&BigUint::from(exp), modulus)
}

/// Compute the modular inverse using the extended Euclidean algorithm.
///
/// Zero (after reduction) is always [`FieldError::DivisionByZero`]; a nonzero
/// value sharing a factor with the modulus is [`FieldError::NoInverse`].
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> FieldResult<BigUint> {
    let a_reduced = a % modulus;
    if a_reduced.is_zero() {
        return Err(FieldError::DivisionByZero);
    }

    let m = BigInt::from(modulus.clone());
    let mut old_r = BigInt::from(a_reduced);
    let mut r = m.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(FieldError::NoInverse {
            value: a.to_string(),
            modulus: modulus.to_string(),
        });
    }

    // old_s may be negative; bring it into [0, m)
    let canonical = ((old_s % &m) + &m) % &m;
    Ok(canonical.magnitude().clone())
}
