// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use grs_codec::GrsCode;
use grs_field::Field;
use grs_test_helpers::{lock_rng, SharedRng};
use std::ops::Deref;

/// One dealer's shares: entry j is the sharing polynomial evaluated at α_j.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share<E>(Vec<E>);

impl<E> Deref for Share<E> {
    type Target = Vec<E>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<E> Share<E> {
    pub fn new(v: Vec<E>) -> Self {
        Self(v)
    }

    pub fn into_vec(self) -> Vec<E> {
        self.0
    }
}

/// Shares from every dealer; row i is dealer i, column j is held by party j.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet<E>(Vec<Share<E>>);

impl<E: Clone> ShareSet<E> {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn add(&mut self, share: Share<E>) {
        self.0.push(share);
    }

    pub fn get(&self, row: usize) -> Option<&Share<E>> {
        self.0.get(row)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every share held by `party`, one per dealer.
    pub fn column(&self, party: usize) -> Result<Vec<E>> {
        self.0
            .iter()
            .map(|share| {
                let Some(value) = share.get(party) else {
                    bail!("Party index {} out of bounds", party)
                };
                Ok(value.clone())
            })
            .collect()
    }
}

impl<E: Clone> Default for ShareSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shares `secret` with a random polynomial of degree `code.k() − 1` whose
/// constant term is the secret.
pub fn share_secret<F: Field>(
    code: &GrsCode<F>,
    secret: &F::Elem,
    rng: &SharedRng,
) -> Result<Share<F::Elem>> {
    let field = code.field();
    let coefficients: Vec<F::Elem> = {
        let mut rng = lock_rng(rng)?;
        std::iter::once(secret.clone())
            .chain((1..code.k()).map(|_| field.sample(&mut *rng)))
            .collect()
    };
    Ok(Share::new(code.encode(&coefficients)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grs_field::PrimeField;
    use grs_test_helpers::create_shared_rng_from_u64;

    #[test]
    fn test_shares_reconstruct_secret() -> Result<()> {
        let field = PrimeField::from_u64(31)?;
        let code = GrsCode::with_consecutive_points(field.clone(), 10, 3)?;
        let rng = create_shared_rng_from_u64(123);
        let secret = field.element(17);

        let share = share_secret(&code, &secret, &rng)?;
        assert_eq!(share.len(), 10);

        let decoded = code.decode(&share)?;
        assert_eq!(decoded.message[0], secret);
        Ok(())
    }

    #[test]
    fn test_share_set_columns() -> Result<()> {
        let mut set = ShareSet::new();
        set.add(Share::new(vec![1u32, 2, 3]));
        set.add(Share::new(vec![4u32, 5, 6]));

        assert_eq!(set.len(), 2);
        assert_eq!(set.column(1)?, vec![2, 5]);
        assert!(set.column(3).is_err());
        Ok(())
    }
}
