// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use grs_field::Field;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Seedable randomness shared between the components of a run.
pub type SharedRng = Arc<Mutex<ChaCha20Rng>>;

pub fn create_shared_rng_from_u64(value: u64) -> SharedRng {
    Arc::new(Mutex::new(ChaCha20Rng::seed_from_u64(value)))
}

pub fn create_random_shared_rng() -> SharedRng {
    Arc::new(Mutex::new(ChaCha20Rng::from_entropy()))
}

pub fn lock_rng(rng: &SharedRng) -> Result<MutexGuard<'_, ChaCha20Rng>> {
    rng.lock().map_err(|_| anyhow!("shared RNG mutex poisoned"))
}

/// Draws k uniformly random message symbols.
pub fn random_message<F: Field>(field: &F, k: usize, rng: &SharedRng) -> Result<Vec<F::Elem>> {
    let mut rng = lock_rng(rng)?;
    Ok((0..k).map(|_| field.sample(&mut *rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grs_field::PrimeField;

    #[test]
    fn test_same_seed_same_message() -> Result<()> {
        let field = PrimeField::from_u64(31)?;
        let a = random_message(&field, 8, &create_shared_rng_from_u64(123))?;
        let b = random_message(&field, 8, &create_shared_rng_from_u64(123))?;
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
        Ok(())
    }

    #[test]
    fn test_rng_advances() -> Result<()> {
        let field = PrimeField::from_u64(1_000_000_007)?;
        let rng = create_shared_rng_from_u64(7);
        let a = random_message(&field, 4, &rng)?;
        let b = random_message(&field, 4, &rng)?;
        assert_ne!(a, b);
        Ok(())
    }
}
