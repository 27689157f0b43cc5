// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{ensure, Result};
use grs_field::Field;
use grs_test_helpers::{lock_rng, SharedRng};

/// Parameters of an aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpcConfig<E> {
    /// Number of parties n
    pub parties: usize,
    /// Degree of every sharing polynomial
    pub threshold: usize,
    /// Public weight λ_i of party i's secret
    pub weights: Vec<E>,
}

impl<E> MpcConfig<E> {
    pub fn new(parties: usize, threshold: usize, weights: Vec<E>) -> Result<Self> {
        ensure!(parties > 0, "at least one party is required");
        ensure!(
            threshold < parties,
            "threshold {} needs more than {} parties",
            threshold,
            parties
        );
        ensure!(
            weights.len() == parties,
            "expected {} weights, got {}",
            parties,
            weights.len()
        );
        Ok(Self {
            parties,
            threshold,
            weights,
        })
    }

    /// Random nonzero weights.
    pub fn random<F: Field<Elem = E>>(
        field: &F,
        parties: usize,
        threshold: usize,
        rng: &SharedRng,
    ) -> Result<Self> {
        let weights = {
            let mut rng = lock_rng(rng)?;
            (0..parties)
                .map(|_| field.sample_nonzero(&mut *rng))
                .collect()
        };
        Self::new(parties, threshold, weights)
    }

    /// Largest threshold that still leaves room to correct a third of the
    /// parties: `⌊(n − 1) / 3⌋`.
    pub fn default_threshold(parties: usize) -> usize {
        parties.saturating_sub(1) / 3
    }

    /// Coefficients per sharing polynomial, the code dimension k.
    pub fn message_len(&self) -> usize {
        self.threshold + 1
    }

    /// Number of cheaters that can be tolerated.
    pub fn correction_radius(&self) -> usize {
        (self.parties - self.message_len()) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grs_field::PrimeField;
    use grs_test_helpers::create_shared_rng_from_u64;

    #[test]
    fn test_config_validation() {
        assert!(MpcConfig::new(3, 1, vec![1u32, 2, 3]).is_ok());
        assert!(MpcConfig::new(3, 3, vec![1u32, 2, 3]).is_err());
        assert!(MpcConfig::new(3, 1, vec![1u32, 2]).is_err());
        assert!(MpcConfig::<u32>::new(0, 0, vec![]).is_err());
    }

    #[test]
    fn test_radius() {
        let config = MpcConfig::new(10, 2, vec![1u32; 10]).unwrap();
        assert_eq!(config.message_len(), 3);
        assert_eq!(config.correction_radius(), 3);
        assert_eq!(MpcConfig::<u32>::default_threshold(10), 3);
        assert_eq!(MpcConfig::<u32>::default_threshold(1), 0);
    }

    #[test]
    fn test_random_weights_are_nonzero() -> Result<()> {
        let field = PrimeField::from_u64(31)?;
        let rng = create_shared_rng_from_u64(123);
        let config = MpcConfig::random(&field, 10, 2, &rng)?;
        assert_eq!(config.weights.len(), 10);
        assert!(config.weights.iter().all(|w| !field.is_zero(w)));
        Ok(())
    }
}
