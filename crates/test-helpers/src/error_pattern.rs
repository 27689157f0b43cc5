// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::collections::BTreeSet;

use anyhow::{bail, ensure, Result};
use grs_field::Field;
use tracing::trace;

use crate::{lock_rng, SharedRng};

/// Additive corruption of a word: `deltas[j]` is added at `positions[j]`.
///
/// Positions are distinct and kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPattern<E> {
    positions: Vec<usize>,
    deltas: Vec<E>,
}

impl<E: Clone> ErrorPattern<E> {
    /// `count` distinct random positions below `n`, each with a nonzero delta.
    pub fn random<F: Field<Elem = E>>(
        field: &F,
        n: usize,
        count: usize,
        rng: &SharedRng,
    ) -> Result<Self> {
        ensure!(
            count <= n,
            "cannot corrupt {} positions of a word of length {}",
            count,
            n
        );
        let mut rng = lock_rng(rng)?;
        let mut chosen = rand::seq::index::sample(&mut *rng, n, count).into_vec();
        chosen.sort_unstable();
        let pattern = chosen
            .into_iter()
            .map(|position| (position, field.sample_nonzero(&mut *rng)))
            .collect::<Vec<_>>();
        let (positions, deltas): (Vec<usize>, Vec<E>) = pattern.into_iter().unzip();
        trace!(?positions, "sampled error pattern");
        Ok(Self { positions, deltas })
    }

    /// A fixed pattern. Positions must be distinct.
    pub fn at(positions: Vec<usize>, deltas: Vec<E>) -> Result<Self> {
        ensure!(
            positions.len() == deltas.len(),
            "got {} positions but {} deltas",
            positions.len(),
            deltas.len()
        );
        let mut pairs: Vec<(usize, E)> = positions.into_iter().zip(deltas).collect();
        pairs.sort_by_key(|(position, _)| *position);
        if let Some(pair) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            bail!("position {} is corrupted twice", pair[0].0);
        }
        let (positions, deltas) = pairs.into_iter().unzip();
        Ok(Self { positions, deltas })
    }

    pub fn none() -> Self {
        Self {
            positions: vec![],
            deltas: vec![],
        }
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn position_set(&self) -> BTreeSet<usize> {
        self.positions.iter().copied().collect()
    }

    pub fn deltas(&self) -> &[E] {
        &self.deltas
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns a copy of `word` with every delta added.
    pub fn apply<F: Field<Elem = E>>(&self, field: &F, word: &[E]) -> Result<Vec<E>> {
        let mut corrupted = word.to_vec();
        for (&position, delta) in self.positions.iter().zip(&self.deltas) {
            let Some(symbol) = corrupted.get_mut(position) else {
                bail!(
                    "position {} is out of range for a word of length {}",
                    position,
                    word.len()
                );
            };
            *symbol = field.add(symbol, delta);
        }
        Ok(corrupted)
    }
}
