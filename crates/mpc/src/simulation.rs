// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::collections::BTreeSet;

use anyhow::{ensure, Context, Result};
use grs_codec::{DecodeStatus, GrsCode};
use grs_field::Field;
use grs_test_helpers::{ErrorPattern, SharedRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{share_secret, MpcConfig, ShareSet};

/// What the aggregator learned from one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationOutcome<E> {
    /// Constant term of the decoded polynomial
    pub aggregate: E,
    /// `Σ λ_i s_i` computed in the clear
    pub expected: E,
    /// Parties whose local result was flagged
    pub cheaters: BTreeSet<usize>,
    pub status: DecodeStatus,
}

impl<E: PartialEq> AggregationOutcome<E> {
    pub fn is_correct(&self) -> bool {
        self.aggregate == self.expected
    }
}

/// A configured aggregation over parties at α = 1..n.
#[derive(Debug, Clone)]
pub struct Simulation<F: Field> {
    config: MpcConfig<F::Elem>,
    code: GrsCode<F>,
}

impl<F: Field> Simulation<F> {
    pub fn new(field: F, config: MpcConfig<F::Elem>) -> Result<Self> {
        let code = GrsCode::with_consecutive_points(field, config.parties, config.message_len())
            .context("Failed to build the share code")?;
        Ok(Self { config, code })
    }

    pub fn config(&self) -> &MpcConfig<F::Elem> {
        &self.config
    }

    pub fn code(&self) -> &GrsCode<F> {
        &self.code
    }

    /// Every party shares its secret with every other party.
    pub fn deal_shares(&self, secrets: &[F::Elem], rng: &SharedRng) -> Result<ShareSet<F::Elem>> {
        ensure!(
            secrets.len() == self.config.parties,
            "expected {} secrets, got {}",
            self.config.parties,
            secrets.len()
        );
        let mut set = ShareSet::new();
        for secret in secrets {
            set.add(share_secret(&self.code, secret, rng)?);
        }
        Ok(set)
    }

    /// `z_j = Σ_i λ_i · share_i(α_j)` for every party j.
    pub fn local_results(&self, shares: &ShareSet<F::Elem>) -> Result<Vec<F::Elem>> {
        ensure!(
            shares.len() == self.config.parties,
            "expected shares from {} dealers, got {}",
            self.config.parties,
            shares.len()
        );
        let field = self.code.field();
        (0..self.config.parties)
            .into_par_iter()
            .map(|party| -> Result<F::Elem> {
                let held = shares.column(party)?;
                Ok(held
                    .iter()
                    .zip(&self.config.weights)
                    .fold(field.zero(), |acc, (share, weight)| {
                        field.add(&acc, &field.mul(weight, share))
                    }))
            })
            .collect()
    }

    /// `Σ λ_i s_i`, the value the protocol should produce.
    pub fn expected(&self, secrets: &[F::Elem]) -> F::Elem {
        let field = self.code.field();
        secrets
            .iter()
            .zip(&self.config.weights)
            .fold(field.zero(), |acc, (secret, weight)| {
                field.add(&acc, &field.mul(weight, secret))
            })
    }

    /// Decodes the published local results.
    pub fn aggregate(
        &self,
        results: &[F::Elem],
        expected: F::Elem,
    ) -> Result<AggregationOutcome<F::Elem>> {
        let decoded = self
            .code
            .decode(results)
            .context("Failed to decode local results")?;
        let aggregate = decoded.message[0].clone();
        let outcome = AggregationOutcome {
            aggregate,
            expected,
            cheaters: decoded.error_positions,
            status: decoded.status,
        };
        if outcome.is_correct() {
            info!(cheaters = ?outcome.cheaters, "aggregate recovered");
        } else {
            warn!(cheaters = ?outcome.cheaters, status = %outcome.status, "aggregate mismatch");
        }
        Ok(outcome)
    }

    /// Runs the whole protocol with `cheating` applied to the local results.
    pub fn run(
        &self,
        secrets: &[F::Elem],
        cheating: &ErrorPattern<F::Elem>,
        rng: &SharedRng,
    ) -> Result<AggregationOutcome<F::Elem>> {
        let field = self.code.field();
        info!(
            parties = self.config.parties,
            threshold = self.config.threshold,
            radius = self.config.correction_radius(),
            cheaters = cheating.len(),
            "starting aggregation"
        );

        let shares = self.deal_shares(secrets, rng)?;
        let honest = self.local_results(&shares)?;
        let published = cheating.apply(field, &honest)?;
        debug!(positions = ?cheating.positions(), "local results published");

        self.aggregate(&published, self.expected(secrets))
    }
}
