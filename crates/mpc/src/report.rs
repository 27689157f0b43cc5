// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::fmt::Display;

use grs_codec::DecodeStatus;
use grs_test_helpers::ErrorPattern;
use serde::{Deserialize, Serialize};

use crate::{AggregationOutcome, MpcConfig};

/// Printable summary of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationReport {
    pub parties: usize,
    pub threshold: usize,
    pub correction_radius: usize,
    pub injected: Vec<usize>,
    pub detected: Vec<usize>,
    pub aggregate: String,
    pub expected: String,
    pub status: DecodeStatus,
    pub success: bool,
}

impl AggregationReport {
    pub fn new<E: Clone + Display + PartialEq>(
        config: &MpcConfig<E>,
        injected: &ErrorPattern<E>,
        outcome: &AggregationOutcome<E>,
    ) -> Self {
        Self {
            parties: config.parties,
            threshold: config.threshold,
            correction_radius: config.correction_radius(),
            injected: injected.positions().to_vec(),
            detected: outcome.cheaters.iter().copied().collect(),
            aggregate: outcome.aggregate.to_string(),
            expected: outcome.expected.to_string(),
            status: outcome.status,
            success: outcome.is_correct(),
        }
    }

    /// True when the aggregate matched and every cheater was caught.
    pub fn caught_all(&self) -> bool {
        self.success && self.injected == self.detected
    }
}
