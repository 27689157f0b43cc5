// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context, Result};
use grs_codec::GrsCode;
use grs_field::Field;
use grs_test_helpers::{create_shared_rng_from_u64, random_message, ErrorPattern, SharedRng};
use tracing::{debug, warn};

use crate::config::CodecConfig;

/// Outcome of `trials` random runs at one error count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub errors: usize,
    pub trials: usize,
    pub recovered: usize,
    pub located: usize,
}

impl Tally {
    pub fn all_recovered(&self) -> bool {
        self.recovered == self.trials && self.located == self.trials
    }
}

/// Decodes `trials` random words carrying `errors` corrupted positions.
pub fn run_trials<F: Field>(
    code: &GrsCode<F>,
    errors: usize,
    trials: usize,
    rng: &SharedRng,
) -> Result<Tally> {
    let field = code.field();
    let mut tally = Tally {
        errors,
        trials,
        recovered: 0,
        located: 0,
    };

    for trial in 0..trials {
        let message = random_message(field, code.k(), rng)?;
        let pattern = ErrorPattern::random(field, code.n(), errors, rng)?;
        let received = pattern.apply(field, &code.encode(&message)?)?;
        let decoded = code.decode(&received)?;

        if decoded.message == message {
            tally.recovered += 1;
        }
        if decoded.error_positions == pattern.position_set() {
            tally.located += 1;
        }
        debug!(trial, errors, status = %decoded.status, "trial finished");
    }

    Ok(tally)
}

pub fn execute<F: Field>(field: F, config: &CodecConfig) -> Result<()> {
    let rng = create_shared_rng_from_u64(config.seed);
    let code = GrsCode::with_consecutive_points(field, config.n, config.k)
        .context("Could not construct the code")?;
    let radius = code.correction_radius();

    println!(
        "n = {}, k = {}, radius = {}, {} trials per error count",
        code.n(),
        code.k(),
        radius,
        config.trials
    );

    let mut failed = vec![];
    for errors in 0..=radius {
        let tally = run_trials(&code, errors, config.trials, &rng)?;
        println!(
            "errors {:>3}: recovered {:>4}/{}, located {:>4}/{}",
            errors, tally.recovered, tally.trials, tally.located, tally.trials
        );
        if !tally.all_recovered() {
            warn!(errors, "decoding failed within the correction radius");
            failed.push(errors);
        }
    }

    if !failed.is_empty() {
        bail!("Decoding failed within the correction radius for error counts {:?}", failed);
    }
    println!("All error counts up to {} corrected", radius);
    Ok(())
}
