// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use grs_field::Field;
use grs_mpc::{AggregationReport, MpcConfig, Simulation};
use grs_test_helpers::{create_shared_rng_from_u64, random_message, ErrorPattern};

use crate::config::CodecConfig;

pub fn execute<F: Field>(
    field: F,
    config: &CodecConfig,
    threshold: Option<usize>,
    cheaters: Option<usize>,
) -> Result<()> {
    let rng = create_shared_rng_from_u64(config.seed);
    let parties = config.n;
    let threshold = threshold.unwrap_or_else(|| MpcConfig::<F::Elem>::default_threshold(parties));

    let mpc_config = MpcConfig::random(&field, parties, threshold, &rng)?;
    let cheaters = cheaters.unwrap_or(mpc_config.correction_radius());
    let simulation = Simulation::new(field, mpc_config.clone())?;
    let field = simulation.code().field();

    let secrets = random_message(field, parties, &rng)?;
    let cheating = ErrorPattern::random(field, parties, cheaters, &rng)?;
    let outcome = simulation.run(&secrets, &cheating, &rng)?;

    let report = AggregationReport::new(&mpc_config, &cheating, &outcome);
    print!("{}", serde_yaml::to_string(&report)?);
    Ok(())
}
