// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{ensure, Context, Result};
use grs_codec::GrsCode;
use grs_field::Field;
use grs_test_helpers::create_shared_rng_from_u64;

use crate::capacity::run_trials;
use crate::config::CodecConfig;

pub fn execute<F: Field>(field: F, config: &CodecConfig, errors: Option<usize>) -> Result<()> {
    let rng = create_shared_rng_from_u64(config.seed);
    let code = GrsCode::with_consecutive_points(field, config.n, config.k)
        .context("Could not construct the code")?;
    let radius = code.correction_radius();
    let errors = errors.unwrap_or(radius + 1);
    ensure!(
        errors <= code.n(),
        "Cannot corrupt {} positions of a length {} codeword",
        errors,
        code.n()
    );

    println!(
        "n = {}, k = {}, radius = {}, injecting {} errors",
        code.n(),
        code.k(),
        radius,
        errors
    );
    if errors <= radius {
        println!("note: {} errors is within the correction radius", errors);
    }

    let tally = run_trials(&code, errors, config.trials, &rng)?;
    println!(
        "recovered {}/{} messages, located the exact error set {}/{} times",
        tally.recovered, tally.trials, tally.located, tally.trials
    );
    println!("decoding returned every time; beyond the radius results are not guaranteed");
    Ok(())
}
