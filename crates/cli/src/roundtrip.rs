// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use grs_codec::{welch_berlekamp, GrsCode};
use grs_field::Field;
use grs_test_helpers::{create_shared_rng_from_u64, random_message, ErrorPattern};
use tracing::info;

use crate::config::CodecConfig;
use crate::print::format_word;

pub fn execute<F: Field>(field: F, config: &CodecConfig, errors: usize) -> Result<()> {
    let rng = create_shared_rng_from_u64(config.seed);
    let code = GrsCode::with_consecutive_points(field, config.n, config.k)
        .context("Could not construct the code")?;
    let field = code.field();

    println!(
        "GRS code n = {}, k = {}, corrects up to {} errors",
        code.n(),
        code.k(),
        code.correction_radius()
    );

    let message = random_message(field, code.k(), &rng)?;
    let codeword = code.encode(&message)?;
    let pattern = ErrorPattern::random(field, code.n(), errors, &rng)?;
    let received = pattern.apply(field, &codeword)?;

    println!("message:   {}", format_word(&message));
    println!("codeword:  {}", format_word(&codeword));
    println!("received:  {}", format_word(&received));
    println!("injected:  {:?}", pattern.positions());

    let decoded = code.decode(&received)?;
    info!(status = %decoded.status, "decoded");
    println!("decoded:   {}", format_word(&decoded.message));
    println!("located:   {:?}", decoded.error_positions);
    println!("status:    {}", decoded.status);

    match welch_berlekamp::decode(&code, &received)? {
        Some(wb) if wb.message == decoded.message => println!("welch-berlekamp agrees"),
        Some(_) => println!("welch-berlekamp disagrees"),
        None => println!("welch-berlekamp found no codeword within the radius"),
    }

    if decoded.message == message {
        println!("SUCCESS: message recovered");
    } else {
        println!("FAILURE: message differs");
    }

    Ok(())
}
