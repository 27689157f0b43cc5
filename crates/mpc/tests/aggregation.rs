// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.
use anyhow::Result;
use grs_codec::DecodeStatus;
use grs_field::{BinaryField, Field, PrimeField};
use grs_mpc::{AggregationReport, MpcConfig, Simulation};
use grs_test_helpers::{create_shared_rng_from_u64, random_message, ErrorPattern};

fn setup_tracing() -> tracing::subscriber::DefaultGuard {
    use tracing_subscriber::{fmt, EnvFilter};

    let subscriber = fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_test_writer()
        .finish();

    tracing::subscriber::set_default(subscriber)
}

#[test]
fn test_aggregation_catches_cheaters_up_to_radius() -> Result<()> {
    let _guard = setup_tracing();
    let rng = create_shared_rng_from_u64(123);
    let field = PrimeField::from_u64(31)?;
    let config = MpcConfig::random(&field, 10, 2, &rng)?;
    let radius = config.correction_radius();
    assert_eq!(radius, 3);
    let simulation = Simulation::new(field.clone(), config)?;

    for count in 0..=radius {
        let secrets = random_message(&field, 10, &rng)?;
        let cheating = ErrorPattern::random(&field, 10, count, &rng)?;
        let outcome = simulation.run(&secrets, &cheating, &rng)?;

        assert!(outcome.is_correct(), "{} cheaters", count);
        assert_eq!(outcome.aggregate, simulation.expected(&secrets));
        assert_eq!(outcome.cheaters, cheating.position_set());
        if count == 0 {
            assert_eq!(outcome.status, DecodeStatus::Clean);
        } else {
            assert_eq!(outcome.status, DecodeStatus::Corrected);
        }
    }
    Ok(())
}

#[test]
fn test_aggregation_over_binary_field() -> Result<()> {
    let rng = create_shared_rng_from_u64(7);
    let field = BinaryField::with_default_modulus(8)?;
    let threshold = MpcConfig::<u32>::default_threshold(16);
    let config = MpcConfig::random(&field, 16, threshold, &rng)?;
    let radius = config.correction_radius();
    let simulation = Simulation::new(field.clone(), config)?;

    let secrets = random_message(&field, 16, &rng)?;
    let cheating = ErrorPattern::random(&field, 16, radius, &rng)?;
    let outcome = simulation.run(&secrets, &cheating, &rng)?;

    assert!(outcome.is_correct());
    assert_eq!(outcome.cheaters, cheating.position_set());
    Ok(())
}

#[test]
fn test_too_many_cheaters_does_not_panic() -> Result<()> {
    let rng = create_shared_rng_from_u64(123);
    let field = PrimeField::from_u64(31)?;
    let config = MpcConfig::random(&field, 10, 2, &rng)?;
    let simulation = Simulation::new(field.clone(), config)?;

    for count in 4..=10 {
        let secrets = random_message(&field, 10, &rng)?;
        let cheating = ErrorPattern::random(&field, 10, count, &rng)?;
        simulation.run(&secrets, &cheating, &rng)?;
    }
    Ok(())
}

#[test]
fn test_report_serializes() -> Result<()> {
    let rng = create_shared_rng_from_u64(42);
    let field = PrimeField::from_u64(31)?;
    let config = MpcConfig::random(&field, 10, 2, &rng)?;
    let simulation = Simulation::new(field.clone(), config.clone())?;

    let secrets = random_message(&field, 10, &rng)?;
    let cheating = ErrorPattern::at(vec![2, 8], vec![field.one(), field.element(9)])?;
    let outcome = simulation.run(&secrets, &cheating, &rng)?;

    let report = AggregationReport::new(&config, &cheating, &outcome);
    assert!(report.caught_all());
    assert_eq!(report.detected, vec![2, 8]);

    let yaml = serde_yaml::to_string(&report)?;
    assert!(yaml.contains("status: corrected"));
    let parsed: AggregationReport = serde_yaml::from_str(&yaml)?;
    assert_eq!(parsed, report);
    Ok(())
}
