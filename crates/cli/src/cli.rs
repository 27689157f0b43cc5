// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::config::{load_config, CliOverrides, CodecConfig, ConfiguredField, FieldKind};
use crate::helpers::telemetry::setup_tracing;
use crate::{capacity, mpc, overload, roundtrip};
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "grs")]
#[command(about = "Encode, corrupt and decode Generalized Reed-Solomon codewords", long_about = None)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    params: CodeParams,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `grs -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all log output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

/// Overrides for the configured code parameters
#[derive(Args, Debug, Default)]
pub struct CodeParams {
    /// Field family
    #[arg(long, global = true, value_enum)]
    field: Option<FieldKind>,

    /// Prime modulus q (prime fields)
    #[arg(long, global = true)]
    q: Option<String>,

    /// Extension degree m (binary fields)
    #[arg(long, global = true)]
    degree: Option<u32>,

    /// Reduction polynomial as an integer (binary fields)
    #[arg(long, global = true)]
    modulus: Option<u32>,

    /// Code length
    #[arg(short, long, global = true)]
    n: Option<usize>,

    /// Message length
    #[arg(short, long, global = true)]
    k: Option<usize>,

    /// Seed for the shared RNG
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Random trials per error count
    #[arg(long, global = true)]
    trials: Option<usize>,
}

impl From<CodeParams> for CliOverrides {
    fn from(params: CodeParams) -> Self {
        CliOverrides {
            field: params.field,
            q: params.q,
            degree: params.degree,
            modulus: params.modulus,
            n: params.n,
            k: params.k,
            seed: params.seed,
            trials: params.trials,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a random message, inject errors and decode it
    Roundtrip {
        /// Number of corrupted positions
        #[arg(short, long, default_value_t = 0)]
        errors: usize,
    },

    /// Check that every error count up to the correction radius is corrected
    Capacity,

    /// Decode with more errors than the correction radius and report what happens
    Overload {
        /// Number of corrupted positions; defaults to one past the radius
        #[arg(short, long)]
        errors: Option<usize>,
    },

    /// Simulate weighted-sum aggregation over Shamir shares with cheating parties
    Mpc {
        /// Degree of the sharing polynomials; defaults to (n - 1) / 3
        #[arg(long)]
        threshold: Option<usize>,

        /// Number of cheating parties; defaults to the correction radius
        #[arg(long)]
        cheaters: Option<usize>,
    },
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_tracing(self.log_level())?;

        let config = load_config(self.config, &self.params.into())?;
        debug!(?config, "configuration loaded");

        match config.build_field()? {
            ConfiguredField::Prime(field) => self.command.execute(field, &config),
            ConfiguredField::Binary(field) => self.command.execute(field, &config),
        }
    }
}

impl Commands {
    fn execute<F>(self, field: F, config: &CodecConfig) -> Result<()>
    where
        F: grs_field::Field,
    {
        match self {
            Commands::Roundtrip { errors } => roundtrip::execute(field, config, errors),
            Commands::Capacity => capacity::execute(field, config),
            Commands::Overload { errors } => overload::execute(field, config, errors),
            Commands::Mpc {
                threshold,
                cheaters,
            } => mpc::execute(field, config, threshold, cheaters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_overrides() {
        let cli = Cli::parse_from(["grs", "capacity", "--n", "15", "-k", "7", "--field", "binary"]);
        assert!(matches!(cli.command, Commands::Capacity));
        assert_eq!(cli.params.n, Some(15));
        assert_eq!(cli.params.k, Some(7));
        assert_eq!(cli.params.field, Some(FieldKind::Binary));
    }

    #[test]
    fn test_parse_mpc() {
        let cli = Cli::parse_from(["grs", "-vv", "mpc", "--cheaters", "2"]);
        assert_eq!(cli.log_level(), Level::DEBUG);
        assert!(matches!(
            cli.command,
            Commands::Mpc {
                threshold: None,
                cheaters: Some(2)
            }
        ));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
