// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use grs_field::{BinaryField, PrimeField};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Integers modulo a prime q
    Prime,
    /// GF(2^m)
    Binary,
}

/// Code and run parameters shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    pub field: FieldKind,
    /// Prime modulus, decimal
    pub q: String,
    /// Extension degree m of GF(2^m)
    pub degree: u32,
    /// Reduction polynomial of GF(2^m); a built-in primitive one when absent
    pub modulus: Option<u32>,
    pub n: usize,
    pub k: usize,
    pub seed: u64,
    /// Random trials per error count
    pub trials: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            field: FieldKind::Prime,
            q: "31".to_string(),
            degree: 6,
            modulus: None,
            n: 10,
            k: 4,
            seed: 123,
            trials: 20,
        }
    }
}

/// The configured field, one variant per implementation.
#[derive(Debug, Clone)]
pub enum ConfiguredField {
    Prime(PrimeField),
    Binary(BinaryField),
}

impl CodecConfig {
    pub fn build_field(&self) -> Result<ConfiguredField> {
        match self.field {
            FieldKind::Prime => {
                let q: BigUint = self
                    .q
                    .parse()
                    .with_context(|| format!("Invalid prime modulus '{}'", self.q))?;
                Ok(ConfiguredField::Prime(PrimeField::new(q)?))
            }
            FieldKind::Binary => {
                let field = match self.modulus {
                    Some(modulus) => BinaryField::new(self.degree, modulus)?,
                    None => BinaryField::with_default_modulus(self.degree)?,
                };
                Ok(ConfiguredField::Binary(field))
            }
        }
    }
}

/// Values given on the command line. Absent values leave the configuration
/// untouched.
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modulus: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trials: Option<usize>,
}

/// Defaults, then the YAML file, then `GRS_*` environment variables, then
/// command line overrides.
pub fn load_config(config_file: Option<PathBuf>, overrides: &CliOverrides) -> Result<CodecConfig> {
    let mut figment = Figment::from(Serialized::defaults(CodecConfig::default()));

    if let Some(path) = config_file {
        ensure!(
            path.exists(),
            "Configuration file {} not found",
            path.display()
        );
        figment = figment.merge(Yaml::file(path));
    }

    let config: CodecConfig = figment
        .merge(Env::prefixed("GRS_"))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")?;

    Ok(config)
}
