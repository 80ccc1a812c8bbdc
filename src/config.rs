use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::DataArgs;

/// Configuration file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_PATH: &str = "kvote.toml";

/// Top-level kvote configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KvoteConfig {
    /// Global RNG seed. Drawn from the OS when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Synthetic data settings.
    #[serde(default)]
    pub data: DataToml,

    /// Classifier settings.
    #[serde(default)]
    pub knn: KnnToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    #[serde(default = "default_n_points")]
    pub n_points: usize,
    #[serde(default = "default_n_features")]
    pub n_features: usize,
    #[serde(default = "default_noise_factor")]
    pub noise_factor: f64,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            n_points: default_n_points(),
            n_features: default_n_features(),
            noise_factor: default_noise_factor(),
        }
    }
}

fn default_n_points() -> usize {
    100_000
}
fn default_n_features() -> usize {
    50
}
fn default_noise_factor() -> f64 {
    0.05
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_exponent")]
    pub exponent: u32,
}

impl Default for KnnToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            workers: default_workers(),
            exponent: default_exponent(),
        }
    }
}

fn default_k() -> usize {
    10
}
fn default_workers() -> usize {
    8
}
fn default_exponent() -> u32 {
    kvote_knn::DEFAULT_EXPONENT
}

impl KvoteConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Applies CLI overrides on top of the file values.
    pub fn apply_overrides(&mut self, args: &DataArgs) {
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(n) = args.points {
            self.data.n_points = n;
        }
        if let Some(d) = args.features {
            self.data.n_features = d;
        }
        if let Some(noise) = args.noise {
            self.data.noise_factor = noise;
        }
        if let Some(k) = args.k {
            self.knn.k = k;
        }
        if let Some(p) = args.exponent {
            self.knn.exponent = p;
        }
    }
}
