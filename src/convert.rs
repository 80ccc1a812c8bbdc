//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use kvote_knn::{KnnConfig, Strategy};

use crate::config::KnnToml;

/// Builds a validated classifier configuration from the `[knn]` section.
pub fn build_knn_config(knn: &KnnToml, strategy: Strategy) -> Result<KnnConfig> {
    let config = KnnConfig::new(knn.k)
        .with_strategy(strategy)
        .with_exponent(knn.exponent);
    config
        .validate()
        .with_context(|| format!("invalid [knn] settings for {strategy} scan"))?;
    Ok(config)
}

/// Returns the configured seed, or a fresh one drawn from the OS.
///
/// The seed is always resolved up front so it can be reported and the run
/// reproduced.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Creates the seeded RNG used for data generation.
pub fn build_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_build_knn_config() {
        let knn = KnnToml {
            k: 5,
            workers: 4,
            exponent: 2,
        };
        let cfg = build_knn_config(&knn, Strategy::Partitioned { workers: 4 }).unwrap();
        assert_eq!(cfg.k(), 5);
        assert_eq!(cfg.exponent(), 2);
        assert_eq!(cfg.strategy(), Strategy::Partitioned { workers: 4 });
    }

    #[test]
    fn test_build_knn_config_invalid() {
        let knn = KnnToml {
            k: 0,
            workers: 4,
            exponent: 10,
        };
        let err = build_knn_config(&knn, Strategy::Sequential).unwrap_err();
        assert!(format!("{err:#}").contains("k must be >= 1"));

        let knn = KnnToml {
            k: 3,
            workers: 0,
            exponent: 10,
        };
        assert!(build_knn_config(&knn, Strategy::Partitioned { workers: knn.workers }).is_err());
    }

    #[test]
    fn test_resolve_seed_prefers_config() {
        assert_eq!(resolve_seed(Some(17)), 17);
    }

    #[test]
    fn test_build_rng_reproducible() {
        let a: u64 = build_rng(5).random();
        let b: u64 = build_rng(5).random();
        assert_eq!(a, b);
    }
}
