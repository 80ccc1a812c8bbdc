//! Configuration for classification queries.

use std::fmt;

use crate::distance::{DEFAULT_EXPONENT, Minkowski};
use crate::error::KnnError;

/// How the distance scan is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Scan every training point on the calling thread.
    #[default]
    Sequential,
    /// Split the training set into contiguous partitions scanned by a pool
    /// of `workers` threads.
    Partitioned {
        /// Requested number of workers (clamped to the training set size).
        workers: usize,
    },
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => f.write_str("sequential"),
            Strategy::Partitioned { workers } => write!(f, "partitioned({workers})"),
        }
    }
}

/// Configuration for a classification query.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use kvote_knn::{KnnConfig, Strategy};
///
/// let config = KnnConfig::new(10)
///     .with_strategy(Strategy::Partitioned { workers: 8 })
///     .with_exponent(2);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct KnnConfig {
    /// Number of nearest neighbors that vote.
    k: usize,
    /// Scan execution strategy.
    strategy: Strategy,
    /// Minkowski exponent.
    exponent: u32,
}

impl KnnConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: `strategy = Sequential`, `exponent = 10`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            strategy: Strategy::Sequential,
            exponent: DEFAULT_EXPONENT,
        }
    }

    /// Sets the scan strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the Minkowski exponent.
    pub fn with_exponent(mut self, exponent: u32) -> Self {
        self.exponent = exponent;
        self
    }

    /// Returns the number of nearest neighbors.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the scan strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the Minkowski exponent.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Builds the distance metric described by this configuration.
    pub fn metric(&self) -> Result<Minkowski, KnnError> {
        Minkowski::new(self.exponent)
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1, a partitioned strategy has zero workers, or
    /// the exponent is zero.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        if let Strategy::Partitioned { workers: 0 } = self.strategy {
            return Err(KnnError::InvalidWorkers { workers: 0 });
        }
        if self.exponent == 0 {
            return Err(KnnError::InvalidExponent { p: self.exponent });
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
